//! Terminal falling-block puzzle.
//!
//! `core` holds the engine (pure game rules, no I/O); `input` maps terminal
//! keys to engine commands; `term` renders state into a framebuffer and
//! flushes it to the terminal. The binary in `main.rs` sequences the menu
//! and game sessions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
