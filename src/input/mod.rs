//! Input: terminal key events mapped to engine commands.

pub mod map;

pub use map::{map_key, poll_key_press, should_quit};
