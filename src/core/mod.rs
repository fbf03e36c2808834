//! Engine: pure game rules with no I/O dependencies.

pub mod board;
pub mod piece;
pub mod progression;
pub mod rng;
pub mod shapes;
pub mod state;

pub use board::Board;
pub use piece::ActivePiece;
pub use progression::Progression;
pub use rng::{ShapePicker, SimpleRng};
pub use state::GameState;
