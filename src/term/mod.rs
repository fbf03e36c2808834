//! Terminal layer: framebuffer, renderer and the pure views.

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu_view::{render_menu, MENU_ENTRIES};
pub use renderer::TerminalRenderer;
