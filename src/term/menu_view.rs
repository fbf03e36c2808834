//! Menu view: the two-entry main menu as a framebuffer.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::game_view::Viewport;

pub const MENU_ENTRIES: [&str; 2] = ["New game", "Quit"];

/// Render the menu with `selected` marked.
pub fn render_menu(selected: usize, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let title = CellStyle {
        fg: Rgb::new(240, 220, 80),
        bold: true,
        ..CellStyle::default()
    };
    let entry = CellStyle::default();
    let marked = CellStyle {
        bold: true,
        ..CellStyle::default()
    };

    fb.put_str(2, 1, "G R I D F A L L", title);

    for (i, name) in MENU_ENTRIES.iter().enumerate() {
        let y = 3 + i as u16;
        if i == selected {
            fb.put_str(2, y, &format!(">> {name} <<"), marked);
        } else {
            fb.put_str(2, y, &format!("   {name}   "), entry);
        }
    }

    fb.put_str(2, 6, "arrows move, enter confirms", CellStyle::default());

    fb
}
