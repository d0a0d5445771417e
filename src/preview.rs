use egui::{Color32, Pos2};

use crate::history::History;
use crate::renderer::CANVAS_BACKGROUND;
use crate::sticker::STICKER_FONT_PX;
use crate::surface::Surface;

const STICKER_PREVIEW_COLOR: Color32 = Color32::BLACK;

/// Ephemeral cursor-following indicator. Never stored in history; at most
/// one is live at a time and it is replaced wholesale on every pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// A filled dot showing where the next stroke would land, sized from the
    /// current tool width and colored with the current tool color.
    Brush { pos: Pos2, width: f32, color: Color32 },
    /// The armed sticker glyph ghosted at the pointer position.
    Sticker { pos: Pos2, glyph: String },
}

impl Preview {
    /// Repaint the full scene with the indicator on top.
    ///
    /// Rendering is immediate-mode with no overlay layer, so showing the
    /// indicator means clearing the surface, restoring every committed
    /// drawable, and compositing the indicator last.
    pub fn draw(&self, history: &History, surface: &mut dyn Surface) {
        surface.clear(CANVAS_BACKGROUND);
        for drawable in history.committed() {
            drawable.display(surface);
        }
        match self {
            Self::Brush { pos, width, color } => {
                surface.fill_circle(*pos, width / 2.0, *color);
            }
            Self::Sticker { pos, glyph } => {
                surface.draw_glyph(glyph, *pos, STICKER_FONT_PX, STICKER_PREVIEW_COLOR);
            }
        }
    }
}
