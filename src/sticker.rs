use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Font size every sticker renders at, on canvas and in previews.
pub const STICKER_FONT_PX: f32 = 24.0;

const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph placed at a fixed point on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    glyph: String,
    pos: Pos2,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, pos: Pos2) -> Self {
        Self {
            glyph: glyph.into(),
            pos,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn move_to(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(&self.glyph, self.pos, STICKER_FONT_PX, STICKER_COLOR);
    }
}
