use egui::Pos2;

use crate::sticker::Sticker;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Persisted unit of canvas content.
///
/// A closed set of variants dispatched by match; once a drawable sits in the
/// committed stack its pixels are a pure function of its own fields and the
/// surface; it never reads live tool state.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.display(surface),
            Self::Sticker(sticker) => sticker.display(surface),
        }
    }

    /// Extend a stroke with a new point, or move a sticker to a new position.
    ///
    /// Only meaningful while the drawable is being authored; the controller's
    /// state machine makes later calls unreachable.
    pub fn drag(&mut self, to: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.push_point(to),
            Self::Sticker(sticker) => sticker.move_to(to),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}
