use egui::Color32;

use crate::history::History;
use crate::preview::Preview;
use crate::surface::Surface;

/// Logical side length of the square canvas, in pixels.
pub const CANVAS_SIZE: u32 = 256;

pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Repaints the whole scene from scratch on every mutation.
///
/// Owns the zero-or-one live preview. There is no dirty tracking and no
/// incremental repainting: every pass clears the surface first, which is what
/// makes `redraw` idempotent.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    preview: Option<Preview>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live preview wholesale (or discard it with `None`).
    pub fn set_preview(&mut self, preview: Option<Preview>) {
        self.preview = preview;
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Clear the surface, paint every committed drawable oldest-first (later
    /// commits occlude earlier ones), then paint the live preview last so the
    /// cursor indicator is always on top.
    pub fn redraw(&self, history: &History, surface: &mut dyn Surface) {
        match &self.preview {
            Some(preview) => preview.draw(history, surface),
            None => {
                surface.clear(CANVAS_BACKGROUND);
                for drawable in history.committed() {
                    drawable.display(surface);
                }
            }
        }
    }
}
