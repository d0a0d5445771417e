use std::path::Path;

use image::RgbaImage;

use crate::error::SketchError;
use crate::history::History;
use crate::renderer::{CANVAS_BACKGROUND, CANVAS_SIZE};
use crate::surface::{RasterSurface, Surface};

/// Integer scale factor for the exported bitmap (256 logical pixels -> 1024).
pub const EXPORT_SCALE: u32 = 4;

/// Render the committed scene at `scale` onto an independent offscreen
/// surface. Previews are ephemeral and never exported.
pub fn render_scaled(history: &History, scale: u32) -> RgbaImage {
    let side = CANVAS_SIZE * scale;
    let mut surface = RasterSurface::with_scale(side, side, scale as f32);
    surface.clear(CANVAS_BACKGROUND);
    for drawable in history.committed() {
        drawable.display(&mut surface);
    }
    surface.into_image()
}

/// Export the scene as a PNG at [`EXPORT_SCALE`].
pub fn export_png(history: &History, path: &Path) -> Result<(), SketchError> {
    let image = render_scaled(history, EXPORT_SCALE);
    image.save(path)?;
    log::info!(
        "exported {}x{} bitmap to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
