use egui::{Align2, Color32, FontId, Pos2, Rect};
use image::{Rgba, RgbaImage};

/// The capability set drawables and the renderer paint through.
///
/// Everything in the drawing model depends on this trait rather than on a
/// concrete backend, so the same `display` code drives the live egui canvas,
/// the export path, and the tests.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color32);

    /// Paint one connected polyline as a single stroke operation, so joins
    /// between segments are continuous. A single-point polyline paints a dot.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Paint a filled circle centered at `center`.
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Paint a text glyph centered at `pos` at the given font size.
    fn draw_glyph(&mut self, glyph: &str, pos: Pos2, font_px: f32, color: Color32);
}

/// Surface backed by an `egui::Painter`, clipped to the canvas rect.
///
/// Incoming coordinates are surface-local; this adapter translates them into
/// screen space.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        match points {
            [] => {}
            [only] => {
                // Zero-length path: round cap behavior, one dot.
                self.painter
                    .circle_filled(self.to_screen(*only), width / 2.0, color);
            }
            _ => {
                let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter
                    .add(egui::Shape::line(screen, egui::Stroke::new(width, color)));
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn draw_glyph(&mut self, glyph: &str, pos: Pos2, font_px: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(font_px),
            color,
        );
    }
}

/// Offscreen software surface over an RGBA pixel buffer.
///
/// Used by bitmap export (at an integer scale factor) and by every test, so
/// nothing in the core needs a live window. Rasterization is deliberately
/// simple: thick lines are stamped as discs along each segment, and glyphs
/// paint a deterministic per-glyph block pattern instead of real text
/// shaping, which is all the render contract needs.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_scale(width, height, 1.0)
    }

    /// A surface whose pixel buffer is `width` x `height` but whose painting
    /// coordinates stay in logical (unscaled) space.
    pub fn with_scale(width: u32, height: u32, scale: f32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn put(&mut self, x: i32, y: i32, pixel: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, pixel);
        }
    }

    // `center` and `radius` are in physical (already scaled) pixels.
    fn fill_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let pixel = to_pixel(color);
        let r = radius.max(0.5);
        let x0 = (center.x - r).floor() as i32;
        let x1 = (center.x + r).ceil() as i32;
        let y0 = (center.y - r).floor() as i32;
        let y1 = (center.y + r).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, pixel);
                }
            }
        }
    }

    fn fill_rect(&mut self, left: f32, top: f32, width: f32, height: f32, color: Color32) {
        let pixel = to_pixel(color);
        let x0 = left.floor() as i32;
        let x1 = (left + width).ceil() as i32;
        let y0 = top.floor() as i32;
        let y1 = (top + height).ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, pixel);
            }
        }
    }

    fn scaled(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: Color32) {
        let pixel = to_pixel(color);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.is_empty() {
            return;
        }
        let radius = (width * self.scale) / 2.0;
        if points.len() == 1 {
            let p = self.scaled(points[0]);
            self.fill_disc(p, radius, color);
            return;
        }
        for segment in points.windows(2) {
            let a = self.scaled(segment[0]);
            let b = self.scaled(segment[1]);
            let steps = (a.distance(b) / 0.5).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                self.fill_disc(a.lerp(b, t), radius, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let c = self.scaled(center);
        self.fill_disc(c, radius * self.scale, color);
    }

    fn draw_glyph(&mut self, glyph: &str, pos: Pos2, font_px: f32, color: Color32) {
        let Some(first) = glyph.chars().next() else {
            return;
        };
        let cell = (font_px * self.scale / 7.0).max(1.0);
        let p = self.scaled(pos);
        let left = p.x - cell * 2.5;
        let top = p.y - cell * 3.5;
        let mut seed = first as u32;
        for row in 0..7u32 {
            for col in 0..5u32 {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                // The center cell is always lit so a sticker is guaranteed to
                // paint at its anchor position.
                let lit = (seed >> 16) & 1 == 1 || (row == 3 && col == 2);
                if lit {
                    self.fill_rect(
                        left + col as f32 * cell,
                        top + row as f32 * cell,
                        cell,
                        cell,
                        color,
                    );
                }
            }
        }
    }
}

fn to_pixel(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn clear_fills_every_pixel() {
        let mut surface = RasterSurface::new(8, 8);
        surface.clear(Color32::WHITE);
        assert!(surface.image().pixels().all(|p| *p == Rgba([255; 4])));
    }

    #[test]
    fn polyline_paints_between_endpoints() {
        let mut surface = RasterSurface::new(32, 32);
        surface.clear(Color32::WHITE);
        surface.stroke_polyline(
            &[pos2(4.0, 16.0), pos2(28.0, 16.0)],
            4.0,
            Color32::BLACK,
        );
        // Midpoint of the segment is covered.
        assert_eq!(*surface.image().get_pixel(16, 16), Rgba([0, 0, 0, 255]));
        // Far off the path is untouched.
        assert_eq!(*surface.image().get_pixel(16, 2), Rgba([255; 4]));
    }

    #[test]
    fn glyph_always_covers_its_anchor() {
        let mut surface = RasterSurface::new(64, 64);
        surface.clear(Color32::WHITE);
        surface.draw_glyph("⭐", pos2(32.0, 32.0), 24.0, Color32::BLACK);
        assert_eq!(*surface.image().get_pixel(32, 32), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn scale_factor_applies_to_coordinates_and_width() {
        let mut surface = RasterSurface::with_scale(64, 64, 4.0);
        surface.clear(Color32::WHITE);
        surface.stroke_polyline(&[pos2(4.0, 4.0), pos2(12.0, 4.0)], 2.0, Color32::BLACK);
        // Logical (8, 4) lands at physical (32, 16).
        assert_eq!(*surface.image().get_pixel(32, 16), Rgba([0, 0, 0, 255]));
    }
}
