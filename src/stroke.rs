use egui::{Color32, Pos2};

use crate::surface::Surface;

// A freehand line. Points are appended while the stroke is being authored;
// once the controller releases it, nothing extends it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    // Width and color are resolved from the tool state at creation time and
    // never re-read afterwards.
    pub fn new(width: f32, color: Color32) -> Self {
        Self {
            points: Vec::new(),
            width,
            color,
        }
    }

    pub fn with_points(points: Vec<Pos2>, width: f32, color: Color32) -> Self {
        Self {
            points,
            width,
            color,
        }
    }

    pub fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    // One connected path, one stroke operation, so segment joins stay
    // continuous.
    pub fn display(&self, surface: &mut dyn Surface) {
        if self.points.is_empty() {
            return;
        }
        surface.stroke_polyline(&self.points, self.width, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn push_point_appends_in_order() {
        let mut stroke = Stroke::new(2.0, Color32::BLACK);
        stroke.push_point(pos2(0.0, 0.0));
        stroke.push_point(pos2(5.0, 5.0));
        assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    }

    #[test]
    fn display_of_empty_stroke_paints_nothing() {
        use crate::surface::RasterSurface;

        let mut surface = RasterSurface::new(16, 16);
        surface.clear(Color32::WHITE);
        let before = surface.image().clone();
        Stroke::new(2.0, Color32::BLACK).display(&mut surface);
        assert_eq!(surface.image().as_raw(), before.as_raw());
    }
}
