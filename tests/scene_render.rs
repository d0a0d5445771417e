use egui::{pos2, Color32};
use sketchpad::export::{export_png, render_scaled, EXPORT_SCALE};
use sketchpad::renderer::CANVAS_SIZE;
use sketchpad::{
    Drawable, History, Preview, RasterSurface, SceneRenderer, Sticker, Stroke, Surface,
};

fn horizontal_stroke(y: f32, color: Color32) -> Drawable {
    Drawable::Stroke(Stroke::with_points(
        vec![pos2(10.0, y), pos2(20.0, y)],
        6.0,
        color,
    ))
}

fn surface() -> RasterSurface {
    RasterSurface::new(CANVAS_SIZE, CANVAS_SIZE)
}

fn px(surface: &RasterSurface, x: u32, y: u32) -> [u8; 4] {
    surface.image().get_pixel(x, y).0
}

#[test]
fn redraw_is_idempotent() {
    let mut history = History::new();
    history.commit(horizontal_stroke(15.0, Color32::RED));
    history.commit(Drawable::Sticker(Sticker::new("⭐", pos2(40.0, 40.0))));

    let mut renderer = SceneRenderer::new();
    renderer.set_preview(Some(Preview::Brush {
        pos: pos2(60.0, 60.0),
        width: 6.0,
        color: Color32::GREEN,
    }));

    let mut once = surface();
    renderer.redraw(&history, &mut once);

    // Same state, second pass on an already painted surface.
    let mut twice = surface();
    renderer.redraw(&history, &mut twice);
    renderer.redraw(&history, &mut twice);

    assert_eq!(once.image().as_raw(), twice.image().as_raw());
}

#[test]
fn draw_order_is_commit_order() {
    let mut history = History::new();
    history.commit(horizontal_stroke(15.0, Color32::RED));
    history.commit(horizontal_stroke(15.0, Color32::BLUE));

    let renderer = SceneRenderer::new();
    let mut out = surface();
    renderer.redraw(&history, &mut out);

    // The later commit occludes the earlier one at overlapping pixels.
    assert_eq!(px(&out, 15, 15), [0, 0, 255, 255]);
}

#[test]
fn preview_paints_on_top_and_disappears_when_discarded() {
    let mut history = History::new();
    history.commit(horizontal_stroke(15.0, Color32::RED));

    let mut renderer = SceneRenderer::new();
    renderer.set_preview(Some(Preview::Brush {
        pos: pos2(15.0, 15.0),
        width: 6.0,
        color: Color32::GREEN,
    }));

    let mut with_preview = surface();
    renderer.redraw(&history, &mut with_preview);
    assert_eq!(px(&with_preview, 15, 15), [0, 255, 0, 255]);

    renderer.set_preview(None);
    let mut without = surface();
    renderer.redraw(&history, &mut without);
    assert_eq!(px(&without, 15, 15), [255, 0, 0, 255]);
}

#[test]
fn preview_draw_restores_the_persisted_scene_first() {
    let mut history = History::new();
    history.commit(horizontal_stroke(15.0, Color32::RED));

    // Start from a surface full of stale pixels.
    let mut out = surface();
    out.clear(Color32::BLUE);

    let preview = Preview::Sticker {
        pos: pos2(100.0, 100.0),
        glyph: "⭐".to_owned(),
    };
    preview.draw(&history, &mut out);

    // Stale pixels are gone, the committed stroke is back, the indicator is
    // present at the pointer.
    assert_eq!(px(&out, 200, 200), [255, 255, 255, 255]);
    assert_eq!(px(&out, 15, 15), [255, 0, 0, 255]);
    assert_eq!(px(&out, 100, 100), [0, 0, 0, 255]);
}

#[test]
fn empty_history_redraws_to_plain_background() {
    let renderer = SceneRenderer::new();
    let mut out = surface();
    out.clear(Color32::BLUE);
    renderer.redraw(&History::new(), &mut out);
    assert!(out.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn export_renders_at_integer_scale() {
    let mut history = History::new();
    history.commit(horizontal_stroke(10.0, Color32::RED));

    let image = render_scaled(&history, EXPORT_SCALE);
    assert_eq!(image.width(), CANVAS_SIZE * EXPORT_SCALE);
    assert_eq!(image.height(), CANVAS_SIZE * EXPORT_SCALE);

    // Logical (15, 10) lands at physical (60, 40).
    assert_eq!(image.get_pixel(60, 40).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(800, 800).0, [255, 255, 255, 255]);
}

#[test]
fn export_png_writes_a_file() {
    let mut history = History::new();
    history.commit(horizontal_stroke(10.0, Color32::RED));

    let path = std::env::temp_dir().join("sketchpad_export_test.png");
    export_png(&history, &path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}
