use std::path::Path;

use egui::{Button, Color32, Sense};

use crate::controller::{InputController, THIN_WIDTH};
use crate::export;
use crate::history::History;
use crate::input::{InputEvent, InputTranslator, ToolButton};
use crate::renderer::{SceneRenderer, CANVAS_SIZE};
use crate::surface::PainterSurface;

/// Glyphs offered by the sticker buttons.
pub const STICKER_GLYPHS: [&str; 3] = ["⭐", "❤", "😀"];

const EXPORT_PATH: &str = "sketchpad.png";

/// The editor window: toolbar, fixed-size canvas, and the wiring that feeds
/// UI interactions into the input controller.
pub struct SketchApp {
    history: History,
    renderer: SceneRenderer,
    controller: InputController,
    translator: Option<InputTranslator>,
    export_status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            history: History::new(),
            renderer: SceneRenderer::new(),
            controller: InputController::new(),
            translator: None,
            export_status: None,
        }
    }
}

impl SketchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, pending: &mut Vec<InputEvent>) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                pending.push(InputEvent::Tool(ToolButton::Clear));
            }
            if ui
                .add_enabled(self.history.can_undo(), Button::new("Undo"))
                .clicked()
            {
                pending.push(InputEvent::Tool(ToolButton::Undo));
            }
            if ui
                .add_enabled(self.history.can_redo(), Button::new("Redo"))
                .clicked()
            {
                pending.push(InputEvent::Tool(ToolButton::Redo));
            }

            ui.separator();

            let drawing = self.controller.armed_glyph().is_none();
            let thin = drawing && self.controller.state().stroke_width == THIN_WIDTH;
            if ui.selectable_label(thin, "Thin").clicked() {
                pending.push(InputEvent::Tool(ToolButton::Thin));
            }
            if ui.selectable_label(drawing && !thin, "Thick").clicked() {
                pending.push(InputEvent::Tool(ToolButton::Thick));
            }

            ui.separator();

            for glyph in STICKER_GLYPHS {
                let armed = self.controller.armed_glyph() == Some(glyph);
                if ui.selectable_label(armed, glyph).clicked() {
                    pending.push(InputEvent::Tool(ToolButton::Sticker(glyph.to_owned())));
                }
            }

            ui.separator();

            let mut color: Color32 = self.controller.state().stroke_color;
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            );
            self.controller.set_stroke_color(color);

            ui.separator();

            if ui.button("Export").clicked() {
                self.export_status = Some(match export::export_png(&self.history, Path::new(EXPORT_PATH)) {
                    Ok(()) => format!("saved {EXPORT_PATH}"),
                    Err(err) => {
                        log::error!("export failed: {err}");
                        format!("export failed: {err}")
                    }
                });
            }
        });
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending: Vec<InputEvent> = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui, &mut pending);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sketchpad");

            let side = CANVAS_SIZE as f32;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), Sense::drag());
            let rect = response.rect;

            let translator = self
                .translator
                .get_or_insert_with(|| InputTranslator::new(rect));
            translator.set_canvas_rect(rect);
            pending.extend(translator.translate(&response));

            let mut surface = PainterSurface::new(&painter, rect);
            for event in pending {
                self.controller
                    .handle(event, &mut self.history, &mut self.renderer, &mut surface);
            }
            // Each handled event repainted the scene; this pass repaints it
            // for frames with no events at all. The final clear-and-redraw is
            // what ends up on screen either way.
            self.renderer.redraw(&self.history, &mut surface);

            if let Some(status) = &self.export_status {
                ui.label(status);
            }
        });
    }
}
