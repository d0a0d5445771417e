use egui::{Color32, Pos2};

use crate::drawable::Drawable;
use crate::history::History;
use crate::input::{InputEvent, ToolButton};
use crate::preview::Preview;
use crate::renderer::SceneRenderer;
use crate::sticker::Sticker;
use crate::stroke::Stroke;
use crate::surface::Surface;

pub const THIN_WIDTH: f32 = 2.0;
pub const THICK_WIDTH: f32 = 6.0;

/// Tool values produced by the UI and read at stroke/preview creation time.
/// Owned by the controller, not process-wide.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub stroke_width: f32,
    pub stroke_color: Color32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            stroke_width: THIN_WIDTH,
            stroke_color: Color32::BLACK,
        }
    }
}

/// Which gesture the controller is in the middle of. Arming a sticker
/// carries its glyph, so "armed without a glyph" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Idle,
    /// A stroke is being extended; it is already committed, so undo during
    /// authoring removes the in-progress stroke.
    Authoring,
    StickerArmed { glyph: String },
}

/// Translates input events into history and tool-state mutations, then
/// triggers a scene redraw. Every branch is total: no input raises an error.
pub struct InputController {
    state: EditorState,
    mode: Mode,
    last_pointer: Option<Pos2>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
            mode: Mode::Idle,
            last_pointer: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn armed_glyph(&self) -> Option<&str> {
        match &self.mode {
            Mode::StickerArmed { glyph } => Some(glyph),
            _ => None,
        }
    }

    /// The color picker writes through here; the next stroke or brush
    /// preview picks it up.
    pub fn set_stroke_color(&mut self, color: Color32) {
        self.state.stroke_color = color;
    }

    /// Handle one input event and redraw the scene onto `surface`.
    ///
    /// Mutations and the repaint run synchronously inside this call, so a
    /// rapid pointer-move sequence is fully applied in arrival order.
    pub fn handle(
        &mut self,
        event: InputEvent,
        history: &mut History,
        renderer: &mut SceneRenderer,
        surface: &mut dyn Surface,
    ) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos, history, renderer),
            InputEvent::PointerMove { pos } => self.pointer_move(pos, history, renderer),
            InputEvent::PointerUp { .. } => self.pointer_up(history),
            InputEvent::PointerLeave => self.pointer_leave(history, renderer),
            InputEvent::Tool(button) => self.tool_button(button, history, renderer),
        }
        renderer.redraw(history, surface);
    }

    fn pointer_down(&mut self, pos: Pos2, history: &mut History, renderer: &mut SceneRenderer) {
        self.last_pointer = Some(pos);
        renderer.set_preview(None);
        match &self.mode {
            Mode::StickerArmed { glyph } => {
                log::debug!("placing sticker {glyph:?} at {pos:?}");
                history.commit(Drawable::Sticker(Sticker::new(glyph.clone(), pos)));
                // Stays armed: each further press places another sticker.
            }
            _ => {
                log::debug!("begin stroke at {pos:?}");
                let mut stroke = Stroke::new(self.state.stroke_width, self.state.stroke_color);
                stroke.push_point(pos);
                history.commit(Drawable::Stroke(stroke));
                self.mode = Mode::Authoring;
            }
        }
    }

    fn pointer_move(&mut self, pos: Pos2, history: &mut History, renderer: &mut SceneRenderer) {
        self.last_pointer = Some(pos);
        match self.mode {
            Mode::Authoring => {
                // The authored stroke is the last commit by construction.
                if let Some(active) = history.last_mut() {
                    active.drag(pos);
                }
            }
            _ => renderer.set_preview(Some(self.preview_at(pos))),
        }
    }

    fn pointer_up(&mut self, history: &mut History) {
        if self.mode == Mode::Authoring {
            let points = history.last_stroke_mut().map_or(0, |s| s.points().len());
            log::debug!("froze stroke with {points} points");
            self.mode = Mode::Idle;
        }
    }

    fn pointer_leave(&mut self, history: &mut History, renderer: &mut SceneRenderer) {
        self.last_pointer = None;
        renderer.set_preview(None);
        self.pointer_up(history);
    }

    fn tool_button(
        &mut self,
        button: ToolButton,
        history: &mut History,
        renderer: &mut SceneRenderer,
    ) {
        // A button press always ends any in-flight stroke first, so the
        // action below never mutates a stroke it is about to invalidate.
        if self.mode == Mode::Authoring {
            self.mode = Mode::Idle;
        }
        match button {
            ToolButton::Clear => {
                log::debug!("clearing canvas");
                history.clear_all();
                renderer.set_preview(None);
            }
            ToolButton::Undo => history.undo(),
            ToolButton::Redo => history.redo(),
            ToolButton::Thin => self.select_width(THIN_WIDTH, renderer),
            ToolButton::Thick => self.select_width(THICK_WIDTH, renderer),
            ToolButton::Sticker(glyph) => {
                log::debug!("armed sticker {glyph:?}");
                self.mode = Mode::StickerArmed { glyph };
                self.refresh_preview(renderer);
            }
        }
    }

    fn select_width(&mut self, width: f32, renderer: &mut SceneRenderer) {
        self.state.stroke_width = width;
        self.mode = Mode::Idle;
        self.refresh_preview(renderer);
    }

    // Recompute the preview at the last known pointer position so a tool
    // change is visible before the next pointer move.
    fn refresh_preview(&self, renderer: &mut SceneRenderer) {
        if let Some(pos) = self.last_pointer {
            renderer.set_preview(Some(self.preview_at(pos)));
        }
    }

    fn preview_at(&self, pos: Pos2) -> Preview {
        match &self.mode {
            Mode::StickerArmed { glyph } => Preview::Sticker {
                pos,
                glyph: glyph.clone(),
            },
            _ => Preview::Brush {
                pos,
                width: self.state.stroke_width,
                color: self.state.stroke_color,
            },
        }
    }
}
