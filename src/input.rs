use egui::{Pos2, Rect};

/// The event vocabulary the input controller consumes. Positions are
/// surface-local pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
    /// The pointer left the canvas; ends authoring and discards the preview.
    PointerLeave,
    Tool(ToolButton),
}

/// Toolbar actions delivered alongside pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolButton {
    Clear,
    Undo,
    Redo,
    Thin,
    Thick,
    Sticker(String),
}

/// Converts raw egui pointer state on the canvas response into the
/// domain-specific event stream, translating screen positions into
/// surface-local coordinates.
pub struct InputTranslator {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
}

impl InputTranslator {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. after a layout change).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Events for this frame, in the order they must be handled: a press
    /// before the move it arrived with, a release after.
    pub fn translate(&mut self, response: &egui::Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match response.hover_pos() {
            Some(pos) => {
                let local = self.to_local(pos);
                if response.drag_started() {
                    events.push(InputEvent::PointerDown { pos: local });
                }
                if self.last_pos != Some(local) {
                    events.push(InputEvent::PointerMove { pos: local });
                }
                if response.drag_stopped() {
                    events.push(InputEvent::PointerUp { pos: local });
                }
                self.last_pos = Some(local);
            }
            None => {
                // Leaving the canvas mid-stroke ends authoring the same way a
                // release does, so a release outside needs no separate event.
                if self.last_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }
        events
    }
}
