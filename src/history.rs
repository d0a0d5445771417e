use crate::drawable::Drawable;
use crate::stroke::Stroke;

/// The two ordered stacks managing drawable lifecycle.
///
/// `committed` is the authoritative scene: array order is draw order is
/// z-order, earliest first. `undone` is the redo buffer. The sequences are
/// disjoint; a drawable moves atomically between them and is never
/// duplicated.
#[derive(Debug, Default)]
pub struct History {
    committed: Vec<Drawable>,
    undone: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the scene. Any pending redo history is
    /// invalidated: after a commit, `undone` is always empty.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.undone.clear();
    }

    /// Move the most recent commit to the redo buffer. Silent no-op when
    /// nothing is committed; that is an expected steady-state condition, not
    /// an error.
    pub fn undo(&mut self) {
        if let Some(drawable) = self.committed.pop() {
            self.undone.push(drawable);
        }
    }

    /// Restore the most recently undone drawable. Silent no-op when the redo
    /// buffer is empty.
    pub fn redo(&mut self) {
        if let Some(drawable) = self.undone.pop() {
            self.committed.push(drawable);
        }
    }

    /// Drop everything from both stacks.
    pub fn clear_all(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// The most recently committed drawable, if it is a stroke. The
    /// controller extends the stroke it is authoring through this; nothing
    /// else mutates committed content.
    pub fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self.committed.last_mut() {
            Some(Drawable::Stroke(stroke)) => Some(stroke),
            _ => None,
        }
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }
}
