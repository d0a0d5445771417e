use thiserror::Error;

/// Errors that can escape the editor.
///
/// Empty-stack undo/redo are deliberately absent: those are silent no-ops,
/// not failures.
#[derive(Debug, Error)]
pub enum SketchError {
    /// No paintable surface could be acquired. Fatal at startup; the editor
    /// does not attempt a degraded mode.
    #[error("rendering surface unavailable: {0}")]
    Surface(String),

    /// Encoding or writing the exported bitmap failed.
    #[error("bitmap export failed: {0}")]
    Export(#[from] image::ImageError),
}
