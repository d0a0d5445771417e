#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod controller;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod preview;
pub mod renderer;
pub mod sticker;
pub mod stroke;
pub mod surface;

pub use app::SketchApp;
pub use controller::InputController;
pub use drawable::Drawable;
pub use error::SketchError;
pub use history::History;
pub use input::{InputEvent, ToolButton};
pub use preview::Preview;
pub use renderer::SceneRenderer;
pub use sticker::Sticker;
pub use stroke::Stroke;
pub use surface::{PainterSurface, RasterSurface, Surface};
