#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod inspector;
pub mod palette;
pub mod panels;
pub mod printer;
pub mod renderer;
pub mod surface;
pub mod util;
pub mod widgets;

pub use app::DesignerApp;
pub use config::EditorConfig;
pub use element::{Drawable, Element, ObjectId, ObjectKind};
pub use error::{BridgeError, SurfaceError};
pub use inspector::{Inspector, InspectorState};
pub use palette::PaletteAction;
pub use printer::{LabelPrinter, PrinterBridge};
pub use renderer::Renderer;
pub use surface::{Surface, SurfaceEvent, SurfaceHandle, SurfaceHost};
