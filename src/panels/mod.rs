mod canvas_panel;
mod inspector_panel;
mod printer_panel;
mod tools_panel;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use inspector_panel::inspector_panel;
pub use printer_panel::printer_panel;
pub use tools_panel::tools_panel;
pub use toolbar::toolbar;
