use std::rc::Rc;

use crate::config::EditorConfig;
use crate::inspector::Inspector;
use crate::panels::{canvas_panel, inspector_panel, printer_panel, tools_panel, toolbar};
use crate::printer::{LabelPrinter, PrinterBridge};
use crate::renderer::Renderer;
use crate::surface::{CanvasInteraction, Dimensions, SurfaceHost};
use crate::util::TaskRunner;

/// The editor: a surface flanked by the tool palette and the inspector,
/// plus the optional label printer window.
#[derive(Debug)]
pub struct DesignerApp {
    pub(crate) config: EditorConfig,
    pub(crate) host: SurfaceHost,
    pub(crate) inspector: Inspector,
    pub(crate) interaction: CanvasInteraction,
    pub(crate) renderer: Renderer,
    pub(crate) printer: LabelPrinter,
    pub(crate) tasks: TaskRunner,
    pub(crate) show_printer: bool,
}

impl DesignerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = EditorConfig::load(cc.storage);
        Self::with_bridge(config, platform_bridge())
    }

    /// Build the editor around an explicit configuration and printer bridge
    pub fn with_bridge(config: EditorConfig, bridge: Option<Rc<dyn PrinterBridge>>) -> Self {
        let host = SurfaceHost::mount(&config);
        let inspector = Inspector::new(Dimensions::new(config.canvas_width, config.canvas_height));
        let printer = LabelPrinter::new(bridge);
        let tasks = TaskRunner::new();

        let connecting = printer.clone();
        tasks.spawn(async move {
            // the outcome is logged and reflected in `is_connected`
            let _ = connecting.connect().await;
        });

        Self {
            config,
            host,
            inspector,
            interaction: CanvasInteraction::new(),
            renderer: Renderer::new(),
            printer,
            tasks,
            show_printer: false,
        }
    }

    pub fn host(&self) -> &SurfaceHost {
        &self.host
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub fn printer(&self) -> &LabelPrinter {
        &self.printer
    }

    /// Drive pending printer tasks
    pub fn poll_tasks(&mut self) {
        self.tasks.poll();
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_bridge() -> Option<Rc<dyn PrinterBridge>> {
    crate::printer::QzTrayBridge::from_window().map(|bridge| Rc::new(bridge) as Rc<dyn PrinterBridge>)
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_bridge() -> Option<Rc<dyn PrinterBridge>> {
    None
}

impl eframe::App for DesignerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let dimensions = self.inspector.dimensions();
        self.config
            .remember_canvas_size(dimensions.width, dimensions.height);
        self.config.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tasks();

        toolbar(self, ctx);
        tools_panel(self, ctx);
        inspector_panel(self, ctx);
        canvas_panel(self, ctx);

        if self.show_printer {
            printer_panel(self, ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.host.unmount();
    }
}
