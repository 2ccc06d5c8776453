//! Label printing through an injected printer bridge.
//!
//! In the browser the bridge is QZ Tray, found on the page at startup.
//! Everywhere else there is no bridge and printing stays disabled.

#[cfg(target_arch = "wasm32")]
mod qz;

use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::{BridgeError, BridgeResult};

#[cfg(target_arch = "wasm32")]
pub use qz::QzTrayBridge;

/// ESC @: reset the printer
pub const RESET: &str = "\x1B\x40";
/// GS V A: full cut
pub const FULL_CUT: &str = "\x1D\x56\x41";
pub const LABEL_TEXT: &str = "Label: Hello World\n";

/// Raw segments sent for one label
pub const LABEL_PAYLOAD: [&str; 3] = [RESET, LABEL_TEXT, FULL_CUT];

/// Printer configuration produced by a bridge for one print job
#[derive(Debug, Clone)]
pub struct PrintConfig {
    printer: String,
    #[cfg(target_arch = "wasm32")]
    handle: Option<wasm_bindgen::JsValue>,
}

impl PrintConfig {
    pub fn new(printer: impl Into<String>) -> Self {
        Self {
            printer: printer.into(),
            #[cfg(target_arch = "wasm32")]
            handle: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn with_handle(printer: impl Into<String>, handle: wasm_bindgen::JsValue) -> Self {
        Self {
            printer: printer.into(),
            handle: Some(handle),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn handle(&self) -> Option<&wasm_bindgen::JsValue> {
        self.handle.as_ref()
    }

    pub fn printer(&self) -> &str {
        &self.printer
    }
}

/// Capability to reach a physical printer
pub trait PrinterBridge {
    /// Open the connection to the print service
    fn connect(&self) -> LocalBoxFuture<'_, BridgeResult<()>>;

    /// Name of the default printer
    fn find_printer(&self) -> LocalBoxFuture<'_, BridgeResult<String>>;

    fn create_config(&self, printer: &str) -> BridgeResult<PrintConfig>;

    /// Send raw segments to the printer
    fn print<'a>(
        &'a self,
        config: &'a PrintConfig,
        data: &'a [&'a str],
    ) -> LocalBoxFuture<'a, BridgeResult<()>>;
}

/// Connection state plus the bridge used to print labels.
///
/// Clones share the connection flag, so a clone can be moved into a
/// spawned task while the UI keeps reading [`LabelPrinter::is_connected`].
#[derive(Clone, Default)]
pub struct LabelPrinter {
    bridge: Option<Rc<dyn PrinterBridge>>,
    connected: Rc<Cell<bool>>,
}

impl std::fmt::Debug for LabelPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelPrinter")
            .field("has_bridge", &self.bridge.is_some())
            .field("connected", &self.connected.get())
            .finish()
    }
}

impl LabelPrinter {
    pub fn new(bridge: Option<Rc<dyn PrinterBridge>>) -> Self {
        Self {
            bridge,
            connected: Rc::new(Cell::new(false)),
        }
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    pub async fn connect(&self) -> BridgeResult<()> {
        let result = match &self.bridge {
            Some(bridge) => bridge.connect().await,
            None => Err(BridgeError::Unavailable),
        };
        match &result {
            Ok(()) => {
                log::info!("connected to printer bridge");
                self.connected.set(true);
            }
            Err(err) => {
                log::error!("printer connection error: {err}");
                self.connected.set(false);
            }
        }
        result
    }

    /// Print the fixed label on the default printer
    pub async fn print_label(&self) -> BridgeResult<()> {
        let result = self.submit_label().await;
        if let Err(err) = &result {
            log::error!("print error: {err}");
        }
        result
    }

    async fn submit_label(&self) -> BridgeResult<()> {
        if !self.is_connected() {
            return Err(BridgeError::NotConnected);
        }
        let bridge = self.bridge.as_ref().ok_or(BridgeError::Unavailable)?;

        let printer = bridge.find_printer().await?;
        let config = bridge.create_config(&printer)?;
        log::debug!("printing label on {}", config.printer());
        bridge.print(&config, &LABEL_PAYLOAD).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn payload_resets_prints_and_cuts() {
        assert_eq!(LABEL_PAYLOAD[0].as_bytes(), &[0x1B, 0x40]);
        assert_eq!(LABEL_PAYLOAD[1], "Label: Hello World\n");
        assert_eq!(LABEL_PAYLOAD[2].as_bytes(), &[0x1D, 0x56, 0x41]);
    }

    #[test]
    fn no_bridge_is_unavailable() {
        let printer = LabelPrinter::new(None);
        assert_eq!(block_on(printer.connect()), Err(BridgeError::Unavailable));
        assert!(!printer.is_connected());
        assert_eq!(block_on(printer.print_label()), Err(BridgeError::NotConnected));
    }

    #[test]
    fn clones_share_connection_state() {
        let printer = LabelPrinter::default();
        let clone = printer.clone();
        clone.connected.set(true);
        assert!(printer.is_connected());
    }
}
