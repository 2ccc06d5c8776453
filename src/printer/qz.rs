use futures::FutureExt;
use futures::future::LocalBoxFuture;
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{PrintConfig, PrinterBridge};
use crate::error::{BridgeError, BridgeResult};

/// Bridge backed by the `qz` object QZ Tray installs on the page
pub struct QzTrayBridge {
    qz: JsValue,
}

impl QzTrayBridge {
    /// Look up the `qz` global; `None` when the script was not loaded
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let qz = Reflect::get(&window, &JsValue::from_str("qz")).ok()?;
        if qz.is_undefined() || qz.is_null() {
            log::warn!("QZ Tray not loaded");
            return None;
        }
        Some(Self { qz })
    }

    /// Call `qz.<namespace>.<method>(...args)`, or `qz.<method>` without a namespace
    fn invoke(
        &self,
        namespace: Option<&'static str>,
        method: &'static str,
        args: &Array,
    ) -> BridgeResult<JsValue> {
        let target = match namespace {
            Some(namespace) => member(&self.qz, namespace, method)?,
            None => self.qz.clone(),
        };
        let function: Function = member(&target, method, method)?
            .dyn_into()
            .map_err(|_| BridgeError::call_failed(method, "not a function"))?;
        function
            .apply(&target, args)
            .map_err(|err| BridgeError::call_failed(method, describe(&err)))
    }
}

fn member(target: &JsValue, name: &'static str, call: &'static str) -> BridgeResult<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|err| BridgeError::call_failed(call, describe(&err)))?;
    if value.is_undefined() {
        return Err(BridgeError::call_failed(call, format!("`{name}` is missing")));
    }
    Ok(value)
}

/// Await a value that may or may not be a promise
async fn settle(call: &'static str, value: JsValue) -> BridgeResult<JsValue> {
    JsFuture::from(Promise::resolve(&value))
        .await
        .map_err(|err| BridgeError::call_failed(call, describe(&err)))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

impl PrinterBridge for QzTrayBridge {
    fn connect(&self) -> LocalBoxFuture<'_, BridgeResult<()>> {
        async move {
            let pending = self.invoke(Some("websocket"), "connect", &Array::new())?;
            settle("connect", pending).await.map(|_| ())
        }
        .boxed_local()
    }

    fn find_printer(&self) -> LocalBoxFuture<'_, BridgeResult<String>> {
        async move {
            let pending = self.invoke(Some("printers"), "find", &Array::new())?;
            settle("find", pending)
                .await?
                .as_string()
                .ok_or(BridgeError::NoPrinter)
        }
        .boxed_local()
    }

    fn create_config(&self, printer: &str) -> BridgeResult<PrintConfig> {
        let args = Array::of1(&JsValue::from_str(printer));
        let handle = self.invoke(Some("configs"), "create", &args)?;
        Ok(PrintConfig::with_handle(printer, handle))
    }

    fn print<'a>(
        &'a self,
        config: &'a PrintConfig,
        data: &'a [&'a str],
    ) -> LocalBoxFuture<'a, BridgeResult<()>> {
        async move {
            let handle = config
                .handle()
                .cloned()
                .ok_or_else(|| BridgeError::call_failed("print", "config not created by QZ Tray"))?;
            let segments: Array = data.iter().map(|segment| JsValue::from_str(segment)).collect();
            let pending = self.invoke(None, "print", &Array::of2(&handle, &segments))?;
            settle("print", pending).await.map(|_| ())
        }
        .boxed_local()
    }
}
