use thiserror::Error;

use crate::element::ObjectId;

/// Errors raised by surface mutations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No object with this id lives on the surface
    #[error("no object {0} on the surface")]
    UnknownObject(ObjectId),
    /// The surface was disposed and accepts no further mutations
    #[error("surface has been disposed")]
    Disposed,
}

/// Errors raised while talking to the label printer bridge
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The host environment did not provide a bridge
    #[error("printer bridge not loaded")]
    Unavailable,
    /// A print was requested before a successful connect
    #[error("printer bridge is not connected")]
    NotConnected,
    /// The bridge found no default printer
    #[error("no printer found")]
    NoPrinter,
    /// The bridge rejected a call
    #[error("bridge call `{call}` failed: {reason}")]
    CallFailed { call: &'static str, reason: String },
}

impl BridgeError {
    pub fn call_failed(call: &'static str, reason: impl Into<String>) -> Self {
        Self::CallFailed {
            call,
            reason: reason.into(),
        }
    }
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
pub type BridgeResult<T> = Result<T, BridgeError>;
