//! Errors raised at the JavaScript boundary.
//!
//! Every failure crosses into JavaScript as a plain string message.

use box_net::NetError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a WASM entry point.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The generator rejected its input.
    #[error(transparent)]
    Net(#[from] NetError),

    /// A net passed in from JavaScript was not valid `NetData` JSON, or a
    /// result could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A handle was asked for a net it does not hold.
    #[error("no net at index {index} (have {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of nets in the handle.
        count: usize,
    },
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
