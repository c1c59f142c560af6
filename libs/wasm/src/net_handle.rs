//! # Net Set Handle
//!
//! WASM-friendly wrapper around one enumeration result, so the renderer can
//! page through nets without re-running the generator.

use box_net::NetData;
use wasm_bindgen::prelude::*;

use crate::error::BridgeError;

/// A handle to the nets produced for one set of dimensions.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const set = enumerate_nets(2, 3, 4, false);
///
/// console.log(set.count);            // 66
/// const net = JSON.parse(set.net_json(0));
/// const rects = set.face_rects(0);   // Float64Array [x, y, w, h, ...]
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NetSetHandle {
    nets: Vec<NetData>,
}

#[wasm_bindgen]
impl NetSetHandle {
    /// Returns the number of nets.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.nets.len()
    }

    /// Returns true if no pattern folds flat for these dimensions.
    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// Returns every net as one JSON array.
    pub fn json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(&self.nets).map_err(BridgeError::from)?)
    }

    /// Returns the net at `index` as JSON.
    pub fn net_json(&self, index: usize) -> Result<String, JsValue> {
        let net = self.get(index)?;
        Ok(serde_json::to_string(net).map_err(BridgeError::from)?)
    }

    /// Returns the face rectangles of the net at `index` as a Float64Array.
    ///
    /// Format: [x, y, width, height, ...] in face order.
    pub fn face_rects(&self, index: usize) -> Result<js_sys::Float64Array, JsValue> {
        let rects = self.rect_buffer(index)?;
        Ok(js_sys::Float64Array::from(&rects[..]))
    }

    /// Returns the `"{patternId}-{variantIndex}"` ids in order.
    pub fn ids(&self) -> Vec<String> {
        self.nets.iter().map(|net| net.id.clone()).collect()
    }
}

impl NetSetHandle {
    /// Wraps an enumeration result.
    pub fn new(nets: Vec<NetData>) -> Self {
        Self { nets }
    }

    /// The net at `index`.
    pub fn get(&self, index: usize) -> Result<&NetData, BridgeError> {
        self.nets.get(index).ok_or(BridgeError::IndexOutOfRange {
            index,
            count: self.nets.len(),
        })
    }

    /// Flat `[x, y, width, height]` buffer of the net at `index`.
    pub fn rect_buffer(&self, index: usize) -> Result<Vec<f64>, BridgeError> {
        let net = self.get(index)?;
        Ok(net
            .faces
            .iter()
            .flat_map(|f| [f.x, f.y, f.width, f.height])
            .collect())
    }

    /// All nets held by the handle.
    pub fn nets(&self) -> &[NetData] {
        &self.nets
    }
}
