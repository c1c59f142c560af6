//! WASM-facing entry points for the box net generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Nets cross the boundary as JSON in the renderer's
//! camelCase shape. Native tests use the `*_internal` helpers, which
//! return Rust types and never touch a JS host.
//!
//! ```
//! let nets = boxnet_wasm::generate_all_nets_internal(1.0, 1.0, 1.0, true);
//! assert_eq!(nets.len(), 11);
//! ```

use box_net::fold::fold_angle_degrees;
use box_net::{Dimensions, NetData};
use config::constants::DEFAULT_SCALE;
use wasm_bindgen::prelude::*;

mod error;
mod net_handle;

pub use error::BridgeError;
pub use net_handle::NetSetHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "boxnet-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the grid cell size, in pixels, used before the viewport has been
/// measured.
///
/// # Examples
/// ```
/// assert_eq!(boxnet_wasm::default_scale(), 40.0);
/// ```
#[wasm_bindgen]
pub fn default_scale() -> f64 {
    DEFAULT_SCALE
}

/// Generates every net of a box and returns them as a JSON array, sorted by
/// pattern id and variant.
///
/// # Errors
/// Returns a JavaScript error value when the result cannot be encoded.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const nets = JSON.parse(generate_all_nets(2, 3, 4, false));
/// ```
#[wasm_bindgen]
pub fn generate_all_nets(l: f64, w: f64, h: f64, is_cube: bool) -> Result<String, JsValue> {
    let nets = generate_all_nets_internal(l, w, h, is_cube);
    Ok(serde_json::to_string(&nets).map_err(BridgeError::from)?)
}

/// Host-only helper behind [`generate_all_nets`].
///
/// Non-positive or non-finite dimensions produce an empty list.
///
/// # Examples
/// ```
/// let nets = boxnet_wasm::generate_all_nets_internal(2.0, 3.0, 4.0, false);
/// assert_eq!(nets.len(), 66);
/// ```
pub fn generate_all_nets_internal(l: f64, w: f64, h: f64, is_cube: bool) -> Vec<NetData> {
    box_net::generate_all_nets(Dimensions::new(l, w, h), is_cube)
}

/// Generates every net of a box and keeps them behind a handle.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const set = enumerate_nets(2, 3, 4, false);
/// // console.log(set.count);
/// ```
#[wasm_bindgen]
pub fn enumerate_nets(l: f64, w: f64, h: f64, is_cube: bool) -> NetSetHandle {
    NetSetHandle::new(generate_all_nets_internal(l, w, h, is_cube))
}

/// Computes the root-centring pixel offset of a net given as JSON and
/// returns the alignment as JSON.
///
/// # Errors
/// Returns a JavaScript error when `net_json` is not a valid net.
#[wasm_bindgen]
pub fn net_alignment(net_json: &str, scale: f64) -> Result<String, JsValue> {
    Ok(net_alignment_internal(net_json, scale)?)
}

/// Host-only helper behind [`net_alignment`].
///
/// # Examples
/// ```
/// let nets = boxnet_wasm::generate_all_nets_internal(1.0, 1.0, 1.0, true);
/// let json = serde_json::to_string(&nets[0]).unwrap();
/// let alignment = boxnet_wasm::net_alignment_internal(&json, 40.0).unwrap();
/// assert!(alignment.contains("\"baseOffset\""));
/// ```
pub fn net_alignment_internal(net_json: &str, scale: f64) -> Result<String, BridgeError> {
    let net: NetData = serde_json::from_str(net_json)?;
    let alignment = box_net::net_alignment(&net, scale);
    Ok(serde_json::to_string(&alignment)?)
}

/// Folds a net given as JSON to a slider position in `[0, 100]` and returns
/// one 4x4 column-major matrix per face, concatenated in face order.
///
/// # Errors
/// Returns a JavaScript error when `net_json` is not a valid net or its
/// parent links are broken.
#[wasm_bindgen]
pub fn fold_matrices(net_json: &str, progress: f64) -> Result<Vec<f64>, JsValue> {
    Ok(fold_matrices_internal(net_json, progress)?)
}

/// Host-only helper behind [`fold_matrices`].
///
/// # Examples
/// ```
/// let nets = boxnet_wasm::generate_all_nets_internal(1.0, 1.0, 1.0, true);
/// let json = serde_json::to_string(&nets[0]).unwrap();
/// let matrices = boxnet_wasm::fold_matrices_internal(&json, 100.0).unwrap();
/// assert_eq!(matrices.len(), 6 * 16);
/// ```
pub fn fold_matrices_internal(net_json: &str, progress: f64) -> Result<Vec<f64>, BridgeError> {
    let net: NetData = serde_json::from_str(net_json)?;
    let angle = fold_angle_degrees(progress).to_radians();
    let poses = box_net::fold_poses(&net, angle)?;
    Ok(poses
        .iter()
        .flat_map(|pose| glam::DMat4::from(pose.transform).to_cols_array())
        .collect())
}

#[cfg(test)]
mod tests;
