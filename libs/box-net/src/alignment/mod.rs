//! # Alignment Helper
//!
//! Pixel-space helpers for the renderer: the offset that puts the root
//! face (not the bounding box) at the visual origin, the scale that fits a
//! net into a viewport, and grid snapping for pans.
//!
//! Offsets are snapped to whole grid cells, shifted by half a cell on an
//! axis where the root face has an odd extent, so grid lines keep
//! following face boundaries.

use config::constants::{DEFAULT_SCALE, MIN_SCALE, MIN_VIEWPORT_EXTENT};
use glam::DVec2;
use serde::Serialize;

use crate::core::round_half_up;
use crate::net::{Face, NetData};

/// Centering data for one net at one pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetAlignment<'a> {
    /// The root face, or the first face when no face has id 0.
    pub root_face: Option<&'a Face>,
    /// Centre of the root face in net units.
    #[serde(serialize_with = "point::serialize")]
    pub root_center: DVec2,
    /// Centre of the bounding box in net units.
    #[serde(serialize_with = "point::serialize")]
    pub net_center: DVec2,
    /// Snapped pixel offset to apply to the net.
    #[serde(serialize_with = "point::serialize")]
    pub base_offset: DVec2,
    /// Half-cell shift applied per axis, in pixels.
    #[serde(serialize_with = "point::serialize")]
    pub center_snap: DVec2,
}

/// Writes a `DVec2` as the renderer's `{ x, y }` point object.
mod point {
    use glam::DVec2;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct Point {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(v: &DVec2, serializer: S) -> Result<S::Ok, S::Error> {
        Point { x: v.x, y: v.y }.serialize(serializer)
    }
}

/// Computes the pixel offset that centres the root face of `net`.
///
/// A net without faces aligns to the origin.
///
/// # Examples
/// ```
/// use box_net::{generate_net, net_alignment, PatternCatalog};
/// let catalog = PatternCatalog::standard();
/// let net = generate_net(catalog.get(1).unwrap(), [2.0, 3.0, 4.0], 1).unwrap();
/// let alignment = net_alignment(&net, 40.0);
/// assert_eq!(alignment.base_offset.x, -200.0);
/// assert_eq!(alignment.base_offset.y, 20.0);
/// ```
pub fn net_alignment(net: &NetData, scale: f64) -> NetAlignment<'_> {
    let Some(root) = net.root_face() else {
        return NetAlignment {
            root_face: None,
            root_center: DVec2::ZERO,
            net_center: DVec2::ZERO,
            base_offset: DVec2::ZERO,
            center_snap: DVec2::ZERO,
        };
    };

    let net_center = DVec2::new(net.total_width, net.total_height) / 2.0;
    let root_center = root.center();
    let half_cell = |extent: f64| if extent % 2.0 != 0.0 { scale / 2.0 } else { 0.0 };
    let center_snap = DVec2::new(half_cell(root.width), half_cell(root.height));

    let raw = (root_center - net_center) * scale;
    let snap_axis = |raw: f64, snap: f64| round_half_up((raw - snap) / scale) * scale + snap;
    let base_offset = DVec2::new(
        snap_axis(raw.x, center_snap.x),
        snap_axis(raw.y, center_snap.y),
    );

    NetAlignment {
        root_face: Some(root),
        root_center,
        net_center,
        base_offset,
        center_snap,
    }
}

/// Largest whole pixel scale at which `net` fits the viewport, times
/// `zoom`, never below the minimum scale.
///
/// Returns the default scale when the viewport has not been measured yet.
///
/// # Examples
/// ```
/// use box_net::{alignment::fit_scale, generate_net, PatternCatalog};
/// let catalog = PatternCatalog::standard();
/// let net = generate_net(catalog.get(1).unwrap(), [1.0, 1.0, 1.0], 1).unwrap();
/// assert_eq!(fit_scale(&net, 0.0, 600.0, 40.0, 1.0), 40.0);
/// assert_eq!(fit_scale(&net, 840.0, 640.0, 40.0, 1.0), 200.0);
/// ```
pub fn fit_scale(
    net: &NetData,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
    zoom: f64,
) -> f64 {
    if viewport_width == 0.0 || viewport_height == 0.0 {
        return DEFAULT_SCALE;
    }
    let available_w = (viewport_width - padding).max(MIN_VIEWPORT_EXTENT);
    let available_h = (viewport_height - padding).max(MIN_VIEWPORT_EXTENT);
    let net_w = net.total_width.max(1.0);
    let net_h = net.total_height.max(1.0);
    let fit = (available_w / net_w).min(available_h / net_h);
    (fit * zoom).floor().max(MIN_SCALE)
}

/// The alignment offset plus a pan, converted from pixels to net units.
pub fn alignment_offset_units(alignment: &NetAlignment<'_>, pan: DVec2, scale: f64) -> DVec2 {
    (alignment.base_offset + pan) / scale
}

/// Rounds `value` to the nearest multiple of `scale`.
///
/// # Examples
/// ```
/// use box_net::alignment::snap_to_grid;
/// assert_eq!(snap_to_grid(57.0, 40.0), 40.0);
/// assert_eq!(snap_to_grid(-20.0, 40.0), 0.0);
/// ```
pub fn snap_to_grid(value: f64, scale: f64) -> f64 {
    round_half_up(value / scale) * scale
}
