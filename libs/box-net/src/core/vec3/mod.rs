//! Thin wrapper around `glam::DVec3` shared across generator modules.
//!
//! Face frames only ever hold axis-aligned unit vectors, so besides the
//! alias this module carries the fixed-point conversion used to compare
//! 3D points exactly.

pub use glam::DVec3 as Vec3;

/// A 3D point converted to fixed-point integer coordinates.
pub type FixedPoint = [i64; 3];

/// Converts one coordinate to fixed point at `scale` steps per unit.
///
/// Values within one step of zero snap to exactly zero, so `-0.0004` and
/// `0.0` produce the same key.
///
/// # Examples
/// ```
/// use box_net::core::vec3::to_fixed;
/// assert_eq!(to_fixed(1.9999999, 1000.0), 2000);
/// assert_eq!(to_fixed(-0.0004, 1000.0), 0);
/// ```
pub fn to_fixed(value: f64, scale: f64) -> i64 {
    if value.abs() < 1.0 / scale {
        0
    } else {
        (value * scale).round() as i64
    }
}

/// Converts a point to fixed-point coordinates.
///
/// # Examples
/// ```
/// use box_net::core::vec3::{to_fixed_point, Vec3};
/// let p = to_fixed_point(Vec3::new(1.0, -2.0000001, 1e-9), 1000.0);
/// assert_eq!(p, [1000, -2000, 0]);
/// ```
pub fn to_fixed_point(point: Vec3, scale: f64) -> FixedPoint {
    [
        to_fixed(point.x, scale),
        to_fixed(point.y, scale),
        to_fixed(point.z, scale),
    ]
}

/// Returns true when `v` is parallel to one of the coordinate axes and has
/// unit length.
///
/// # Examples
/// ```
/// use box_net::core::vec3::{is_axis_unit, Vec3};
/// assert!(is_axis_unit(Vec3::NEG_Z));
/// assert!(!is_axis_unit(Vec3::new(1.0, 1.0, 0.0)));
/// ```
pub fn is_axis_unit(v: Vec3) -> bool {
    let abs = v.abs();
    let max = abs.max_element();
    (max - 1.0).abs() < 1e-9 && (abs.x + abs.y + abs.z - 1.0).abs() < 1e-9
}
