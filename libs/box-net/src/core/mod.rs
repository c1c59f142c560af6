//! Core data structures shared by the generator stages.
//!
//! Includes the vector alias (`Vec3`), the fixed-point helpers used to key
//! coordinates, and the per-face coordinate frame.

pub mod frame;
pub mod vec3;

/// Rounds to the nearest integer with ties going towards positive infinity.
///
/// The browser renderer rounds this way, so offsets and grid keys computed
/// here agree with it for half-way values.
///
/// # Examples
/// ```
/// use box_net::core::round_half_up;
/// assert_eq!(round_half_up(-0.5), 0.0);
/// assert_eq!(round_half_up(2.5), 3.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
