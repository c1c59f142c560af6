//! Centralized configuration values shared across the box net pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Number of faces of a rectangular box.
///
/// # Examples
/// ```
/// use config::constants::FACE_COUNT;
/// assert_eq!(FACE_COUNT, 6);
/// ```
pub const FACE_COUNT: usize = 6;

/// Number of open-edge pairs in the net of a closed box.
///
/// 24 edge slots minus 10 fold slots leaves 14 open slots, i.e. 7 pairs.
///
/// # Examples
/// ```
/// use config::constants::{EXPECTED_EDGE_MATCHES, FACE_COUNT};
/// let fold_slots = (FACE_COUNT - 1) * 2;
/// assert_eq!((FACE_COUNT * 4 - fold_slots) / 2, EXPECTED_EDGE_MATCHES);
/// ```
pub const EXPECTED_EDGE_MATCHES: usize = 7;

/// Inward shrink applied to both rectangles before the overlap test, so that
/// faces sharing only a boundary do not count as overlapping.
///
/// # Examples
/// ```
/// use config::constants::OVERLAP_EPSILON;
/// assert!(OVERLAP_EPSILON > 0.0 && OVERLAP_EPSILON < 0.5);
/// ```
pub const OVERLAP_EPSILON: f64 = 0.05;

/// Fixed-point scale used to key 3D edge endpoints (three decimal places).
/// Coordinates within one fixed-point step of zero are snapped to zero.
///
/// # Examples
/// ```
/// use config::constants::EDGE_KEY_SCALE;
/// assert_eq!((1.2346 * EDGE_KEY_SCALE).round() as i64, 1235);
/// ```
pub const EDGE_KEY_SCALE: f64 = 1000.0;

// =============================================================================
// DIMENSION LIMITS
// =============================================================================

/// Smallest box dimension offered by the UI clamp.
///
/// # Examples
/// ```
/// use config::constants::MIN_DIMENSION;
/// assert_eq!(MIN_DIMENSION, 1);
/// ```
pub const MIN_DIMENSION: u32 = 1;

/// Largest box dimension offered by the UI clamp. The generator itself
/// places no upper bound on dimensions.
///
/// # Examples
/// ```
/// use config::constants::{MAX_DIMENSION, MIN_DIMENSION};
/// assert!(MAX_DIMENSION > MIN_DIMENSION);
/// ```
pub const MAX_DIMENSION: u32 = 10;

// =============================================================================
// VIEW CONSTANTS
// =============================================================================

/// Pixel size of one grid cell when no viewport is known yet.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SCALE;
/// assert_eq!(DEFAULT_SCALE, 40.0);
/// ```
pub const DEFAULT_SCALE: f64 = 40.0;

/// Lower bound for the fitted pixel scale.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SCALE, MIN_SCALE};
/// assert!(MIN_SCALE < DEFAULT_SCALE);
/// ```
pub const MIN_SCALE: f64 = 5.0;

/// Smallest usable viewport extent (pixels) after padding is removed.
///
/// # Examples
/// ```
/// use config::constants::MIN_VIEWPORT_EXTENT;
/// assert!(MIN_VIEWPORT_EXTENT >= 1.0);
/// ```
pub const MIN_VIEWPORT_EXTENT: f64 = 100.0;

/// Fold progress value at which the box is completely closed.
///
/// # Examples
/// ```
/// use config::constants::{FOLD_DEGREES_PER_PROGRESS, FULL_FOLD_PROGRESS};
/// assert_eq!(FULL_FOLD_PROGRESS * FOLD_DEGREES_PER_PROGRESS, 90.0);
/// ```
pub const FULL_FOLD_PROGRESS: f64 = 100.0;

/// Hinge angle in degrees per unit of fold progress.
pub const FOLD_DEGREES_PER_PROGRESS: f64 = 0.9;

/// Grid quantum (net units) used when overlaying two nets for comparison.
///
/// # Examples
/// ```
/// use config::constants::COMPARE_QUANTUM;
/// assert_eq!((1.26_f64 / COMPARE_QUANTUM).round() * COMPARE_QUANTUM, 1.5);
/// ```
pub const COMPARE_QUANTUM: f64 = 0.5;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.overlap_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Inward epsilon used by the overlap validator.
    pub overlap_epsilon: f64,
    /// Fixed-point scale used to key 3D edge endpoints.
    pub edge_key_scale: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// epsilon and key scale.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.01, 10_000.0).expect("valid config");
    /// assert_eq!(cfg.edge_key_scale, 10_000.0);
    /// ```
    pub fn new(overlap_epsilon: f64, edge_key_scale: f64) -> Result<Self, ConfigError> {
        if !overlap_epsilon.is_finite() || overlap_epsilon <= 0.0 {
            return Err(ConfigError::InvalidOverlapEpsilon(overlap_epsilon));
        }
        if !edge_key_scale.is_finite() || edge_key_scale < 1.0 {
            return Err(ConfigError::InvalidEdgeKeyScale(edge_key_scale));
        }
        Ok(Self {
            overlap_epsilon,
            edge_key_scale,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            overlap_epsilon: OVERLAP_EPSILON,
            edge_key_scale: EDGE_KEY_SCALE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the overlap epsilon is zero, negative or not finite.
    InvalidOverlapEpsilon(f64),
    /// Raised when the edge key scale is below one or not finite.
    InvalidEdgeKeyScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOverlapEpsilon(value) => {
                write!(f, "overlap_epsilon must be positive: {value}")
            }
            ConfigError::InvalidEdgeKeyScale(value) => {
                write!(f, "edge_key_scale must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
