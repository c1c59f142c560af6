//! Generator-level configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the propagation and
//! edge-matching stages stay decoupled from literal constants.

use config::constants::{GlobalConfig, EDGE_KEY_SCALE, OVERLAP_EPSILON};

use crate::error::NetResult;

/// Net generator configuration wrapper.
///
/// # Examples
/// ```
/// use box_net::config::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.overlap_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Inward epsilon applied by the overlap validator.
    pub overlap_epsilon: f64,
    /// Fixed-point scale for 3D edge keys.
    pub edge_key_scale: f64,
}

impl GeneratorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use box_net::config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(0.01, 10_000.0).unwrap();
    /// assert_eq!(cfg.edge_key_scale, 10_000.0);
    /// ```
    pub fn new(overlap_epsilon: f64, edge_key_scale: f64) -> NetResult<Self> {
        let global = GlobalConfig::new(overlap_epsilon, edge_key_scale)?;
        Ok(Self::from(global))
    }
}

impl From<GlobalConfig> for GeneratorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            overlap_epsilon: cfg.overlap_epsilon,
            edge_key_scale: cfg.edge_key_scale,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            overlap_epsilon: OVERLAP_EPSILON,
            edge_key_scale: EDGE_KEY_SCALE,
        }
    }
}
