//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.edge_key_scale >= 1.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.overlap_epsilon > 0.0);
    assert!(cfg.edge_key_scale >= 1.0);
    assert_eq!(GlobalConfig::new(cfg.overlap_epsilon, cfg.edge_key_scale), Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 1000.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 1000.0).unwrap_err(),
        ConfigError::InvalidOverlapEpsilon(0.0)
    );
    assert_eq!(
        GlobalConfig::new(0.05, 0.5).unwrap_err(),
        ConfigError::InvalidEdgeKeyScale(0.5)
    );
    assert!(GlobalConfig::new(f64::NAN, 1000.0).is_err());
    assert!(GlobalConfig::new(0.05, f64::INFINITY).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidEdgeKeyScale(0.5);
    assert!(err.to_string().contains("edge_key_scale"));
}
