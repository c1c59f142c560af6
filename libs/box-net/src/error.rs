//! # Error Types
//!
//! Error types for net generation. Every failure names the faces or values
//! involved so that a dropped (pattern, permutation) combination can be
//! explained in logs.
//!
//! ## Error Policy
//!
//! - `generate_net` reports every failure explicitly
//! - The batch driver treats failures as "no net for this combination"
//! - Nothing in the generator panics on malformed input

use config::constants::ConfigError;
use thiserror::Error;

use crate::pattern::FaceId;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating or post-processing a net.
///
/// ## Example
///
/// ```rust
/// use box_net::{generate_net, NetError, PatternCatalog};
///
/// let catalog = PatternCatalog::standard();
/// let pattern = catalog.get(1).unwrap();
/// match generate_net(pattern, [2.0, 3.0, 4.0], 1) {
///     Ok(net) => assert_eq!(net.faces.len(), 6),
///     Err(NetError::Overlap { face, other }) => eprintln!("{face} hits {other}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    /// A link references a parent face that has not been placed yet.
    #[error("link {link_index} attaches face {to} to face {from}, which is not placed yet")]
    UnplacedParent {
        /// Position of the offending link in the pattern.
        link_index: usize,
        /// Parent face id named by the link.
        from: FaceId,
        /// Child face id named by the link.
        to: FaceId,
    },

    /// A link places a face that already exists in the layout.
    #[error("face {face} is placed more than once")]
    DuplicateFace {
        /// The repeated face id.
        face: FaceId,
    },

    /// Two faces of the flattened layout overlap.
    #[error("face {face} overlaps face {other}")]
    Overlap {
        /// The face being placed.
        face: FaceId,
        /// The already placed face it collides with.
        other: FaceId,
    },

    /// A face names a parent but no attachment direction.
    #[error("face {face} has a parent but no attachment direction")]
    MissingHinge {
        /// Face id whose hinge could not be resolved.
        face: FaceId,
    },

    /// A face of a finished net whose parent does not precede it.
    #[error("face {face} names parent {parent}, which does not come before it")]
    OrphanFace {
        /// Face id whose parent could not be found.
        face: FaceId,
        /// Parent id the face names.
        parent: FaceId,
    },

    /// A side id outside `0..6`.
    #[error("side id {id} is not in 0..6")]
    InvalidSide {
        /// The rejected raw id.
        id: u8,
    },

    /// Box dimensions that are not finite and positive.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A pattern failing structural validation.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Generator configuration rejected by the shared config crate.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for net operations.
pub type NetResult<T> = Result<T, NetError>;

// =============================================================================
// TESTS
// =============================================================================
