//! # Config Crate
//!
//! Centralized configuration constants for the box net pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! generator, the alignment helpers and the WASM layer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{OVERLAP_EPSILON, MAX_DIMENSION, MIN_DIMENSION};
//!
//! // Faces that only share a boundary are not considered overlapping.
//! let a_right = 2.0_f64;
//! let b_left = 2.0_f64;
//! assert!(a_right - OVERLAP_EPSILON < b_left);
//!
//! // The UI clamps dimensions into this range.
//! let requested = 14_u32;
//! assert_eq!(requested.clamp(MIN_DIMENSION, MAX_DIMENSION), 10);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
