//! # Box Net
//!
//! Browser-safe generator for the planar nets of cubes and cuboids.
//! Turns a topological pattern (a tree of face attachments) and a set of
//! box dimensions into a 2D layout, rejects layouts that self-intersect
//! and pairs up the open edges that meet when the net is folded.
//!
//! ## Architecture
//!
//! ```text
//! pattern + [L, W, H] → propagate (3D frames, 2D rects, overlap check)
//!                     → edge_match (fixed-point 3D edge keys)
//!                     → assemble (NetData)
//! ```
//!
//! `enumerate` drives the pipeline over the catalog; `alignment`, `fold`
//! and `compare` post-process finished nets for the renderer.
//!
//! ## Usage
//!
//! ```rust
//! use box_net::{generate_all_nets, Dimensions};
//!
//! let nets = generate_all_nets(Dimensions::new(2.0, 3.0, 4.0), false);
//! assert_eq!(nets.len(), 66);
//! assert!(nets.iter().all(|net| net.edge_matches.len() == 7));
//! ```

pub mod alignment;
pub mod assemble;
pub mod compare;
pub mod config;
pub mod core;
pub mod edge_match;
pub mod enumerate;
pub mod error;
pub mod fold;
pub mod net;
pub mod overlap;
pub mod pattern;
pub mod propagate;

pub use alignment::{net_alignment, NetAlignment};
pub use compare::{compare_nets, NetComparison};
pub use crate::core::vec3::Vec3;
pub use enumerate::{
    generate_all_nets, generate_all_nets_with, generate_net, generate_net_with, Dimensions,
};
pub use error::{NetError, NetResult};
pub use fold::{fold_poses, FacePose};
pub use net::{EdgeKind, EdgeMatch, EdgeMatchIds, Face, NetData, Rect, Side};
pub use pattern::{Direction, FaceId, Link, Pattern, PatternCatalog};
