//! # Edge Matching
//!
//! Finds the pairs of open edges that become a single box edge once the
//! net is folded.
//!
//! Every boundary edge of every face is turned into an undirected 3D
//! segment and keyed by its fixed-point endpoints, smallest endpoint first.
//! A key shared by exactly two edge slots, neither of which is a hinge,
//! is a match. Keys are visited in the order they were first seen so that
//! match ids are stable across runs.

use std::collections::HashMap;

use tracing::trace;

use crate::core::vec3::{to_fixed_point, FixedPoint, Vec3};
use crate::net::{EdgeMatch, EdgeMatchIds};
use crate::pattern::{Direction, FaceId};
use crate::propagate::Unfolding;

/// Canonical key of an undirected 3D segment.
pub type EdgeKey = (FixedPoint, FixedPoint);

/// Match ids found for one unfolding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeMatching {
    /// Matches ordered by id.
    pub matches: Vec<EdgeMatch>,
    ids: HashMap<FaceId, EdgeMatchIds>,
}

impl EdgeMatching {
    /// Match ids stamped on `face`. Faces without matches get the empty set.
    pub fn ids_for(&self, face: FaceId) -> EdgeMatchIds {
        self.ids.get(&face).copied().unwrap_or_default()
    }
}

/// Builds the canonical key of a segment.
///
/// # Examples
/// ```
/// use box_net::edge_match::edge_key;
/// use box_net::Vec3;
/// let a = Vec3::new(0.0, 1.0, 0.0);
/// let b = Vec3::new(2.0, 1.0, -0.0000001);
/// assert_eq!(edge_key(a, b, 1000.0), edge_key(b, a, 1000.0));
/// ```
pub fn edge_key(a: Vec3, b: Vec3, scale: f64) -> EdgeKey {
    let (p, q) = (to_fixed_point(a, scale), to_fixed_point(b, scale));
    if p <= q {
        (p, q)
    } else {
        (q, p)
    }
}

/// Pairs the open edges of `unfolding`.
pub fn match_edges(unfolding: &Unfolding, edge_key_scale: f64) -> EdgeMatching {
    let mut order: Vec<EdgeKey> = Vec::new();
    let mut slots: HashMap<EdgeKey, Vec<(FaceId, Direction)>> = HashMap::new();

    for face in &unfolding.faces {
        for dir in Direction::ALL {
            let (a, b) = face.frame.edge(dir);
            let key = edge_key(a, b, edge_key_scale);
            slots
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Vec::with_capacity(2)
                })
                .push((face.id, dir));
        }
    }

    let mut matching = EdgeMatching::default();
    for key in &order {
        let Some(entries) = slots.get(key) else {
            continue;
        };
        let [(face1, edge1), (face2, edge2)] = entries.as_slice() else {
            continue;
        };
        if unfolding.is_fold_edge(*face1, *edge1) || unfolding.is_fold_edge(*face2, *edge2) {
            continue;
        }

        let match_id = matching.matches.len() as u32;
        trace!(match_id, face1, %edge1, face2, %edge2, "matched open edges");
        matching.matches.push(EdgeMatch {
            face1_id: *face1,
            edge1: *edge1,
            face2_id: *face2,
            edge2: *edge2,
            match_id,
        });
        matching.ids.entry(*face1).or_default().set(*edge1, match_id);
        matching.ids.entry(*face2).or_default().set(*edge2, match_id);
    }
    matching
}

#[cfg(test)]
mod tests;
