//! # Comparison Overlay
//!
//! Lines two nets up on a shared grid and splits their outlines into the
//! segments both nets draw and the segments only one of them draws.
//!
//! Each net is placed with its root face centre at the origin, shifted by
//! an offset in net units (see
//! [`alignment_offset_units`](crate::alignment::alignment_offset_units)).
//! Endpoints snap to half units so nets with odd and even roots still
//! meet on the same keys.

use std::collections::HashMap;

use config::constants::COMPARE_QUANTUM;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::round_half_up;
use crate::net::NetData;
use crate::pattern::Direction;

/// How a segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Cut line.
    Solid,
    /// Hinge between two faces.
    Fold,
}

/// A quantized outline segment, ordered left to right (top to bottom when
/// vertical).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
    /// Line style.
    pub kind: LineKind,
}

type SegmentKey = ((i64, i64), (i64, i64));

impl EdgeSegment {
    fn new(a: DVec2, b: DVec2, kind: LineKind) -> Self {
        let (a, b) = (quantize(a), quantize(b));
        let (a, b) = if a.x < b.x || (a.x == b.x && a.y <= b.y) {
            (a, b)
        } else {
            (b, a)
        };
        Self {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            kind,
        }
    }

    fn key(&self) -> SegmentKey {
        let steps = |v: f64| (v / COMPARE_QUANTUM).round() as i64;
        (
            (steps(self.x1), steps(self.y1)),
            (steps(self.x2), steps(self.y2)),
        )
    }
}

fn quantize(p: DVec2) -> DVec2 {
    let snap = |v: f64| round_half_up(v / COMPARE_QUANTUM) * COMPARE_QUANTUM;
    DVec2::new(snap(p.x), snap(p.y))
}

/// Result of [`compare_nets`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetComparison {
    /// Segments both nets draw. Solid when either net cuts there.
    pub overlap: Vec<EdgeSegment>,
    /// Segments only the left net draws.
    pub left_only: Vec<EdgeSegment>,
    /// Segments only the right net draws.
    pub right_only: Vec<EdgeSegment>,
}

/// Outline segments of `net`, relative to its root face centre and
/// shifted by `offset`, in first-seen order.
///
/// A segment shared by two faces of the same net appears once; it is a
/// fold when either face hinges there.
///
/// # Examples
/// ```
/// use box_net::compare::{net_edges, LineKind};
/// use box_net::{generate_net, PatternCatalog};
/// use glam::DVec2;
///
/// let catalog = PatternCatalog::standard();
/// let net = generate_net(catalog.get(1).unwrap(), [1.0, 1.0, 1.0], 1).unwrap();
/// let edges = net_edges(&net, DVec2::ZERO);
/// assert_eq!(edges.iter().filter(|e| e.kind == LineKind::Fold).count(), 5);
/// ```
pub fn net_edges(net: &NetData, offset: DVec2) -> Vec<EdgeSegment> {
    let Some(root) = net.root_face() else {
        return Vec::new();
    };
    let origin = root.center() - offset;

    let mut segments: Vec<EdgeSegment> = Vec::new();
    let mut index_of: HashMap<SegmentKey, usize> = HashMap::new();
    for face in &net.faces {
        let (left, top) = (face.x, face.y);
        let (right, bottom) = (face.x + face.width, face.y + face.height);
        for dir in Direction::ALL {
            let (a, b) = match dir {
                Direction::Up => ((left, top), (right, top)),
                Direction::Right => ((right, top), (right, bottom)),
                Direction::Down => ((right, bottom), (left, bottom)),
                Direction::Left => ((left, bottom), (left, top)),
            };
            let kind = if net.is_fold_edge(face.id, dir) {
                LineKind::Fold
            } else {
                LineKind::Solid
            };
            let segment = EdgeSegment::new(
                DVec2::from(a) - origin,
                DVec2::from(b) - origin,
                kind,
            );
            match index_of.get(&segment.key()) {
                Some(&i) => {
                    if kind == LineKind::Fold {
                        segments[i].kind = LineKind::Fold;
                    }
                }
                None => {
                    index_of.insert(segment.key(), segments.len());
                    segments.push(segment);
                }
            }
        }
    }
    segments
}

/// Compares the outlines of two nets placed at the given offsets.
pub fn compare_nets(
    left: &NetData,
    right: &NetData,
    left_offset: DVec2,
    right_offset: DVec2,
) -> NetComparison {
    let left_edges = net_edges(left, left_offset);
    let right_edges = net_edges(right, right_offset);
    let right_index: HashMap<SegmentKey, usize> = right_edges
        .iter()
        .enumerate()
        .map(|(i, s)| (s.key(), i))
        .collect();

    let mut comparison = NetComparison::default();
    let mut shared = vec![false; right_edges.len()];
    for segment in &left_edges {
        match right_index.get(&segment.key()) {
            Some(&i) => {
                shared[i] = true;
                let kind = if segment.kind == LineKind::Solid
                    || right_edges[i].kind == LineKind::Solid
                {
                    LineKind::Solid
                } else {
                    LineKind::Fold
                };
                comparison.overlap.push(EdgeSegment { kind, ..*segment });
            }
            None => comparison.left_only.push(*segment),
        }
    }
    comparison.right_only = right_edges
        .into_iter()
        .zip(shared)
        .filter_map(|(segment, seen)| (!seen).then_some(segment))
        .collect();
    comparison
}

#[cfg(test)]
mod tests;
