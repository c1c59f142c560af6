//! # Coordinate Propagation
//!
//! Walks a pattern's links in order, carrying a [`FaceFrame`] from each
//! parent to its child and deriving the child's 2D rectangle from the
//! parent's. Every new rectangle is checked against the faces already
//! placed; the first collision aborts the layout.
//!
//! The frames live in a scratch map keyed by face id that is dropped once
//! the net has been assembled.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::core::frame::FaceFrame;
use crate::error::{NetError, NetResult};
use crate::net::Rect;
use crate::overlap::find_overlap;
use crate::pattern::{Direction, FaceId, Link, ROOT_FACE};

/// A face placed by the propagator, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedFace {
    /// Pattern face id.
    pub id: FaceId,
    /// Parent face and the parent's side this face hangs from.
    pub parent: Option<(FaceId, Direction)>,
    /// 2D rectangle in un-normalized net coordinates.
    pub rect: Rect,
    /// 3D frame of the face on the folded box.
    pub frame: FaceFrame,
}

/// Result of propagating one pattern for one start permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Unfolding {
    /// Faces in placement order, root first.
    pub faces: Vec<PlacedFace>,
    fold_edges: HashSet<(FaceId, Direction)>,
}

impl Unfolding {
    /// True when `(face, dir)` is a hinge between a face and its parent or
    /// one of its children.
    pub fn is_fold_edge(&self, face: FaceId, dir: Direction) -> bool {
        self.fold_edges.contains(&(face, dir))
    }

    /// Number of hinge edge slots (two per link).
    pub fn fold_edge_count(&self) -> usize {
        self.fold_edges.len()
    }
}

/// Lays out `links` for the start permutation `[L, W, H]` of the root face.
///
/// # Errors
/// - [`NetError::UnplacedParent`] when a link's `from` face is not placed.
/// - [`NetError::DuplicateFace`] when a link re-places a face.
/// - [`NetError::Overlap`] when a new face collides with a placed one.
///
/// # Examples
/// ```
/// use box_net::propagate::propagate;
/// use box_net::{Direction, Link};
///
/// let links = [Link::new(0, 1, Direction::Right)];
/// let unfolding = propagate(&links, [2.0, 3.0, 4.0], 0.05).unwrap();
/// let side = &unfolding.faces[1];
/// assert_eq!((side.rect.x, side.rect.width, side.rect.height), (2.0, 4.0, 3.0));
/// ```
pub fn propagate(links: &[Link], start: [f64; 3], overlap_epsilon: f64) -> NetResult<Unfolding> {
    let root_frame = FaceFrame::root(start);
    let root = PlacedFace {
        id: ROOT_FACE,
        parent: None,
        rect: Rect::new(0.0, 0.0, root_frame.w, root_frame.h),
        frame: root_frame,
    };

    let mut faces = Vec::with_capacity(links.len() + 1);
    let mut index_of: HashMap<FaceId, usize> = HashMap::with_capacity(links.len() + 1);
    let mut fold_edges = HashSet::with_capacity(links.len() * 2);
    faces.push(root);
    index_of.insert(ROOT_FACE, 0);

    for (link_index, link) in links.iter().enumerate() {
        let parent = index_of
            .get(&link.from)
            .map(|&i| faces[i])
            .ok_or(NetError::UnplacedParent {
                link_index,
                from: link.from,
                to: link.to,
            })?;
        if index_of.contains_key(&link.to) {
            return Err(NetError::DuplicateFace { face: link.to });
        }

        let frame = parent.frame.unfold(link.dir);
        let rect = child_rect(&parent.rect, &frame, link.dir);

        let placed = faces.iter().map(|f: &PlacedFace| (f.id, &f.rect));
        if let Some(other) = find_overlap(placed, &rect, overlap_epsilon) {
            return Err(NetError::Overlap {
                face: link.to,
                other,
            });
        }

        trace!(
            face = link.to,
            parent = link.from,
            dir = %link.dir,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "placed face"
        );

        fold_edges.insert((link.from, link.dir));
        fold_edges.insert((link.to, link.dir.opposite()));
        index_of.insert(link.to, faces.len());
        faces.push(PlacedFace {
            id: link.to,
            parent: Some((link.from, link.dir)),
            rect,
            frame,
        });
    }

    Ok(Unfolding { faces, fold_edges })
}

/// Rectangle of a child face next to `parent` on `dir`, sized by the
/// child's own frame.
fn child_rect(parent: &Rect, frame: &FaceFrame, dir: Direction) -> Rect {
    let (x, y) = match dir {
        Direction::Right => (parent.right(), parent.y),
        Direction::Left => (parent.x - frame.w, parent.y),
        Direction::Down => (parent.x, parent.bottom()),
        Direction::Up => (parent.x, parent.y - frame.h),
    };
    Rect::new(x, y, frame.w, frame.h)
}
