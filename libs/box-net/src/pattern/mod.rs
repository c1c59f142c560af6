//! # Patterns
//!
//! A pattern is the topology of a net: a tree of attachment links rooted at
//! face 0, each saying "face `to` sits on the `dir` side of face `from` in
//! the flattened layout". Patterns carry no lengths; the same pattern is
//! laid out for every box the generator is asked about.
//!
//! Links are processed in the order given. Every link's `from` face must be
//! the root or the `to` of an earlier link. [`Pattern::validate`] checks
//! this up front; the propagator also fails fast when it is violated.

mod catalog;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, NetResult};

pub use catalog::{PatternCatalog, STANDARD_PATTERNS};

/// Identifier of a face inside one pattern. The root is always `0`.
pub type FaceId = usize;

/// Id of the root face of every pattern.
pub const ROOT_FACE: FaceId = 0;

/// Side of a face in the flattened 2D layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards `-y`.
    Up,
    /// Towards `+x`.
    Right,
    /// Towards `+y`.
    Down,
    /// Towards `-x`.
    Left,
}

impl Direction {
    /// All four directions in clockwise order starting at the top edge.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The direction pointing the other way.
    ///
    /// # Examples
    /// ```
    /// use box_net::Direction;
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase name, as used in serialized patterns.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attachment in a pattern tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Already placed parent face.
    pub from: FaceId,
    /// Face being attached.
    pub to: FaceId,
    /// Side of `from` that `to` is attached to.
    pub dir: Direction,
}

impl Link {
    /// Creates a link.
    pub const fn new(from: FaceId, to: FaceId, dir: Direction) -> Self {
        Self { from, to, dir }
    }
}

/// A topological net description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Catalog identifier.
    pub id: u32,
    /// Attachment links in processing order.
    #[serde(alias = "structure")]
    pub links: Vec<Link>,
}

impl Pattern {
    /// Creates a pattern from its links.
    pub fn new(id: u32, links: impl Into<Vec<Link>>) -> Self {
        Self {
            id,
            links: links.into(),
        }
    }

    /// Number of faces the pattern places, root included.
    pub fn face_count(&self) -> usize {
        self.links.len() + 1
    }

    /// Checks the ordering and tree preconditions.
    ///
    /// # Errors
    /// - [`NetError::UnplacedParent`] when a link's `from` has not been
    ///   placed by an earlier link.
    /// - [`NetError::DuplicateFace`] when a face is attached twice (or the
    ///   root is attached).
    ///
    /// # Examples
    /// ```
    /// use box_net::{Direction, Link, Pattern};
    /// let bad = Pattern::new(99, [Link::new(1, 2, Direction::Right)]);
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> NetResult<()> {
        let mut placed = HashSet::from([ROOT_FACE]);
        for (link_index, link) in self.links.iter().enumerate() {
            if !placed.contains(&link.from) {
                return Err(NetError::UnplacedParent {
                    link_index,
                    from: link.from,
                    to: link.to,
                });
            }
            if !placed.insert(link.to) {
                return Err(NetError::DuplicateFace { face: link.to });
            }
        }
        Ok(())
    }
}
