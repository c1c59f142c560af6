//! The eleven nets of a cube, and the catalog type that hands them out.
//!
//! Shapes are drawn for a cube; `R` marks the root face.

use serde::Deserialize;

use super::{Direction, Link, Pattern};
use crate::error::{NetError, NetResult};

use Direction::{Down, Left, Right, Up};

const fn link(from: usize, to: usize, dir: Direction) -> Link {
    Link::new(from, to, dir)
}

/// Link tables of the eleven standard cube nets, keyed by pattern id.
///
/// Ids 1-6 share a straight strip of four faces, ids 7-10 a strip of three,
/// and id 11 is the staircase.
pub const STANDARD_PATTERNS: [(u32, [Link; 5]); 11] = [
    // X
    // RXXX
    // X
    (
        1,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(0, 4, Up),
            link(0, 5, Down),
        ],
    ),
    // X
    // RXXX
    //  X
    (
        2,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(1, 4, Down),
            link(0, 5, Up),
        ],
    ),
    // X
    // RXXX
    //   X
    (
        3,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(0, 4, Up),
            link(2, 5, Down),
        ],
    ),
    // X
    // RXXX
    //    X
    (
        4,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(0, 4, Up),
            link(3, 5, Down),
        ],
    ),
    //  X
    // RXXX
    //  X
    (
        5,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(1, 4, Up),
            link(1, 5, Down),
        ],
    ),
    //  X
    // RXXX
    //   X
    (
        6,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(2, 3, Right),
            link(1, 4, Up),
            link(2, 5, Down),
        ],
    ),
    // XX
    //  XRX
    //    X
    (
        7,
        [
            link(0, 1, Left),
            link(0, 2, Right),
            link(1, 3, Up),
            link(3, 4, Left),
            link(2, 5, Down),
        ],
    ),
    // XX
    //  RXX
    //  X
    (
        8,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(0, 3, Up),
            link(3, 4, Left),
            link(0, 5, Down),
        ],
    ),
    // XX
    //  RXX
    //   X
    (
        9,
        [
            link(0, 1, Right),
            link(1, 2, Right),
            link(0, 3, Up),
            link(3, 4, Left),
            link(1, 5, Down),
        ],
    ),
    // XXR
    //   XXX
    (
        10,
        [
            link(0, 1, Left),
            link(1, 2, Left),
            link(0, 3, Down),
            link(3, 4, Right),
            link(4, 5, Right),
        ],
    ),
    // RX
    //  XX
    //   XX
    (
        11,
        [
            link(0, 1, Right),
            link(1, 2, Down),
            link(2, 3, Right),
            link(3, 4, Down),
            link(4, 5, Right),
        ],
    ),
];

/// An immutable table of patterns, injected into the enumeration driver.
///
/// # Examples
/// ```
/// use box_net::PatternCatalog;
/// let catalog = PatternCatalog::standard();
/// assert_eq!(catalog.len(), 11);
/// assert_eq!(catalog.get(11).unwrap().links.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Pattern>),
    Wrapped { patterns: Vec<Pattern> },
}

impl PatternCatalog {
    /// The eleven standard cube nets.
    pub fn standard() -> Self {
        let patterns = STANDARD_PATTERNS
            .iter()
            .map(|(id, links)| Pattern::new(*id, links.to_vec()))
            .collect();
        Self { patterns }
    }

    /// Builds a catalog from arbitrary patterns, validating each one.
    ///
    /// # Errors
    /// Returns [`NetError::InvalidPattern`] for duplicate ids or a pattern
    /// that fails [`Pattern::validate`].
    pub fn from_patterns(patterns: Vec<Pattern>) -> NetResult<Self> {
        let mut ids = std::collections::HashSet::new();
        for pattern in &patterns {
            if !ids.insert(pattern.id) {
                return Err(NetError::InvalidPattern(format!(
                    "duplicate pattern id {}",
                    pattern.id
                )));
            }
            pattern
                .validate()
                .map_err(|e| NetError::InvalidPattern(format!("pattern {}: {e}", pattern.id)))?;
        }
        Ok(Self { patterns })
    }

    /// Loads a catalog from JSON.
    ///
    /// Accepts either a bare array of patterns or an object with a
    /// `patterns` array. Links may be listed under `links` or `structure`.
    ///
    /// # Examples
    /// ```
    /// use box_net::PatternCatalog;
    /// let json = r#"[{"id": 1, "structure": [{"from": 0, "to": 1, "dir": "right"}]}]"#;
    /// let catalog = PatternCatalog::from_json(json).unwrap();
    /// assert_eq!(catalog.get(1).unwrap().face_count(), 2);
    /// ```
    pub fn from_json(json: &str) -> NetResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| NetError::InvalidPattern(e.to_string()))?;
        let patterns = match document {
            CatalogDocument::List(patterns) => patterns,
            CatalogDocument::Wrapped { patterns } => patterns,
        };
        Self::from_patterns(patterns)
    }

    /// Looks a pattern up by id.
    pub fn get(&self, id: u32) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Iterates over the patterns in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the catalog holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
