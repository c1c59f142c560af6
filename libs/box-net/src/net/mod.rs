//! # Net Data
//!
//! Output types of one generation call. Everything here is plain data that
//! the renderer reads; a net is regenerated, never edited.
//!
//! Field names serialize in camelCase (`parentId`, `attachDir`, `sideId`,
//! `edgeMatchIds`, `totalWidth`, ...).

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::NetError;
use crate::pattern::{Direction, FaceId, ROOT_FACE};

// =============================================================================
// RECTANGLES
// =============================================================================

/// Axis-aligned rectangle in net units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Extent along `+x`.
    pub width: f64,
    /// Extent along `+y`.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// =============================================================================
// SIDES
// =============================================================================

/// One of the six sides of the folded box.
///
/// `0`/`1` are `+Z`/`-Z`, `2`/`3` are `+Y`/`-Y`, `4`/`5` are `+X`/`-X`.
/// Opposite sides differ only in the low bit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Side(u8);

impl TryFrom<u8> for Side {
    type Error = NetError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Side::new(id).ok_or(NetError::InvalidSide { id })
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> u8 {
        side.0
    }
}

impl Side {
    /// All six sides.
    pub const ALL: [Side; 6] = [Side(0), Side(1), Side(2), Side(3), Side(4), Side(5)];

    /// Wraps a raw side id. Returns `None` outside `0..6`.
    pub fn new(id: u8) -> Option<Self> {
        (id < 6).then_some(Self(id))
    }

    /// Side whose outward normal is `normal`. The dominant axis decides,
    /// checked in Z, Y, X order.
    ///
    /// # Examples
    /// ```
    /// use box_net::{Side, Vec3};
    /// assert_eq!(Side::from_normal(Vec3::NEG_Z).id(), 1);
    /// assert_eq!(Side::from_normal(Vec3::X).id(), 4);
    /// ```
    pub fn from_normal(normal: Vec3) -> Self {
        if normal.z.abs() > 0.1 {
            Self(if normal.z > 0.0 { 0 } else { 1 })
        } else if normal.y.abs() > 0.1 {
            Self(if normal.y > 0.0 { 2 } else { 3 })
        } else if normal.x.abs() > 0.1 {
            Self(if normal.x > 0.0 { 4 } else { 5 })
        } else {
            Self(0)
        }
    }

    /// Raw id in `0..6`.
    pub fn id(self) -> u8 {
        self.0
    }

    /// Index of the pair of parallel sides this side belongs to (`0..3`).
    pub fn axis_pair(self) -> u8 {
        self.0 / 2
    }

    /// The parallel side across the box.
    pub fn opposite(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Pip count when the box is drawn as a die; opposite sides sum to 7.
    ///
    /// # Examples
    /// ```
    /// use box_net::Side;
    /// for side in Side::ALL {
    ///     assert_eq!(side.dice_value() + side.opposite().dice_value(), 7);
    /// }
    /// ```
    pub fn dice_value(self) -> u8 {
        const PIPS: [u8; 6] = [1, 6, 2, 5, 3, 4];
        PIPS[usize::from(self.0)]
    }
}

// =============================================================================
// FACES AND EDGE MATCHES
// =============================================================================

/// Match ids stamped on a face's edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMatchIds {
    /// Match on the top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<u32>,
    /// Match on the right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    /// Match on the bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<u32>,
    /// Match on the left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
}

impl EdgeMatchIds {
    /// Match id on `dir`, if any.
    pub fn get(&self, dir: Direction) -> Option<u32> {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Stamps `match_id` on `dir`.
    pub fn set(&mut self, dir: Direction, match_id: u32) {
        let slot = match dir {
            Direction::Up => &mut self.up,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
        };
        *slot = Some(match_id);
    }

    /// Number of stamped edges.
    pub fn count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|dir| self.get(**dir).is_some())
            .count()
    }
}

/// One face of a generated net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    /// Pattern face id.
    pub id: FaceId,
    /// Left edge after normalization.
    pub x: f64,
    /// Top edge after normalization.
    pub y: f64,
    /// Extent along `+x`.
    pub width: f64,
    /// Extent along `+y`.
    pub height: f64,
    /// Parent face, `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FaceId>,
    /// Side of the parent this face hangs from, `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_dir: Option<Direction>,
    /// Box side this face becomes when folded.
    pub side_id: Side,
    /// Open-edge match ids.
    #[serde(default)]
    pub edge_match_ids: EdgeMatchIds,
}

impl Face {
    /// The face's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True for the pattern root.
    pub fn is_base(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Centre of the face in net units.
    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The edge of this face that touches its parent.
    pub fn parent_edge(&self) -> Option<Direction> {
        self.attach_dir.map(Direction::opposite)
    }
}

/// Two open edges that become one box edge when folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMatch {
    /// First face.
    pub face1_id: FaceId,
    /// Edge of the first face.
    pub edge1: Direction,
    /// Second face.
    pub face2_id: FaceId,
    /// Edge of the second face.
    pub edge2: Direction,
    /// Dense id, starting at 0 within one net.
    pub match_id: u32,
}

/// How an edge of the flattened net behaves when the box is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "matchId", rename_all = "lowercase")]
pub enum EdgeKind {
    /// Hinge between a face and its parent or child.
    Fold,
    /// Cut edge that meets the edge with the same match id.
    Matched(u32),
    /// Cut edge with no partner.
    Boundary,
}

// =============================================================================
// NET DATA
// =============================================================================

/// The complete result of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetData {
    /// `"{pattern_id}-{variant_index}"`.
    pub id: String,
    /// Pattern the net was generated from.
    pub pattern_id: u32,
    /// Start permutation index (1-based).
    pub variant_index: u32,
    /// Faces in placement order, root first.
    pub faces: Vec<Face>,
    /// Width of the layout's bounding box.
    pub total_width: f64,
    /// Height of the layout's bounding box.
    pub total_height: f64,
    /// Minimum x before normalization.
    pub min_x: f64,
    /// Minimum y before normalization.
    pub min_y: f64,
    /// Open-edge pairs, ordered by match id.
    pub edge_matches: Vec<EdgeMatch>,
}

impl NetData {
    /// Looks a face up by id.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.iter().find(|f| f.id == id)
    }

    /// The root face, falling back to the first face.
    pub fn root_face(&self) -> Option<&Face> {
        self.face(ROOT_FACE).or_else(|| self.faces.first())
    }

    /// Faces attached to `id`, in face order.
    pub fn children(&self, id: FaceId) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(move |f| f.parent_id == Some(id))
    }

    /// True when the edge on `dir` of face `id` is a hinge.
    ///
    /// # Examples
    /// ```
    /// use box_net::{generate_net, Direction, PatternCatalog};
    /// let catalog = PatternCatalog::standard();
    /// let net = generate_net(catalog.get(1).unwrap(), [1.0, 1.0, 1.0], 1).unwrap();
    /// assert!(net.is_fold_edge(0, Direction::Right));
    /// assert!(!net.is_fold_edge(0, Direction::Left));
    /// ```
    pub fn is_fold_edge(&self, id: FaceId, dir: Direction) -> bool {
        let touches_parent = self
            .face(id)
            .and_then(Face::parent_edge)
            .is_some_and(|edge| edge == dir);
        touches_parent || self.children(id).any(|c| c.attach_dir == Some(dir))
    }

    /// Classifies the edge on `dir` of face `id`. `None` for unknown faces.
    pub fn edge_kind(&self, id: FaceId, dir: Direction) -> Option<EdgeKind> {
        let face = self.face(id)?;
        if self.is_fold_edge(id, dir) {
            return Some(EdgeKind::Fold);
        }
        Some(match face.edge_match_ids.get(dir) {
            Some(match_id) => EdgeKind::Matched(match_id),
            None => EdgeKind::Boundary,
        })
    }
}
