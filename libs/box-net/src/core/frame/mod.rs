//! Local coordinate frame of one face while the box is being unfolded.
//!
//! A frame pins the face's 2D `(0, 0)` corner to a point of the folded box
//! and records which 3D directions the face's 2D right and down axes run
//! along. `w`, `h` and `d` are the box extents seen from that face: along
//! `right`, along `down`, and through the box along the inward direction
//! (`-normal`).
//!
//! Unfolding across an edge is a quarter turn of the frame about that edge.
//! The extent that was the depth becomes the neighbour's in-plane extent and
//! the old in-plane extent becomes its depth.

use crate::core::vec3::Vec3;
use crate::pattern::Direction;

/// Per-face coordinate frame. Only exists during generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    /// 3D position of the face's 2D `(0, 0)` corner.
    pub origin: Vec3,
    /// 3D direction of the face's 2D `+x` axis.
    pub right: Vec3,
    /// 3D direction of the face's 2D `+y` axis.
    pub down: Vec3,
    /// Outward facing normal.
    pub normal: Vec3,
    /// Extent along `right`.
    pub w: f64,
    /// Extent along `down`.
    pub h: f64,
    /// Extent through the box.
    pub d: f64,
}

impl FaceFrame {
    /// Frame of the root face for a start permutation `[L, W, H]`.
    ///
    /// The root sits at the origin looking down `-Z` with its 2D axes along
    /// `+X` and `+Y`.
    ///
    /// # Examples
    /// ```
    /// use box_net::core::frame::FaceFrame;
    /// use box_net::Vec3;
    /// let root = FaceFrame::root([2.0, 3.0, 4.0]);
    /// assert_eq!(root.normal, Vec3::NEG_Z);
    /// assert_eq!((root.w, root.h, root.d), (2.0, 3.0, 4.0));
    /// ```
    pub fn root([l, w, h]: [f64; 3]) -> Self {
        Self {
            origin: Vec3::ZERO,
            right: Vec3::X,
            down: Vec3::Y,
            normal: Vec3::NEG_Z,
            w: l,
            h: w,
            d: h,
        }
    }

    /// Frame of the neighbour attached on `dir`, folded a quarter turn about
    /// the shared edge.
    ///
    /// # Examples
    /// ```
    /// use box_net::core::frame::FaceFrame;
    /// use box_net::{Direction, Vec3};
    /// let root = FaceFrame::root([2.0, 3.0, 4.0]);
    /// let side = root.unfold(Direction::Right);
    /// assert_eq!(side.origin, Vec3::new(2.0, 0.0, 0.0));
    /// assert_eq!((side.w, side.h, side.d), (4.0, 3.0, 2.0));
    /// ```
    pub fn unfold(&self, dir: Direction) -> Self {
        match dir {
            Direction::Right => Self {
                origin: self.origin + self.right * self.w,
                right: self.normal,
                down: self.down,
                normal: -self.right,
                w: self.d,
                h: self.h,
                d: self.w,
            },
            Direction::Left => {
                let right = -self.normal;
                Self {
                    origin: self.origin - right * self.d,
                    right,
                    down: self.down,
                    normal: self.right,
                    w: self.d,
                    h: self.h,
                    d: self.w,
                }
            }
            Direction::Down => Self {
                origin: self.origin + self.down * self.h,
                right: self.right,
                down: self.normal,
                normal: -self.down,
                w: self.w,
                h: self.d,
                d: self.h,
            },
            Direction::Up => {
                let down = -self.normal;
                Self {
                    origin: self.origin - down * self.d,
                    right: self.right,
                    down,
                    normal: self.down,
                    w: self.w,
                    h: self.d,
                    d: self.h,
                }
            }
        }
    }

    /// The four corners in 3D: top-left, top-right, bottom-right, bottom-left
    /// of the face's 2D layout.
    pub fn corners(&self) -> [Vec3; 4] {
        let c0 = self.origin;
        let c1 = c0 + self.right * self.w;
        let c2 = c1 + self.down * self.h;
        let c3 = c0 + self.down * self.h;
        [c0, c1, c2, c3]
    }

    /// The boundary edge on `dir` as a directed 3D segment, walking the face
    /// clockwise in 2D.
    pub fn edge(&self, dir: Direction) -> (Vec3, Vec3) {
        let [c0, c1, c2, c3] = self.corners();
        match dir {
            Direction::Up => (c0, c1),
            Direction::Right => (c1, c2),
            Direction::Down => (c2, c3),
            Direction::Left => (c3, c0),
        }
    }

    /// True when `right`, `down` and `normal` are mutually orthogonal unit
    /// vectors.
    pub fn is_orthonormal(&self) -> bool {
        use crate::core::vec3::is_axis_unit;

        is_axis_unit(self.right)
            && is_axis_unit(self.down)
            && is_axis_unit(self.normal)
            && self.right.dot(self.down).abs() < 1e-9
            && self.right.dot(self.normal).abs() < 1e-9
            && self.down.dot(self.normal).abs() < 1e-9
    }
}
