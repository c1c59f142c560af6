//! # Fold Pose
//!
//! Rigid transforms that fold a flat net back into its box. Each face maps
//! its local coordinates `(u, v, 0)` (u along the width, v along the
//! height, in net units) into 3D. The root stays in the `z = 0` plane at
//! its net position; every other face is its parent's transform composed
//! with a rotation about the shared hinge, so the box closes towards `-Z`.
//!
//! At angle `0` the poses reproduce the flat layout, and at a quarter turn
//! the two edges of every [`EdgeMatch`](crate::net::EdgeMatch) coincide.

use std::collections::HashMap;

use config::constants::{FOLD_DEGREES_PER_PROGRESS, FULL_FOLD_PROGRESS};
use glam::{DAffine3, DVec3};

use crate::error::{NetError, NetResult};
use crate::net::NetData;
use crate::pattern::{Direction, FaceId};

/// Fold angle in degrees for a slider position in `[0, 100]`.
///
/// # Examples
/// ```
/// use box_net::fold::fold_angle_degrees;
/// assert_eq!(fold_angle_degrees(50.0), 45.0);
/// assert_eq!(fold_angle_degrees(140.0), 90.0);
/// assert_eq!(fold_angle_degrees(-3.0), 0.0);
/// ```
pub fn fold_angle_degrees(progress: f64) -> f64 {
    progress.clamp(0.0, FULL_FOLD_PROGRESS) * FOLD_DEGREES_PER_PROGRESS
}

/// Placement of one face in the folded box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePose {
    /// Face id.
    pub face_id: FaceId,
    /// Local `(u, v, 0)` to world.
    pub transform: DAffine3,
    /// Extent along local `u`.
    pub width: f64,
    /// Extent along local `v`.
    pub height: f64,
}

impl FacePose {
    /// World-space corners: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [DVec3; 4] {
        [
            DVec3::ZERO,
            DVec3::new(self.width, 0.0, 0.0),
            DVec3::new(self.width, self.height, 0.0),
            DVec3::new(0.0, self.height, 0.0),
        ]
        .map(|p| self.transform.transform_point3(p))
    }

    /// World-space centre.
    pub fn center(&self) -> DVec3 {
        self.transform
            .transform_point3(DVec3::new(self.width / 2.0, self.height / 2.0, 0.0))
    }

    /// The edge on `dir` as a directed segment, walking the face clockwise
    /// in the flat layout.
    pub fn edge(&self, dir: Direction) -> (DVec3, DVec3) {
        let [c0, c1, c2, c3] = self.corners();
        match dir {
            Direction::Up => (c0, c1),
            Direction::Right => (c1, c2),
            Direction::Down => (c2, c3),
            Direction::Left => (c3, c0),
        }
    }
}

/// Hinge transform of a child attached on `dir`, in its parent's frame.
fn hinge(dir: Direction, parent: (f64, f64), child: (f64, f64), angle: f64) -> DAffine3 {
    let (parent_w, parent_h) = parent;
    let (child_w, child_h) = child;
    match dir {
        Direction::Right => {
            DAffine3::from_translation(DVec3::new(parent_w, 0.0, 0.0))
                * DAffine3::from_rotation_y(angle)
        }
        Direction::Left => {
            DAffine3::from_rotation_y(-angle)
                * DAffine3::from_translation(DVec3::new(-child_w, 0.0, 0.0))
        }
        Direction::Down => {
            DAffine3::from_translation(DVec3::new(0.0, parent_h, 0.0))
                * DAffine3::from_rotation_x(-angle)
        }
        Direction::Up => {
            DAffine3::from_rotation_x(angle)
                * DAffine3::from_translation(DVec3::new(0.0, -child_h, 0.0))
        }
    }
}

/// Poses of every face of `net` folded by `angle` radians, in face order.
///
/// # Errors
/// - [`NetError::OrphanFace`] when a face's parent is missing or comes
///   after it.
/// - [`NetError::MissingHinge`] when a face has a parent but no attachment
///   direction.
///
/// # Examples
/// ```
/// use box_net::{fold::fold_poses, generate_net, PatternCatalog};
/// let catalog = PatternCatalog::standard();
/// let net = generate_net(catalog.get(1).unwrap(), [1.0, 1.0, 1.0], 1).unwrap();
/// let flat = fold_poses(&net, 0.0).unwrap();
/// assert_eq!(flat[1].corners()[0].x, net.faces[1].x);
/// ```
pub fn fold_poses(net: &NetData, angle: f64) -> NetResult<Vec<FacePose>> {
    let mut placed: HashMap<FaceId, usize> = HashMap::with_capacity(net.faces.len());
    let mut poses: Vec<FacePose> = Vec::with_capacity(net.faces.len());

    for face in &net.faces {
        let transform = match face.parent_id {
            None => DAffine3::from_translation(DVec3::new(face.x, face.y, 0.0)),
            Some(parent_id) => {
                let parent = placed.get(&parent_id).map(|&i| poses[i]).ok_or(
                    NetError::OrphanFace {
                        face: face.id,
                        parent: parent_id,
                    },
                )?;
                let dir = face
                    .attach_dir
                    .ok_or(NetError::MissingHinge { face: face.id })?;
                parent.transform
                    * hinge(
                        dir,
                        (parent.width, parent.height),
                        (face.width, face.height),
                        angle,
                    )
            }
        };

        placed.insert(face.id, poses.len());
        poses.push(FacePose {
            face_id: face.id,
            transform,
            width: face.width,
            height: face.height,
        });
    }
    Ok(poses)
}
