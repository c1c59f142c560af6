//! Overlap validation for the flattened layout.
//!
//! Rectangles are shrunk by an inward epsilon before the intersection test,
//! so faces that only share a boundary never count as overlapping.

use crate::net::Rect;
use crate::pattern::FaceId;

/// True when the interiors of `a` and `b` intersect by more than
/// `epsilon` on both axes.
///
/// # Examples
/// ```
/// use box_net::overlap::overlaps;
/// use box_net::Rect;
/// let a = Rect::new(0.0, 0.0, 2.0, 2.0);
/// assert!(!overlaps(&a, &Rect::new(2.0, 0.0, 1.0, 2.0), 0.05));
/// assert!(overlaps(&a, &Rect::new(1.0, 1.0, 2.0, 2.0), 0.05));
/// ```
pub fn overlaps(a: &Rect, b: &Rect, epsilon: f64) -> bool {
    a.x < b.right() - epsilon
        && a.right() > b.x + epsilon
        && a.y < b.bottom() - epsilon
        && a.bottom() > b.y + epsilon
}

/// First already placed face whose rectangle overlaps `candidate`.
pub fn find_overlap<'a, I>(placed: I, candidate: &Rect, epsilon: f64) -> Option<FaceId>
where
    I: IntoIterator<Item = (FaceId, &'a Rect)>,
{
    placed
        .into_iter()
        .find(|(_, rect)| overlaps(rect, candidate, epsilon))
        .map(|(id, _)| id)
}

/// Every overlapping pair of `rects`, as index pairs `(i, j)` with `i < j`.
///
/// Used to audit a finished layout; generation itself stops at the first
/// collision.
pub fn overlapping_pairs(rects: &[Rect], epsilon: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            if overlaps(a, b, epsilon) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests;
