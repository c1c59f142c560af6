//! # Net Assembly
//!
//! Packages an unfolding and its edge matches into the [`NetData`] handed
//! to the renderer: shifts the layout so its minimum corner sits at the
//! origin, measures the bounding box and names the box side of every face.

use crate::edge_match::EdgeMatching;
use crate::net::{Face, NetData, Side};
use crate::propagate::Unfolding;

/// Builds the final net for one (pattern, variant) combination.
///
/// An empty unfolding yields an empty net with zero extents.
pub fn assemble(
    pattern_id: u32,
    variant_index: u32,
    unfolding: &Unfolding,
    matching: EdgeMatching,
) -> NetData {
    let rects = || unfolding.faces.iter().map(|f| f.rect);
    let (min_x, min_y) = if unfolding.faces.is_empty() {
        (0.0, 0.0)
    } else {
        (
            rects().map(|r| r.x).fold(f64::INFINITY, f64::min),
            rects().map(|r| r.y).fold(f64::INFINITY, f64::min),
        )
    };

    let faces: Vec<Face> = unfolding
        .faces
        .iter()
        .map(|placed| Face {
            id: placed.id,
            x: placed.rect.x - min_x,
            y: placed.rect.y - min_y,
            width: placed.rect.width,
            height: placed.rect.height,
            parent_id: placed.parent.map(|(parent, _)| parent),
            attach_dir: placed.parent.map(|(_, dir)| dir),
            side_id: Side::from_normal(placed.frame.normal),
            edge_match_ids: matching.ids_for(placed.id),
        })
        .collect();

    let total_width = faces.iter().map(|f| f.x + f.width).fold(0.0, f64::max);
    let total_height = faces.iter().map(|f| f.y + f.height).fold(0.0, f64::max);

    NetData {
        id: format!("{pattern_id}-{variant_index}"),
        pattern_id,
        variant_index,
        faces,
        total_width,
        total_height,
        min_x,
        min_y,
        edge_matches: matching.matches,
    }
}

#[cfg(test)]
mod tests;
