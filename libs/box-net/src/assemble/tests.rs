//! Tests for net assembly.

use super::*;
use crate::edge_match::match_edges;
use crate::pattern::{Direction, PatternCatalog};
use crate::propagate::propagate;

fn build(pattern_id: u32, start: [f64; 3], variant_index: u32) -> NetData {
    let catalog = PatternCatalog::standard();
    let pattern = catalog.get(pattern_id).unwrap();
    let unfolding = propagate(&pattern.links, start, 0.05).unwrap();
    let matching = match_edges(&unfolding, 1000.0);
    assemble(pattern.id, variant_index, &unfolding, matching)
}

#[test]
fn cross_is_shifted_and_measured() {
    let net = build(1, [2.0, 3.0, 4.0], 1);

    assert_eq!(net.id, "1-1");
    assert_eq!((net.total_width, net.total_height), (12.0, 11.0));
    assert_eq!((net.min_x, net.min_y), (0.0, -4.0));

    let layout: Vec<(usize, f64, f64, f64, f64, u8)> = net
        .faces
        .iter()
        .map(|f| (f.id, f.x, f.y, f.width, f.height, f.side_id.id()))
        .collect();
    assert_eq!(
        layout,
        vec![
            (0, 0.0, 4.0, 2.0, 3.0, 1),
            (1, 2.0, 4.0, 4.0, 3.0, 5),
            (2, 6.0, 4.0, 2.0, 3.0, 0),
            (3, 8.0, 4.0, 4.0, 3.0, 4),
            (4, 0.0, 0.0, 2.0, 4.0, 2),
            (5, 0.0, 7.0, 2.0, 4.0, 3),
        ]
    );
}

#[test]
fn parents_and_hinges_are_carried_over() {
    let net = build(1, [2.0, 3.0, 4.0], 3);
    let root = &net.faces[0];
    assert!(root.is_base());
    assert_eq!(root.attach_dir, None);

    let top = net.face(4).unwrap();
    assert_eq!(top.parent_id, Some(0));
    assert_eq!(top.attach_dir, Some(Direction::Up));
    assert_eq!(net.id, "1-3");
    assert_eq!(net.variant_index, 3);
}

#[test]
fn matches_are_stamped_on_faces() {
    let net = build(1, [2.0, 3.0, 4.0], 1);
    assert_eq!(net.edge_matches.len(), 7);
    assert_eq!(net.faces[0].edge_match_ids.left, Some(0));
    assert_eq!(net.faces[3].edge_match_ids.right, Some(0));
    assert_eq!(net.faces[4].edge_match_ids.up, Some(3));
    assert_eq!(net.faces[0].edge_match_ids.right, None);
}

#[test]
fn empty_unfolding_gives_empty_net() {
    let unfolding = propagate(&[], [1.0, 1.0, 1.0], 0.05).unwrap();
    let mut stripped = unfolding.clone();
    stripped.faces.clear();
    let net = assemble(9, 1, &stripped, EdgeMatching::default());
    assert!(net.faces.is_empty());
    assert_eq!((net.total_width, net.total_height, net.min_x, net.min_y), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn serializes_in_camel_case() {
    let net = build(1, [1.0, 1.0, 1.0], 1);
    let json = serde_json::to_value(&net).unwrap();
    assert_eq!(json["patternId"], 1);
    assert_eq!(json["totalWidth"], 4.0);
    assert_eq!(json["faces"][1]["attachDir"], "right");
    assert_eq!(json["faces"][1]["parentId"], 0);
    assert_eq!(json["faces"][0]["sideId"], 1);
    assert!(json["faces"][0].get("parentId").is_none());
    assert_eq!(json["edgeMatches"][0]["face1Id"], 0);

    let back: NetData = serde_json::from_value(json).unwrap();
    assert_eq!(back, net);
}
