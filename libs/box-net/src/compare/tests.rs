//! Tests for the comparison overlay.

use super::*;
use crate::enumerate::generate_net;
use crate::pattern::PatternCatalog;

fn cube_net(pattern_id: u32) -> NetData {
    let catalog = PatternCatalog::standard();
    generate_net(catalog.get(pattern_id).unwrap(), [1.0, 1.0, 1.0], 1).unwrap()
}

fn count(segments: &[EdgeSegment], kind: LineKind) -> usize {
    segments.iter().filter(|s| s.kind == kind).count()
}

#[test]
fn edges_are_centred_on_the_root() {
    let edges = net_edges(&cube_net(1), DVec2::ZERO);
    assert_eq!(edges.len(), 19);
    assert_eq!(count(&edges, LineKind::Fold), 5);

    let first = edges[0];
    assert_eq!((first.x1, first.y1, first.x2, first.y2), (-0.5, -0.5, 0.5, -0.5));
    assert_eq!(first.kind, LineKind::Fold);
    assert_eq!(edges[3].kind, LineKind::Solid);
}

#[test]
fn segments_are_normalized_left_to_right() {
    for segment in net_edges(&cube_net(11), DVec2::new(2.0, -1.0)) {
        assert!(
            segment.x1 < segment.x2 || (segment.x1 == segment.x2 && segment.y1 <= segment.y2),
            "{segment:?}"
        );
    }
}

#[test]
fn net_matches_itself() {
    let net = cube_net(4);
    let cmp = compare_nets(&net, &net, DVec2::ZERO, DVec2::ZERO);
    assert_eq!(cmp.overlap, net_edges(&net, DVec2::ZERO));
    assert!(cmp.left_only.is_empty());
    assert!(cmp.right_only.is_empty());
}

#[test]
fn cut_wins_over_fold_in_the_overlap() {
    let cmp = compare_nets(&cube_net(1), &cube_net(5), DVec2::ZERO, DVec2::ZERO);
    assert_eq!(cmp.overlap.len(), 15);
    assert_eq!(cmp.left_only.len(), 4);
    assert_eq!(cmp.right_only.len(), 4);
    assert_eq!(count(&cmp.overlap, LineKind::Fold), 3);

    // The root's top edge is a hinge in the cross but a cut in the other.
    let top = cmp.overlap[0];
    assert_eq!((top.x1, top.y1, top.x2, top.y2), (-0.5, -0.5, 0.5, -0.5));
    assert_eq!(top.kind, LineKind::Solid);
}

#[test]
fn whole_unit_shift_keeps_partial_overlap() {
    let net = cube_net(1);
    let cmp = compare_nets(&net, &net, DVec2::ZERO, DVec2::new(1.0, 0.0));
    assert_eq!(
        (cmp.overlap.len(), cmp.left_only.len(), cmp.right_only.len()),
        (12, 7, 7)
    );
}

#[test]
fn offsets_snap_to_half_units() {
    let net = cube_net(1);
    let small = compare_nets(&net, &net, DVec2::ZERO, DVec2::new(0.2, 0.1));
    assert_eq!(small.overlap.len(), 19);

    let half = compare_nets(&net, &net, DVec2::ZERO, DVec2::new(0.3, 0.0));
    assert!(half.overlap.is_empty());
    assert_eq!(half.left_only.len(), 19);
    assert_eq!(half.right_only.len(), 19);
}

#[test]
fn empty_net_has_no_edges() {
    let mut net = cube_net(1);
    net.faces.clear();
    assert!(net_edges(&net, DVec2::ZERO).is_empty());

    let cmp = compare_nets(&net, &cube_net(2), DVec2::ZERO, DVec2::ZERO);
    assert!(cmp.overlap.is_empty());
    assert_eq!(cmp.right_only.len(), 19);
}

#[test]
fn comparison_serializes_camel_case() {
    let net = cube_net(1);
    let cmp = compare_nets(&net, &net, DVec2::ZERO, DVec2::new(1.0, 0.0));
    let json = serde_json::to_value(&cmp).unwrap();
    assert!(json["leftOnly"].is_array());
    assert_eq!(json["overlap"][0]["kind"], "solid");
}
