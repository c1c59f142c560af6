//! Tests for open-edge matching.

use super::*;
use crate::pattern::{Link, PatternCatalog, ROOT_FACE};
use crate::propagate::propagate;

fn unfold(pattern_id: u32, start: [f64; 3]) -> Unfolding {
    let catalog = PatternCatalog::standard();
    let pattern = catalog.get(pattern_id).unwrap();
    propagate(&pattern.links, start, 0.05).unwrap()
}

fn pairs(matching: &EdgeMatching) -> Vec<(FaceId, Direction, FaceId, Direction)> {
    matching
        .matches
        .iter()
        .map(|m| (m.face1_id, m.edge1, m.face2_id, m.edge2))
        .collect()
}

#[test]
fn cross_pairs_in_first_seen_order() {
    use Direction::*;

    let matching = match_edges(&unfold(1, [2.0, 3.0, 4.0]), 1000.0);
    assert_eq!(
        pairs(&matching),
        vec![
            (0, Left, 3, Right),
            (1, Up, 4, Right),
            (1, Down, 5, Right),
            (2, Up, 4, Up),
            (2, Down, 5, Down),
            (3, Up, 4, Left),
            (3, Down, 5, Left),
        ]
    );
    let ids: Vec<u32> = matching.matches.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, (0..7).collect::<Vec<_>>());
}

#[test]
fn staircase_pairs() {
    use Direction::*;

    let matching = match_edges(&unfold(11, [1.0, 1.0, 1.0]), 1000.0);
    assert_eq!(
        pairs(&matching),
        vec![
            (0, Up, 5, Down),
            (0, Down, 2, Left),
            (0, Left, 4, Down),
            (1, Up, 5, Right),
            (1, Right, 3, Up),
            (2, Down, 4, Left),
            (3, Right, 5, Up),
        ]
    );
}

#[test]
fn every_catalog_net_has_seven_matches() {
    for pattern in &PatternCatalog::standard() {
        for start in [[1.0, 1.0, 1.0], [2.0, 3.0, 4.0], [7.0, 1.0, 3.0]] {
            let unfolding = propagate(&pattern.links, start, 0.05).unwrap();
            let matching = match_edges(&unfolding, 1000.0);
            assert_eq!(matching.matches.len(), 7, "pattern {} {start:?}", pattern.id);
        }
    }
}

#[test]
fn stamped_ids_mirror_the_match_list() {
    let unfolding = unfold(4, [3.0, 2.0, 5.0]);
    let matching = match_edges(&unfolding, 1000.0);

    let stamped: usize = unfolding
        .faces
        .iter()
        .map(|f| matching.ids_for(f.id).count())
        .sum();
    assert_eq!(stamped, 14);

    for m in &matching.matches {
        assert_eq!(matching.ids_for(m.face1_id).get(m.edge1), Some(m.match_id));
        assert_eq!(matching.ids_for(m.face2_id).get(m.edge2), Some(m.match_id));
        assert!(!unfolding.is_fold_edge(m.face1_id, m.edge1));
        assert!(!unfolding.is_fold_edge(m.face2_id, m.edge2));
    }
}

#[test]
fn hinges_are_never_matched() {
    let links = [Link::new(ROOT_FACE, 1, Direction::Right)];
    let unfolding = propagate(&links, [1.0, 1.0, 1.0], 0.05).unwrap();
    let matching = match_edges(&unfolding, 1000.0);

    // Only the shared hinge coincides; the two open faces meet nowhere else.
    assert!(matching.matches.is_empty());
    assert_eq!(matching.ids_for(7), EdgeMatchIds::default());
}

#[test]
fn edge_key_absorbs_float_noise() {
    let a = Vec3::new(1.0, 2.0, 0.0);
    let b = Vec3::new(1.0, 2.0, -3.0);
    let noisy_a = Vec3::new(1.000_000_1, 1.999_999_9, -0.000_000_1);
    assert_eq!(edge_key(a, b, 1000.0), edge_key(b, noisy_a, 1000.0));
    assert_ne!(edge_key(a, b, 1000.0), edge_key(a, Vec3::new(1.0, 2.0, -3.1), 1000.0));
}
