use super::*;

const EPS: f64 = 0.05;

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 2.0, 3.0);
    for b in [
        Rect::new(2.0, 0.0, 4.0, 3.0),
        Rect::new(-4.0, 0.0, 4.0, 3.0),
        Rect::new(0.0, 3.0, 2.0, 4.0),
        Rect::new(0.0, -4.0, 2.0, 4.0),
        Rect::new(2.0, 3.0, 1.0, 1.0),
    ] {
        assert!(!overlaps(&a, &b, EPS), "{b:?} only touches {a:?}");
        assert!(!overlaps(&b, &a, EPS));
    }
}

#[test]
fn interior_intersection_overlaps() {
    let a = Rect::new(0.0, 0.0, 2.0, 3.0);
    assert!(overlaps(&a, &a, EPS));
    assert!(overlaps(&a, &Rect::new(1.0, 1.0, 1.0, 1.0), EPS));
    assert!(overlaps(&a, &Rect::new(1.9, -1.0, 3.0, 5.0), EPS));
}

#[test]
fn slivers_thinner_than_epsilon_are_ignored() {
    let a = Rect::new(0.0, 0.0, 2.0, 2.0);
    assert!(!overlaps(&a, &Rect::new(1.97, 0.0, 1.0, 2.0), EPS));
}

#[test]
fn find_overlap_reports_first_hit() {
    let rects = [
        (0, Rect::new(0.0, 0.0, 1.0, 1.0)),
        (1, Rect::new(1.0, 0.0, 1.0, 1.0)),
        (2, Rect::new(1.0, 1.0, 1.0, 1.0)),
    ];
    let placed = rects.iter().map(|(id, r)| (*id, r));
    assert_eq!(
        find_overlap(placed.clone(), &Rect::new(1.5, 0.5, 1.0, 1.0), EPS),
        Some(1)
    );
    assert_eq!(find_overlap(placed, &Rect::new(0.0, 1.0, 1.0, 1.0), EPS), None);
}

#[test]
fn overlapping_pairs_lists_every_collision() {
    let rects = [
        Rect::new(0.0, 0.0, 2.0, 2.0),
        Rect::new(1.0, 1.0, 2.0, 2.0),
        Rect::new(2.0, 0.0, 1.0, 1.5),
        Rect::new(5.0, 5.0, 1.0, 1.0),
    ];
    assert_eq!(overlapping_pairs(&rects, EPS), vec![(0, 1), (1, 2)]);
}
