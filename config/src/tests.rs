//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_edge_matches_follow_from_face_count() {
    let edge_slots = FACE_COUNT * 4;
    let fold_slots = (FACE_COUNT - 1) * 2;
    assert_eq!((edge_slots - fold_slots) / 2, EXPECTED_EDGE_MATCHES);
}

#[test]
fn test_overlap_epsilon_is_smaller_than_a_unit_face() {
    // Two epsilons must never swallow a whole unit face.
    assert!(OVERLAP_EPSILON * 2.0 < 1.0);
}

// =============================================================================
// VIEW TESTS
// =============================================================================

#[test]
fn test_full_fold_is_right_angle() {
    assert!((FULL_FOLD_PROGRESS * FOLD_DEGREES_PER_PROGRESS - 90.0).abs() < 1e-12);
}

#[test]
fn test_scale_bounds_are_ordered() {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
}

#[test]
fn test_compare_quantum_divides_unit() {
    assert_eq!((1.0 / COMPARE_QUANTUM).fract(), 0.0);
}

#[test]
fn test_dimension_range() {
    assert!(MIN_DIMENSION >= 1);
    assert!(MAX_DIMENSION >= MIN_DIMENSION);
}
