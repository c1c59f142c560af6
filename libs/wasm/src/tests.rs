//! Tests for the WASM-facing helpers.

use super::*;

/// The cube catalogue comes back complete and ordered.
#[test]
fn generate_all_nets_internal_cube() {
    let nets = generate_all_nets_internal(2.0, 2.0, 2.0, true);
    assert_eq!(nets.len(), 11);
    let ids: Vec<&str> = nets.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids[0], "1-1");
    assert_eq!(ids[10], "11-1");
}

/// Invalid dimensions produce no nets instead of an error.
#[test]
fn generate_all_nets_internal_rejects_zero() {
    assert!(generate_all_nets_internal(0.0, 3.0, 4.0, false).is_empty());
}

/// The JSON uses the renderer's field names.
#[test]
fn nets_serialize_for_the_renderer() {
    let nets = generate_all_nets_internal(2.0, 3.0, 4.0, false);
    let json = serde_json::to_string(&nets).unwrap();
    assert!(json.contains("\"totalWidth\""));
    assert!(json.contains("\"edgeMatchIds\""));
    assert!(json.contains("\"attachDir\":\"right\""));
}

#[test]
fn alignment_round_trips_through_json() {
    let nets = generate_all_nets_internal(2.0, 3.0, 4.0, false);
    let json = serde_json::to_string(&nets[0]).unwrap();
    let alignment: serde_json::Value =
        serde_json::from_str(&net_alignment_internal(&json, 40.0).unwrap()).unwrap();

    assert_eq!(alignment["baseOffset"], serde_json::json!({"x": -200.0, "y": 20.0}));
    assert_eq!(alignment["rootFace"]["id"], 0);
}

#[test]
fn alignment_rejects_bad_json() {
    let err = net_alignment_internal("{\"faces\": 3}", 40.0).unwrap_err();
    assert!(matches!(err, BridgeError::Json(_)));
}

/// Flat progress gives pure translations; the root never moves.
#[test]
fn fold_matrices_flat_and_closed() {
    let nets = generate_all_nets_internal(1.0, 1.0, 1.0, true);
    let json = serde_json::to_string(&nets[0]).unwrap();

    let flat = fold_matrices_internal(&json, 0.0).unwrap();
    assert_eq!(flat.len(), 96);
    let root = &nets[0].faces[0];
    assert_eq!(&flat[12..15], &[root.x, root.y, 0.0]);

    let closed = fold_matrices_internal(&json, 100.0).unwrap();
    assert_eq!(&closed[..16], &flat[..16]);
    assert_ne!(&closed[16..32], &flat[16..32]);
}

#[test]
fn alignment_rejects_out_of_range_side() {
    let nets = generate_all_nets_internal(2.0, 3.0, 4.0, false);
    let mut value = serde_json::to_value(&nets[0]).unwrap();
    value["faces"][0]["sideId"] = serde_json::json!(9);

    let err = net_alignment_internal(&value.to_string(), 40.0).unwrap_err();
    assert!(err.to_string().contains("side id 9"));
}

#[test]
fn fold_matrices_reports_broken_links() {
    let nets = generate_all_nets_internal(1.0, 1.0, 1.0, true);
    let mut net = nets[0].clone();
    net.faces[1].attach_dir = None;
    let json = serde_json::to_string(&net).unwrap();

    let err = fold_matrices_internal(&json, 50.0).unwrap_err();
    assert!(matches!(err, BridgeError::Net(box_net::NetError::MissingHinge { face: 1 })));
}

#[test]
fn handle_pages_through_nets() {
    let handle = NetSetHandle::new(generate_all_nets_internal(2.0, 3.0, 4.0, false));
    assert_eq!(handle.count(), 66);
    assert!(!handle.is_empty());
    assert_eq!(handle.ids()[6], "2-1");

    let rects = handle.rect_buffer(0).unwrap();
    assert_eq!(rects.len(), 24);
    assert_eq!(&rects[..4], &[0.0, 4.0, 2.0, 3.0]);

    let err = handle.rect_buffer(66).unwrap_err();
    assert_eq!(err.to_string(), "no net at index 66 (have 66)");
    assert_eq!(handle.get(1).unwrap().variant_index, 2);
}

#[test]
fn default_scale_matches_config() {
    assert_eq!(default_scale(), config::constants::DEFAULT_SCALE);
}
