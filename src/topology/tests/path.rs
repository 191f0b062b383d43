use crate::topology::Topology;
use crate::types::{DeviceId, DeviceKind};
use crate::utils::logging;

use super::test_device;

/// Builds a diamond: A-B, B-C, A-D, D-C. Two equal-length routes from A to C.
fn diamond() -> (Topology, DeviceId, DeviceId, DeviceId, DeviceId) {
    let mut topology = Topology::new();
    let a = test_device(DeviceKind::Pc, "PC-1");
    let b = test_device(DeviceKind::Switch, "SW-1");
    let c = test_device(DeviceKind::Server, "Server-1");
    let d = test_device(DeviceKind::Switch, "SW-2");
    let (a_id, b_id, c_id, d_id) = (a.id.clone(), b.id.clone(), c.id.clone(), d.id.clone());
    topology.add_device(a);
    topology.add_device(b);
    topology.add_device(c);
    topology.add_device(d);
    topology.add_connection(&a_id, &b_id).expect("Failed to add connection");
    topology.add_connection(&b_id, &c_id).expect("Failed to add connection");
    topology.add_connection(&a_id, &d_id).expect("Failed to add connection");
    topology.add_connection(&d_id, &c_id).expect("Failed to add connection");
    (topology, a_id, b_id, c_id, d_id)
}

/// Tests that BFS returns the shortest route and breaks the tie toward the
/// earliest-cabled route
#[test]
fn test_find_path_shortest_and_deterministic() {
    logging::init_logging();
    logging::log("TEST", "=== Starting shortest path test ===");

    let (topology, a_id, b_id, c_id, _d_id) = diamond();

    let path = topology
        .find_path(&a_id, &c_id)
        .expect("Expected a route through the diamond");
    assert_eq!(path.len(), 3, "two hops, three nodes");
    // A-B was cabled before A-D, so the tie resolves through B
    assert_eq!(path, vec![a_id.clone(), b_id.clone(), c_id.clone()]);

    // repeated queries give the identical route
    for _ in 0..5 {
        assert_eq!(topology.find_path(&a_id, &c_id).expect("route"), path);
    }

    logging::log("TEST", "=== Test completed successfully ===");
}

/// Tests the degenerate single-node path
#[test]
fn test_find_path_start_equals_end() {
    let (topology, a_id, ..) = diamond();
    assert_eq!(topology.find_path(&a_id, &a_id), Some(vec![a_id]));
}

/// Tests that disconnected components and unknown endpoints yield no path
#[test]
fn test_find_path_unreachable() {
    let mut topology = Topology::new();
    let a = test_device(DeviceKind::Pc, "PC-1");
    let b = test_device(DeviceKind::Pc, "PC-2");
    let a_id = a.id.clone();
    let b_id = b.id.clone();
    topology.add_device(a);
    topology.add_device(b);

    // no cable between them
    assert_eq!(topology.find_path(&a_id, &b_id), None);

    // unknown endpoint
    let ghost = test_device(DeviceKind::Pc, "PC-3");
    assert_eq!(topology.find_path(&a_id, &ghost.id), None);
    assert_eq!(topology.find_path(&ghost.id, &a_id), None);
}

/// Tests that a longer chain resolves hop by hop
#[test]
fn test_find_path_chain() {
    let mut topology = Topology::new();
    let pc = test_device(DeviceKind::Pc, "PC-1");
    let sw = test_device(DeviceKind::Switch, "SW-1");
    let router = test_device(DeviceKind::Router, "Router-1");
    let onu = test_device(DeviceKind::Onu, "ONU-1");
    let ids: Vec<DeviceId> = [&pc, &sw, &router, &onu].iter().map(|d| d.id.clone()).collect();
    topology.add_device(pc);
    topology.add_device(sw);
    topology.add_device(router);
    topology.add_device(onu);
    topology.add_connection(&ids[0], &ids[1]).expect("Failed to add connection");
    topology.add_connection(&ids[1], &ids[2]).expect("Failed to add connection");
    topology.add_connection(&ids[2], &ids[3]).expect("Failed to add connection");

    let path = topology.find_path(&ids[0], &ids[3]).expect("route");
    assert_eq!(path, ids);
}
