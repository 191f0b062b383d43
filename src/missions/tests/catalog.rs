use crate::missions::catalog::{course, MISSION_SETS};
use crate::topology::Topology;
use crate::types::{ConnectionMode, DeviceKind, MissionFlags};
use crate::utils::logging;

use super::{snapshot_of, test_device};

/// Tests the catalog shape: four courses, fifteen missions, sequential ids
#[test]
fn test_catalog_integrity() {
    assert_eq!(MISSION_SETS.len(), 4);

    let counts: Vec<usize> = MISSION_SETS.iter().map(|set| set.missions.len()).collect();
    assert_eq!(counts, vec![5, 3, 4, 3]);

    for set in MISSION_SETS.iter() {
        for (index, mission) in set.missions.iter().enumerate() {
            assert_eq!(mission.id as usize, index + 1, "ids are 1-based and sequential");
            assert!(!mission.title.is_empty());
            assert!(!mission.hint.is_empty());
        }
    }

    assert!(course("basics").is_some());
    assert!(course("ip_master").is_some());
    assert!(course("small_office").is_some());
    assert!(course("server_build").is_some());
    assert!(course("nope").is_none());
}

/// Tests that the switch mission rejects the shortcut direct cable
#[test]
fn test_switch_mission_rejects_direct_connection() {
    logging::init_logging();
    logging::log("TEST", "=== Starting strict topology check test ===");

    let basics = course("basics").expect("basics course");
    let mission = &basics.missions[1];
    let flags = MissionFlags::default();
    let mode = ConnectionMode::default();

    // correct layout: PC - switch - router
    let mut correct = Topology::new();
    let pc = test_device(DeviceKind::Pc, "");
    let sw = test_device(DeviceKind::Switch, "");
    let router = test_device(DeviceKind::Router, "");
    let (pc_id, sw_id, router_id) = (pc.id.clone(), sw.id.clone(), router.id.clone());
    correct.add_device(pc);
    correct.add_device(sw);
    correct.add_device(router);
    correct.add_connection(&pc_id, &sw_id).expect("Failed to add connection");
    correct.add_connection(&router_id, &sw_id).expect("Failed to add connection");
    assert!((mission.check)(&snapshot_of(&correct, &flags, &mode)));

    // shortcut: the same layout plus a direct PC-router cable fails
    let mut shortcut = correct.clone();
    shortcut.add_connection(&pc_id, &router_id).expect("Failed to add connection");
    assert!(!(mission.check)(&snapshot_of(&shortcut, &flags, &mode)));

    logging::log("TEST", "=== Test completed successfully ===");
}

/// Tests that observation missions pass only on the durable flags
#[test]
fn test_observation_missions_require_flags() {
    let basics = course("basics").expect("basics course");
    let ping_mission = &basics.missions[3];
    let encryption_mission = &basics.missions[4];
    let mode = ConnectionMode::default();

    // a fully configured, reachable topology is still not enough
    let mut topology = Topology::new();
    let pc = test_device(DeviceKind::Pc, "192.168.1.2");
    let router = test_device(DeviceKind::Router, "192.168.1.1");
    let (pc_id, router_id) = (pc.id.clone(), router.id.clone());
    topology.add_device(pc);
    topology.add_device(router);
    topology.add_connection(&pc_id, &router_id).expect("Failed to add connection");

    let clean = MissionFlags::default();
    assert!(!(ping_mission.check)(&snapshot_of(&topology, &clean, &mode)));
    assert!(!(encryption_mission.check)(&snapshot_of(&topology, &clean, &mode)));

    let observed = MissionFlags { ping_success: true, encrypted_success: true };
    assert!((ping_mission.check)(&snapshot_of(&topology, &observed, &mode)));
    assert!((encryption_mission.check)(&snapshot_of(&topology, &observed, &mode)));
}

/// Tests the routing mission: the path must run through the router
#[test]
fn test_routing_mission_requires_router_on_path() {
    let ip_course = course("ip_master").expect("ip course");
    let mission = &ip_course.missions[2];
    let flags = MissionFlags::default();
    let mode = ConnectionMode::default();

    let mut topology = Topology::new();
    let pc = test_device(DeviceKind::Pc, "192.168.1.10");
    let sw = test_device(DeviceKind::Switch, "");
    let router = test_device(DeviceKind::Router, "192.168.1.1");
    let server = test_device(DeviceKind::Server, "8.8.8.8");
    let (pc_id, sw_id, router_id, server_id) =
        (pc.id.clone(), sw.id.clone(), router.id.clone(), server.id.clone());
    topology.add_device(pc);
    topology.add_device(sw);
    topology.add_device(router);
    topology.add_device(server);
    topology.add_connection(&pc_id, &sw_id).expect("Failed to add connection");
    topology.add_connection(&sw_id, &router_id).expect("Failed to add connection");
    topology.add_connection(&router_id, &server_id).expect("Failed to add connection");
    assert!((mission.check)(&snapshot_of(&topology, &flags, &mode)));

    // bypassing the router with a direct switch-server cable makes the
    // shortest path skip it
    let mut bypass = topology.clone();
    bypass.add_connection(&sw_id, &server_id).expect("Failed to add connection");
    assert!(!(mission.check)(&snapshot_of(&bypass, &flags, &mode)));
}

/// Tests the star topology and shared subnet missions of the office course
#[test]
fn test_office_course_star_and_subnet() {
    let office = course("small_office").expect("office course");
    let star_mission = &office.missions[0];
    let subnet_mission = &office.missions[1];
    let flags = MissionFlags::default();
    let mode = ConnectionMode::default();

    let mut topology = Topology::new();
    let pc1 = test_device(DeviceKind::Pc, "192.168.1.10");
    let pc2 = test_device(DeviceKind::Pc, "192.168.1.11");
    let printer = test_device(DeviceKind::Printer, "192.168.1.20");
    let sw = test_device(DeviceKind::Switch, "");
    let (pc1_id, pc2_id, printer_id, sw_id) =
        (pc1.id.clone(), pc2.id.clone(), printer.id.clone(), sw.id.clone());
    topology.add_device(pc1);
    topology.add_device(pc2);
    topology.add_device(printer);
    topology.add_device(sw);

    // nothing cabled yet
    assert!(!(star_mission.check)(&snapshot_of(&topology, &flags, &mode)));

    topology.add_connection(&pc1_id, &sw_id).expect("Failed to add connection");
    topology.add_connection(&pc2_id, &sw_id).expect("Failed to add connection");
    topology.add_connection(&printer_id, &sw_id).expect("Failed to add connection");
    assert!((star_mission.check)(&snapshot_of(&topology, &flags, &mode)));
    assert!((subnet_mission.check)(&snapshot_of(&topology, &flags, &mode)));

    // a stray subnet breaks the subnet mission but not the star mission
    let mut mixed = topology.clone();
    if let Some(device) = mixed.device_mut(&pc2_id) {
        device.ip = "192.168.2.11".to_string();
    }
    assert!((star_mission.check)(&snapshot_of(&mixed, &flags, &mode)));
    assert!(!(subnet_mission.check)(&snapshot_of(&mixed, &flags, &mode)));
}
