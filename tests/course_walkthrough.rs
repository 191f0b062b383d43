use netsim::controller::SimulationController;
use netsim::missions::{catalog, CourseProgress, MissionCheck};
use netsim::types::DeviceKind;
use netsim::utils::logging;

mod common;
use common::{place, place_with_ip, run_hops};

fn expect_cleared(controller: &SimulationController) {
    match controller.check_mission() {
        Some(MissionCheck::Cleared { .. }) => {}
        other => panic!(
            "Expected mission {} to be cleared, got {:?}",
            controller.mission_index() + 1,
            other
        ),
    }
}

/// Solves the basics course the way a learner would, checking every mission
/// passes only once its real requirement is met.
#[test]
fn test_basics_course_walkthrough() {
    logging::init_logging();
    logging::log("TEST", "=== Starting basics course walkthrough ===");

    let mut controller = SimulationController::new();
    controller.start_course(catalog::course("basics").expect("basics course").clone());

    // Mission 1: place a PC and a router
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet));
    let pc = place(&mut controller, DeviceKind::Pc);
    let router = place(&mut controller, DeviceKind::Router);
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);
    logging::log("TEST", "Mission 1 cleared");

    // Mission 2: connect through a switch, no shortcut
    let sw = place(&mut controller, DeviceKind::Switch);
    controller.add_connection(&pc, &sw).expect("Failed to connect devices");
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet));
    controller.add_connection(&router, &sw).expect("Failed to connect devices");
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);
    logging::log("TEST", "Mission 2 cleared");

    // Mission 3: distinct valid addresses
    controller.set_device_ip(&pc, "192.168.1.2");
    controller.set_device_ip(&router, "192.168.1.2");
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet));
    controller.set_device_ip(&router, "192.168.1.1");
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);
    logging::log("TEST", "Mission 3 cleared");

    // Mission 4: an observed ping, not just a pingable configuration
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet));
    controller.start_ping(&pc, &router);
    run_hops(&mut controller, 2);
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);
    logging::log("TEST", "Mission 4 cleared");

    // Mission 5: encrypted communication observed
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet));
    controller.toggle_encryption();
    controller.start_ping(&pc, &router);
    run_hops(&mut controller, 2);
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::CourseComplete);

    logging::log("TEST", "=== Course complete ===");
}

/// Solves the IP mastery course, exercising private/global classification
/// and the router-on-path requirement.
#[test]
fn test_ip_master_course_walkthrough() {
    let mut controller = SimulationController::new();
    controller.start_course(catalog::course("ip_master").expect("ip course").clone());

    // Mission 1: private LAN
    let pc = place_with_ip(&mut controller, DeviceKind::Pc, "192.168.1.10");
    let sw = place(&mut controller, DeviceKind::Switch);
    let router = place_with_ip(&mut controller, DeviceKind::Router, "192.168.1.1");
    controller.add_connection(&pc, &sw).expect("Failed to connect devices");
    controller.add_connection(&sw, &router).expect("Failed to connect devices");
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);

    // Mission 2: a server with a global address
    let server = place_with_ip(&mut controller, DeviceKind::Server, "192.168.1.50");
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet), "private server address rejected");
    controller.set_device_ip(&server, "8.8.8.8");
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::Advanced);

    // Mission 3: route from the private PC to the global server via the router
    assert_eq!(controller.check_mission(), Some(MissionCheck::NotMet), "server not cabled yet");
    controller.add_connection(&router, &server).expect("Failed to connect devices");
    expect_cleared(&controller);
    assert_eq!(controller.next_mission(), CourseProgress::CourseComplete);
}
