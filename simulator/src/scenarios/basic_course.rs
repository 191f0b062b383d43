//! Scripted walkthrough of the Network Basics course: builds the expected
//! topology step by step, checks each mission, and advances on success.

use netsim::controller::SimulationController;
use netsim::missions::{catalog, CourseProgress, MissionCheck};
use netsim::types::{DeviceKind, Position};

use crate::config::Config;
use crate::logging;
use crate::results::SimulationResults;

use super::run_until;

/// Runs the walkthrough. Returns the filled-in results record.
pub async fn run(config: &Config) -> Result<SimulationResults, String> {
    let mut results = SimulationResults::start("basic_course", config.simulation.tick_rate_hz);
    let mut budget = config.simulation.max_ticks;

    let mut controller = SimulationController::new();
    let course = catalog::course("basics")
        .ok_or_else(|| "basics course missing from catalog".to_string())?
        .clone();
    let mission_count = course.missions.len();
    controller.start_course(course);
    logging::log("SCENARIO", "Starting the Network Basics walkthrough");

    // Mission 1: place a PC and a router
    let pc = controller.add_device(DeviceKind::Pc, Position::new(120.0, 200.0));
    let router = controller.add_device(DeviceKind::Router, Position::new(420.0, 200.0));
    clear_and_advance(&mut controller, &mut results)?;

    // Mission 2: insert a switch between them
    let sw = controller.add_device(DeviceKind::Switch, Position::new(270.0, 200.0));
    controller.add_connection(&pc, &sw);
    controller.add_connection(&router, &sw);
    clear_and_advance(&mut controller, &mut results)?;

    // Mission 3: distinct valid addresses
    controller.set_device_ip(&pc, "192.168.1.2");
    controller.set_device_ip(&router, "192.168.1.1");
    clear_and_advance(&mut controller, &mut results)?;

    // Mission 4: observe a real ping
    controller.start_ping(&pc, &router);
    results.pings_sent += 1;
    let delivered = run_until(&mut controller, config, &mut budget, |c| {
        c.flags().ping_success
    })
    .await;
    if !delivered {
        return Err("ping did not complete within the tick budget".to_string());
    }
    results.replies_received += 1;
    clear_and_advance(&mut controller, &mut results)?;

    // Mission 5: communicate with encryption on
    controller.toggle_encryption();
    controller.start_ping(&pc, &router);
    results.pings_sent += 1;
    let observed = run_until(&mut controller, config, &mut budget, |c| {
        c.flags().encrypted_success
    })
    .await;
    if !observed {
        return Err("key exchange did not complete within the tick budget".to_string());
    }
    results.replies_received += 1;
    match clear_final(&mut controller, &mut results) {
        Ok(()) => logging::log("SCENARIO", "Course complete"),
        Err(error) => return Err(error),
    }

    results.ticks_executed = controller.current_tick();
    debug_assert_eq!(results.missions_cleared as usize, mission_count);
    Ok(results)
}

/// Checks the current mission and advances, recording the clear.
fn clear_and_advance(
    controller: &mut SimulationController,
    results: &mut SimulationResults,
) -> Result<(), String> {
    match controller.check_mission() {
        Some(MissionCheck::Cleared { .. }) => {
            results.missions_cleared += 1;
            let index = controller.mission_index();
            logging::log("SCENARIO", &format!("Mission {} cleared", index + 1));
            match controller.next_mission() {
                CourseProgress::Advanced => Ok(()),
                CourseProgress::CourseComplete => {
                    results.course_completed = true;
                    Ok(())
                }
            }
        }
        other => {
            logging::log("SCENARIO", netsim::missions::MISSION_NOT_MET);
            Err(format!(
                "mission {} not cleared, got {:?}",
                controller.mission_index() + 1,
                other
            ))
        }
    }
}

/// The last mission must end the course.
fn clear_final(
    controller: &mut SimulationController,
    results: &mut SimulationResults,
) -> Result<(), String> {
    match controller.check_mission() {
        Some(MissionCheck::Cleared { .. }) => {
            results.missions_cleared += 1;
            match controller.next_mission() {
                CourseProgress::CourseComplete => {
                    results.course_completed = true;
                    Ok(())
                }
                CourseProgress::Advanced => Err("expected the course to be complete".to_string()),
            }
        }
        other => Err(format!("final mission not cleared, got {:?}", other)),
    }
}
