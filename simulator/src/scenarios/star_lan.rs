//! Free-build scenario: wires a star LAN around one switch, then drives
//! random ping pairs through it to exercise the tick loop under load.

use rand::seq::SliceRandom;
use rand::Rng;

use netsim::controller::SimulationController;
use netsim::types::{DeviceId, DeviceKind, Position};

use crate::config::Config;
use crate::logging;
use crate::results::SimulationResults;

use super::run_until;

/// Runs the scenario. Returns the filled-in results record.
pub async fn run(config: &Config) -> Result<SimulationResults, String> {
    let mut results = SimulationResults::start("star_lan", config.simulation.tick_rate_hz);
    let mut budget = config.simulation.max_ticks;

    let mut controller = SimulationController::new();
    controller.start_free_build();

    // a switch in the middle, endpoints radiating out
    let sw = controller.add_device(DeviceKind::Switch, Position::new(300.0, 200.0));
    let mut endpoints: Vec<DeviceId> = Vec::new();
    let kinds = [
        DeviceKind::Pc,
        DeviceKind::Pc,
        DeviceKind::Pc,
        DeviceKind::Server,
        DeviceKind::Printer,
    ];
    for (index, kind) in kinds.iter().enumerate() {
        let id = controller.add_device(*kind, Position::new(100.0 + 100.0 * index as f64, 80.0));
        controller.set_device_ip(&id, &format!("192.168.1.{}", 10 + index));
        controller.add_connection(&id, &sw);
        endpoints.push(id);
    }
    logging::log(
        "SCENARIO",
        &format!("Star LAN built: {} endpoints on one switch", endpoints.len()),
    );

    // random ping pairs; every pair is two hops through the switch
    let mut rng = rand::thread_rng();
    for round in 0..config.scenario.ping_rounds {
        let from = endpoints.choose(&mut rng).cloned();
        let to = endpoints.choose(&mut rng).cloned();
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            _ => break,
        };
        // self-ping resolves trivially, pick a distinct target instead
        let to = if from == to {
            let index = endpoints.iter().position(|id| *id == from).unwrap_or(0);
            endpoints[(index + 1) % endpoints.len()].clone()
        } else {
            to
        };

        controller.start_ping(&from, &to);
        results.pings_sent += 1;

        let replies_before = results.replies_received;
        let done = run_until(&mut controller, config, &mut budget, |c| {
            c.packets().is_empty()
        })
        .await;
        if done && controller.flags().ping_success {
            results.replies_received = replies_before + 1;
        }
        logging::log("SCENARIO", &format!("Ping round {} finished", round + 1));

        // occasionally exercise the encryption handshake as well
        if round == 0 || rng.gen_bool(0.2) {
            controller.toggle_encryption();
        }
    }

    results.ticks_executed = controller.current_tick();
    Ok(results)
}
