pub mod basic_course;
pub mod star_lan;

use std::time::Duration;

use netsim::controller::SimulationController;

use crate::config::Config;

/// Scenario names accepted by the configuration
pub const SCENARIO_NAMES: [&str; 2] = ["basic_course", "star_lan"];

/// Drives the controller's tick loop until `done` reports true or the tick
/// budget runs out. Paces ticks with a tokio interval in realtime mode,
/// otherwise runs them back to back. Returns whether `done` was reached.
pub async fn run_until(
    controller: &mut SimulationController,
    config: &Config,
    budget: &mut u64,
    mut done: impl FnMut(&SimulationController) -> bool,
) -> bool {
    let period = Duration::from_micros(1_000_000 / config.simulation.tick_rate_hz);
    let mut interval = tokio::time::interval(period);
    while *budget > 0 {
        if done(controller) {
            return true;
        }
        if config.simulation.realtime {
            interval.tick().await;
        }
        controller.tick();
        *budget -= 1;
    }
    done(controller)
}
