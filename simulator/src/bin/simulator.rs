use std::env;
use std::fs;

use netsim::utils::logging as engine_logging;
use simulator::{
    config::{Config, ConfigError},
    logging,
    scenarios,
};

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Loads the configuration, runs the selected scenario against the engine,
/// and saves a JSON results summary.
#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    // Create results directory if it doesn't exist
    fs::create_dir_all("simulator/results").expect("Failed to create results directory");

    // Setup logging
    setup_logging();

    // Load configuration
    let config = Config::load()?;
    log_configuration(&config);

    // Run the selected scenario
    let mut results = match config.scenario.name.as_str() {
        "basic_course" => scenarios::basic_course::run(&config).await,
        "star_lan" => scenarios::star_lan::run(&config).await,
        other => Err(format!("unknown scenario \"{}\"", other)),
    }
    .map_err(ConfigError::ValidationError)?;

    // Save results
    let path = format!("simulator/results/{}.json", config.scenario.name);
    results.save(&path).map_err(ConfigError::ValidationError)?;
    logging::log("SIMULATOR", &format!("Results saved to {}", path));

    Ok(())
}

/// Sets up engine and tracing logging if ENABLE_LOGS is set
fn setup_logging() {
    if env::var("ENABLE_LOGS").is_ok() {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
        env::set_var("NETSIM_LOGGING", "true");
        engine_logging::init_logging();
    }
}

/// Logs the loaded configuration
fn log_configuration(config: &Config) {
    logging::log("SIMULATOR", "=== Simulation Configuration ===");
    logging::log("SIMULATOR", &format!("Scenario: {}", config.scenario.name));
    logging::log("SIMULATOR", &format!("Tick Rate: {} Hz", config.simulation.tick_rate_hz));
    logging::log("SIMULATOR", &format!("Max Ticks: {}", config.simulation.max_ticks));
    logging::log("SIMULATOR", &format!("Realtime Pacing: {}", config.simulation.realtime));
    logging::log("SIMULATOR", &format!("Ping Rounds: {}", config.scenario.ping_rounds));
    logging::log("SIMULATOR", "=============================");
}
