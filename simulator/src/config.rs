//! Configuration loader and validator for the NetSim simulator.
//! Handles parsing, validation, and access to simulation configuration files.

use serde::Deserialize;
use std::fs;
use thiserror::Error;

use crate::scenarios;

// ------------------------------------------------------------------------------------------------
// Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for a simulator run.
///
/// Combines the timing parameters of the tick loop with the choice of
/// scenario to execute against the engine.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Tick loop timing parameters
    pub simulation: SimulationConfig,
    /// Which scenario to run and its knobs
    pub scenario: ScenarioConfig,
}

/// Timing parameters for the tick loop.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Tick rate in Hz; the engine's packet speed is tuned for 60
    pub tick_rate_hz: u64,
    /// Upper bound on ticks before a run is abandoned
    pub max_ticks: u64,
    /// When false the loop runs as fast as possible instead of pacing
    /// ticks to the configured rate
    #[serde(default)]
    pub realtime: bool,
}

/// Scenario selection.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    /// One of the names in scenarios::SCENARIO_NAMES
    pub name: String,
    /// Rounds of random pings driven by the free-build scenario
    #[serde(default = "default_ping_rounds")]
    pub ping_rounds: usize,
}

fn default_ping_rounds() -> usize {
    5
}

// ------------------------------------------------------------------------------------------------
// Errors and Loading
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Loads and validates the default configuration file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("simulator/config.toml")
    }

    /// Loads and validates a configuration file at `path`.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_rate_hz == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_hz must be greater than zero".to_string(),
            ));
        }
        if self.simulation.max_ticks == 0 {
            return Err(ConfigError::ValidationError(
                "max_ticks must be greater than zero".to_string(),
            ));
        }
        if !scenarios::SCENARIO_NAMES.contains(&self.scenario.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown scenario \"{}\", expected one of {:?}",
                self.scenario.name,
                scenarios::SCENARIO_NAMES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_valid_config_parses() {
        let config = parse(
            r#"
            [simulation]
            tick_rate_hz = 60
            max_ticks = 100000

            [scenario]
            name = "basic_course"
            "#,
        )
        .expect("config should parse");
        assert_eq!(config.simulation.tick_rate_hz, 60);
        assert_eq!(config.scenario.ping_rounds, 5, "default applies");
        assert!(!config.simulation.realtime);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let error = parse(
            r#"
            [simulation]
            tick_rate_hz = 0
            max_ticks = 100

            [scenario]
            name = "basic_course"
            "#,
        )
        .unwrap_err();
        assert!(matches!(error, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let error = parse(
            r#"
            [simulation]
            tick_rate_hz = 60
            max_ticks = 100

            [scenario]
            name = "does_not_exist"
            "#,
        )
        .unwrap_err();
        assert!(matches!(error, ConfigError::ValidationError(_)));
    }
}
