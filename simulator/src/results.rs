//! Aggregated results of a simulator run, exported as JSON for inspection
//! alongside the run logs.

use chrono::Local;
use serde::Serialize;
use std::fs;

#[derive(Debug, Default, Serialize)]
pub struct SimulationResults {
    pub scenario: String,
    pub tick_rate_hz: u64,
    pub ticks_executed: u64,
    pub pings_sent: u64,
    pub replies_received: u64,
    pub missions_cleared: u64,
    pub course_completed: bool,
    pub started_at: String,
    pub finished_at: String,
}

impl SimulationResults {
    pub fn start(scenario: &str, tick_rate_hz: u64) -> Self {
        SimulationResults {
            scenario: scenario.to_string(),
            tick_rate_hz,
            started_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Default::default()
        }
    }

    /// Stamps the finish time and writes the results to `path` as JSON.
    pub fn save(&mut self, path: &str) -> Result<(), String> {
        self.finished_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write results: {}", e))
    }
}
