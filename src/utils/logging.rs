use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);
static LOG_TO_FILE: AtomicBool = AtomicBool::new(false);
static LOG_FILE: Lazy<Mutex<Option<std::fs::File>>> = Lazy::new(|| Mutex::new(None));

/// Initializes logging based on environment variables:
/// - NETSIM_LOGGING: enables/disables logging (true/false)
/// - NETSIM_LOG_TO_FILE: send logs to a file instead of stdout (true/false)
/// - NETSIM_LOG_FILE: log file path, defaults to netsim.log
/// - To enable logging in tests, run: NETSIM_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("NETSIM_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => {
                    ENABLE_LOGGING.store(true, Ordering::SeqCst);
                    if env::var("NETSIM_LOG_TO_FILE").unwrap_or_else(|_| "false".to_string()) == "true" {
                        LOG_TO_FILE.store(true, Ordering::SeqCst);
                        let path = env::var("NETSIM_LOG_FILE").unwrap_or_else(|_| "netsim.log".to_string());
                        let file = OpenOptions::new()
                            .create(true)
                            .append(true)
                            .open(path)
                            .expect("Failed to open log file");
                        *LOG_FILE.lock().unwrap() = Some(file);
                    }
                }
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: NETSIM_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  NETSIM_LOGGING=true cargo run\n  NETSIM_LOGGING=false cargo run\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }
}

pub fn log(prefix: &str, message: &str) {
    if ENABLE_LOGGING.load(Ordering::SeqCst) {
        let log_message = format!("  [{}]   {}\n", prefix, message);

        if LOG_TO_FILE.load(Ordering::SeqCst) {
            if let Some(file) = &mut *LOG_FILE.lock().unwrap() {
                if let Err(e) = file.write_all(log_message.as_bytes()) {
                    eprintln!("Failed to write to log file: {}", e);
                }
                if let Err(e) = file.flush() {
                    eprintln!("Failed to flush log file: {}", e);
                }
            }
        } else {
            print!("{}", log_message);
        }
    }
}
