pub mod types;
pub mod addressing;
pub mod topology;
pub mod scheduler;
pub mod missions;
pub mod controller;
pub mod utils;

pub use controller::SimulationController;
pub use missions::MissionEngine;
pub use scheduler::PacketScheduler;
pub use topology::Topology;
