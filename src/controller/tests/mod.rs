
use crate::controller::SimulationController;
use crate::types::{DeviceId, DeviceKind, Position};

/// Places a device at the origin; position is irrelevant to engine logic
pub fn place(controller: &mut SimulationController, kind: DeviceKind) -> DeviceId {
    controller.add_device(kind, Position::new(0.0, 0.0))
}

/// Runs the tick loop long enough to cover `hops` hops at the default speed
pub fn run_hops(controller: &mut SimulationController, hops: usize) {
    for _ in 0..(hops * 50) {
        controller.tick();
    }
}
