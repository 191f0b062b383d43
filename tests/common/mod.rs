use netsim::controller::SimulationController;
use netsim::types::{DeviceId, DeviceKind, Position};

/// Places a device; canvas position is irrelevant to the engine
pub fn place(controller: &mut SimulationController, kind: DeviceKind) -> DeviceId {
    controller.add_device(kind, Position::new(100.0, 100.0))
}

/// Places a device and assigns it an address in one step
pub fn place_with_ip(
    controller: &mut SimulationController,
    kind: DeviceKind,
    ip: &str,
) -> DeviceId {
    let id = place(controller, kind);
    controller.set_device_ip(&id, ip);
    id
}

/// Runs enough ticks to cover `hops` hops at the default packet speed
pub fn run_hops(controller: &mut SimulationController, hops: usize) {
    for _ in 0..(hops * 50) {
        controller.tick();
    }
}
