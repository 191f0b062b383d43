mod catalog;

use crate::topology::Topology;
use crate::types::constants::DEFAULT_SUBNET_MASK;
use crate::types::{ConnectionMode, Device, DeviceId, DeviceKind, MissionFlags, Position};
use crate::utils;

use super::SimulationSnapshot;

/// Builds a device of the given kind with a preset ip (empty string for none)
pub fn test_device(kind: DeviceKind, ip: &str) -> Device {
    Device {
        id: DeviceId(utils::generate_id()),
        kind,
        name: format!("{}-test", kind.label()),
        position: Position::new(0.0, 0.0),
        ip: ip.to_string(),
        subnet: DEFAULT_SUBNET_MASK.to_string(),
    }
}

/// Builds a snapshot over the topology with default ambient state
pub fn snapshot_of<'a>(
    topology: &'a Topology,
    flags: &'a MissionFlags,
    mode: &'a ConnectionMode,
) -> SimulationSnapshot<'a> {
    SimulationSnapshot {
        topology,
        packets: &[],
        selected: None,
        connection_mode: mode,
        encrypted: false,
        log: &[],
        flags,
    }
}
