mod path;

use crate::types::constants::DEFAULT_SUBNET_MASK;
use crate::types::{Device, DeviceId, DeviceKind, Position};
use crate::utils;

/// Builds a bare device of the given kind for graph tests
pub fn test_device(kind: DeviceKind, name: &str) -> Device {
    Device {
        id: DeviceId(utils::generate_id()),
        kind,
        name: name.to_string(),
        position: Position::new(0.0, 0.0),
        ip: String::new(),
        subnet: DEFAULT_SUBNET_MASK.to_string(),
    }
}
