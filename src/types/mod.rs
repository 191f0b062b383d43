use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants;
mod device;
mod packet;

pub use device::{Device, DeviceKind, DeviceProfile, DeviceUpdate};
pub use packet::{DeferredPacket, Packet, PacketKind, PacketStatus};

/// A unique identifier for a device
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeviceId(pub String);

/// A unique identifier for a connection
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConnectionId(pub String);

/// A unique identifier for a packet
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PacketId(pub String);

/// A canvas position. Owned by presentation, stored alongside the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// An undirected cable between two devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique identifier for this connection
    pub id: ConnectionId,
    /// One endpoint of the cable
    pub from: DeviceId,
    /// The other endpoint of the cable
    pub to: DeviceId,
}

impl Connection {
    /// True iff this cable joins `a` and `b`, in either orientation
    pub fn joins(&self, a: &DeviceId, b: &DeviceId) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    /// True iff `id` is one of this cable's endpoints
    pub fn touches(&self, id: &DeviceId) -> bool {
        self.from == *id || self.to == *id
    }
}

/// Durable per-attempt evidence that delivery events actually happened.
///
/// A mission check is a stateless predicate, but completed packets are
/// removed from the live set, so "a ping succeeded at some point during this
/// attempt" is only recoverable through these flags. Set monotonically by
/// terminal deliveries, reset when a mission advances or the simulation
/// resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionFlags {
    pub ping_success: bool,
    pub encrypted_success: bool,
}

/// State of the two-click cable workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionMode {
    /// Whether the workflow is armed
    pub active: bool,
    /// The first clicked device, once chosen
    pub source: Option<DeviceId>,
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
