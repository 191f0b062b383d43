use serde::{Deserialize, Serialize};

use super::{DeviceId, PacketId};
use crate::utils;

/// What a packet represents on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacketKind {
    /// An echo request; a delivered ping logs a reply and sets the ping flag
    Ping,
    /// One leg of the encryption handshake
    KeyExchange,
    /// Reserved for future payload traffic; no producer yet
    Data,
}

/// Lifecycle state of a packet. The terminal states are transient markers:
/// completed packets leave the live set instead of being retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacketStatus {
    Active,
    Success,
    Failed,
}

/// A packet traveling along a resolved path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Packet {
    /// Unique identifier for this packet
    pub id: PacketId,
    /// Origin device
    pub from: DeviceId,
    /// Destination device
    pub to: DeviceId,
    /// Path resolved at creation time; never recomputed mid-flight
    pub path: Vec<DeviceId>,
    /// Index of the hop currently being traversed
    pub current_index: usize,
    /// Interpolation position on the current hop, in [0, 100)
    pub progress: u32,
    pub kind: PacketKind,
    pub status: PacketStatus,
}

impl Packet {
    /// Creates an active packet at the start of its path
    pub fn new(from: DeviceId, to: DeviceId, path: Vec<DeviceId>, kind: PacketKind) -> Self {
        Packet {
            id: PacketId(utils::generate_id()),
            from,
            to,
            path,
            current_index: 0,
            progress: 0,
            kind,
            status: PacketStatus::Active,
        }
    }
}

/// A packet scheduled to enter the live set at a later tick.
/// Replaces a host timer so deferred sends stay inside the tick loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeferredPacket {
    /// Tick at which the packet becomes live
    pub due_tick: u64,
    pub packet: Packet,
}
