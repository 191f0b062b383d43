
use crate::types::{DeviceId, Packet, PacketKind};
use crate::utils;

/// Builds an active packet over a freshly generated path of `hops + 1` nodes
pub fn test_packet(kind: PacketKind, hops: usize) -> Packet {
    let path: Vec<DeviceId> = (0..=hops).map(|_| DeviceId(utils::generate_id())).collect();
    let from = path[0].clone();
    let to = path[path.len() - 1].clone();
    Packet::new(from, to, path, kind)
}
