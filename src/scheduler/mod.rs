use crate::types::constants::PACKET_SPEED;
use crate::types::{DeferredPacket, DeviceId, Packet, PacketKind, PacketStatus};

#[cfg(test)]
mod tests;

/// A terminal delivery observed during a tick. The packet itself has already
/// left the live set; the caller applies the terminal effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub kind: PacketKind,
    pub from: DeviceId,
    pub to: DeviceId,
}

/// Advances every live packet once per discrete tick.
///
/// Packets do not interact; each gains a fixed progress increment per tick,
/// hops forward at 100, and is dropped from the live set on reaching the
/// final device of its path. The scheduler holds no packet state of its own;
/// the controller owns the collections it operates on.
#[derive(Debug, Clone)]
pub struct PacketScheduler {
    speed: u32,
}

impl Default for PacketScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketScheduler {
    pub fn new() -> Self {
        PacketScheduler { speed: PACKET_SPEED }
    }

    /// Scheduler with a custom per-tick progress increment. The increment is
    /// tuned to the host's tick rate to preserve the travel-time feel.
    pub fn with_speed(speed: u32) -> Self {
        PacketScheduler { speed }
    }

    /// Moves deferred packets whose due tick has arrived into the live set.
    /// Returns the released packets; the remaining entries stay queued.
    pub fn release_due(&self, deferred: &mut Vec<DeferredPacket>, now: u64) -> Vec<Packet> {
        let (due, pending): (Vec<DeferredPacket>, Vec<DeferredPacket>) =
            deferred.drain(..).partition(|d| d.due_tick <= now);
        *deferred = pending;
        due.into_iter().map(|d| d.packet).collect()
    }

    /// Advances all live packets by one tick in a single pass. Completed
    /// packets leave the live set and their deliveries are returned so the
    /// caller can apply terminal effects.
    pub fn advance(&self, packets: &mut Vec<Packet>) -> Vec<Delivery> {
        let mut deliveries = Vec::new();
        let mut survivors = Vec::with_capacity(packets.len());

        for mut packet in packets.drain(..) {
            let progress = packet.progress + self.speed;
            if progress < 100 {
                packet.progress = progress;
                survivors.push(packet);
                continue;
            }

            let next_index = packet.current_index + 1;
            if next_index + 1 >= packet.path.len() {
                // reached the final device on the path
                if packet.status == PacketStatus::Active {
                    packet.status = PacketStatus::Success;
                    tracing::debug!(kind = ?packet.kind, from = %packet.from, to = %packet.to, "packet delivered");
                    deliveries.push(Delivery {
                        kind: packet.kind,
                        from: packet.from,
                        to: packet.to,
                    });
                }
            } else {
                packet.current_index = next_index;
                packet.progress = 0;
                survivors.push(packet);
            }
        }

        *packets = survivors;
        deliveries
    }
}
