/// Progress a traveling packet gains on each tick, out of 100 per hop.
/// At the default 60 Hz tick rate a hop takes 50 ticks (~0.8 s).
pub const PACKET_SPEED: u32 = 2;

/// Maximum number of retained log entries; older entries are evicted.
pub const LOG_CAPACITY: usize = 50;

/// Ticks between the two legs of the key exchange handshake
/// (one second at the default 60 Hz tick rate).
pub const HANDSHAKE_REPLY_DELAY_TICKS: u64 = 60;

/// Subnet mask assigned to newly placed devices.
pub const DEFAULT_SUBNET_MASK: &str = "255.255.255.0";
