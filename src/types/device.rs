use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DeviceId, Position};

/// The closed set of placeable device kinds
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum DeviceKind {
    Pc,
    Router,
    Switch,
    Server,
    Printer,
    Hub,
    Onu,
}

/// Static metadata for a device kind: the short label used to derive display
/// names, the role description shown in the inspector, and whether the kind
/// can initiate a ping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    pub label: &'static str,
    pub role: &'static str,
    pub ping_capable: bool,
}

impl DeviceKind {
    /// Every placeable kind, in palette order
    pub const ALL: [DeviceKind; 7] = [
        DeviceKind::Pc,
        DeviceKind::Switch,
        DeviceKind::Router,
        DeviceKind::Server,
        DeviceKind::Printer,
        DeviceKind::Hub,
        DeviceKind::Onu,
    ];

    /// Per-kind capability table; replaces scattered type switches
    pub fn profile(&self) -> DeviceProfile {
        match self {
            DeviceKind::Pc => DeviceProfile {
                label: "PC",
                role: "End-user terminal that originates and receives data.",
                ping_capable: true,
            },
            DeviceKind::Router => DeviceProfile {
                label: "Router",
                role: "Joins different networks and chooses a forwarding route by IP address.",
                ping_capable: false,
            },
            DeviceKind::Switch => DeviceProfile {
                label: "SW",
                role: "LAN concentrator that forwards frames only to the port that needs them.",
                ping_capable: false,
            },
            DeviceKind::Server => DeviceProfile {
                label: "Server",
                role: "High-performance machine that provides services such as web sites or file shares.",
                ping_capable: true,
            },
            DeviceKind::Printer => DeviceProfile {
                label: "Printer",
                role: "Output device that receives print jobs over the network.",
                ping_capable: false,
            },
            DeviceKind::Hub => DeviceProfile {
                label: "Hub",
                role: "Legacy concentrator that repeats every frame to all ports.",
                ping_capable: false,
            },
            DeviceKind::Onu => DeviceProfile {
                label: "ONU",
                role: "Optical line terminator that converts between optical and electrical signals.",
                ping_capable: false,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.profile().label
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A placeable network device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Unique identifier for this device
    pub id: DeviceId,
    /// What the device is
    pub kind: DeviceKind,
    /// Display name derived at creation from the kind label and a per-kind
    /// sequence count, e.g. "PC-1"
    pub name: String,
    /// Canvas position
    pub position: Position,
    /// IP address as entered by the learner; empty until assigned
    pub ip: String,
    /// Subnet mask; stored for display, reachability uses the /24 heuristic
    pub subnet: String,
}

/// Partial field update applied to an existing device
#[derive(Debug, Clone, Default)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub subnet: Option<String>,
    pub position: Option<Position>,
}
