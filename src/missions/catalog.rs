//! The shipped course catalog: four ordered mission sets covering device
//! roles, IP addressing, small-office cabling, and client/server setups.
//!
//! Several checks are deliberately strict about topology: they reject a
//! shortcut direct cable even when it would carry traffic, because the point
//! of the mission is the intermediate device. Observation missions pass only
//! on the durable flags, never on a configuration that merely could succeed.

use once_cell::sync::Lazy;

use crate::addressing::{is_in_same_subnet, is_private_ip, is_valid_ip};
use crate::types::DeviceKind;

use super::{Mission, MissionSet, SimulationSnapshot};

/// All courses selectable from the home screen, in display order
pub static MISSION_SETS: Lazy<Vec<MissionSet>> = Lazy::new(|| {
    vec![
        basics_course(),
        ip_master_course(),
        small_office_course(),
        server_course(),
    ]
});

/// Looks up a course by id
pub fn course(id: &str) -> Option<&'static MissionSet> {
    MISSION_SETS.iter().find(|set| set.id == id)
}

// ------------------------------------------------------------------------------------------------
// Basics course
// ------------------------------------------------------------------------------------------------

fn basics_course() -> MissionSet {
    MissionSet {
        id: "basics",
        title: "Network Basics",
        description: "Device roles, IP addresses, ping, and encryption: the fundamentals of a network, one step at a time.",
        level: "★☆☆",
        missions: vec![
            Mission {
                id: 1,
                title: "Placing the first devices",
                description: "Place one PC and one router on the canvas.",
                hint: "Drag the icons from the device palette onto the canvas. Just these two devices for now.",
                explanation: Some("A network is made of terminals (PCs) and communication equipment. The router is the key device that joins different networks together."),
                check: basics_place_devices,
            },
            Mission {
                id: 2,
                title: "Connecting through a switch",
                description: "Add a switch and connect the PC and the router through it.",
                hint: "Layout: [PC] - [Switch] - [Router]. Do not cable the PC straight to the router; a wrong cable can be removed from the connection list.",
                explanation: Some("PCs normally plug into a switch rather than straight into the router. The switch multiplies the available LAN ports and forwards traffic efficiently."),
                check: basics_switch_in_the_middle,
            },
            Mission {
                id: 3,
                title: "Assigning IP addresses",
                description: "Give the PC and the router correct IP addresses.",
                hint: "Click a device and enter its IP in the inspector panel. Example: router 192.168.1.1, PC 192.168.1.2.",
                explanation: Some("An IP address is a device's street address on the network. Devices on the same LAN share the network part of the address, such as 192.168.1."),
                check: basics_assign_ips,
            },
            Mission {
                id: 4,
                title: "Testing with ping",
                description: "Run an actual ping from the PC to the router and make it succeed.",
                hint: "Configuration alone is not enough. Select the PC, enter the router's IP in the ping tool, press run, and watch for the reply in the log.",
                explanation: Some("Ping is the basic reachability check. A correct configuration can still fail over a broken cable; confirming that traffic actually flowed is the network engineer's job."),
                check: basics_observe_ping,
            },
            Mission {
                id: 5,
                title: "Encrypted communication",
                description: "Turn encryption on, then run another ping or watch the key exchange complete.",
                hint: "Flipping the switch alone does not clear the mission. With encryption on, communicate (ping works) and confirm the key exchange.",
                explanation: Some("Data crossing a shared network can be eavesdropped on. Encrypting it, as TLS does, keeps the contents private."),
                check: basics_observe_encryption,
            },
        ],
    }
}

fn basics_place_devices(state: &SimulationSnapshot) -> bool {
    state.has_kind(DeviceKind::Pc) && state.has_kind(DeviceKind::Router)
}

fn basics_switch_in_the_middle(state: &SimulationSnapshot) -> bool {
    let switch = match state.first_of_kind(DeviceKind::Switch) {
        Some(device) => device,
        None => return false,
    };
    let pc = match state.first_of_kind(DeviceKind::Pc) {
        Some(device) => device,
        None => return false,
    };
    let router = match state.first_of_kind(DeviceKind::Router) {
        Some(device) => device,
        None => return false,
    };

    // strict check: the shortcut direct cable fails the mission
    if state.topology.is_connected(&pc.id, &router.id) {
        return false;
    }

    state.topology.is_connected(&pc.id, &switch.id)
        && state.topology.is_connected(&router.id, &switch.id)
}

fn basics_assign_ips(state: &SimulationSnapshot) -> bool {
    match (state.first_of_kind(DeviceKind::Pc), state.first_of_kind(DeviceKind::Router)) {
        (Some(pc), Some(router)) => {
            is_valid_ip(&pc.ip) && is_valid_ip(&router.ip) && pc.ip != router.ip
        }
        _ => false,
    }
}

fn basics_observe_ping(state: &SimulationSnapshot) -> bool {
    state.flags.ping_success
}

fn basics_observe_encryption(state: &SimulationSnapshot) -> bool {
    state.flags.encrypted_success
}

// ------------------------------------------------------------------------------------------------
// IP address mastery course
// ------------------------------------------------------------------------------------------------

fn ip_master_course() -> MissionSet {
    MissionSet {
        id: "ip_master",
        title: "IP Address Mastery",
        description: "Private versus global addresses, and how traffic from a LAN reaches the internet.",
        level: "★★★",
        missions: vec![
            Mission {
                id: 1,
                title: "The private address world",
                description: "LANs use private IP addresses. Place a PC and a router, give both an address starting with 192.168, and connect them.",
                hint: "For example PC 192.168.1.10 and router 192.168.1.1. A switch in between is the ideal layout.",
                explanation: Some("Private addresses such as 192.168.x.x are free to use inside any home or school. The same numbers repeat all over the world, which is fine because they never leave the LAN."),
                check: ip_private_lan,
            },
            Mission {
                id: 2,
                title: "The global address world",
                description: "Servers on the internet carry global IP addresses. Place a server and give it a non-private address such as 8.8.8.8.",
                hint: "Anything outside 10.x.x.x, 172.16-31.x.x, and 192.168.x.x will do.",
                explanation: Some("A global IP address is unique across the whole internet. Every public server and web site has one."),
                check: ip_global_server,
            },
            Mission {
                id: 3,
                title: "Routing through the router",
                description: "Send traffic from the private PC to the global server. Connect everything through the router.",
                hint: "Layout: PC (private) - switch - router - server (global). The router relays between the two worlds.",
                explanation: Some("A PC with a private address needs the router's NAT, network address translation, to reach the internet. The router rewrites addresses so the two sides can talk."),
                check: ip_route_through_router,
            },
        ],
    }
}

fn ip_private_lan(state: &SimulationSnapshot) -> bool {
    match (state.first_of_kind(DeviceKind::Pc), state.first_of_kind(DeviceKind::Router)) {
        (Some(pc), Some(router)) => {
            state.topology.find_path(&pc.id, &router.id).is_some()
                && is_private_ip(&pc.ip)
                && is_private_ip(&router.ip)
        }
        _ => false,
    }
}

fn ip_global_server(state: &SimulationSnapshot) -> bool {
    match state.first_of_kind(DeviceKind::Server) {
        Some(server) => is_valid_ip(&server.ip) && !is_private_ip(&server.ip),
        None => false,
    }
}

fn ip_route_through_router(state: &SimulationSnapshot) -> bool {
    let pc = state
        .devices()
        .iter()
        .find(|d| d.kind == DeviceKind::Pc && is_private_ip(&d.ip));
    let server = state
        .devices()
        .iter()
        .find(|d| d.kind == DeviceKind::Server && !is_private_ip(&d.ip));
    let router = state.first_of_kind(DeviceKind::Router);

    let (pc, server, router) = match (pc, server, router) {
        (Some(pc), Some(server), Some(router)) => (pc, server, router),
        _ => return false,
    };

    match state.topology.find_path(&pc.id, &server.id) {
        Some(path) => path.contains(&router.id),
        None => false,
    }
}

// ------------------------------------------------------------------------------------------------
// Small office course
// ------------------------------------------------------------------------------------------------

fn small_office_course() -> MissionSet {
    MissionSet {
        id: "small_office",
        title: "Small Office Build",
        description: "Wire up an office LAN with several terminals and a printer, then take it all the way to the internet.",
        level: "★★☆",
        missions: vec![
            Mission {
                id: 1,
                title: "Office cabling, star topology",
                description: "Build the office network: place two PCs, one printer, and one switch, and connect everything to the switch.",
                hint: "Never cable devices to each other directly; gather every cable at the switch. This layout is called a star topology.",
                explanation: Some("Modern LAN cabling radiates from a central switch, the star topology. One broken cable takes down one device instead of the whole office."),
                check: office_star_topology,
            },
            Mission {
                id: 2,
                title: "One subnet for the office",
                description: "Give every device an address in the same network, such as 192.168.1.x, then make a ping from a PC to the printer succeed.",
                hint: "Align the first three octets: 192.168.1.10, 192.168.1.11, 192.168.1.20, and so on.",
                explanation: Some("Only devices in the same subnet can talk without a router. Offices typically give each department its own subnet."),
                check: office_shared_subnet,
            },
            Mission {
                id: 3,
                title: "Equipment for the internet",
                description: "To reach the internet, add a router and an ONU and connect them in the order switch - router - ONU.",
                hint: "The ONU terminates the optical line. Chain them in a row: [switch] - [router] - [ONU].",
                explanation: Some("The ONU converts the optical signal to an electrical one and the router steers traffic toward the internet. Both are needed before anything outside is reachable."),
                check: office_internet_chain,
            },
            Mission {
                id: 4,
                title: "The default gateway",
                description: "Give the router an IP address and make a ping from a PC to the router succeed.",
                hint: "Put the router in the same subnet as the PC, for example 192.168.1.254. For the PC, this router is the doorway to everywhere else.",
                explanation: Some("When a PC talks to another network it hands the data to its default gateway, normally the LAN-side address of the router."),
                check: office_default_gateway,
            },
        ],
    }
}

fn office_star_topology(state: &SimulationSnapshot) -> bool {
    let pcs = state.all_of_kind(DeviceKind::Pc);
    let printers = state.all_of_kind(DeviceKind::Printer);
    let switches = state.all_of_kind(DeviceKind::Switch);

    if pcs.len() < 2 || printers.is_empty() || switches.is_empty() {
        return false;
    }

    let hub = switches[0];
    pcs.iter()
        .chain(printers.iter())
        .all(|device| state.topology.is_connected(&device.id, &hub.id))
}

fn office_shared_subnet(state: &SimulationSnapshot) -> bool {
    let pcs = state.all_of_kind(DeviceKind::Pc);
    let printers = state.all_of_kind(DeviceKind::Printer);

    if pcs.is_empty() || printers.is_empty() {
        return false;
    }
    let endpoints: Vec<_> = pcs.iter().chain(printers.iter()).collect();
    if !endpoints.iter().all(|device| is_valid_ip(&device.ip)) {
        return false;
    }

    let base_ip = &pcs[0].ip;
    if !endpoints.iter().all(|device| is_in_same_subnet(&device.ip, base_ip)) {
        return false;
    }

    state.topology.find_path(&pcs[0].id, &printers[0].id).is_some()
}

fn office_internet_chain(state: &SimulationSnapshot) -> bool {
    let router = match state.first_of_kind(DeviceKind::Router) {
        Some(device) => device,
        None => return false,
    };
    let onu = match state.first_of_kind(DeviceKind::Onu) {
        Some(device) => device,
        None => return false,
    };
    let switch = match state.first_of_kind(DeviceKind::Switch) {
        Some(device) => device,
        None => return false,
    };

    // the ONU hangs off the router, never the switch
    if state.topology.is_connected(&switch.id, &onu.id) {
        return false;
    }

    state.topology.is_connected(&switch.id, &router.id)
        && state.topology.is_connected(&router.id, &onu.id)
}

fn office_default_gateway(state: &SimulationSnapshot) -> bool {
    let (router, pc) = match (state.first_of_kind(DeviceKind::Router), state.first_of_kind(DeviceKind::Pc)) {
        (Some(router), Some(pc)) => (router, pc),
        _ => return false,
    };
    if !is_valid_ip(&router.ip) || !is_in_same_subnet(&router.ip, &pc.ip) {
        return false;
    }
    state.topology.find_path(&pc.id, &router.id).is_some()
}

// ------------------------------------------------------------------------------------------------
// Server build course
// ------------------------------------------------------------------------------------------------

fn server_course() -> MissionSet {
    MissionSet {
        id: "server_build",
        title: "Server Build Intro",
        description: "Stand up a server and wire clients to it: the request/response relationship from the ground up.",
        level: "★★☆",
        missions: vec![
            Mission {
                id: 1,
                title: "Setting up the server",
                description: "Place one server and give it a fixed IP address, for example 10.0.0.1.",
                hint: "A server whose address keeps changing cannot be found, so servers get their addresses by hand.",
                explanation: Some("A web or file server is the destination clients aim at. It gets a fixed IP address so it can always be found at the same place."),
                check: server_fixed_ip,
            },
            Mission {
                id: 2,
                title: "Wiring the first client",
                description: "Add a switch and a PC and connect them so the layout is PC - switch - server, with addresses configured.",
                hint: "Do not cable the PC straight to the server; always go through the switch.",
                explanation: Some("Clients and servers talk in requests and responses. Going through a switch means more PCs can join later without recabling."),
                check: server_client_through_switch,
            },
            Mission {
                id: 3,
                title: "Serving several clients",
                description: "More users arrived. Add a second PC and make sure both PCs have a working route to the server.",
                hint: "Use a free port on the switch, and watch out for duplicate IP addresses.",
                explanation: Some("A switch grows the network one port at a time. A single server can answer requests from many clients at once."),
                check: server_multiple_clients,
            },
        ],
    }
}

fn server_fixed_ip(state: &SimulationSnapshot) -> bool {
    match state.first_of_kind(DeviceKind::Server) {
        Some(server) => is_valid_ip(&server.ip),
        None => false,
    }
}

fn server_client_through_switch(state: &SimulationSnapshot) -> bool {
    if !state.has_kind(DeviceKind::Switch) {
        return false;
    }
    let (pc, server) = match (
        state.first_of_kind(DeviceKind::Pc),
        state.first_of_kind(DeviceKind::Server),
    ) {
        (Some(pc), Some(server)) => (pc, server),
        _ => return false,
    };

    // strict check: the shortcut direct cable fails the mission
    if state.topology.is_connected(&pc.id, &server.id) {
        return false;
    }

    let addressed = is_valid_ip(&pc.ip)
        && is_valid_ip(&server.ip)
        && is_in_same_subnet(&pc.ip, &server.ip);
    addressed && state.topology.find_path(&pc.id, &server.id).is_some()
}

fn server_multiple_clients(state: &SimulationSnapshot) -> bool {
    let pcs = state.all_of_kind(DeviceKind::Pc);
    let server = match state.first_of_kind(DeviceKind::Server) {
        Some(device) => device,
        None => return false,
    };
    if pcs.len() < 2 {
        return false;
    }

    pcs.iter().all(|pc| {
        is_valid_ip(&pc.ip)
            && is_in_same_subnet(&pc.ip, &server.ip)
            && state.topology.find_path(&pc.id, &server.id).is_some()
    })
}
