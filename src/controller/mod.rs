use crate::addressing::is_valid_ip;
use crate::missions::{CourseProgress, MissionCheck, MissionEngine, MissionSet, SimulationSnapshot};
use crate::scheduler::{Delivery, PacketScheduler};
use crate::topology::{Topology, TopologyError};
use crate::types::constants::{DEFAULT_SUBNET_MASK, HANDSHAKE_REPLY_DELAY_TICKS, LOG_CAPACITY};
use crate::types::{
    Connection, ConnectionId, ConnectionMode, DeferredPacket, Device, DeviceId, DeviceKind,
    DeviceUpdate, MissionFlags, Packet, PacketKind, Position,
};
use crate::utils;

#[cfg(test)]
mod tests;

/// Owns every piece of mutable simulation state and exposes the command and
/// query surface consumed by presentation layers and the headless simulator.
///
/// Validation failures are non-fatal by design: a rejected command writes a
/// log line and leaves the state unchanged. No error value crosses the
/// command boundary; the typed errors of the topology layer are converted to
/// log lines here.
pub struct SimulationController {
    topology: Topology,
    packets: Vec<Packet>,
    deferred: Vec<DeferredPacket>,
    scheduler: PacketScheduler,
    engine: MissionEngine,
    flags: MissionFlags,
    selected: Option<DeviceId>,
    connection_mode: ConnectionMode,
    encrypted: bool,
    /// Newest entry first, truncated past LOG_CAPACITY
    log: Vec<String>,
    tick_count: u64,
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationController {
    pub fn new() -> Self {
        SimulationController {
            topology: Topology::new(),
            packets: Vec::new(),
            deferred: Vec::new(),
            scheduler: PacketScheduler::new(),
            engine: MissionEngine::new(),
            flags: MissionFlags::default(),
            selected: None,
            connection_mode: ConnectionMode::default(),
            encrypted: false,
            log: Vec::new(),
            tick_count: 0,
        }
    }

    // --------------------------------------------------------------------------------------------
    // Device commands
    // --------------------------------------------------------------------------------------------

    /// Places a new device. The display name is derived from the kind label
    /// and the current population of that kind, e.g. the third PC is "PC-3".
    pub fn add_device(&mut self, kind: DeviceKind, position: Position) -> DeviceId {
        let count = self
            .topology
            .devices()
            .iter()
            .filter(|d| d.kind == kind)
            .count()
            + 1;
        let name = format!("{}-{}", kind.label(), count);
        let device = Device {
            id: DeviceId(utils::generate_id()),
            kind,
            name: name.clone(),
            position,
            ip: String::new(),
            subnet: DEFAULT_SUBNET_MASK.to_string(),
        };
        let id = device.id.clone();
        self.topology.add_device(device);
        self.push_log(format!("Added device: {}", name));
        id
    }

    /// Applies a partial field update to an existing device.
    /// Returns false when the id is unknown.
    pub fn update_device(&mut self, id: &DeviceId, update: DeviceUpdate) -> bool {
        match self.topology.device_mut(id) {
            Some(device) => {
                if let Some(name) = update.name {
                    device.name = name;
                }
                if let Some(ip) = update.ip {
                    device.ip = ip;
                }
                if let Some(subnet) = update.subnet {
                    device.subnet = subnet;
                }
                if let Some(position) = update.position {
                    device.position = position;
                }
                true
            }
            None => false,
        }
    }

    pub fn set_device_ip(&mut self, id: &DeviceId, ip: impl Into<String>) -> bool {
        self.update_device(id, DeviceUpdate { ip: Some(ip.into()), ..DeviceUpdate::default() })
    }

    pub fn move_device(&mut self, id: &DeviceId, position: Position) -> bool {
        self.update_device(id, DeviceUpdate { position: Some(position), ..DeviceUpdate::default() })
    }

    /// Deletes a device, cascading to its connections and clearing a
    /// matching selection.
    pub fn delete_device(&mut self, id: &DeviceId) {
        if let Some(device) = self.topology.remove_device(id) {
            if self.selected.as_ref() == Some(id) {
                self.selected = None;
            }
            self.push_log(format!("Removed device: {}", device.name));
        }
    }

    // --------------------------------------------------------------------------------------------
    // Connection commands
    // --------------------------------------------------------------------------------------------

    /// Cables two devices directly. Rejections are logged and leave the
    /// state unchanged.
    pub fn add_connection(&mut self, from: &DeviceId, to: &DeviceId) -> Option<ConnectionId> {
        match self.topology.add_connection(from, to) {
            Ok(connection) => {
                self.push_log("Connection established.");
                Some(connection.id)
            }
            Err(TopologyError::AlreadyConnected) => {
                self.push_log("Already connected.");
                None
            }
            Err(error) => {
                self.push_log(format!("Cannot connect: {}", error));
                None
            }
        }
    }

    pub fn delete_connection(&mut self, id: &ConnectionId) {
        if self.topology.remove_connection(id).is_ok() {
            self.push_log("Cable disconnected.");
        }
    }

    /// Arms the two-click cable workflow.
    pub fn start_connection_mode(&mut self) {
        self.connection_mode = ConnectionMode { active: true, source: None };
        self.push_log("Cable mode: click the source device.");
    }

    /// Disarms the cable workflow without connecting anything.
    pub fn cancel_connection_mode(&mut self) {
        self.connection_mode = ConnectionMode::default();
    }

    /// Click dispatch for the canvas. Drives the two-click cable workflow
    /// while it is armed, otherwise selects the clicked device. Clicking the
    /// source device again cancels the workflow.
    pub fn handle_device_click(&mut self, id: &DeviceId) {
        if !self.topology.contains(id) {
            return;
        }
        if !self.connection_mode.active {
            self.selected = Some(id.clone());
            return;
        }
        match self.connection_mode.source.clone() {
            None => {
                self.connection_mode.source = Some(id.clone());
                self.push_log("Source selected. Click the destination device.");
            }
            Some(source) => {
                if source != *id {
                    self.add_connection(&source, id);
                }
                self.connection_mode = ConnectionMode::default();
            }
        }
    }

    /// Background click: clears the selection and disarms the cable workflow.
    pub fn handle_background_click(&mut self) {
        self.selected = None;
        self.connection_mode = ConnectionMode::default();
    }

    pub fn select_device(&mut self, id: &DeviceId) -> bool {
        if self.topology.contains(id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --------------------------------------------------------------------------------------------
    // Traffic commands
    // --------------------------------------------------------------------------------------------

    /// Starts a ping between two devices. Both endpoints need a
    /// syntactically valid IP and a resolvable route; otherwise the failure
    /// is logged and no packet is created.
    pub fn start_ping(&mut self, from: &DeviceId, to: &DeviceId) {
        let source_ip = match self.topology.device(from) {
            Some(device) => device.ip.clone(),
            None => return,
        };
        let target_ip = match self.topology.device(to) {
            Some(device) => device.ip.clone(),
            None => return,
        };

        if !is_valid_ip(&source_ip) || !is_valid_ip(&target_ip) {
            self.push_log("Error: the IP address configuration is not correct.");
            return;
        }

        match self.topology.find_path(from, to) {
            Some(path) => {
                self.push_log(format!("Ping sent: {} -> {}", source_ip, target_ip));
                self.packets
                    .push(Packet::new(from.clone(), to.clone(), path, PacketKind::Ping));
            }
            None => {
                self.push_log("Ping failed: no route to the destination. Check the cabling.");
            }
        }
    }

    /// Flips global encryption. Enabling it fires a key exchange pair along
    /// the first cable; the reply leg enters the live set after
    /// HANDSHAKE_REPLY_DELAY_TICKS. Turning encryption off does not chase
    /// down an already scheduled reply; the stray packet completes
    /// harmlessly.
    pub fn toggle_encryption(&mut self) {
        if self.topology.connections().is_empty() {
            self.push_log("No connected devices.");
            return;
        }
        self.encrypted = !self.encrypted;
        if self.encrypted {
            self.push_log("Encryption enabled. Starting key exchange...");
            let Connection { from, to, .. } = self.topology.connections()[0].clone();
            let request = Packet::new(
                from.clone(),
                to.clone(),
                vec![from.clone(), to.clone()],
                PacketKind::KeyExchange,
            );
            let reply = Packet::new(
                to.clone(),
                from.clone(),
                vec![to, from],
                PacketKind::KeyExchange,
            );
            self.packets.push(request);
            self.deferred.push(DeferredPacket {
                due_tick: self.tick_count + HANDSHAKE_REPLY_DELAY_TICKS,
                packet: reply,
            });
        } else {
            self.push_log("Encryption disabled.");
        }
    }

    // --------------------------------------------------------------------------------------------
    // Tick loop
    // --------------------------------------------------------------------------------------------

    /// Advances the simulation by one tick: releases due deferred packets,
    /// moves every live packet, and applies terminal delivery effects.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let released = self.scheduler.release_due(&mut self.deferred, self.tick_count);
        self.packets.extend(released);
        let deliveries = self.scheduler.advance(&mut self.packets);
        for delivery in deliveries {
            self.apply_delivery(delivery);
        }
    }

    fn apply_delivery(&mut self, delivery: Delivery) {
        match delivery.kind {
            PacketKind::Ping => {
                let target_ip = self
                    .topology
                    .device(&delivery.to)
                    .map(|device| device.ip.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                self.push_log(format!("Reply from {} (bytes=32 time=10ms)", target_ip));
                if !self.flags.ping_success {
                    self.flags.ping_success = true;
                }
                // a ping completed under encryption also proves encrypted
                // communication happened
                if self.encrypted && !self.flags.encrypted_success {
                    self.flags.encrypted_success = true;
                }
            }
            PacketKind::KeyExchange => {
                if !self.flags.encrypted_success {
                    self.flags.encrypted_success = true;
                }
            }
            PacketKind::Data => {}
        }
    }

    // --------------------------------------------------------------------------------------------
    // Mission commands
    // --------------------------------------------------------------------------------------------

    /// Starts a course from the catalog, clearing the canvas first.
    pub fn start_course(&mut self, set: MissionSet) {
        let title = set.title;
        self.reset_state();
        self.engine.start_course(set);
        self.push_log(format!("Started course \"{}\"", title));
    }

    /// Clears the canvas and leaves course mode.
    pub fn start_free_build(&mut self) {
        self.reset_state();
        self.engine.clear_course();
        self.push_log("Started free-build mode");
    }

    /// Evaluates the current mission against a fresh snapshot.
    /// None in free-build mode.
    pub fn check_mission(&self) -> Option<MissionCheck> {
        self.engine.check_current(&self.snapshot())
    }

    /// Moves to the next mission. Every advance starts with a clean flag
    /// slate: the flags describe the current attempt only.
    pub fn next_mission(&mut self) -> CourseProgress {
        self.flags = MissionFlags::default();
        self.engine.advance()
    }

    /// Clears the canvas; the active course and mission position survive.
    pub fn reset(&mut self) {
        self.reset_state();
        self.push_log("Simulation reset");
    }

    fn reset_state(&mut self) {
        self.topology = Topology::new();
        self.packets.clear();
        self.deferred.clear();
        self.log.clear();
        self.selected = None;
        self.connection_mode = ConnectionMode::default();
        self.encrypted = false;
        self.flags = MissionFlags::default();
    }

    // --------------------------------------------------------------------------------------------
    // Queries
    // --------------------------------------------------------------------------------------------

    pub fn devices(&self) -> &[Device] {
        self.topology.devices()
    }

    pub fn connections(&self) -> &[Connection] {
        self.topology.connections()
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.topology.device(id)
    }

    /// First device, in placement order, whose ip textually equals `ip`.
    /// This is how the inspector resolves a typed-in ping target.
    pub fn find_device_by_ip(&self, ip: &str) -> Option<&Device> {
        self.topology.devices().iter().find(|d| d.ip == ip)
    }

    /// Resolved shortest route between two devices, if any.
    pub fn route_between(&self, from: &DeviceId, to: &DeviceId) -> Option<Vec<DeviceId>> {
        self.topology.find_path(from, to)
    }

    /// The event log, newest first, bounded to the most recent entries.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn flags(&self) -> MissionFlags {
        self.flags
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn selected_device(&self) -> Option<&DeviceId> {
        self.selected.as_ref()
    }

    pub fn connection_mode(&self) -> &ConnectionMode {
        &self.connection_mode
    }

    pub fn current_tick(&self) -> u64 {
        self.tick_count
    }

    pub fn current_mission(&self) -> Option<&crate::missions::Mission> {
        self.engine.current()
    }

    pub fn active_course(&self) -> Option<&MissionSet> {
        self.engine.active_set()
    }

    pub fn mission_index(&self) -> usize {
        self.engine.mission_index()
    }

    /// Builds the read-only composite handed to mission predicates.
    pub fn snapshot(&self) -> SimulationSnapshot<'_> {
        SimulationSnapshot {
            topology: &self.topology,
            packets: &self.packets,
            selected: self.selected.as_ref(),
            connection_mode: &self.connection_mode,
            encrypted: self.encrypted,
            log: &self.log,
            flags: &self.flags,
        }
    }

    fn push_log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "netsim::log", "{}", message);
        self.log.insert(0, message);
        self.log.truncate(LOG_CAPACITY);
    }
}
