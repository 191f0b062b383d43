use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Connection, ConnectionId, Device, DeviceId};
use crate::utils;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("Unknown device: {0}")]
    UnknownDevice(DeviceId),
    #[error("A device cannot be cabled to itself")]
    SelfLoop,
    #[error("Devices are already connected")]
    AlreadyConnected,
    #[error("Unknown connection: {0}")]
    UnknownConnection(ConnectionId),
}

/// Devices and undirected connections, kept in insertion order.
///
/// Insertion order is load-bearing: `find_path` expands neighbors in
/// connection insertion order, so a tie between equal-length routes resolves
/// to the earliest-cabled route. This keeps path selection reproducible for
/// identical command sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topology {
    devices: Vec<Device>,
    connections: Vec<Connection>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == *id)
    }

    pub fn device_mut(&mut self, id: &DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == *id)
    }

    pub fn contains(&self, id: &DeviceId) -> bool {
        self.devices.iter().any(|d| d.id == *id)
    }

    pub fn add_device(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Removes a device along with every connection incident to it.
    /// Returns the removed device, or None if the id is unknown.
    pub fn remove_device(&mut self, id: &DeviceId) -> Option<Device> {
        let index = self.devices.iter().position(|d| d.id == *id)?;
        let device = self.devices.remove(index);
        self.connections.retain(|c| !c.touches(id));
        Some(device)
    }

    /// Cables two devices. At most one connection may exist per unordered
    /// pair, and a device cannot be cabled to itself.
    pub fn add_connection(
        &mut self,
        from: &DeviceId,
        to: &DeviceId,
    ) -> Result<Connection, TopologyError> {
        if from == to {
            return Err(TopologyError::SelfLoop);
        }
        if !self.contains(from) {
            return Err(TopologyError::UnknownDevice(from.clone()));
        }
        if !self.contains(to) {
            return Err(TopologyError::UnknownDevice(to.clone()));
        }
        if self.is_connected(from, to) {
            return Err(TopologyError::AlreadyConnected);
        }
        let connection = Connection {
            id: ConnectionId(utils::generate_id()),
            from: from.clone(),
            to: to.clone(),
        };
        self.connections.push(connection.clone());
        Ok(connection)
    }

    pub fn remove_connection(&mut self, id: &ConnectionId) -> Result<Connection, TopologyError> {
        match self.connections.iter().position(|c| c.id == *id) {
            Some(index) => Ok(self.connections.remove(index)),
            None => Err(TopologyError::UnknownConnection(id.clone())),
        }
    }

    /// Direct adjacency: true iff one cable joins `a` and `b`.
    /// This is not reachability; use `find_path` for that.
    pub fn is_connected(&self, a: &DeviceId, b: &DeviceId) -> bool {
        self.connections.iter().any(|c| c.joins(a, b))
    }

    /// Shortest path from `start` to `end` by breadth-first search, inclusive
    /// of both endpoints. Returns None when either id is unknown or no route
    /// exists. `start == end` short-circuits to a single-element path.
    ///
    /// Nodes are marked visited when enqueued, which prevents duplicate
    /// enqueueing and gives shortest-path correctness on the unweighted graph.
    pub fn find_path(&self, start: &DeviceId, end: &DeviceId) -> Option<Vec<DeviceId>> {
        if start == end {
            return Some(vec![start.clone()]);
        }
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut adjacency: HashMap<&DeviceId, Vec<&DeviceId>> =
            self.devices.iter().map(|d| (&d.id, Vec::new())).collect();
        for connection in &self.connections {
            if adjacency.contains_key(&connection.from) && adjacency.contains_key(&connection.to) {
                if let Some(neighbors) = adjacency.get_mut(&connection.from) {
                    neighbors.push(&connection.to);
                }
                if let Some(neighbors) = adjacency.get_mut(&connection.to) {
                    neighbors.push(&connection.from);
                }
            }
        }

        let mut visited: HashSet<&DeviceId> = HashSet::new();
        let mut parent: HashMap<&DeviceId, &DeviceId> = HashMap::new();
        let mut queue: VecDeque<&DeviceId> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == end {
                let mut path = vec![node.clone()];
                let mut current = node;
                while let Some(&previous) = parent.get(current) {
                    path.push(previous.clone());
                    current = previous;
                }
                path.reverse();
                return Some(path);
            }
            if let Some(neighbors) = adjacency.get(node) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        parent.insert(neighbor, node);
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        None
    }
}
