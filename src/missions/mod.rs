use crate::topology::Topology;
use crate::types::{ConnectionMode, Device, DeviceId, DeviceKind, MissionFlags, Packet};

pub mod catalog;

#[cfg(test)]
mod tests;

/// Generic failure message surfaced when a mission check does not pass.
/// Deliberately distinct from the mission's own hint text.
pub const MISSION_NOT_MET: &str = "Conditions not met. Check the hint and try again.";

/// Read-only composite of the full simulation state handed to mission
/// predicates. Constructed fresh by the controller on each evaluation.
pub struct SimulationSnapshot<'a> {
    pub topology: &'a Topology,
    pub packets: &'a [Packet],
    pub selected: Option<&'a DeviceId>,
    pub connection_mode: &'a ConnectionMode,
    pub encrypted: bool,
    pub log: &'a [String],
    pub flags: &'a MissionFlags,
}

impl<'a> SimulationSnapshot<'a> {
    pub fn devices(&self) -> &[Device] {
        self.topology.devices()
    }

    /// First device of the given kind, in placement order
    pub fn first_of_kind(&self, kind: DeviceKind) -> Option<&Device> {
        self.devices().iter().find(|d| d.kind == kind)
    }

    /// All devices of the given kind, in placement order
    pub fn all_of_kind(&self, kind: DeviceKind) -> Vec<&Device> {
        self.devices().iter().filter(|d| d.kind == kind).collect()
    }

    pub fn has_kind(&self, kind: DeviceKind) -> bool {
        self.first_of_kind(kind).is_some()
    }
}

/// A pure check over a simulation snapshot
pub type MissionCheckFn = fn(&SimulationSnapshot) -> bool;

/// A single checkable objective
#[derive(Debug, Clone)]
pub struct Mission {
    /// Position of the mission within its set, 1-based
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub hint: &'static str,
    /// Learning point shown after the mission is cleared
    pub explanation: Option<&'static str>,
    pub check: MissionCheckFn,
}

/// An ordered course of missions
#[derive(Debug, Clone)]
pub struct MissionSet {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Difficulty shown on the course card, e.g. "★☆☆"
    pub level: &'static str,
    pub missions: Vec<Mission>,
}

/// Result of evaluating the active mission
#[derive(Debug, Clone, PartialEq)]
pub enum MissionCheck {
    Cleared { explanation: Option<&'static str> },
    NotMet,
}

/// Result of advancing within a course
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseProgress {
    Advanced,
    CourseComplete,
}

/// Tracks position within an active course. Holds no simulation state and
/// never mutates mission definitions; predicates read the snapshot the
/// controller provides.
#[derive(Debug, Clone, Default)]
pub struct MissionEngine {
    set: Option<MissionSet>,
    index: usize,
}

impl MissionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_course(&mut self, set: MissionSet) {
        self.set = Some(set);
        self.index = 0;
    }

    /// Leaves course mode; free-build has no objectives
    pub fn clear_course(&mut self) {
        self.set = None;
        self.index = 0;
    }

    pub fn active_set(&self) -> Option<&MissionSet> {
        self.set.as_ref()
    }

    pub fn mission_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Mission> {
        self.set.as_ref().and_then(|set| set.missions.get(self.index))
    }

    /// Evaluates the current mission against the snapshot.
    /// None in free-build mode.
    pub fn check_current(&self, snapshot: &SimulationSnapshot) -> Option<MissionCheck> {
        let mission = self.current()?;
        if (mission.check)(snapshot) {
            Some(MissionCheck::Cleared { explanation: mission.explanation })
        } else {
            Some(MissionCheck::NotMet)
        }
    }

    /// Moves to the next mission if one exists. The caller resets the
    /// per-attempt mission flags on every advance: flags record what happened
    /// during the current attempt, not lifetime history.
    pub fn advance(&mut self) -> CourseProgress {
        match &self.set {
            Some(set) if self.index + 1 < set.missions.len() => {
                self.index += 1;
                CourseProgress::Advanced
            }
            _ => CourseProgress::CourseComplete,
        }
    }
}
