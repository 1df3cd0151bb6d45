//! Bounded, most-recent-first activity log.

use std::collections::VecDeque;
use std::fmt;

use amb_core::{Emergency, EmergencyId, SimTime, VehicleId};
use amb_fleet::Transition;

use crate::DispatchObserver;

/// Something worth showing to an operator.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchEvent {
    Received { emergency: EmergencyId, patient: String, priority: u8 },
    Rejected { emergency: EmergencyId, patient: String },
    Assigned { vehicle: VehicleId, emergency: EmergencyId, patient: String },
    ArrivedOnScene { vehicle: VehicleId, emergency: EmergencyId },
    ServiceComplete { vehicle: VehicleId, emergency: EmergencyId },
    ReturnedToBase { vehicle: VehicleId },
}

impl fmt::Display for DispatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchEvent::Received { patient, priority, .. } => {
                let class = amb_core::Severity::from_priority(*priority)
                    .map(|s| s.label().to_owned())
                    .unwrap_or_else(|| format!("P{priority}"));
                write!(f, "{patient} ({class}) - received")
            }
            DispatchEvent::Rejected { patient, .. } => write!(f, "{patient} - rejected, backlog full"),
            DispatchEvent::Assigned { vehicle, patient, .. } => {
                write!(f, "Ambulance #{} dispatched to {patient}", vehicle.0)
            }
            DispatchEvent::ArrivedOnScene { vehicle, emergency } => {
                write!(f, "Ambulance #{} on scene (call #{})", vehicle.0, emergency.0)
            }
            DispatchEvent::ServiceComplete { vehicle, emergency } => {
                write!(f, "Ambulance #{} cleared call #{}", vehicle.0, emergency.0)
            }
            DispatchEvent::ReturnedToBase { vehicle } => write!(f, "Ambulance #{} back at base", vehicle.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub time: SimTime,
    pub event: DispatchEvent,
}

/// Keeps the newest `capacity` events, newest first.
#[derive(Clone, Debug)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    now: SimTime,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(8)
    }
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            now: SimTime::ZERO,
        }
    }

    pub fn record(&mut self, time: SimTime, event: DispatchEvent) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(LogEntry { time, event });
        self.entries.truncate(self.capacity);
    }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DispatchObserver for EventLog {
    fn on_tick_start(&mut self, _tick: amb_core::Tick, now: SimTime) {
        self.now = now;
    }

    fn on_received(&mut self, e: &Emergency) {
        let event = DispatchEvent::Received {
            emergency: e.id,
            patient: e.patient.name.clone(),
            priority: e.priority,
        };
        self.record(e.created_at, event);
    }

    fn on_rejected(&mut self, e: &Emergency, _capacity: usize) {
        let event = DispatchEvent::Rejected { emergency: e.id, patient: e.patient.name.clone() };
        self.record(e.created_at, event);
    }

    fn on_assigned(&mut self, vehicle: VehicleId, e: &Emergency) {
        let event = DispatchEvent::Assigned {
            vehicle,
            emergency: e.id,
            patient: e.patient.name.clone(),
        };
        self.record(self.now, event);
    }

    fn on_transition(&mut self, vehicle: VehicleId, t: &Transition) {
        let event = match *t {
            Transition::ArrivedOnScene { emergency } => DispatchEvent::ArrivedOnScene { vehicle, emergency },
            Transition::ServiceComplete { emergency } => DispatchEvent::ServiceComplete { vehicle, emergency },
            Transition::ReturnedToBase => DispatchEvent::ReturnedToBase { vehicle },
        };
        self.record(self.now, event);
    }
}
