//! Emergency requests and the patient payload they carry.

use std::fmt;

use crate::{EmergencyId, HouseId, Point, SimTime};

// ── Severity ─────────────────────────────────────────────────────────────────

/// Severity class chosen by the caller reporting an emergency.
///
/// Maps onto the numeric priority used for queue ordering, where a lower
/// number is more urgent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Critical,
    High,
    Normal,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Normal];

    /// Queue priority for this class: 1 = critical, 3 = normal.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            Severity::Critical => 1,
            Severity::High => 2,
            Severity::Normal => 3,
        }
    }

    /// Inverse of [`priority`](Self::priority).  Priorities outside `1..=3`
    /// have no named class.
    pub fn from_priority(priority: u8) -> Option<Severity> {
        match priority {
            1 => Some(Severity::Critical),
            2 => Some(Severity::High),
            3 => Some(Severity::Normal),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Normal => "Normal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── PatientInfo ──────────────────────────────────────────────────────────────

/// Caller-owned description of the patient.  Copied into the emergency at
/// intake and never modified by the dispatch engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientInfo {
    pub name: String,
    pub age: u32,
    /// Free-text severity label as reported ("Critical", "High", ...).
    pub severity: String,
    pub description: String,
    /// House the call originated from, if known.
    pub house: Option<HouseId>,
}

impl PatientInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity.label().to_owned();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_house(mut self, house: HouseId) -> Self {
        self.house = Some(house);
        self
    }
}

// ── Emergency ────────────────────────────────────────────────────────────────

/// A request for service.
///
/// `id` and `created_at` are stamped by the dispatch center at intake; values
/// supplied by the caller are overwritten.  After intake the record is never
/// mutated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emergency {
    pub id: EmergencyId,
    /// Lower is more urgent.
    pub priority: u8,
    pub created_at: SimTime,
    pub location: Point,
    pub patient: PatientInfo,
}

impl Emergency {
    /// An un-stamped request, ready to hand to a dispatch center.
    pub fn new(patient: PatientInfo, location: Point, priority: u8) -> Self {
        Self {
            id: EmergencyId(0),
            priority,
            created_at: SimTime::ZERO,
            location,
            patient,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        Severity::from_priority(self.priority)
    }
}
