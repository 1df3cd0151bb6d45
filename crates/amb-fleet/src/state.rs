//! Per-vehicle lifecycle state.
//!
//! Each variant carries exactly the fields that are meaningful in it: only a
//! moving vehicle has a route, only a vehicle at a scene has a service timer,
//! and an idle vehicle has neither a route nor an assignment.

use std::fmt;

use amb_core::{Emergency, EmergencyId, HouseId, Point};

use crate::Route;

/// The call a vehicle is currently serving.  Echoes the parts of the
/// emergency that observers display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub emergency: EmergencyId,
    pub priority: u8,
    pub location: Point,
    pub patient_name: String,
    pub house: Option<HouseId>,
}

impl From<&Emergency> for Assignment {
    fn from(e: &Emergency) -> Self {
        Self {
            emergency: e.id,
            priority: e.priority,
            location: e.location,
            patient_name: e.patient.name.clone(),
            house: e.patient.house,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleState {
    /// Parked (or settling back) at the home base.
    #[default]
    Idle,

    /// Driving to the scene.
    EnRoute { assignment: Assignment, route: Route },

    /// Treating the patient; leaves when `scene_timer` reaches zero.
    OnScene { assignment: Assignment, scene_timer: f32 },

    /// Driving back to base.  The call is already closed; `last_served` is
    /// kept for display only.
    Returning { route: Route, last_served: EmergencyId },
}

impl VehicleState {
    pub fn status(&self) -> VehicleStatus {
        match self {
            VehicleState::Idle => VehicleStatus::Idle,
            VehicleState::EnRoute { .. } => VehicleStatus::EnRoute,
            VehicleState::OnScene { .. } => VehicleStatus::OnScene,
            VehicleState::Returning { .. } => VehicleStatus::Returning,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            VehicleState::EnRoute { assignment, .. } | VehicleState::OnScene { assignment, .. } => {
                Some(assignment)
            }
            VehicleState::Idle | VehicleState::Returning { .. } => None,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            VehicleState::EnRoute { route, .. } | VehicleState::Returning { route, .. } => Some(route),
            VehicleState::Idle | VehicleState::OnScene { .. } => None,
        }
    }

    pub fn scene_timer(&self) -> Option<f32> {
        match self {
            VehicleState::OnScene { scene_timer, .. } => Some(*scene_timer),
            _ => None,
        }
    }
}

/// Fieldless view of [`VehicleState`] for snapshots and filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    Idle,
    EnRoute,
    OnScene,
    Returning,
}

impl VehicleStatus {
    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::Idle => "IDLE",
            VehicleStatus::EnRoute => "EN ROUTE",
            VehicleStatus::OnScene => "ON SCENE",
            VehicleStatus::Returning => "RETURNING",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
