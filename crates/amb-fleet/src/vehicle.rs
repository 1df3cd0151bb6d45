//! A single vehicle: movement along its route and lifecycle transitions.

use log::debug;

use amb_core::{Emergency, EmergencyId, Point, VehicleId};
use amb_spatial::Router;

use crate::{Assignment, FleetError, FleetResult, Route, VehicleState, VehicleStatus};

// ── MotionParams ──────────────────────────────────────────────────────────────

/// Speeds, thresholds and timers shared by every vehicle of a fleet.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionParams {
    /// Distance units per second while responding.
    pub speed: f32,
    /// Multiplier on `speed` for the non-urgent drive back to base.
    pub return_speed_factor: f32,
    /// Multiplier on `speed` while an idle vehicle settles onto its spot.
    pub idle_drift_factor: f32,
    /// A waypoint closer than this counts as reached.
    pub waypoint_snap: f32,
    /// The scene (or base) closer than this counts as reached.
    pub arrival_threshold: f32,
    /// Idle vehicles closer than this to base do not move.
    pub idle_settle_threshold: f32,
    /// Seconds spent at the scene.
    pub scene_duration_secs: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: 150.0,
            return_speed_factor: 0.8,
            idle_drift_factor: 0.4,
            waypoint_snap: 3.0,
            arrival_threshold: 4.0,
            idle_settle_threshold: 1.0,
            scene_duration_secs: 4.0,
        }
    }
}

// ── Transition ────────────────────────────────────────────────────────────────

/// A state change reported by [`Vehicle::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// EnRoute → OnScene.
    ArrivedOnScene { emergency: EmergencyId },
    /// OnScene → Returning.  The call is closed at this point.
    ServiceComplete { emergency: EmergencyId },
    /// Returning → Idle.
    ReturnedToBase,
}

// ── VehicleSnapshot ───────────────────────────────────────────────────────────

/// Read-only copy of a vehicle for display and output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub position: Point,
    pub home_base: Point,
    pub status: VehicleStatus,
    pub assignment: Option<Assignment>,
    pub scene_timer: Option<f32>,
    /// Final waypoint of the active route, if moving.
    pub destination: Option<Point>,
    pub handled: u64,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    /// Current world position.
    pub position: Point,
    home_base: Point,
    state: VehicleState,
    /// Calls this vehicle has completed.
    handled: u64,
}

impl Vehicle {
    /// A vehicle parked at `home_base`.
    pub fn new(id: VehicleId, home_base: Point) -> Self {
        Self {
            id,
            position: home_base,
            home_base,
            state: VehicleState::Idle,
            handled: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn home_base(&self) -> Point {
        self.home_base
    }

    #[inline]
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> VehicleStatus {
        self.state.status()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, VehicleState::Idle)
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.state.assignment()
    }

    pub fn route(&self) -> Option<&Route> {
        self.state.route()
    }

    pub fn scene_timer(&self) -> Option<f32> {
        self.state.scene_timer()
    }

    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Send this vehicle to `emergency`.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotIdle`] if the vehicle is already busy; its state is
    /// left untouched.
    pub fn assign<R: Router>(&mut self, emergency: &Emergency, router: &R) -> FleetResult<()> {
        if !self.is_idle() {
            return Err(FleetError::NotIdle(self.id));
        }
        let route = Route::new(router.route(self.position, emergency.location));
        debug!(
            "{} dispatched to {} at {} ({} waypoints)",
            self.id,
            emergency.id,
            emergency.location,
            route.len()
        );
        self.state = VehicleState::EnRoute {
            assignment: Assignment::from(emergency),
            route,
        };
        Ok(())
    }

    /// Move for `dt` seconds.
    ///
    /// Moving vehicles head for the current waypoint and never pass it; once
    /// within `waypoint_snap` of it they move on to the next one instead of
    /// moving.  Idle vehicles that are off their spot drift back at reduced
    /// speed.  Vehicles at a scene stay put.
    pub fn integrate_motion(&mut self, dt: f32, params: &MotionParams) {
        let dt = dt.max(0.0);
        match &mut self.state {
            VehicleState::EnRoute { route, .. } => {
                follow(&mut self.position, route, params.speed * dt, params.waypoint_snap);
            }
            VehicleState::Returning { route, .. } => {
                let speed = params.speed * params.return_speed_factor;
                follow(&mut self.position, route, speed * dt, params.waypoint_snap);
            }
            VehicleState::Idle => {
                if self.position.distance(self.home_base) > params.idle_settle_threshold {
                    let step = params.speed * params.idle_drift_factor * dt;
                    self.position = self.position.step_towards(self.home_base, step);
                }
            }
            VehicleState::OnScene { .. } => {}
        }
    }

    /// Evaluate at most one state transition after `dt` seconds.
    ///
    /// `router` is used to plan the trip home when the scene is cleared.
    pub fn advance<R: Router>(&mut self, dt: f32, router: &R, params: &MotionParams) -> Option<Transition> {
        let state = std::mem::take(&mut self.state);
        let (next, transition) = match state {
            VehicleState::Idle => (VehicleState::Idle, None),

            VehicleState::EnRoute { assignment, mut route } => {
                let arrived = route.is_exhausted()
                    || route
                        .destination()
                        .is_some_and(|d| self.position.distance(d) < params.arrival_threshold);
                if arrived {
                    if let Some(d) = route.destination() {
                        self.position = d;
                    }
                    route.finish();
                    let emergency = assignment.emergency;
                    debug!("{} on scene for {}", self.id, emergency);
                    (
                        VehicleState::OnScene {
                            assignment,
                            scene_timer: params.scene_duration_secs,
                        },
                        Some(Transition::ArrivedOnScene { emergency }),
                    )
                } else {
                    (VehicleState::EnRoute { assignment, route }, None)
                }
            }

            VehicleState::OnScene { assignment, scene_timer } => {
                let scene_timer = scene_timer - dt.max(0.0);
                if scene_timer <= 0.0 {
                    let route = Route::new(router.route(self.position, self.home_base));
                    self.handled += 1;
                    let emergency = assignment.emergency;
                    debug!("{} cleared {}, returning to base", self.id, emergency);
                    (
                        VehicleState::Returning { route, last_served: emergency },
                        Some(Transition::ServiceComplete { emergency }),
                    )
                } else {
                    (VehicleState::OnScene { assignment, scene_timer }, None)
                }
            }

            VehicleState::Returning { route, last_served } => {
                let home = self.position.distance(self.home_base) < params.arrival_threshold;
                if home || route.is_exhausted() {
                    self.position = self.home_base;
                    debug!("{} back at base", self.id);
                    (VehicleState::Idle, Some(Transition::ReturnedToBase))
                } else {
                    (VehicleState::Returning { route, last_served }, None)
                }
            }
        };
        self.state = next;
        transition
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            id: self.id,
            position: self.position,
            home_base: self.home_base,
            status: self.status(),
            assignment: self.assignment().cloned(),
            scene_timer: self.scene_timer(),
            destination: self.route().and_then(Route::destination),
            handled: self.handled,
        }
    }
}

/// One movement step along `route`: either close in on the current waypoint
/// or, if already within `snap`, tick the cursor forward.
fn follow(position: &mut Point, route: &mut Route, step: f32, snap: f32) {
    let Some(target) = route.current_target() else {
        return;
    };
    if position.distance(target) > snap {
        *position = position.step_towards(target, step);
    } else {
        route.advance_cursor();
    }
}
