//! The `DispatchCenter` and its tick loop.

use log::{debug, info, warn};

use amb_core::{Emergency, EmergencyId, PatientInfo, Point, Severity, SimClock, SimTime, Tick, VehicleId};
use amb_fleet::{Fleet, Transition, Vehicle, VehicleSnapshot, VehicleState, VehicleStatus};
use amb_queue::EmergencyQueue;
use amb_spatial::{GridRouter, Router};

use crate::{DispatchConfig, DispatchObserver, DispatchResult, NoopObserver};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick: Tick,
    /// Simulated time at the start of the tick.
    pub time: SimTime,
    /// Length of the tick in seconds.
    pub dt: f32,
    /// Emergencies matched to a vehicle this tick.
    pub assigned: u32,
    pub arrived_on_scene: u32,
    pub completed: u32,
    pub returned: u32,
    /// Backlog size at the end of the tick.
    pub pending: u32,
    /// Idle vehicles at the end of the tick.
    pub idle_vehicles: u32,
}

// ── DispatchCenter ────────────────────────────────────────────────────────────

/// One dispatch center: a fleet, a backlog, and the loop that matches them.
///
/// Owns every vehicle and every accepted emergency.  Callers only get copies
/// ([`list_vehicles`](Self::list_vehicles), [`list_pending`](Self::list_pending))
/// or shared references.
///
/// Create via [`DispatchCenterBuilder`][crate::DispatchCenterBuilder].
pub struct DispatchCenter<R: Router = GridRouter> {
    pub(crate) config: DispatchConfig,
    /// Where the center itself stands (the hospital building).
    pub(crate) location: Point,
    pub(crate) router: R,
    pub(crate) fleet: Fleet,
    pub(crate) queue: EmergencyQueue,
    pub(crate) clock: SimClock,
    pub(crate) next_emergency_id: EmergencyId,
    pub(crate) handled: u64,
    pub(crate) received: u64,
    pub(crate) rejected: u64,
}

impl<R: Router> DispatchCenter<R> {
    // ── Intake ────────────────────────────────────────────────────────────

    /// Accept a new emergency and return the id it was given.
    ///
    /// # Errors
    ///
    /// [`DispatchError::CapacityExceeded`][crate::DispatchError::CapacityExceeded]
    /// if a queue capacity is configured and the backlog is full.
    pub fn receive(&mut self, patient: PatientInfo, location: Point, priority: u8) -> DispatchResult<EmergencyId> {
        self.receive_emergency(Emergency::new(patient, location, priority))
    }

    /// [`receive`](Self::receive) with a named severity class.
    pub fn receive_severity(
        &mut self,
        patient: PatientInfo,
        location: Point,
        severity: Severity,
    ) -> DispatchResult<EmergencyId> {
        self.receive(patient, location, severity.priority())
    }

    /// Accept a prepared request.  Its `id` and `created_at` are overwritten.
    pub fn receive_emergency(&mut self, emergency: Emergency) -> DispatchResult<EmergencyId> {
        self.receive_emergency_with(emergency, &mut NoopObserver)
    }

    /// [`receive_emergency`](Self::receive_emergency), reporting to `observer`.
    pub fn receive_emergency_with<O: DispatchObserver>(
        &mut self,
        mut emergency: Emergency,
        observer: &mut O,
    ) -> DispatchResult<EmergencyId> {
        let id = self.next_emergency_id;
        self.next_emergency_id = id.next();
        emergency.id = id;
        emergency.created_at = self.clock.now;

        if let Some(capacity) = self.queue.capacity() {
            if self.queue.len() >= capacity {
                self.rejected += 1;
                warn!(
                    "{} rejected: backlog full ({capacity}), patient {:?}",
                    id, emergency.patient.name
                );
                observer.on_rejected(&emergency, capacity);
                return Err(crate::DispatchError::CapacityExceeded { capacity, rejected: id });
            }
        }

        info!(
            "{} received: priority {} at {} for {:?}",
            id, emergency.priority, emergency.location, emergency.patient.name
        );
        observer.on_received(&emergency);
        self.queue.push(emergency)?;
        self.received += 1;
        Ok(id)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one full tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickSummary {
        self.tick_with(dt, &mut NoopObserver)
    }

    /// Run one full tick of `dt` seconds, reporting to `observer`.
    ///
    /// Motion, then dispatch, then state transitions, always in that order.
    pub fn tick_with<O: DispatchObserver>(&mut self, dt: f32, observer: &mut O) -> TickSummary {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick, self.clock.now);

        self.integrate_motion(dt);
        let assigned = self.dispatch_with(observer);
        let mut summary = self.advance_with(dt, observer);

        summary.tick = tick;
        summary.time = self.clock.now;
        summary.dt = dt;
        summary.assigned = assigned as u32;
        observer.on_tick_end(&summary);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && tick.0 % interval == 0 {
            observer.on_snapshot(tick, &self.list_vehicles());
        }

        self.clock.advance(dt);
        summary
    }

    /// Move every vehicle for `dt` seconds.
    pub fn integrate_motion(&mut self, dt: f32) {
        let motion = self.config.motion;
        for vehicle in self.fleet.iter_mut() {
            vehicle.integrate_motion(dt, &motion);
        }
    }

    /// Match the backlog against idle vehicles.  Returns the number of
    /// emergencies assigned.
    pub fn dispatch(&mut self) -> usize {
        self.dispatch_with(&mut NoopObserver)
    }

    /// [`dispatch`](Self::dispatch), reporting to `observer`.
    ///
    /// The whole backlog is drained best-first.  Each emergency takes the
    /// nearest idle vehicle; a vehicle taken earlier in the pass is no longer
    /// idle, so it cannot be taken twice.  Emergencies left without a vehicle
    /// go back in the queue with their original priority and timestamp, so
    /// the next pass sees them in the same order.
    pub fn dispatch_with<O: DispatchObserver>(&mut self, observer: &mut O) -> usize {
        if self.queue.is_empty() {
            return 0;
        }

        let mut assigned = 0;
        for emergency in self.queue.drain_ordered() {
            let candidate = self
                .fleet
                .nearest_idle(emergency.location)
                .and_then(|id| self.fleet.get_mut(id).ok());

            let Some(vehicle) = candidate else {
                debug!("{} deferred: no idle vehicle", emergency.id);
                observer.on_deferred(&emergency);
                self.queue.requeue(emergency);
                continue;
            };

            match vehicle.assign(&emergency, &self.router) {
                Ok(()) => {
                    let vid = vehicle.id();
                    info!("{} assigned to {} ({:?})", emergency.id, vid, emergency.patient.name);
                    observer.on_assigned(vid, &emergency);
                    assigned += 1;
                }
                Err(e) => {
                    warn!("{} could not be assigned: {e}", emergency.id);
                    observer.on_deferred(&emergency);
                    self.queue.requeue(emergency);
                }
            }
        }
        assigned
    }

    /// Evaluate one state transition per vehicle after `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> TickSummary {
        self.advance_with(dt, &mut NoopObserver)
    }

    /// [`advance`](Self::advance), reporting to `observer`.
    ///
    /// The returned summary has only the transition counts, backlog size and
    /// idle count filled in.
    pub fn advance_with<O: DispatchObserver>(&mut self, dt: f32, observer: &mut O) -> TickSummary {
        let mut summary = TickSummary::default();
        let motion = self.config.motion;
        for vehicle in self.fleet.iter_mut() {
            let Some(transition) = vehicle.advance(dt, &self.router, &motion) else {
                continue;
            };
            match transition {
                Transition::ArrivedOnScene { .. } => summary.arrived_on_scene += 1,
                Transition::ServiceComplete { emergency } => {
                    self.handled += 1;
                    summary.completed += 1;
                    info!("{} completed by {}", emergency, vehicle.id());
                }
                Transition::ReturnedToBase => summary.returned += 1,
            }
            observer.on_transition(vehicle.id(), &transition);
        }
        summary.pending = self.queue.len() as u32;
        summary.idle_vehicles = self.fleet.count_with_status(VehicleStatus::Idle) as u32;
        summary
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// Copies of every vehicle, in roster order.
    pub fn list_vehicles(&self) -> Vec<VehicleSnapshot> {
        self.fleet.iter().map(Vehicle::snapshot).collect()
    }

    /// Copies of the backlog, best first.
    pub fn list_pending(&self) -> Vec<Emergency> {
        self.queue.peek_all()
    }

    /// Calls completed since the center was built.
    pub fn handled_count(&self) -> u64 {
        self.handled
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Emergencies accepted into the backlog (rejected ones excluded).
    pub fn total_received(&self) -> u64 {
        self.received
    }

    pub fn rejected_count(&self) -> u64 {
        self.rejected
    }

    /// The vehicle currently serving `emergency`, if any.
    pub fn assigned_vehicle(&self, emergency: EmergencyId) -> Option<VehicleId> {
        self.fleet
            .iter()
            .find(|v| v.assignment().is_some_and(|a| a.emergency == emergency))
            .map(Vehicle::id)
    }

    /// Where vehicles are heading or working: the scene of every EnRoute or
    /// OnScene vehicle, in roster order.
    pub fn scene_targets(&self) -> Vec<Point> {
        self.fleet
            .iter()
            .filter_map(|v| match v.state() {
                VehicleState::EnRoute { route, assignment } => {
                    Some(route.destination().unwrap_or(assignment.location))
                }
                VehicleState::OnScene { assignment, .. } => Some(assignment.location),
                VehicleState::Idle | VehicleState::Returning { .. } => None,
            })
            .collect()
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn queue(&self) -> &EmergencyQueue {
        &self.queue
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn now(&self) -> SimTime {
        self.clock.now
    }
}
