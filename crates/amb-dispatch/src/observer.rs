//! Observer trait for logs, output writers, and UIs.

use amb_core::{Emergency, SimTime, Tick, VehicleId};
use amb_fleet::{Transition, VehicleSnapshot};

use crate::TickSummary;

/// Callbacks invoked by a [`DispatchCenter`][crate::DispatchCenter] as
/// emergencies move through intake, matching and service.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: counting completed calls
///
/// ```rust,ignore
/// struct Completed(usize);
///
/// impl DispatchObserver for Completed {
///     fn on_transition(&mut self, _v: VehicleId, t: &Transition) {
///         if matches!(t, Transition::ServiceComplete { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Start of a tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick, _now: SimTime) {}

    /// An emergency was accepted into the backlog.
    fn on_received(&mut self, _emergency: &Emergency) {}

    /// An emergency was refused because the backlog is full.
    fn on_rejected(&mut self, _emergency: &Emergency, _capacity: usize) {}

    /// `vehicle` was sent to `emergency`.
    fn on_assigned(&mut self, _vehicle: VehicleId, _emergency: &Emergency) {}

    /// No idle vehicle was available; `emergency` stays in the backlog.
    fn on_deferred(&mut self, _emergency: &Emergency) {}

    /// `vehicle` changed state.
    fn on_transition(&mut self, _vehicle: VehicleId, _transition: &Transition) {}

    /// End of a tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Every `snapshot_interval_ticks` ticks, with the state of every vehicle
    /// at the end of the tick.
    fn on_snapshot(&mut self, _tick: Tick, _vehicles: &[VehicleSnapshot]) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

impl<T: DispatchObserver + ?Sized> DispatchObserver for &mut T {
    fn on_tick_start(&mut self, tick: Tick, now: SimTime) {
        (**self).on_tick_start(tick, now);
    }
    fn on_received(&mut self, emergency: &Emergency) {
        (**self).on_received(emergency);
    }
    fn on_rejected(&mut self, emergency: &Emergency, capacity: usize) {
        (**self).on_rejected(emergency, capacity);
    }
    fn on_assigned(&mut self, vehicle: VehicleId, emergency: &Emergency) {
        (**self).on_assigned(vehicle, emergency);
    }
    fn on_deferred(&mut self, emergency: &Emergency) {
        (**self).on_deferred(emergency);
    }
    fn on_transition(&mut self, vehicle: VehicleId, transition: &Transition) {
        (**self).on_transition(vehicle, transition);
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        (**self).on_tick_end(summary);
    }
    fn on_snapshot(&mut self, tick: Tick, vehicles: &[VehicleSnapshot]) {
        (**self).on_snapshot(tick, vehicles);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: DispatchObserver, B: DispatchObserver> DispatchObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick, now: SimTime) {
        self.0.on_tick_start(tick, now);
        self.1.on_tick_start(tick, now);
    }
    fn on_received(&mut self, emergency: &Emergency) {
        self.0.on_received(emergency);
        self.1.on_received(emergency);
    }
    fn on_rejected(&mut self, emergency: &Emergency, capacity: usize) {
        self.0.on_rejected(emergency, capacity);
        self.1.on_rejected(emergency, capacity);
    }
    fn on_assigned(&mut self, vehicle: VehicleId, emergency: &Emergency) {
        self.0.on_assigned(vehicle, emergency);
        self.1.on_assigned(vehicle, emergency);
    }
    fn on_deferred(&mut self, emergency: &Emergency) {
        self.0.on_deferred(emergency);
        self.1.on_deferred(emergency);
    }
    fn on_transition(&mut self, vehicle: VehicleId, transition: &Transition) {
        self.0.on_transition(vehicle, transition);
        self.1.on_transition(vehicle, transition);
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }
    fn on_snapshot(&mut self, tick: Tick, vehicles: &[VehicleSnapshot]) {
        self.0.on_snapshot(tick, vehicles);
        self.1.on_snapshot(tick, vehicles);
    }
}
