//! `amb-fleet`: vehicles, their lifecycle, and how they move.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`route`]   | `Route`: waypoint list plus cursor                            |
//! | [`state`]   | `VehicleState` (enum with payload), `VehicleStatus`, `Assignment` |
//! | [`vehicle`] | `Vehicle`, `MotionParams`, `Transition`, `VehicleSnapshot`     |
//! | [`fleet`]   | `Fleet`: roster in id order, nearest-idle lookup              |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                 |
//!
//! # Lifecycle
//!
//! ```text
//!  Idle ──assign──▶ EnRoute ──arrived──▶ OnScene ──timer≤0──▶ Returning ──home──▶ Idle
//! ```
//!
//! Each tick runs two separate steps per vehicle:
//!
//! 1. [`Vehicle::integrate_motion`]: continuous movement along the route.
//! 2. [`Vehicle::advance`]: at most one state transition, evaluated after
//!    movement.
//!
//! A route with no waypoints left always counts as "arrived", so a vehicle
//! can never get stuck in a moving state.

pub mod error;
pub mod fleet;
pub mod route;
pub mod state;
pub mod vehicle;


pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use route::Route;
pub use state::{Assignment, VehicleState, VehicleStatus};
pub use vehicle::{MotionParams, Transition, Vehicle, VehicleSnapshot};
