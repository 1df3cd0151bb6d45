//! `amb-core`: foundational types for the ambulance dispatch simulator.
//!
//! This crate is a dependency of every other `amb-*` crate.  It has no
//! `amb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `EmergencyId`, `VehicleId`, `HouseId`                   |
//! | [`geo`]       | `Point` (planar world coordinate), Euclidean distance   |
//! | [`time`]      | `SimTime`, `Tick`, `SimClock`                           |
//! | [`emergency`] | `Emergency`, `PatientInfo`, `Severity`                  |
//! | [`rng`]       | `SimRng` (seeded scenario randomness)                   |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod emergency;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use emergency::{Emergency, PatientInfo, Severity};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{EmergencyId, HouseId, VehicleId};
pub use rng::SimRng;
pub use time::{SimClock, SimTime, Tick};
