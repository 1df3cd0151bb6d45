//! `amb-dispatch`: the dispatch center and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! tick(dt):
//!   ① Motion   : every vehicle moves along its route for dt seconds.
//!   ② Dispatch : the whole backlog is drained best-first; each emergency
//!                takes the nearest idle vehicle, or goes back in the queue.
//!   ③ Advance  : every vehicle evaluates one state transition (arrival,
//!                scene timer, return to base).
//! ```
//!
//! Intake (`receive`) may happen at any time between ticks.  Everything is
//! synchronous and single-threaded; a vehicle claimed earlier in a dispatch
//! pass is simply no longer idle for later emergencies in the same pass.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use amb_core::{PatientInfo, Point};
//! use amb_dispatch::{DispatchCenterBuilder, DispatchConfig};
//!
//! let mut center = DispatchCenterBuilder::new(Point::new(400.0, 0.0))
//!     .home_bases(vec![Point::new(330.0, 30.0), Point::new(470.0, 30.0)])
//!     .config(DispatchConfig::default())
//!     .build()?;
//! let id = center.receive(PatientInfo::new("Ada"), Point::new(260.0, 320.0), 1)?;
//! for _ in 0..600 {
//!     center.tick(1.0 / 60.0);
//! }
//! ```

pub mod builder;
pub mod center;
pub mod config;
pub mod error;
pub mod event_log;
pub mod observer;
pub mod region;


pub use builder::DispatchCenterBuilder;
pub use center::{DispatchCenter, TickSummary};
pub use config::DispatchConfig;
pub use error::{DispatchError, DispatchResult};
pub use event_log::{DispatchEvent, EventLog, LogEntry};
pub use observer::{DispatchObserver, NoopObserver};
pub use region::DispatchRegion;
