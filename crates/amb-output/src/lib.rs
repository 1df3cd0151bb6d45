//! `amb-output`: simulation output writers for the ambulance dispatcher.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `vehicle_snapshots.csv`, `tick_summaries.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`DispatchOutputObserver`], which implements
//! `amb_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use amb_output::{CsvWriter, DispatchOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DispatchOutputObserver::new(writer);
//! for _ in 0..ticks {
//!     center.tick_with(dt, &mut obs);
//! }
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DispatchOutputObserver;
pub use row::{TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
