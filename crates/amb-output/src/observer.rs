//! `DispatchOutputObserver<W>`: bridges `DispatchObserver` to an `OutputWriter`.

use amb_core::Tick;
use amb_dispatch::{DispatchObserver, TickSummary};
use amb_fleet::VehicleSnapshot;

use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes vehicle snapshots and tick summaries
/// to any [`OutputWriter`].
///
/// Observer hooks have no return value, so write errors are stored.  Check
/// them with [`take_error`][Self::take_error], or call
/// [`finish`][Self::finish] which reports the first one.
pub struct DispatchOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> DispatchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, then report the first error seen during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for DispatchOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, vehicles: &[VehicleSnapshot]) {
        let rows: Vec<VehicleSnapshotRow> =
            vehicles.iter().map(|v| VehicleSnapshotRow::from_snapshot(tick, v)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}
