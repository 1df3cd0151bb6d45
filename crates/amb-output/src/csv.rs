//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `vehicle_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

pub const SNAPSHOT_HEADERS: [&str; 8] =
    ["tick", "vehicle_id", "status", "x", "y", "emergency_id", "scene_timer", "handled"];

pub const SUMMARY_HEADERS: [&str; 8] = [
    "tick",
    "time_secs",
    "assigned",
    "arrived_on_scene",
    "completed",
    "returned",
    "pending",
    "idle_vehicles",
];

/// Writes dispatch output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

/// Empty cell for `None`.
fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.to_string(),
                row.status.to_owned(),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                opt(row.emergency_id),
                opt(row.scene_timer.map(|t| format!("{t:.3}"))),
                row.handled.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.time_secs),
            row.assigned.to_string(),
            row.arrived_on_scene.to_string(),
            row.completed.to_string(),
            row.returned.to_string(),
            row.pending.to_string(),
            row.idle_vehicles.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
