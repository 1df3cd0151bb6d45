//! Tests for amb-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADERS, SUMMARY_HEADERS};
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            tick,
            vehicle_id,
            status: "IDLE",
            x: 330.0,
            y: 30.0,
            emergency_id: None,
            scene_timer: None,
            handled: 0,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            time_secs: tick as f64 * 0.5,
            assigned: 1,
            arrived_on_scene: 0,
            completed: 0,
            returned: 0,
            pending: 2,
            idle_vehicles: 3,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir.path().join("vehicle_snapshots.csv")), SNAPSHOT_HEADERS);
        assert_eq!(headers(&dir.path().join("tick_summaries.csv")), SUMMARY_HEADERS);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut busy = snap_row(2, 5);
        busy.status = "ON SCENE";
        busy.emergency_id = Some(17);
        busy.scene_timer = Some(1.25);
        w.write_snapshots(&[snap_row(1, 5), busy]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][2], "IDLE");
        assert_eq!(&rows[0][3], "330.00");
        assert_eq!(&rows[0][5], ""); // no emergency
        assert_eq!(&rows[1][2], "ON SCENE");
        assert_eq!(&rows[1][5], "17");
        assert_eq!(&rows[1][6], "1.250");
    }

    #[test]
    fn csv_tick_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "1.5000");
        assert_eq!(&rows[0][6], "2"); // pending
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use amb_core::{PatientInfo, Point};
    use amb_dispatch::{DispatchCenterBuilder, DispatchConfig, DispatchObserver, TickSummary};
    use amb_fleet::VehicleSnapshot;

    use crate::{CsvWriter, DispatchOutputObserver, OutputError, OutputResult, OutputWriter};
    use crate::{TickSummaryRow, VehicleSnapshotRow};

    #[derive(Default)]
    struct MemoryWriter {
        snapshots: Vec<VehicleSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  u32,
    }

    impl OutputWriter for MemoryWriter {
        fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn rows_follow_the_tick_loop() {
        let mut center = DispatchCenterBuilder::new(Point::new(400.0, 0.0))
            .home_bases(vec![Point::new(330.0, 30.0), Point::new(470.0, 30.0)])
            .config(DispatchConfig { snapshot_interval_ticks: 10, ..DispatchConfig::default() })
            .build()
            .unwrap();
        center.receive(PatientInfo::new("Ada"), Point::new(300.0, 300.0), 1).unwrap();

        let mut obs = DispatchOutputObserver::new(MemoryWriter::default());
        for _ in 0..25 {
            center.tick_with(1.0 / 60.0, &mut obs);
        }
        obs.finish().unwrap();
        let w = obs.into_writer();

        assert_eq!(w.summaries.len(), 25);
        assert_eq!(w.summaries[0].assigned, 1);
        assert_eq!(w.summaries[24].tick, 24);
        // Ticks 0, 10, 20 with two vehicles each.
        assert_eq!(w.snapshots.len(), 6);
        let busy = &w.snapshots[0];
        assert_eq!((busy.vehicle_id, busy.status, busy.emergency_id), (1, "EN ROUTE", Some(1)));
        assert_eq!(w.snapshots[1].status, "IDLE");
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = DispatchOutputObserver::new(FailingWriter);
        let snapshot = VehicleSnapshot {
            id: amb_core::VehicleId(1),
            position: Point::ORIGIN,
            home_base: Point::ORIGIN,
            status: amb_fleet::VehicleStatus::Idle,
            assignment: None,
            scene_timer: None,
            destination: None,
            handled: 0,
        };
        obs.on_tick_end(&TickSummary::default());
        obs.on_snapshot(amb_core::Tick(0), std::slice::from_ref(&snapshot));
        obs.on_snapshot(amb_core::Tick(1), std::slice::from_ref(&snapshot));

        assert!(matches!(obs.finish(), Err(OutputError::Io(_))));
        // Reported once.
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut center = DispatchCenterBuilder::new(Point::new(400.0, 0.0))
            .home_base(Point::new(330.0, 30.0))
            .build()
            .unwrap();
        center.receive(PatientInfo::new("Bo"), Point::new(500.0, 300.0), 2).unwrap();

        let mut obs = DispatchOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        for _ in 0..4 {
            center.tick_with(0.1, &mut obs);
        }
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let times: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(times, ["0.0000", "0.1000", "0.2000", "0.3000"]);
    }
}
