//! town: one hospital, four ambulances, a 3×3-block town.
//!
//! Calls come in at random houses; the center dispatches, the fleet drives
//! the road grid, and the run ends with CSV output and a short report.
//!
//! Usage:
//!   town [--seed 42] [--secs 120] [--calls-per-min 6] [--config cfg.json] [--output ./output]
//!
//! Set `RUST_LOG=info` (or `debug`) to follow individual calls.

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use amb_core::{PatientInfo, Point, Severity, SimRng};
use amb_dispatch::{
    DispatchCenter, DispatchCenterBuilder, DispatchConfig, DispatchError, EventLog, TickSummary,
};
use amb_fleet::VehicleStatus;
use amb_output::{CsvWriter, DispatchOutputObserver};
use amb_spatial::{GridRouter, TownLayout, TownParams};

// ── Constants ─────────────────────────────────────────────────────────────────

const DT: f32 = 1.0 / 60.0;
/// Gap between the hospital's top edge and its parking row.
const PARKING_OFFSET_Y: f32 = 30.0;
/// Horizontal offsets of the four parking spots from the hospital's centre.
const PARKING_OFFSETS_X: [f32; 4] = [-70.0, -35.0, 35.0, 70.0];
/// Screen-space height of the hospital building above the first road.
const HOSPITAL_ABOVE_GRID: f32 = 100.0;

const NAMES: [&str; 10] =
    ["Ada", "Bo", "Chen", "Dara", "Eli", "Fatima", "Gus", "Hana", "Ivo", "Juno"];
const COMPLAINTS: [&str; 6] =
    ["chest pain", "fall", "breathing difficulty", "burn", "allergic reaction", "fever"];

// ── Arguments ─────────────────────────────────────────────────────────────────

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn load_config(path: Option<&str>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config: DispatchConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// Hospital at the top centre of the town, ambulances parked in a row
/// below it.
fn hospital_and_parking(config: &DispatchConfig, params: &TownParams) -> (Point, Vec<Point>) {
    let grid = &config.grid;
    let map_width = grid.cells_x as f32 * grid.cell_size + params.road_width * 2.0;
    let hospital = Point::new(grid.origin.x + map_width / 2.0, grid.origin.y - HOSPITAL_ABOVE_GRID);
    let parking = PARKING_OFFSETS_X
        .iter()
        .map(|dx| Point::new(hospital.x + dx, hospital.y + PARKING_OFFSET_Y))
        .collect();
    (hospital, parking)
}

// ── Calls ─────────────────────────────────────────────────────────────────────

fn random_call(town: &TownLayout, rng: &mut SimRng) -> Option<(PatientInfo, Point, Severity)> {
    let house = rng.choose(town.houses())?;
    let severity = *rng.choose(&Severity::ALL)?;
    let name = *rng.choose(&NAMES)?;
    let complaint = *rng.choose(&COMPLAINTS)?;
    let patient = PatientInfo::new(name)
        .with_age(rng.gen_range(1..95))
        .with_severity(severity)
        .with_description(complaint)
        .with_house(house.id);
    Some((patient, house.address(), severity))
}

fn status_line(center: &DispatchCenter<GridRouter>) -> String {
    let fleet = center.fleet();
    format!(
        "idle {} | en route {} | on scene {} | returning {} | pending {} | handled {}",
        fleet.count_with_status(VehicleStatus::Idle),
        fleet.count_with_status(VehicleStatus::EnRoute),
        fleet.count_with_status(VehicleStatus::OnScene),
        fleet.count_with_status(VehicleStatus::Returning),
        center.pending_count(),
        center.handled_count(),
    )
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let secs = parse_arg(&args, "--secs", 120.0f32);
    let calls_per_min = parse_arg(&args, "--calls-per-min", 6.0f64);
    let output_dir = str_arg(&args, "--output").unwrap_or("./output");
    let config = load_config(str_arg(&args, "--config"))?;

    println!("=== town: ambulance dispatch ===");

    let mut rng = SimRng::new(seed);
    let params = TownParams::default();
    let town = TownLayout::generate(&config.grid, params, &mut rng.child(1))?;
    let (hospital, parking) = hospital_and_parking(&config, &params);
    println!(
        "  town: {} houses, hospital at {hospital}, {} ambulances",
        town.len(),
        parking.len()
    );

    let mut center = DispatchCenterBuilder::new(hospital)
        .home_bases(parking)
        .config(config)
        .build()?;

    let writer = CsvWriter::new(Path::new(output_dir))
        .with_context(|| format!("opening output in {output_dir}"))?;
    let mut output = DispatchOutputObserver::new(writer);
    let mut log = EventLog::default();

    let ticks = (secs / DT).ceil() as u64;
    let call_chance = (calls_per_min / 60.0 * DT as f64).clamp(0.0, 1.0);
    let mut calls_rng = rng.child(2);
    let mut totals = TickSummary::default();

    let start = Instant::now();
    for t in 0..ticks {
        if calls_rng.gen_bool(call_chance) {
            if let Some((patient, location, severity)) = random_call(&town, &mut calls_rng) {
                let emergency = amb_core::Emergency::new(patient, location, severity.priority());
                match center.receive_emergency_with(emergency, &mut (&mut output, &mut log)) {
                    Ok(_) | Err(DispatchError::CapacityExceeded { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        let summary = center.tick_with(DT, &mut (&mut output, &mut log));
        totals.assigned += summary.assigned;
        totals.arrived_on_scene += summary.arrived_on_scene;
        totals.completed += summary.completed;
        totals.returned += summary.returned;

        if t % 600 == 0 {
            info!("t={:.0}s {}", center.now().secs(), status_line(&center));
        }
    }
    output.finish()?;
    let elapsed = start.elapsed();

    println!("\n  ran {ticks} ticks ({secs:.0} simulated seconds) in {:.2?}", elapsed);
    println!(
        "  received {} | rejected {} | assigned {} | on scene {} | completed {} | back at base {}",
        center.total_received(),
        center.rejected_count(),
        totals.assigned,
        totals.arrived_on_scene,
        totals.completed,
        totals.returned,
    );
    println!("  {}", status_line(&center));

    println!("\n  recent activity:");
    for entry in log.entries() {
        println!("    [{:>7.1}s] {}", entry.time.secs(), entry.event);
    }

    let pending = center.list_pending();
    if !pending.is_empty() {
        println!("\n  still waiting:");
        for e in &pending {
            println!("    #{} {} ({})", e.id.0, e.patient.name, e.patient.severity);
        }
    }

    println!("\n  output written to {output_dir}/");
    Ok(())
}
