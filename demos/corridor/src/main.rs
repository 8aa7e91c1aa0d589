//! corridor: walk a crowd down a 4 m × 10 m corridor.
//!
//! Pedestrians are scattered over the top of the corridor and head for an
//! exit in the bottom wall; a pillar halfway down splits the flow.  Output
//! goes to `output/corridor/`:
//! - the three CSV files of `ped_output::CsvWriter`
//! - `pedestrians.json`, the starting crowd as scenario-file elements
//!
//! Pass a scenario file as the first argument to also append the starting
//! crowd to it; the result is written next to it with a `_modified` name.
//! Set `RUST_LOG=debug` for per-arrival logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ped_core::{Cell, ModelConfig, PedestrianId, SimRng, Step, BODY_DIMENSION_M};
use ped_entity::{Obstacle, Pedestrian, Target};
use ped_output::{CsvWriter, DynamicPedestrian, OutputWriter, ScenarioFile, SimOutputObserver};
use ped_sim::{MeasurementZone, ModelBuilder, RunOutcome, SimObserver, StepReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH_M:          u32   = 4;
const LENGTH_M:         u32   = 10;
const PEDESTRIANS:      usize = 20;
const SEED:             u64   = 42;
const MAX_STEPS:        u64   = 500;
const STALL_STEPS:      u64   = 25;
const SNAPSHOT_EVERY:   u64   = 5;
const OUTPUT_DIR:       &str  = "output/corridor";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    arrivals:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, arrivals: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_arrival(&mut self, step: Step, id: PedestrianId, pedestrian: &Pedestrian) {
        self.arrivals += 1;
        self.inner.on_arrival(step, id, pedestrian);
    }

    fn on_step_end(&mut self, report: &StepReport) {
        self.summary_rows += 1;
        self.inner.on_step_end(report);
    }

    fn on_snapshot(&mut self, step: Step, pedestrians: &[Pedestrian]) {
        self.snapshot_rows += pedestrians.len();
        self.inner.on_snapshot(step, pedestrians);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome, pedestrians: &[Pedestrian]) {
        self.inner.on_run_end(outcome, pedestrians);
    }
}

// ── Scenario export ───────────────────────────────────────────────────────────

fn export_crowd(pedestrians: &[Pedestrian], scenario: Option<&Path>) -> Result<()> {
    let elements: Vec<DynamicPedestrian> = pedestrians
        .iter()
        .zip(1..)
        .map(|(p, id)| DynamicPedestrian::from_pedestrian(p, id, BODY_DIMENSION_M))
        .collect();

    let json_path = Path::new(OUTPUT_DIR).join("pedestrians.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&elements)?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    println!("  pedestrians.json     : {} elements", elements.len());

    let Some(path) = scenario else {
        return Ok(());
    };
    let mut file = ScenarioFile::load(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    for element in elements {
        file.add_pedestrian(element)?;
    }
    let out = modified_path(path);
    file.save(&out)?;
    println!("  {:<20} : {} dynamic elements", out.display().to_string(), file.dynamic_element_count());
    Ok(())
}

fn modified_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("scenario");
    let mut name = format!("{stem}{}", ped_output::scenario::MODIFIED_SUFFIX);
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    path.with_file_name(name)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let scenario = std::env::args().nth(1).map(PathBuf::from);

    println!("=== corridor: greedy pedestrian grid ===");
    println!("Corridor: {WIDTH_M} m × {LENGTH_M} m  |  Pedestrians: {PEDESTRIANS}  |  Seed: {SEED}");
    println!();

    // 1. Config: metre dimensions, scaled to body-sized cells.
    let mut config = ModelConfig::meters(WIDTH_M, LENGTH_M);
    config.max_steps             = MAX_STEPS;
    config.stall_steps           = Some(STALL_STEPS);
    config.output_interval_steps = SNAPSHOT_EVERY;
    let dims = config.grid_dims()?;
    let (w, h) = (dims.width as i32, dims.height as i32);
    println!("Grid: {} × {} cells", dims.width, dims.height);

    // 2. Walls, pillar, and an exit in the bottom wall.
    let exit_cols = (w / 2 - 2)..=(w / 2 + 1);
    let walls = Obstacle::line(Cell::new(0, 0), Cell::new(h - 1, 0))
        .into_iter()
        .chain(Obstacle::line(Cell::new(0, w - 1), Cell::new(h - 1, w - 1)))
        .chain(
            Obstacle::line(Cell::new(h - 1, 1), Cell::new(h - 1, w - 2))
                .into_iter()
                .filter(|o| !exit_cols.contains(&o.cell.col)),
        );
    let pillar = Obstacle::line(Cell::new(h / 2, w / 2 - 1), Cell::new(h / 2 + 1, w / 2));
    let exits = exit_cols.clone().map(|col| Target::new(h - 1, col));

    // 3. Speed is measured over the middle third of the corridor.
    let zone = MeasurementZone::new(h / 3, 2 * h / 3, 1, w - 2)?;

    let mut rng = SimRng::new(SEED);
    let mut model = ModelBuilder::new(config)
        .obstacles(walls)
        .obstacles(pillar)
        .targets(exits)
        .measurement_zone(zone)
        .scatter_pedestrians(Cell::new(1, 1), Cell::new(h / 4, w - 2), PEDESTRIANS, &mut rng)?
        .build()?;
    if !model.placement_conflicts().is_empty() {
        warn!(count = model.placement_conflicts().len(), "entities overlap");
    }

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));
    println!("Output: {OUTPUT_DIR}/");
    export_crowd(model.pedestrians(), scenario.as_deref())?;
    println!();

    // 5. Run.
    let t0 = Instant::now();
    let outcome = model.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(%outcome, elapsed_ms = elapsed.as_millis() as u64, "corridor run finished");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Run: {outcome} in {:.3} s", elapsed.as_secs_f64());
    println!("  arrivals             : {}", obs.arrivals);
    println!("  step_summaries.csv   : {} rows", obs.summary_rows);
    println!("  pedestrian_snapshots : {} rows", obs.snapshot_rows);
    println!();

    // 7. Per-pedestrian statistics.
    let fmt_speed = |v: Option<f64>| v.map_or_else(|| "-".to_owned(), |s| format!("{s:.3}"));
    println!(
        "{:<6} {:<9} {:>6} {:>6} {:>10} {:>10}",
        "Name", "Finished", "Steps", "Cells", "Speed", "Zone"
    );
    println!("{}", "-".repeat(52));
    for p in model.pedestrians() {
        println!(
            "{:<6} {:<9} {:>6} {:>6} {:>10} {:>10}",
            p.name,
            if p.is_finished { "yes" } else { "no" },
            p.steps_to_target,
            p.moved_cells,
            fmt_speed(p.actual_speed),
            fmt_speed(p.measured_speed()),
        );
    }

    Ok(())
}
