//! office: one full evacuation run on the default office floor.
//!
//! ```text
//! office [SCENARIO.json] [OUTPUT_BASE]
//! ```
//!
//! The optional scenario file holds a `config` (any subset of `SimConfig`)
//! and `params` (population, exit count, hazard sources); missing fields use
//! the defaults.  Logs land in `OUTPUT_BASE/run_<unix-secs>/` (default base
//! `runs`).  Set `RUST_LOG=debug` for per-placement detail.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use evac_core::{RunParams, SimConfig};
use evac_output::{CsvWriter, OutputWriter, SimOutputObserver, create_run_dir};
use evac_sim::{Phase, RoundRecord, SimBuilder, SimObserver, Statistics, TickRecord};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_BASE: &str = "runs";
const PROGRESS_EVERY_TICKS: u64 = 25;
const PROGRESS_EVERY_ROUNDS: u32 = 10;

// ── Scenario file ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct Scenario {
    config: SimConfig,
    params: RunParams,
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Forwards to the CSV observer and prints a line now and then.
struct ProgressObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    rounds: usize,
    ticks:  usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, rounds: 0, ticks: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        println!("phase: {from} -> {to}");
    }

    fn on_round_end(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        if record.round.is_multiple_of(PROGRESS_EVERY_ROUNDS) {
            println!(
                "  round {:>4}  successful {:>4}  best path {:>4}  mean trail {:.3}",
                record.round, record.successful, record.best_path_length, record.mean_trail
            );
        }
        self.inner.on_round_end(record);
    }

    fn on_tick_end(&mut self, record: &TickRecord) {
        self.ticks += 1;
        if record.tick.is_multiple_of(PROGRESS_EVERY_TICKS) {
            println!(
                "  tick {:>5}  evacuated {:>4}  remaining {:>4}  hazard cells {:>4}",
                record.tick.0, record.evacuated, record.remaining, record.hazard_cells
            );
        }
        self.inner.on_tick_end(record);
    }

    fn on_finished(&mut self, stats: &Statistics) {
        self.inner.on_finished(stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let scenario = match args.next() {
        Some(path) => load_scenario(Path::new(&path))?,
        None => Scenario::default(),
    };
    let output_base = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_BASE), PathBuf::from);

    let Scenario { config, params } = scenario;
    let params = params.clamped(&config.bounds);

    println!("=== office: pheromone-guided evacuation ===");
    println!(
        "Grid: {0}×{0} {1:?}  |  Population: {2}  |  Exits: {3}  |  Hazards: {4}  |  Seed: {5}",
        config.grid.size, config.grid.layout, params.population, params.exit_count,
        params.hazard_sources, config.seed,
    );
    println!();

    // 1. Build and initialize.
    let mut sim = SimBuilder::new(config).build()?;
    sim.initialize(params);
    info!(exits = sim.grid().exits().len(), evacuees = sim.evacuees().len(), "floor ready");

    // 2. Output.
    let run_dir = create_run_dir(&output_base)?;
    let writer = CsvWriter::new(&run_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.start_with(&mut obs);
    let steps = sim.run_to_completion(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let stats = sim.current_statistics();
    println!();
    println!("Simulation complete in {:.3} s ({steps} steps)", elapsed.as_secs_f64());
    println!("  convergence.csv : {} rows", obs.rounds);
    println!("  evacuation.csv  : {} rows", obs.ticks);
    println!("  written to      : {}", run_dir.display());
    println!();
    println!("{:<22} {:>10}", "Total", stats.total);
    println!("{:<22} {:>10}", "Evacuated", stats.evacuated);
    println!("{:<22} {:>10}", "Remaining", stats.remaining);
    println!("{:<22} {:>10}", "Casualties", stats.casualties);
    println!("{:<22} {:>9.1}%", "Progress", stats.progress_pct);
    println!("{:<22} {:>10.2}", "Mean evacuation time", stats.mean_evacuation_time);
    println!("{:<22} {:>10}", "Reroutes", stats.total_reroutes);

    Ok(())
}
