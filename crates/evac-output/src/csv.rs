//! CSV output backend.
//!
//! Creates two files in the configured directory:
//! - `convergence.csv`
//! - `evacuation.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use evac_sim::{RoundRecord, TickRecord};

use crate::writer::OutputWriter;
use crate::{ConvergenceRow, EvacuationRow, OutputResult};

pub const CONVERGENCE_FILE: &str = "convergence.csv";
pub const EVACUATION_FILE:  &str = "evacuation.csv";

const CONVERGENCE_HEADER: [&str; 2] = ["round", "best_path_length"];
const EVACUATION_HEADER:  [&str; 4] = ["tick", "evacuated", "remaining", "hazard_cells"];

/// Writes the run logs to two CSV files.
pub struct CsvWriter {
    convergence: Writer<File>,
    evacuation:  Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows, so even a run that never reaches evacuation leaves well-formed
    /// tables.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut convergence = headerless(&dir.join(CONVERGENCE_FILE))?;
        convergence.write_record(CONVERGENCE_HEADER)?;

        let mut evacuation = headerless(&dir.join(EVACUATION_FILE))?;
        evacuation.write_record(EVACUATION_HEADER)?;

        Ok(Self { convergence, evacuation, finished: false })
    }
}

fn headerless(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, row: &ConvergenceRow) -> OutputResult<()> {
        self.convergence.serialize(row)?;
        Ok(())
    }

    fn write_tick(&mut self, row: &EvacuationRow) -> OutputResult<()> {
        self.evacuation.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.convergence.flush()?;
        self.evacuation.flush()?;
        Ok(())
    }
}

/// Dump a finished (or paused) run's logs to `dir` in one go.
///
/// ```rust,ignore
/// write_run_logs(&dir, sim.exploration_log(), sim.evacuation_log())?;
/// ```
pub fn write_run_logs(dir: &Path, rounds: &[RoundRecord], ticks: &[TickRecord]) -> OutputResult<()> {
    let mut w = CsvWriter::new(dir)?;
    for r in rounds {
        w.write_round(&r.into())?;
    }
    for t in ticks {
        w.write_tick(&t.into())?;
    }
    w.finish()
}
