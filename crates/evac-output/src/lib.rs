//! `evac-output`: run logs for the evacuation simulator.
//!
//! Two tables per run, each written as CSV with a header row:
//!
//! | File              | Columns                                          |
//! |-------------------|--------------------------------------------------|
//! | `convergence.csv` | `round,best_path_length`                         |
//! | `evacuation.csv`  | `tick,evacuated,remaining,hazard_cells`          |
//!
//! Rows can be streamed during a run through [`SimOutputObserver`], or
//! dumped afterwards from the controller's logs with [`write_run_logs`].
//! [`load_convergence`] and [`load_evacuation`] read the tables back for
//! offline consumers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{create_run_dir, CsvWriter, SimOutputObserver};
//!
//! let dir = create_run_dir(Path::new("runs"))?;
//! let mut obs = SimOutputObserver::new(CsvWriter::new(&dir)?);
//! sim.run_to_completion(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod reader;
pub mod row;
pub mod run_dir;
pub mod writer;


pub use csv::{CONVERGENCE_FILE, CsvWriter, EVACUATION_FILE, write_run_logs};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use reader::{load_convergence, load_convergence_reader, load_evacuation, load_evacuation_reader};
pub use row::{ConvergenceRow, EvacuationRow};
pub use run_dir::create_run_dir;
pub use writer::OutputWriter;
