//! Readers for the two run-log tables.
//!
//! Columns are matched by header name, so extra columns are ignored and
//! column order does not matter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{ConvergenceRow, EvacuationRow, OutputResult};

/// Load `convergence.csv` (or any file with the same columns).
pub fn load_convergence(path: &Path) -> OutputResult<Vec<ConvergenceRow>> {
    load_convergence_reader(File::open(path)?)
}

/// Like [`load_convergence`] but accepts any `Read` source.
pub fn load_convergence_reader<R: Read>(reader: R) -> OutputResult<Vec<ConvergenceRow>> {
    load_rows(reader)
}

/// Load `evacuation.csv` (or any file with the same columns).
pub fn load_evacuation(path: &Path) -> OutputResult<Vec<EvacuationRow>> {
    load_evacuation_reader(File::open(path)?)
}

/// Like [`load_evacuation`] but accepts any `Read` source.
pub fn load_evacuation_reader<R: Read>(reader: R) -> OutputResult<Vec<EvacuationRow>> {
    load_rows(reader)
}

fn load_rows<T: DeserializeOwned, R: Read>(reader: R) -> OutputResult<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
