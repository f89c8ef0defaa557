//! Per-run output directories.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::OutputResult;

/// Create `base/run_<unix-seconds>` (and `base` itself if needed).
///
/// Two runs started within the same second get `run_<secs>_1`,
/// `run_<secs>_2`, … instead of sharing a directory.
pub fn create_run_dir(base: &Path) -> OutputResult<PathBuf> {
    std::fs::create_dir_all(base)?;
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let stem = format!("run_{secs}");
    let mut dir = base.join(&stem);
    let mut n = 0u32;
    loop {
        match std::fs::create_dir(&dir) {
            Ok(()) => break,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                n += 1;
                dir = base.join(format!("{stem}_{n}"));
            }
            Err(e) => return Err(e.into()),
        }
    }
    info!(dir = %dir.display(), "run directory created");
    Ok(dir)
}
