//! Staging directory naming.
//!
//! Names are collision-free across concurrent missions on one host: the
//! process id and a process-wide sequence separate missions inside and across
//! processes, and the timestamp plus random suffix guard against pid reuse.
//! Only the path is computed; creating the directory is the recorder's job
//! (see [`crate::staging`]).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use tracing::debug;

/// Directory under the system temp dir used when no root is configured.
pub const DEFAULT_TEMP_ROOT_NAME: &str = "mission_records";

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Default parent for staging directories (`<system temp>/mission_records`).
pub fn default_temp_root() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_TEMP_ROOT_NAME)
}

/// Allocate a fresh staging directory path under `root`.
pub fn allocate_temp_dir(root: &Path) -> PathBuf {
    let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let name = build_temp_dir_name(
        &generate_timestamp(),
        std::process::id(),
        sequence,
        &generate_short_id(),
    );
    let dir = root.join(name);
    debug!(dir = %dir.display(), "allocated staging directory");
    dir
}

pub fn build_temp_dir_name(timestamp: &str, pid: u32, sequence: u64, short_id: &str) -> String {
    format!("{timestamp}_{pid}_{sequence}_{short_id}")
}

fn generate_timestamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S").to_string()
}

fn generate_short_id() -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(6)
        .collect::<String>()
        .to_lowercase()
}
