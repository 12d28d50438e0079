//! Materializing a plan's staging directory.
//!
//! This is the recorder side of the contract: [`crate::spec::RecordSpec`] only
//! names the directory, and allocation failures surface here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::plan::RecordPlan;

/// Manifest file written into every prepared staging directory.
pub const PLAN_FILE: &str = "record_plan.json";

/// Create the staging directory for `plan` and write its manifest.
///
/// Returns `None` for an inert plan. Fails if the staging directory already
/// exists, since a fresh name per mission is the only thing keeping concurrent
/// missions apart.
pub fn prepare_staging(plan: &RecordPlan) -> Result<Option<PathBuf>> {
    let Some(dir) = plan.temporary_directory.as_deref() else {
        debug!("inert plan; nothing to stage");
        return Ok(None);
    };
    if let Some(root) = dir.parent() {
        fs::create_dir_all(root)
            .with_context(|| format!("create staging root {}", root.display()))?;
    }
    if dir.exists() {
        bail!("staging directory already exists: {}", dir.display());
    }
    fs::create_dir(dir).with_context(|| format!("create staging directory {}", dir.display()))?;

    let manifest = dir.join(PLAN_FILE);
    let mut buf = serde_json::to_string_pretty(plan).context("serialize record plan")?;
    buf.push('\n');
    write_atomic(&manifest, &buf)?;

    info!(
        dir = %dir.display(),
        destination = %plan.destination,
        channels = plan.channel_count(),
        "staging directory prepared"
    );
    Ok(Some(dir.to_path_buf()))
}

/// Read a manifest written by [`prepare_staging`].
pub fn load_plan(path: &Path) -> Result<RecordPlan> {
    debug!(path = %path.display(), "loading record plan");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read record plan {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse record plan {}", path.display()))
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp record plan {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace record plan {}", path.display()))?;
    Ok(())
}
