//! Recording configuration (TOML).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spec::RecordSpec;
use crate::temp_dir::default_temp_root;

/// Recording configuration.
///
/// Missing fields fall back to defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordConfig {
    /// Parent of per-mission staging directories. Defaults to
    /// `<system temp>/mission_records` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_root: Option<PathBuf>,

    pub video: VideoConfig,
}

/// Video quality used when a caller asks for video without specifying one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoConfig {
    pub frames_per_second: u32,
    /// Bits per second.
    pub bit_rate: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 20,
            bit_rate: 400_000,
        }
    }
}

impl RecordConfig {
    pub fn validate(&self) -> Result<()> {
        if self.video.frames_per_second == 0 {
            return Err(anyhow!("video.frames_per_second must be > 0"));
        }
        if self.video.bit_rate == 0 {
            return Err(anyhow!("video.bit_rate must be > 0"));
        }
        if self
            .temp_root
            .as_ref()
            .is_some_and(|root| root.as_os_str().is_empty())
        {
            return Err(anyhow!("temp_root must not be empty when set"));
        }
        Ok(())
    }

    /// Effective staging root.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(default_temp_root)
    }

    /// Start a spec for `destination`, staged under the configured root.
    pub fn spec(&self, destination: impl Into<String>) -> RecordSpec {
        RecordSpec::new(destination).with_temp_root(self.temp_root())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RecordConfig::default()`.
pub fn load_config(path: &Path) -> Result<RecordConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        let cfg = RecordConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RecordConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RecordConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RecordConfig::default());
        assert_eq!(cfg.temp_root(), default_temp_root());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("record.toml");
        let cfg = RecordConfig {
            temp_root: Some(temp.path().join("staging")),
            video: VideoConfig {
                frames_per_second: 30,
                bit_rate: 800_000,
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("record.toml");
        fs::write(&path, "[video]\nframes_per_second = 60\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.video.frames_per_second, 60);
        assert_eq!(cfg.video.bit_rate, 400_000);
        assert_eq!(cfg.temp_root, None);
    }

    #[test]
    fn rejects_zero_video_quality() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("record.toml");
        fs::write(&path, "[video]\nbit_rate = 0\n").expect("write");

        let err = load_config(&path).expect_err("zero bit rate");
        assert!(format!("{err:#}").contains("video.bit_rate must be > 0"));
    }

    #[test]
    fn rejects_empty_temp_root() {
        let cfg = RecordConfig {
            temp_root: Some(PathBuf::new()),
            ..RecordConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn spec_uses_configured_root() {
        let cfg = RecordConfig {
            temp_root: Some(PathBuf::from("/data/staging")),
            ..RecordConfig::default()
        };
        let spec = cfg.spec("mission.tgz");
        assert!(spec.is_recording());
        assert!(spec.temporary_directory().starts_with("/data/staging"));
    }
}
