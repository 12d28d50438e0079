//! Test-only helpers for building specs staged inside a temp directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::spec::RecordSpec;

/// A throwaway staging root that is removed on drop.
pub struct TestStaging {
    temp: TempDir,
}

impl TestStaging {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Staging root handed to specs (not created until something stages).
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("mission_records")
    }

    /// Active spec for `destination`, staged under [`TestStaging::root`].
    pub fn spec(&self, destination: &str) -> RecordSpec {
        RecordSpec::new(destination).with_temp_root(self.root())
    }

    /// Active spec with every channel enabled.
    pub fn full_spec(&self, destination: &str) -> RecordSpec {
        let mut spec = self.spec(destination);
        spec.record_video(30, 400_000);
        spec.record_observations();
        spec.record_rewards();
        spec.record_commands();
        spec
    }
}
