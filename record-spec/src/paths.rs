//! Canonical artifact paths inside a staging directory.

use std::path::{Path, PathBuf};

pub const VIDEO_FILE: &str = "video.mp4";
pub const OBSERVATIONS_FILE: &str = "observations.txt";
pub const REWARDS_FILE: &str = "rewards.txt";
pub const COMMANDS_FILE: &str = "commands.txt";
pub const MISSION_INIT_FILE: &str = "missionInit.xml";

/// All artifact paths for one staging directory.
///
/// Every channel has a fixed file name, so paths never depend on which other
/// channels are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaths {
    pub dir: PathBuf,
    pub video_path: PathBuf,
    pub observations_path: PathBuf,
    pub rewards_path: PathBuf,
    pub commands_path: PathBuf,
    pub mission_init_path: PathBuf,
}

impl RecordPaths {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            video_path: dir.join(VIDEO_FILE),
            observations_path: dir.join(OBSERVATIONS_FILE),
            rewards_path: dir.join(REWARDS_FILE),
            commands_path: dir.join(COMMANDS_FILE),
            mission_init_path: dir.join(MISSION_INIT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_paths_are_stable() {
        let paths = RecordPaths::new(Path::new("/tmp/mission_records/run-1"));

        assert_eq!(paths.dir, Path::new("/tmp/mission_records/run-1"));
        assert!(paths.video_path.ends_with("run-1/video.mp4"));
        assert!(paths.observations_path.ends_with("run-1/observations.txt"));
        assert!(paths.rewards_path.ends_with("run-1/rewards.txt"));
        assert!(paths.commands_path.ends_with("run-1/commands.txt"));
        assert!(paths.mission_init_path.ends_with("run-1/missionInit.xml"));
    }

    #[test]
    fn channel_paths_are_distinct() {
        let paths = RecordPaths::new(Path::new("staging"));
        let mut all = vec![
            &paths.video_path,
            &paths.observations_path,
            &paths.rewards_path,
            &paths.commands_path,
            &paths.mission_init_path,
        ];
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 5);
    }
}
