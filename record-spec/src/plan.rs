//! Read-only snapshot a recorder works from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Everything a recorder needs from a consumed [`crate::spec::RecordSpec`].
///
/// Channel paths are `None` when the channel is off. An inert plan (no
/// destination) has no staging directory at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPlan {
    pub destination: String,
    pub is_recording: bool,
    pub temporary_directory: Option<PathBuf>,
    pub mission_init_path: Option<PathBuf>,
    pub video: Option<VideoPlan>,
    pub observations_path: Option<PathBuf>,
    pub rewards_path: Option<PathBuf>,
    pub commands_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPlan {
    pub path: PathBuf,
    pub frames_per_second: u32,
    pub bit_rate: u64,
}

impl RecordPlan {
    /// Number of optional channels enabled (mission-init is not counted).
    pub fn channel_count(&self) -> usize {
        [
            self.video.is_some(),
            self.observations_path.is_some(),
            self.rewards_path.is_some(),
            self.commands_path.is_some(),
        ]
        .into_iter()
        .filter(|enabled| *enabled)
        .count()
    }

    /// Every artifact path the recorder is expected to produce, in a fixed order.
    pub fn artifact_paths(&self) -> Vec<&PathBuf> {
        let video = self.video.as_ref().map(|video| &video.path);
        [
            self.mission_init_path.as_ref(),
            video,
            self.observations_path.as_ref(),
            self.rewards_path.as_ref(),
            self.commands_path.as_ref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
