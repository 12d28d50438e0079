//! Recording intent for a single mission run.
//!
//! A [`RecordSpec`] is built once, configured through its `record_*` calls,
//! then handed by value to the recorder. Every configuration call on a spec
//! without a destination is a no-op, so an inert spec is always safe to pass
//! around.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::paths::RecordPaths;
use crate::plan::{RecordPlan, VideoPlan};
use crate::temp_dir::{allocate_temp_dir, default_temp_root};

/// Requested video quality.
///
/// Frame width must be divisible by 4 and height by 2 for the encoder; that is
/// checked by whoever configures the video producer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSettings {
    pub frames_per_second: u32,
    /// Bits per second, e.g. `400_000` for 400kbps.
    pub bit_rate: u64,
}

/// What to record from one mission, and where to stage it.
///
/// Not `Clone`: a spec backs exactly one mission run.
#[derive(Debug)]
pub struct RecordSpec {
    destination: String,
    temp_root: PathBuf,
    temp_dir: OnceCell<PathBuf>,
    video: Option<VideoSettings>,
    observations: bool,
    rewards: bool,
    commands: bool,
}

impl Default for RecordSpec {
    /// A spec that records nothing.
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl RecordSpec {
    /// Record into the archive at `destination` (e.g. `data.tgz`).
    ///
    /// Nothing is recorded until channels are enabled. An empty destination
    /// yields the same inert spec as [`RecordSpec::default`].
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            temp_root: default_temp_root(),
            temp_dir: OnceCell::new(),
            video: None,
            observations: false,
            rewards: false,
            commands: false,
        }
    }

    /// Stage under `root` instead of the system temp directory.
    ///
    /// Has no effect once the temporary directory has been allocated.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Some(dir) = self.temp_dir.get() {
            warn!(
                dir = %dir.display(),
                requested_root = %root.display(),
                "temporary directory already allocated; keeping it"
            );
        } else {
            self.temp_root = root;
        }
        self
    }

    /// Request video at the given quality.
    pub fn record_video(&mut self, frames_per_second: u32, bit_rate: u64) {
        if !self.is_recording() {
            debug!("record_video ignored: spec has no destination");
            return;
        }
        if frames_per_second == 0 || bit_rate == 0 {
            warn!(
                frames_per_second,
                bit_rate, "record_video ignored: frame rate and bit rate must be positive"
            );
            return;
        }
        let requested = VideoSettings {
            frames_per_second,
            bit_rate,
        };
        match self.video {
            Some(current) if current != requested => {
                warn!(
                    ?current,
                    ?requested,
                    "video already requested; keeping original settings"
                );
            }
            Some(_) => {}
            None => {
                self.video = Some(requested);
                self.temporary_directory();
            }
        }
    }

    pub fn record_observations(&mut self) {
        if self.enable_channel("observations") {
            self.observations = true;
        }
    }

    pub fn record_rewards(&mut self) {
        if self.enable_channel("rewards") {
            self.rewards = true;
        }
    }

    pub fn record_commands(&mut self) {
        if self.enable_channel("commands") {
            self.commands = true;
        }
    }

    fn enable_channel(&self, channel: &str) -> bool {
        if !self.is_recording() {
            debug!(channel, "channel ignored: spec has no destination");
            return false;
        }
        self.temporary_directory();
        true
    }

    /// Staging directory for this spec, allocated on first call.
    ///
    /// Only the path is chosen; the recorder creates the directory. An inert
    /// spec still returns a path, which nothing is expected to use.
    pub fn temporary_directory(&self) -> &Path {
        self.temp_dir.get_or_init(|| allocate_temp_dir(&self.temp_root))
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn is_recording(&self) -> bool {
        !self.destination.is_empty()
    }

    pub fn is_recording_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn is_recording_observations(&self) -> bool {
        self.observations
    }

    pub fn is_recording_rewards(&self) -> bool {
        self.rewards
    }

    pub fn is_recording_commands(&self) -> bool {
        self.commands
    }

    /// Video quality, present only when video is being recorded.
    pub fn video(&self) -> Option<VideoSettings> {
        self.video
    }

    pub fn video_path(&self) -> Option<PathBuf> {
        self.is_recording_video().then(|| self.paths().video_path)
    }

    pub fn observations_path(&self) -> Option<PathBuf> {
        self.observations.then(|| self.paths().observations_path)
    }

    pub fn rewards_path(&self) -> Option<PathBuf> {
        self.rewards.then(|| self.paths().rewards_path)
    }

    pub fn commands_path(&self) -> Option<PathBuf> {
        self.commands.then(|| self.paths().commands_path)
    }

    /// Mission-init metadata is written for every recorded mission.
    pub fn mission_init_path(&self) -> Option<PathBuf> {
        self.is_recording().then(|| self.paths().mission_init_path)
    }

    fn paths(&self) -> RecordPaths {
        RecordPaths::new(self.temporary_directory())
    }

    /// Hand the spec to a recorder.
    ///
    /// Consumes `self`, so one spec can never back two missions.
    pub fn into_plan(self) -> RecordPlan {
        if !self.is_recording() {
            return RecordPlan::default();
        }
        let video = self.video.and_then(|settings| {
            self.video_path().map(|path| VideoPlan {
                path,
                frames_per_second: settings.frames_per_second,
                bit_rate: settings.bit_rate,
            })
        });
        RecordPlan {
            is_recording: true,
            temporary_directory: Some(self.paths().dir),
            mission_init_path: self.mission_init_path(),
            video,
            observations_path: self.observations_path(),
            rewards_path: self.rewards_path(),
            commands_path: self.commands_path(),
            destination: self.destination,
        }
    }
}
