//! Recording intent for a single mission run.
//!
//! A [`spec::RecordSpec`] says which artifacts a mission recorder should
//! capture (video, observations, rewards, commands, and the mission-init
//! metadata) and where they are staged before being packaged into the
//! destination archive. The split mirrors who owns side effects:
//!
//! - **Intent** ([`spec`], [`paths`], [`temp_dir`], [`plan`]): pure values and
//!   path naming. Nothing here touches the filesystem.
//! - **Materialization** ([`staging`], [`config`]): creating the staging
//!   directory, writing the plan manifest, reading configuration.
//!
//! A spec is single-use. The recorder takes it by value with
//! [`spec::RecordSpec::into_plan`], so it cannot back a second mission.

pub mod config;
pub mod logging;
pub mod paths;
pub mod plan;
pub mod spec;
pub mod staging;
pub mod temp_dir;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
