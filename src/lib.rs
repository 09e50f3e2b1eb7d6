pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::packages::PackagesConfig;
pub use self::core::{
    dispatcher::read_package,
    summary::{render_reports, OutputFormat},
    tracker::{TrackerReport, WorkoutTracker},
    workouts::{Running, SportsWalking, Swimming, Workout},
};
pub use domain::model::{InfoMessage, Package, WorkoutRecord, WorkoutType};
pub use domain::ports::Training;
pub use utils::error::{Result, TrackerError};
