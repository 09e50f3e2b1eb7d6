pub mod dispatcher;
pub mod summary;
pub mod tracker;
pub mod workouts;

pub use crate::domain::model::{InfoMessage, Package, WorkoutRecord, WorkoutType};
pub use crate::domain::ports::Training;
pub use crate::utils::error::Result;
