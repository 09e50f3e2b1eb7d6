use crate::domain::model::{InfoMessage, WorkoutRecord, WorkoutType};

/// Kilometres travelled per action unit unless a workout overrides it.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Shared capability of every workout type.
///
/// `get_spent_calories` has no default: each workout supplies its own formula.
pub trait Training {
    fn record(&self) -> &WorkoutRecord;

    fn training_type(&self) -> WorkoutType;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn get_distance(&self) -> f64 {
        self.record().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.record().duration
    }

    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().name().to_string(),
            duration: self.record().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}
