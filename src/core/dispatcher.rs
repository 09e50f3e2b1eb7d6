use crate::core::workouts::{Running, SportsWalking, Swimming, Workout};
use crate::domain::model::{WorkoutRecord, WorkoutType};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_count, validate_positive};

/// Builds a workout from a sensor package.
///
/// `data` is positional: `action, duration, weight` followed by `height` for
/// walking or `length_pool, count_pool` for swimming. The tag and the number
/// of values are checked before anything is converted or computed.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let kind = WorkoutType::from_tag(workout_type).ok_or_else(|| {
        TrackerError::UnknownWorkoutType {
            tag: workout_type.to_string(),
        }
    })?;

    if data.len() != kind.arity() {
        return Err(TrackerError::InvalidArgumentCount {
            workout_type: kind.name().to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let workout: Workout = match (kind, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(read_record(action, duration, weight)?).into()
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            validate_positive("height", height)?;
            SportsWalking::new(read_record(action, duration, weight)?, height).into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let count_pool = validate_count("count_pool", count_pool)?;
            Swimming::new(
                read_record(action, duration, weight)?,
                length_pool,
                count_pool,
            )
            .into()
        }
        _ => {
            return Err(TrackerError::InvalidArgumentCount {
                workout_type: kind.name().to_string(),
                expected: kind.arity(),
                actual: data.len(),
            })
        }
    };

    tracing::debug!("Built {} workout from {:?}", kind, data);
    Ok(workout)
}

fn read_record(action: f64, duration: f64, weight: f64) -> Result<WorkoutRecord> {
    let action = validate_count("action", action)?;
    validate_positive("duration", duration)?;
    Ok(WorkoutRecord::new(action, duration, weight))
}
