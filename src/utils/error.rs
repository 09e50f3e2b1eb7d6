use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unrecognized workout type: {tag}")]
    UnknownWorkoutType { tag: String },

    #[error("Invalid argument count for {workout_type}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        workout_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidMeasurement {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Package,
    Configuration,
    System,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::UnknownWorkoutType { .. }
            | TrackerError::InvalidArgumentCount { .. }
            | TrackerError::InvalidMeasurement { .. } => ErrorCategory::Package,
            TrackerError::ConfigError { .. } => ErrorCategory::Configuration,
            TrackerError::IoError(_)
            | TrackerError::SerializationError(_)
            | TrackerError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TrackerError::UnknownWorkoutType { .. } => {
                "Use one of the supported workout types: SWM, RUN, WLK".to_string()
            }
            TrackerError::InvalidArgumentCount { expected, .. } => format!(
                "Provide exactly {} values: action, duration, weight and the workout specific fields",
                expected
            ),
            TrackerError::InvalidMeasurement { field, .. } => {
                format!("Check the sensor value supplied for '{}'", field)
            }
            TrackerError::ConfigError { .. } => {
                "Make sure the packages file exists and is valid TOML".to_string()
            }
            TrackerError::IoError(_) => "Check file paths and permissions".to_string(),
            TrackerError::SerializationError(_) | TrackerError::CsvError(_) => {
                "Try a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::UnknownWorkoutType { tag } => {
                format!("Workout type '{}' is not supported", tag)
            }
            TrackerError::InvalidArgumentCount {
                workout_type,
                expected,
                actual,
            } => format!(
                "{} expects {} sensor values but received {}",
                workout_type, expected, actual
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = TrackerError::UnknownWorkoutType {
            tag: "BIKE".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Package);

        let err = TrackerError::ConfigError {
            message: "broken".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = TrackerError::InvalidArgumentCount {
            workout_type: "Running".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.user_friendly_message(),
            "Running expects 3 sensor values but received 2"
        );
        assert!(err.recovery_suggestion().contains('3'));
    }
}
