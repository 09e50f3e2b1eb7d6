use crate::core::dispatcher::read_package;
use crate::domain::model::{InfoMessage, Package};
use crate::domain::ports::Training;
use crate::utils::error::{Result, TrackerError};

#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input.
    pub index: usize,
    pub workout_type: String,
    pub error: TrackerError,
}

#[derive(Debug, Default)]
pub struct TrackerReport {
    pub messages: Vec<InfoMessage>,
    pub failures: Vec<PackageFailure>,
}

impl TrackerReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct WorkoutTracker;

impl WorkoutTracker {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, package: &Package) -> Result<InfoMessage> {
        let workout = read_package(&package.workout_type, &package.data)?;
        Ok(workout.show_training_info())
    }

    /// Processes every package in order. A failed package is recorded and the
    /// remaining packages are still processed.
    pub fn run(&self, packages: &[Package]) -> TrackerReport {
        tracing::info!("Processing {} workout packages", packages.len());

        let mut report = TrackerReport::default();
        for (index, package) in packages.iter().enumerate() {
            match self.process(package) {
                Ok(message) => {
                    tracing::debug!(
                        "Package #{} ({}): {:.3} km, {:.3} kcal",
                        index,
                        message.training_type,
                        message.distance,
                        message.calories
                    );
                    report.messages.push(message);
                }
                Err(error) => {
                    tracing::warn!(
                        "Package #{} ({}) rejected: {}",
                        index,
                        package.workout_type,
                        error
                    );
                    report.failures.push(PackageFailure {
                        index,
                        workout_type: package.workout_type.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Processed {} workouts, {} failed",
            report.messages.len(),
            report.failures.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_samples() {
        let report = WorkoutTracker::new().run(&Package::samples());
        assert!(report.is_success());
        let types: Vec<&str> = report
            .messages
            .iter()
            .map(|m| m.training_type.as_str())
            .collect();
        assert_eq!(types, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_failure_does_not_stop_other_packages() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("BIK", vec![1.0, 1.0, 1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0]),
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];

        let report = WorkoutTracker::new().run(&packages);
        assert!(!report.is_success());
        assert_eq!(report.messages.len(), 2);
        assert_eq!(report.messages[0].training_type, "Running");
        assert_eq!(report.messages[1].training_type, "Swimming");

        let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(failed, vec![1, 2]);
        assert!(matches!(
            report.failures[0].error,
            TrackerError::UnknownWorkoutType { .. }
        ));
        assert!(matches!(
            report.failures[1].error,
            TrackerError::InvalidArgumentCount { expected: 4, actual: 3, .. }
        ));
    }

    #[test]
    fn test_run_empty() {
        let report = WorkoutTracker::new().run(&[]);
        assert!(report.is_success());
        assert!(report.messages.is_empty());
    }
}
