use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensor readings shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    /// Steps for running and walking, strokes for swimming.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl WorkoutRecord {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Sensor package tag.
    pub fn tag(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this type carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw sensor package: a workout tag and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Reference packages used when no packages file is given.
    pub fn samples() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

/// Computed summary of a single workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}
