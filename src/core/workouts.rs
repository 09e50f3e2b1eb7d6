use crate::domain::model::{WorkoutRecord, WorkoutType};
use crate::domain::ports::{Training, M_IN_KM, MIN_IN_H};

/// Float floor division rounding toward negative infinity.
///
/// Derived from the `fmod` remainder rather than `(a / b).floor()`, which can be
/// off by one when the intermediate quotient rounds up to a whole number.
/// A zero result carries the sign of the true quotient.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.record.weight
            / M_IN_KM
            * (self.record.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const SPEED_EXPONENT: i32 = 2;

    /// `height` is in centimetres.
    pub fn new(record: WorkoutRecord, height: f64) -> Self {
        Self { record, height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn get_spent_calories(&self) -> f64 {
        let minutes = self.record.duration * MIN_IN_H;
        let speed_term = floor_div(
            self.get_mean_speed().powi(Self::SPEED_EXPONENT),
            self.height,
        );
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.record.weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.record.weight)
            * minutes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// `length_pool` is in metres, `count_pool` is the number of laps.
    pub fn new(record: WorkoutRecord, length_pool: f64, count_pool: u32) -> Self {
        Self {
            record,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    // Based on pool laps, not strokes.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.record.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight
    }
}

/// Every workout the dispatcher can build.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn record(&self) -> &WorkoutRecord {
        self.inner().record()
    }

    fn training_type(&self) -> WorkoutType {
        self.inner().training_type()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn get_distance(&self) -> f64 {
        self.inner().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.inner().get_mean_speed()
    }

    fn get_spent_calories(&self) -> f64 {
        self.inner().get_spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}
