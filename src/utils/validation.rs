use crate::utils::error::{Result, TrackerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TrackerError::InvalidMeasurement {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Converts a sensor reading that represents a count into `u32`.
pub fn validate_count(field_name: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(TrackerError::InvalidMeasurement {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a whole non-negative number".to_string(),
        });
    }
    Ok(value as u32)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidMeasurement {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("duration", 1.0).is_ok());
        assert!(validate_positive("duration", 0.25).is_ok());
        assert!(validate_positive("duration", 0.0).is_err());
        assert!(validate_positive("duration", -1.0).is_err());
        assert!(validate_positive("duration", f64::NAN).is_err());
        assert!(validate_positive("duration", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count("action", 15000.0).unwrap(), 15000);
        assert_eq!(validate_count("action", 0.0).unwrap(), 0);
        assert!(validate_count("action", 1.5).is_err());
        assert!(validate_count("action", -3.0).is_err());
        assert!(validate_count("action", 1e12).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("workout_type", "RUN").is_ok());
        assert!(validate_non_empty_string("workout_type", "  ").is_err());
    }
}
