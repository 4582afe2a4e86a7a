// ✅ Input Validation
// Field-level checks shared by vehicles, riders and the booking ledger

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl ValidationError {
    pub fn new(context: &str, field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.into(),
            context: context.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// FIELD CHECKS
// ============================================================================

/// Distance must be a finite number of kilometres greater than zero
pub fn validate_distance(distance_km: f64) -> ValidationResult<f64> {
    if !distance_km.is_finite() {
        return Err(ValidationError::new(
            "Ride",
            "distance_km",
            format!("Must be a finite number, got {}", distance_km),
        ));
    }

    if distance_km <= 0.0 {
        return Err(ValidationError::new(
            "Ride",
            "distance_km",
            format!("Must be greater than 0, got {}", distance_km),
        ));
    }

    Ok(distance_km)
}

/// Rate must be finite and non-negative (a free vehicle is allowed)
pub fn validate_rate(rate_per_km: f64) -> ValidationResult<f64> {
    if !rate_per_km.is_finite() || rate_per_km < 0.0 {
        return Err(ValidationError::new(
            "Vehicle",
            "rate_per_km",
            format!("Must be a finite number >= 0, got {}", rate_per_km),
        ));
    }

    Ok(rate_per_km)
}

/// Trims the value and rejects it when nothing is left
pub fn validate_name(context: &str, field: &str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(context, field, "Required field is empty"));
    }

    Ok(trimmed.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_distance_accepted() {
        assert_eq!(validate_distance(12.5).unwrap(), 12.5);
    }

    #[test]
    fn test_zero_and_negative_distance_rejected() {
        let err = validate_distance(0.0).unwrap_err();
        assert_eq!(err.field, "distance_km");
        assert_eq!(err.context, "Ride");

        assert!(validate_distance(-3.0).is_err());
    }

    #[test]
    fn test_non_finite_distance_rejected() {
        assert!(validate_distance(f64::NAN).is_err());
        assert!(validate_distance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rate_validation() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(50.0).is_ok());
        assert!(validate_rate(-1.0).is_err());
        assert!(validate_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("Rider", "name", "  Ali Khan ").unwrap(), "Ali Khan");
        assert!(validate_name("Rider", "name", "   ").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new("Ride", "distance_km", "Must be greater than 0, got 0");
        assert_eq!(err.to_string(), "[Ride] distance_km: Must be greater than 0, got 0");
    }
}
