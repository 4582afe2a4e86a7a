// 🚗 Vehicle Categories - Fare formulas
// One shared base formula, refined per category (Car, Bike, Bus)

use crate::validation::{
    validate_distance, validate_name, validate_rate, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// FARE CONSTANTS
// ============================================================================

/// Rides shorter than this pay the short-trip surcharge
pub const LONG_TRIP_THRESHOLD_KM: f64 = 50.0;
pub const SHORT_TRIP_SURCHARGE: f64 = 100.0;
pub const LONG_TRIP_SURCHARGE: f64 = 250.0;

pub const CAR_SERVICE_CHARGE: f64 = 50.0;
pub const BIKE_DISCOUNT: f64 = 0.10;

/// Bus rides strictly longer than this get the flat bus discount
pub const BUS_DISCOUNT_THRESHOLD_KM: f64 = 100.0;
pub const BUS_FLAT_DISCOUNT: f64 = 200.0;

// ============================================================================
// VEHICLE KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
    Bus,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bike => "Bike",
            VehicleKind::Bus => "Bus",
        }
    }

    /// Apply the category adjustment to a base-formula fare
    fn adjust(&self, base: f64, distance_km: f64) -> f64 {
        match self {
            VehicleKind::Car => base + CAR_SERVICE_CHARGE,
            VehicleKind::Bike => base * (1.0 - BIKE_DISCOUNT),
            VehicleKind::Bus => {
                if distance_km > BUS_DISCOUNT_THRESHOLD_KM {
                    base - BUS_FLAT_DISCOUNT
                } else {
                    base
                }
            }
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VEHICLE
// ============================================================================

/// A bookable vehicle: category tag plus display name and per-km rate.
///
/// Fields are private so a constructed vehicle always holds a valid rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    kind: VehicleKind,
    name: String,
    rate_per_km: f64,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, name: &str, rate_per_km: f64) -> ValidationResult<Self> {
        Ok(Vehicle {
            kind,
            name: validate_name("Vehicle", "name", name)?,
            rate_per_km: validate_rate(rate_per_km)?,
        })
    }

    /// Fixed vehicles whose name and rate are known to be valid
    pub(crate) fn preset(kind: VehicleKind, name: &str, rate_per_km: f64) -> Self {
        Vehicle {
            kind,
            name: name.to_string(),
            rate_per_km,
        }
    }

    pub fn car(name: &str, rate_per_km: f64) -> ValidationResult<Self> {
        Self::new(VehicleKind::Car, name, rate_per_km)
    }

    pub fn bike(name: &str, rate_per_km: f64) -> ValidationResult<Self> {
        Self::new(VehicleKind::Bike, name, rate_per_km)
    }

    pub fn bus(name: &str, rate_per_km: f64) -> ValidationResult<Self> {
        Self::new(VehicleKind::Bus, name, rate_per_km)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    /// Shared formula: distance times rate plus the trip-length surcharge
    pub fn base_fare(&self, distance_km: f64) -> ValidationResult<f64> {
        let distance_km = validate_distance(distance_km)?;

        let surcharge = if distance_km < LONG_TRIP_THRESHOLD_KM {
            SHORT_TRIP_SURCHARGE
        } else {
            LONG_TRIP_SURCHARGE
        };

        Ok(distance_km * self.rate_per_km + surcharge)
    }

    /// Category-adjusted fare, never below zero and always finite
    pub fn calculate_fare(&self, distance_km: f64) -> ValidationResult<f64> {
        let base = self.base_fare(distance_km)?;
        let fare = self.kind.adjust(base, distance_km);

        if !fare.is_finite() {
            return Err(ValidationError::new(
                "Ride",
                "fare",
                format!("Fare for {} km at {}/km is out of range", distance_km, self.rate_per_km),
            ));
        }

        Ok(fare.max(0.0))
    }
}

// ============================================================================
// TESTS
// ============================================================================
