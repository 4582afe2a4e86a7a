// 📒 Booking Ledger - Append-only ride history for one rider
//
// Each booked ride becomes an immutable RideRecord.
// Records keep booking order; the total is always derived, never stored.

use crate::rider::Rider;
use crate::validation::ValidationResult;
use crate::vehicle::{Vehicle, VehicleKind};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

// ============================================================================
// RIDE RECORD
// ============================================================================

/// One booked ride. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideRecord {
    /// Stable identity (UUID v4)
    pub id: String,

    pub booked_at: DateTime<Utc>,

    /// Vehicle display name (brand)
    pub vehicle: String,

    pub kind: VehicleKind,

    pub distance_km: f64,

    /// Category-adjusted fare before the rider discount
    pub base_fare: f64,

    pub discount_rate: f64,

    pub final_fare: f64,
}

// ============================================================================
// LEDGER SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary<'a> {
    pub records: &'a [RideRecord],
    pub total_payable: f64,
}

// ============================================================================
// BOOKING LEDGER
// ============================================================================

#[derive(Debug, Clone)]
pub struct BookingLedger {
    rider: Rider,
    rides: Vec<RideRecord>,
}

impl BookingLedger {
    pub fn new(rider: Rider) -> Self {
        BookingLedger {
            rider,
            rides: Vec::new(),
        }
    }

    pub fn rider(&self) -> &Rider {
        &self.rider
    }

    /// Rides in booking order
    pub fn rides(&self) -> &[RideRecord] {
        &self.rides
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Price a ride for this ledger's rider and append it
    pub fn add_ride(&mut self, vehicle: &Vehicle, distance_km: f64) -> ValidationResult<RideRecord> {
        let base_fare = vehicle.calculate_fare(distance_km)?;
        let discount_rate = self.rider.discount_rate();
        let final_fare = base_fare * (1.0 - discount_rate);

        let record = RideRecord {
            id: uuid::Uuid::new_v4().to_string(),
            booked_at: Utc::now(),
            vehicle: vehicle.name().to_string(),
            kind: vehicle.kind(),
            distance_km,
            base_fare,
            discount_rate,
            final_fare,
        };

        tracing::debug!(
            ride_id = %record.id,
            vehicle = %record.vehicle,
            kind = %record.kind,
            distance_km,
            base_fare,
            discount_rate,
            final_fare,
            "ride priced"
        );

        self.rides.push(record.clone());
        Ok(record)
    }

    pub fn total_payable(&self) -> f64 {
        self.rides.iter().fold(0.0, |total, r| total + r.final_fare)
    }

    pub fn summary(&self) -> LedgerSummary<'_> {
        LedgerSummary {
            records: &self.rides,
            total_payable: self.total_payable(),
        }
    }

    /// Write the ride history as CSV (header row, booking order)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        for ride in &self.rides {
            wtr.serialize(ride)
                .with_context(|| format!("Failed to serialize ride {}", ride.id))?;
        }

        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }

    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;

        self.write_csv(file)?;

        tracing::info!(path = %path.display(), rides = self.rides.len(), "ride history exported");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
