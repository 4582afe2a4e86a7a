// Smart Ride Booking - Core Library
// Fare calculation, rider discounts and the booking ledger, plus the
// interactive session used by the CLI

pub mod validation;
pub mod vehicle;
pub mod rider;
pub mod ledger;
pub mod fleet;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use validation::{ValidationError, ValidationResult};
pub use vehicle::{Vehicle, VehicleKind};
pub use rider::Rider;
pub use ledger::{BookingLedger, LedgerSummary, RideRecord};
pub use fleet::{Fleet, FleetEntry, MenuChoice};
pub use report::{format_receipt, format_summary};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
