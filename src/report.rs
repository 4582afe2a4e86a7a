// 🧾 Report Formatting - Receipts and ride summaries as plain text

use crate::ledger::{LedgerSummary, RideRecord};

pub const CURRENCY: &str = "Rs.";

const SUMMARY_TITLE: &str = "======================== Ride Summary ========================";
const SUMMARY_RULE: &str = "--------------------------------------------------------------";

/// Per-ride breakdown printed right after booking
pub fn format_receipt(record: &RideRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Ride Booked with {} for {} km.\n",
        record.vehicle, record.distance_km
    ));
    out.push_str(&format!("Base Fare : {} {:.2}\n", CURRENCY, record.base_fare));
    if record.discount_rate > 0.0 {
        out.push_str(&format!(
            "Discount Applied ({:.0}%)\n",
            record.discount_rate * 100.0
        ));
    }
    out.push_str(&format!("Final Fare : {} {:.2}\n", CURRENCY, record.final_fare));

    out
}

/// One line per ride in booking order, then the total
pub fn format_summary(summary: &LedgerSummary<'_>) -> String {
    let mut out = String::new();

    out.push_str(SUMMARY_TITLE);
    out.push('\n');

    for ride in summary.records {
        out.push_str(&format!(
            "{:10} | {} KM | Base : {}{:.2} | Final : {} {:.2}\n",
            ride.vehicle, ride.distance_km, CURRENCY, ride.base_fare, CURRENCY, ride.final_fare
        ));
    }

    out.push_str(SUMMARY_RULE);
    out.push('\n');
    out.push_str(&format!(
        "Total Payable Amount : {} {:.2}\n",
        CURRENCY, summary.total_payable
    ));

    out
}
