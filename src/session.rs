// 💬 Interactive Session - Prompt loop around the booking ledger
//
// Generic over the reader/writer so the whole conversation can be driven
// from tests. Rider, fleet and ledger are explicit values; nothing is global.

use crate::fleet::{Fleet, MenuChoice};
use crate::ledger::BookingLedger;
use crate::report::{format_receipt, format_summary};
use crate::rider::Rider;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

const WELCOME: &str =
    "======================== Welcome to Smart Ride Booking App ========================";
const GOODBYE: &str = "Thank you for using Smart Ride Booking App";

pub struct Session<'f, R, W> {
    fleet: &'f Fleet,
    input: R,
    output: W,
}

impl<'f, R: BufRead, W: Write> Session<'f, R, W> {
    pub fn new(fleet: &'f Fleet, input: R, output: W) -> Self {
        Session {
            fleet,
            input,
            output,
        }
    }

    /// Run the whole session and hand back the ledger for export
    pub fn run(mut self) -> Result<BookingLedger> {
        writeln!(self.output, "{}", WELCOME)?;

        let rider = self.read_rider()?;
        tracing::info!(
            rider = rider.name(),
            age = rider.age(),
            student = rider.is_student(),
            discount_rate = rider.discount_rate(),
            "session started"
        );

        let mut ledger = BookingLedger::new(rider);
        self.booking_loop(&mut ledger)?;

        writeln!(self.output, "{}", GOODBYE)?;
        tracing::info!(
            rides = ledger.len(),
            total_payable = ledger.total_payable(),
            "session finished"
        );

        Ok(ledger)
    }

    fn read_rider(&mut self) -> Result<Rider> {
        let Some(name) = self.prompt("Enter Your Full Name Here : ")? else {
            bail!("Input ended before a name was entered");
        };

        let Some(age) = self.prompt("Enter Your Age Here : ")? else {
            bail!("Input ended before an age was entered");
        };
        let age: u32 = age
            .trim()
            .parse()
            .with_context(|| format!("Invalid age: {:?}", age.trim()))?;

        let student = self
            .prompt("Are you a student ? (yes / no) : ")?
            .unwrap_or_default();
        let is_student = student.trim().eq_ignore_ascii_case("yes");

        Ok(Rider::new(&name, age, is_student)?)
    }

    fn booking_loop(&mut self, ledger: &mut BookingLedger) -> Result<()> {
        let fleet = self.fleet;

        loop {
            writeln!(self.output, "Select Your Vehicle Type : ")?;
            for line in fleet.menu_lines() {
                writeln!(self.output, "{}", line)?;
            }

            let Some(answer) = self.prompt("Enter your Choice here : ")? else {
                return Ok(());
            };

            let vehicle = match fleet.select(&answer) {
                MenuChoice::Exit => return Ok(()),
                MenuChoice::Invalid => {
                    tracing::warn!(choice = answer.trim(), "invalid menu choice");
                    writeln!(self.output, "Invalid option. Try again!")?;
                    continue;
                }
                MenuChoice::Book(vehicle) => vehicle,
            };

            let Some(distance) = self.prompt("Enter Your Distance ( in KM ) : ")? else {
                return Ok(());
            };
            let distance_km: f64 = distance
                .trim()
                .parse()
                .with_context(|| format!("Invalid distance: {:?}", distance.trim()))?;

            match ledger.add_ride(vehicle, distance_km) {
                Ok(record) => {
                    tracing::info!(ride_id = %record.id, vehicle = %record.vehicle, "ride booked");
                    write!(self.output, "{}", format_receipt(&record))?;
                    write!(self.output, "{}", format_summary(&ledger.summary()))?;
                }
                Err(err) => {
                    tracing::warn!(%err, "ride rejected");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    /// Print a prompt and read one line; None at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
