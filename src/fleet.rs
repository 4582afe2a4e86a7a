// 🚌 Fleet - Vehicles offered in the booking menu
// Rules as data: the default fleet is built in, a JSON file can replace it

use crate::vehicle::{Vehicle, VehicleKind};
use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// FLEET ENTRY
// ============================================================================

/// One vehicle as written in a fleet file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetEntry {
    /// Menu keyword (e.g. "car"); matched case-insensitively
    pub key: String,

    pub kind: VehicleKind,

    /// Display name (e.g. "Honda Civic")
    pub name: String,

    pub rate_per_km: f64,
}

#[derive(Debug, Clone)]
struct FleetSlot {
    key: String,
    vehicle: Vehicle,
}

// ============================================================================
// MENU CHOICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice<'a> {
    Book(&'a Vehicle),
    Exit,
    Invalid,
}

// ============================================================================
// FLEET
// ============================================================================

#[derive(Debug, Clone)]
pub struct Fleet {
    slots: Vec<FleetSlot>,
}

impl Fleet {
    /// Load a fleet from a JSON array of entries
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read fleet file: {:?}", path.as_ref()))?;

        let entries: Vec<FleetEntry> = serde_json::from_str(&content)
            .context("Failed to parse fleet JSON")?;

        let fleet = Fleet::from_entries(entries)?;
        tracing::info!(path = ?path.as_ref(), vehicles = fleet.len(), "fleet loaded");
        Ok(fleet)
    }

    /// Build a fleet, validating every entry and rejecting duplicate keys
    pub fn from_entries(entries: Vec<FleetEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("Fleet must contain at least one vehicle");
        }

        let mut slots: Vec<FleetSlot> = Vec::with_capacity(entries.len());

        for entry in entries {
            let key = entry.key.trim().to_lowercase();
            if key.is_empty() || key == "exit" || key.parse::<usize>().is_ok() {
                bail!("Invalid fleet key {:?}: must be a non-numeric word other than \"exit\"", entry.key);
            }
            if slots.iter().any(|s| s.key == key) {
                bail!("Duplicate fleet key: {}", key);
            }

            let vehicle = Vehicle::new(entry.kind, &entry.name, entry.rate_per_km)
                .with_context(|| format!("Invalid fleet entry '{}'", key))?;

            slots.push(FleetSlot { key, vehicle });
        }

        Ok(Fleet { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Menu number that ends the session (one past the last vehicle)
    pub fn exit_number(&self) -> usize {
        self.slots.len() + 1
    }

    /// Menu lines: "1. Car", "2. Bike", ... then the exit option
    pub fn menu_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| format!("{}. {}", i + 1, capitalize(&slot.key)))
            .collect();
        lines.push(format!("{}. Exit", self.exit_number()));
        lines
    }

    /// Resolve a menu answer by number or keyword
    pub fn select(&self, input: &str) -> MenuChoice<'_> {
        let answer = input.trim().to_lowercase();

        if answer == "exit" {
            return MenuChoice::Exit;
        }

        if let Ok(number) = answer.parse::<usize>() {
            if number == self.exit_number() {
                return MenuChoice::Exit;
            }
            return match number.checked_sub(1).and_then(|i| self.slots.get(i)) {
                Some(slot) => MenuChoice::Book(&slot.vehicle),
                None => MenuChoice::Invalid,
            };
        }

        match self.slots.iter().find(|s| s.key == answer) {
            Some(slot) => MenuChoice::Book(&slot.vehicle),
            None => MenuChoice::Invalid,
        }
    }
}

impl Default for Fleet {
    /// Car "Honda Civic" at 50/km, Bike "Honda 125" at 25/km, Bus "Daewoo" at 10/km
    fn default() -> Self {
        let presets = [
            ("car", VehicleKind::Car, "Honda Civic", 50.0),
            ("bike", VehicleKind::Bike, "Honda 125", 25.0),
            ("bus", VehicleKind::Bus, "Daewoo", 10.0),
        ];

        let slots = presets
            .into_iter()
            .map(|(key, kind, name, rate_per_km)| FleetSlot {
                key: key.to_string(),
                vehicle: Vehicle::preset(kind, name, rate_per_km),
            })
            .collect();

        Fleet { slots }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_fleet_matches_menu() {
        let fleet = Fleet::default();
        assert_eq!(fleet.len(), 3);
        assert_eq!(
            fleet.menu_lines(),
            vec!["1. Car", "2. Bike", "3. Bus", "4. Exit"]
        );
    }

    #[test]
    fn test_default_fleet_passes_entry_validation() {
        let fleet = Fleet::default();
        let entries: Vec<FleetEntry> = fleet
            .slots
            .iter()
            .map(|slot| FleetEntry {
                key: slot.key.clone(),
                kind: slot.vehicle.kind(),
                name: slot.vehicle.name().to_string(),
                rate_per_km: slot.vehicle.rate_per_km(),
            })
            .collect();

        let validated = Fleet::from_entries(entries).unwrap();
        for (built_in, checked) in fleet.slots.iter().zip(&validated.slots) {
            assert_eq!(built_in.key, checked.key);
            assert_eq!(built_in.vehicle, checked.vehicle);
        }
    }

    #[test]
    fn test_select_by_number_and_key() {
        let fleet = Fleet::default();

        match fleet.select("1") {
            MenuChoice::Book(v) => assert_eq!(v.name(), "Honda Civic"),
            other => panic!("unexpected choice: {:?}", other),
        }
        match fleet.select(" BIKE ") {
            MenuChoice::Book(v) => {
                assert_eq!(v.kind(), VehicleKind::Bike);
                assert_eq!(v.rate_per_km(), 25.0);
            }
            other => panic!("unexpected choice: {:?}", other),
        }
        match fleet.select("bus") {
            MenuChoice::Book(v) => assert_eq!(v.name(), "Daewoo"),
            other => panic!("unexpected choice: {:?}", other),
        }
    }

    #[test]
    fn test_select_exit() {
        let fleet = Fleet::default();
        assert_eq!(fleet.select("4"), MenuChoice::Exit);
        assert_eq!(fleet.select("Exit"), MenuChoice::Exit);
    }

    #[test]
    fn test_select_invalid() {
        let fleet = Fleet::default();
        assert_eq!(fleet.select("0"), MenuChoice::Invalid);
        assert_eq!(fleet.select("5"), MenuChoice::Invalid);
        assert_eq!(fleet.select("plane"), MenuChoice::Invalid);
        assert_eq!(fleet.select(""), MenuChoice::Invalid);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let entry = FleetEntry {
            key: "car".to_string(),
            kind: VehicleKind::Car,
            name: "Honda Civic".to_string(),
            rate_per_km: 50.0,
        };
        let mut other = entry.clone();
        other.key = "CAR".to_string();

        assert!(Fleet::from_entries(vec![entry, other]).is_err());
    }

    #[test]
    fn test_empty_and_invalid_fleets_rejected() {
        assert!(Fleet::from_entries(Vec::new()).is_err());

        let numeric_key = FleetEntry {
            key: "7".to_string(),
            kind: VehicleKind::Bus,
            name: "Daewoo".to_string(),
            rate_per_km: 10.0,
        };
        assert!(Fleet::from_entries(vec![numeric_key]).is_err());

        let negative_rate = FleetEntry {
            key: "bus".to_string(),
            kind: VehicleKind::Bus,
            name: "Daewoo".to_string(),
            rate_per_km: -10.0,
        };
        assert!(Fleet::from_entries(vec![negative_rate]).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"key": "rickshaw", "kind": "bike", "name": "Qingqi", "rate_per_km": 15}},
                {{"key": "coach", "kind": "bus", "name": "Faisal Movers", "rate_per_km": 8.5}}
            ]"#
        )
        .unwrap();

        let fleet = Fleet::from_file(file.path()).unwrap();
        assert_eq!(fleet.menu_lines(), vec!["1. Rickshaw", "2. Coach", "3. Exit"]);
        assert_eq!(fleet.select("3"), MenuChoice::Exit);
        match fleet.select("coach") {
            MenuChoice::Book(v) => assert_eq!(v.rate_per_km(), 8.5),
            other => panic!("unexpected choice: {:?}", other),
        }
    }

    #[test]
    fn test_from_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Fleet::from_file(file.path()).is_err());
        assert!(Fleet::from_file("/nonexistent/fleet.json").is_err());
    }
}
