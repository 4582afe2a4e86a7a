// 🧑 Rider - Identity and discount eligibility

use crate::validation::{validate_name, ValidationResult};

/// Riders younger than this are discount-eligible
pub const YOUTH_AGE_LIMIT: u32 = 18;
pub const RIDER_DISCOUNT: f64 = 0.20;

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    name: String,
    age: u32,
    is_student: bool,
}

impl Rider {
    pub fn new(name: &str, age: u32, is_student: bool) -> ValidationResult<Self> {
        Ok(Rider {
            name: validate_name("Rider", "name", name)?,
            age,
            is_student,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_student(&self) -> bool {
        self.is_student
    }

    /// Flat 20% for minors or students; the two conditions do not stack
    pub fn discount_rate(&self) -> f64 {
        if self.age < YOUTH_AGE_LIMIT || self.is_student {
            RIDER_DISCOUNT
        } else {
            0.0
        }
    }
}
