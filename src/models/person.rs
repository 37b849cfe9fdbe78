//! Household member model

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::algorithm::equivalence::factor_for;
use crate::error::{CalculatorError, Result};
use crate::models::types::Sex;

/// Oldest age accepted from user input
pub const MAX_AGE: u32 = 120;

/// A household member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Age in completed years
    pub age: u32,
    /// Sex
    pub sex: Sex,
}

impl Person {
    /// Create a new Person
    #[must_use]
    pub const fn new(age: u32, sex: Sex) -> Self {
        Self { age, sex }
    }

    /// Create a Person from a signed age, rejecting negatives
    pub fn try_new(age: i64, sex: Sex) -> Result<Self> {
        let age = u32::try_from(age)
            .map_err(|_| CalculatorError::invalid(format!("age must be non-negative, got {age}")))?;
        Ok(Self { age, sex })
    }

    /// Adult-equivalent factor for this person
    #[must_use]
    pub fn equivalence(&self) -> f64 {
        factor_for(self.age, self.sex)
    }

    /// Under 18
    #[must_use]
    pub const fn is_minor(&self) -> bool {
        self.age < 18
    }

    /// 65 or older
    #[must_use]
    pub const fn is_senior(&self) -> bool {
        self.age >= 65
    }
}

impl FromStr for Person {
    type Err = CalculatorError;

    /// Parse `age:sex`, e.g. `34:f` or `7:varon`
    fn from_str(s: &str) -> Result<Self> {
        let (age, sex) = s
            .split_once([':', ','])
            .ok_or_else(|| CalculatorError::invalid(format!("expected AGE:SEX, got '{s}'")))?;

        let age: i64 = age
            .trim()
            .parse()
            .map_err(|_| CalculatorError::invalid(format!("age '{}' is not a whole number", age.trim())))?;
        if age > i64::from(MAX_AGE) {
            return Err(CalculatorError::invalid(format!(
                "age {age} is above the maximum of {MAX_AGE}"
            )));
        }

        Self::try_new(age, sex.parse()?)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} años, {}", self.age, self.sex)
    }
}
