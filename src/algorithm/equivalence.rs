//! Adult-equivalent scale
//!
//! Energy requirements by age and sex relative to a man aged 30 to 60 with
//! moderate activity, as published by INDEC for the basic basket
//! methodology. Each band covers ages from `from` up to the next band.

use crate::error::{CalculatorError, Result};
use crate::models::types::Sex;

/// One row of the equivalence table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    /// First age (inclusive) the band applies to
    pub from: u32,
    /// Factor for males
    pub male: f64,
    /// Factor for females
    pub female: f64,
}

const fn band(from: u32, male: f64, female: f64) -> AgeBand {
    AgeBand { from, male, female }
}

/// INDEC adult-equivalent table, sorted by `from`
pub const EQUIVALENCE_TABLE: [AgeBand; 23] = [
    band(0, 0.35, 0.35),
    band(1, 0.37, 0.37),
    band(2, 0.46, 0.46),
    band(3, 0.51, 0.51),
    band(4, 0.55, 0.55),
    band(5, 0.60, 0.60),
    band(6, 0.64, 0.64),
    band(7, 0.66, 0.66),
    band(8, 0.68, 0.68),
    band(9, 0.69, 0.69),
    band(10, 0.79, 0.70),
    band(11, 0.82, 0.72),
    band(12, 0.85, 0.74),
    band(13, 0.90, 0.76),
    band(14, 0.96, 0.76),
    band(15, 1.00, 0.77),
    band(16, 1.03, 0.77),
    band(17, 1.04, 0.77),
    band(18, 1.02, 0.76),
    band(30, 1.00, 0.77),
    band(46, 1.00, 0.76),
    band(61, 0.83, 0.67),
    band(76, 0.74, 0.63),
];

/// Band covering `age`
#[must_use]
pub fn band_for(age: u32) -> &'static AgeBand {
    // The first band starts at 0, so the partition point is at least 1.
    let idx = EQUIVALENCE_TABLE.partition_point(|band| band.from <= age);
    &EQUIVALENCE_TABLE[idx - 1]
}

/// Factor for a validated age
#[must_use]
pub fn factor_for(age: u32, sex: Sex) -> f64 {
    let band = band_for(age);
    match sex {
        Sex::Male => band.male,
        Sex::Female => band.female,
    }
}

/// Adult-equivalent factor for an age and sex
///
/// Fails with [`CalculatorError::InvalidInput`] when `age` is negative.
pub fn equivalence(age: i64, sex: Sex) -> Result<f64> {
    let age = u32::try_from(age)
        .map_err(|_| CalculatorError::invalid(format!("age must be non-negative, got {age}")))?;
    Ok(factor_for(age, sex))
}

/// Like [`equivalence`] but with the sex given as a label (`m`, `mujer`, `2`, ...)
pub fn equivalence_for_label(age: i64, sex: &str) -> Result<f64> {
    equivalence(age, sex.parse()?)
}
