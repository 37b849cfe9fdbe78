//! Reference period model
//!
//! The latest month of the basket series, with the base-region (Gran Buenos
//! Aires) values of both baskets for one adult equivalent.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{CalculatorError, Result};

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Basket values for the most recent published month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePeriod {
    /// Month (1-12)
    pub month: u32,
    /// Year
    pub year: i32,
    /// Canasta Básica Alimentaria, base region, one adult equivalent
    pub cba_base: f64,
    /// Canasta Básica Total, base region, one adult equivalent
    pub cbt_base: f64,
}

impl ReferencePeriod {
    /// Create a reference period, validating month and basket values
    pub fn new(month: u32, year: i32, cba_base: f64, cbt_base: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalculatorError::invalid(format!("month {month} out of range")));
        }
        for (name, value) in [("CBA", cba_base), ("CBT", cbt_base)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalculatorError::invalid(format!(
                    "{name} must be a non-negative amount, got {value}"
                )));
            }
        }
        Ok(Self {
            month,
            year,
            cba_base,
            cbt_base,
        })
    }

    /// Reference period for the month containing `date`
    pub fn from_date(date: NaiveDate, cba_base: f64, cbt_base: f64) -> Result<Self> {
        Self::new(date.month(), date.year(), cba_base, cbt_base)
    }

    /// Spanish label, e.g. "marzo de 2025"
    #[must_use]
    pub fn label(&self) -> String {
        let month = (self.month as usize)
            .checked_sub(1)
            .and_then(|idx| MONTH_NAMES.get(idx))
            .copied()
            .unwrap_or("mes desconocido");
        format!("{month} de {}", self.year)
    }
}

impl fmt::Display for ReferencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (CBA {:.2}, CBT {:.2})",
            self.label(),
            self.cba_base,
            self.cbt_base
        )
    }
}
