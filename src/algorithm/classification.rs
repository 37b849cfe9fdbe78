//! Income classification against the poverty and destitution lines
//!
//! The income axis is split at the destitution line, the poverty line and,
//! above the poverty line, at 1.25 and 4 times the poverty line. Every split
//! point belongs to the band above it except the two multiplier breakpoints,
//! which close the band below.

use serde::Serialize;
use std::fmt;

use crate::error::{CalculatorError, Result};

/// Upper bound (inclusive) of the fragile band, as a multiple of the poverty line
pub const FRAGILE_MULTIPLIER: f64 = 1.25;

/// Upper bound (inclusive) of the middle-class band, as a multiple of the poverty line
pub const MIDDLE_CLASS_MULTIPLIER: f64 = 4.0;

/// Refinement of a non-poor household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stratum {
    /// Up to 1.25 poverty lines
    Fragile,
    /// Above 1.25 and up to 4 poverty lines
    MiddleClass,
    /// Above 4 poverty lines
    Affluent,
}

/// Position of a household income relative to the lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "stratum")]
pub enum Classification {
    /// Below the destitution line
    Destitute,
    /// At or above the destitution line and below the poverty line
    Poor,
    /// At or above the poverty line
    NotPoor(Stratum),
}

impl Classification {
    /// Destitute or poor
    #[must_use]
    pub const fn is_poor(self) -> bool {
        matches!(self, Self::Destitute | Self::Poor)
    }

    /// Stratum, for non-poor households
    #[must_use]
    pub const fn stratum(self) -> Option<Stratum> {
        match self {
            Self::NotPoor(stratum) => Some(stratum),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destitute => write!(f, "indigente"),
            Self::Poor => write!(f, "pobre"),
            Self::NotPoor(Stratum::Fragile) => write!(f, "no pobre (vulnerable)"),
            Self::NotPoor(Stratum::MiddleClass) => write!(f, "no pobre (clase media)"),
            Self::NotPoor(Stratum::Affluent) => write!(f, "no pobre (acomodado)"),
        }
    }
}

/// Signed distance between income and one line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdGap {
    /// The line compared against
    pub line: f64,
    /// `income - line`; negative is a deficit
    pub nominal: f64,
    /// `nominal / line * 100`; `None` when the line is zero
    pub percent: Option<f64>,
}

impl ThresholdGap {
    /// Income is below the line
    #[must_use]
    pub fn is_deficit(&self) -> bool {
        self.nominal < 0.0
    }
}

fn check_amount(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::invalid(format!(
            "{name} must be a non-negative amount, got {value}"
        )))
    }
}

/// Classify `income` against the household lines
pub fn classify(income: f64, poverty_line: f64, destitution_line: f64) -> Result<Classification> {
    check_amount("income", income)?;
    check_amount("poverty line", poverty_line)?;
    check_amount("destitution line", destitution_line)?;
    if destitution_line > poverty_line {
        return Err(CalculatorError::invalid(format!(
            "destitution line {destitution_line} is above poverty line {poverty_line}"
        )));
    }

    let classification = if income < destitution_line {
        Classification::Destitute
    } else if income < poverty_line {
        Classification::Poor
    } else if income <= FRAGILE_MULTIPLIER * poverty_line {
        Classification::NotPoor(Stratum::Fragile)
    } else if income <= MIDDLE_CLASS_MULTIPLIER * poverty_line {
        Classification::NotPoor(Stratum::MiddleClass)
    } else {
        Classification::NotPoor(Stratum::Affluent)
    };

    Ok(classification)
}

/// Gap between income and a line
#[must_use]
pub fn gap(income: f64, line: f64) -> ThresholdGap {
    let nominal = income - line;
    let percent = (line != 0.0).then(|| nominal / line * 100.0);
    ThresholdGap {
        line,
        nominal,
        percent,
    }
}
