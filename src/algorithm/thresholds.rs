//! Regional poverty and destitution lines

use serde::Serialize;

use crate::error::{CalculatorError, Result};
use crate::models::{ReferencePeriod, Region};

/// Multiplier applied to the Gran Buenos Aires baskets, in [`Region::ALL`] order
pub const REGION_FACTORS: [(Region, f64); 6] = [
    (Region::GranBuenosAires, 1.00),
    (Region::Noroeste, 0.804),
    (Region::Noreste, 0.828),
    (Region::Cuyo, 0.945),
    (Region::Pampeana, 0.984),
    (Region::Patagonia, 1.151),
];

/// Regional factor for a region
#[must_use]
pub fn regional_factor(region: Region) -> f64 {
    REGION_FACTORS[region as usize].1
}

/// Basket values for one adult equivalent in a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalBaskets {
    /// Region
    pub region: Region,
    /// Canasta Básica Alimentaria
    pub cba: f64,
    /// Canasta Básica Total
    pub cbt: f64,
}

/// Poverty and destitution lines for a household
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// CBT times equivalence units
    pub poverty_line: f64,
    /// CBA times equivalence units
    pub destitution_line: f64,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale the base baskets to a region, rounded to cents like the published tables
#[must_use]
pub fn regional_baskets(region: Region, period: &ReferencePeriod) -> RegionalBaskets {
    let factor = regional_factor(region);
    RegionalBaskets {
        region,
        cba: round_cents(period.cba_base * factor),
        cbt: round_cents(period.cbt_base * factor),
    }
}

/// Poverty and destitution lines for `equivalence_units` adult equivalents
pub fn thresholds(
    region: Region,
    equivalence_units: f64,
    period: &ReferencePeriod,
) -> Result<Thresholds> {
    if !equivalence_units.is_finite() || equivalence_units < 0.0 {
        return Err(CalculatorError::invalid(format!(
            "equivalence units must be a non-negative number, got {equivalence_units}"
        )));
    }

    let baskets = regional_baskets(region, period);
    Ok(Thresholds {
        poverty_line: baskets.cbt * equivalence_units,
        destitution_line: baskets.cba * equivalence_units,
    })
}

/// [`thresholds`] for a raw INDEC region code
pub fn thresholds_for_code(
    region_code: u32,
    equivalence_units: f64,
    period: &ReferencePeriod,
) -> Result<Thresholds> {
    thresholds(Region::from_code(region_code)?, equivalence_units, period)
}
