//! Common enumerations shared across models.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Sex of a household member, as used by the equivalence table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Sex {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "m" | "male" | "varon" | "hombre" | "1" => Ok(Self::Male),
            "f" | "female" | "mujer" | "2" => Ok(Self::Female),
            _ => Err(CalculatorError::invalid(format!(
                "unrecognized sex '{s}' (expected male/female, varon/mujer or 1/2)"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "varón"),
            Self::Female => write!(f, "mujer"),
        }
    }
}

/// Respondent's own guess about the household's situation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Perception {
    /// Thinks the household is below the poverty line
    BelowLine,
    /// Thinks the household is above the poverty line
    AboveLine,
    /// No opinion
    #[default]
    Unsure,
}

impl FromStr for Perception {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "1" | "below" | "debajo" | "por debajo" => Ok(Self::BelowLine),
            "2" | "above" | "encima" | "por encima" => Ok(Self::AboveLine),
            "3" | "unsure" | "no se" | "no estoy seguro" | "no estoy segura" => Ok(Self::Unsure),
            _ => Err(CalculatorError::invalid(format!(
                "unrecognized perception '{s}' (expected below, above or unsure)"
            ))),
        }
    }
}

/// Lowercase, trim, collapse whitespace and strip Spanish diacritics
pub(crate) fn normalize_label(s: &str) -> String {
    let folded: String = s
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' => 'a',
            'é' | 'è' | 'ê' => 'e',
            'í' | 'ì' | 'î' => 'i',
            'ó' | 'ò' | 'ô' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            '_' | '-' | '.' => ' ',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
