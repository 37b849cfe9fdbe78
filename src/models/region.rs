//! Statistical regions and the provinces that belong to them
//!
//! INDEC publishes basket values for Gran Buenos Aires only; the other five
//! regions are derived from it through fixed factors (see
//! [`crate::algorithm::thresholds`]). Provinces resolve to a region through
//! a static table so that the assignment can be audited at a glance.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{CalculatorError, Result};
use crate::models::types::normalize_label;

/// INDEC statistical region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Ciudad de Buenos Aires and the partidos of the conurbano
    GranBuenosAires,
    /// Noroeste (NOA)
    Noroeste,
    /// Noreste (NEA)
    Noreste,
    /// Cuyo
    Cuyo,
    /// Pampeana
    Pampeana,
    /// Patagonia
    Patagonia,
}

impl Region {
    /// All regions in code order
    pub const ALL: [Self; 6] = [
        Self::GranBuenosAires,
        Self::Noroeste,
        Self::Noreste,
        Self::Cuyo,
        Self::Pampeana,
        Self::Patagonia,
    ];

    /// INDEC region code
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::GranBuenosAires => 1,
            Self::Noroeste => 40,
            Self::Noreste => 41,
            Self::Cuyo => 42,
            Self::Pampeana => 43,
            Self::Patagonia => 44,
        }
    }

    /// Region for an INDEC code
    pub fn from_code(code: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| CalculatorError::UnknownRegion(code.to_string()))
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GranBuenosAires => "Gran Buenos Aires (CABA y Partidos del GBA)",
            Self::Noroeste => "Noroeste",
            Self::Noreste => "Noreste",
            Self::Cuyo => "Cuyo",
            Self::Pampeana => "Pampeana",
            Self::Patagonia => "Patagónica",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = CalculatorError;

    /// Accepts an INDEC code or a region name
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(code) = s.trim().parse::<u32>() {
            return Self::from_code(code);
        }

        match normalize_label(s).as_str() {
            "gba" | "gran buenos aires" | "amba" => Ok(Self::GranBuenosAires),
            "noa" | "noroeste" => Ok(Self::Noroeste),
            "nea" | "noreste" | "nordeste" => Ok(Self::Noreste),
            "cuyo" => Ok(Self::Cuyo),
            "pampeana" => Ok(Self::Pampeana),
            "patagonia" | "patagonica" => Ok(Self::Patagonia),
            _ => Err(CalculatorError::UnknownRegion(s.trim().to_string())),
        }
    }
}

/// Province names (normalized) and aliases with their region
///
/// The Province of Buenos Aires is split: its conurbano partidos belong to
/// Gran Buenos Aires, the rest of the province to Pampeana.
const PROVINCE_REGIONS: &[(&str, Region)] = &[
    ("ciudad autonoma de buenos aires", Region::GranBuenosAires),
    ("caba", Region::GranBuenosAires),
    ("capital federal", Region::GranBuenosAires),
    ("partidos del gba", Region::GranBuenosAires),
    ("conurbano bonaerense", Region::GranBuenosAires),
    ("gba", Region::GranBuenosAires),
    ("buenos aires", Region::Pampeana),
    ("resto de buenos aires", Region::Pampeana),
    ("cordoba", Region::Pampeana),
    ("entre rios", Region::Pampeana),
    ("la pampa", Region::Pampeana),
    ("santa fe", Region::Pampeana),
    ("catamarca", Region::Noroeste),
    ("jujuy", Region::Noroeste),
    ("la rioja", Region::Noroeste),
    ("salta", Region::Noroeste),
    ("santiago del estero", Region::Noroeste),
    ("tucuman", Region::Noroeste),
    ("chaco", Region::Noreste),
    ("corrientes", Region::Noreste),
    ("formosa", Region::Noreste),
    ("misiones", Region::Noreste),
    ("mendoza", Region::Cuyo),
    ("san juan", Region::Cuyo),
    ("san luis", Region::Cuyo),
    ("chubut", Region::Patagonia),
    ("neuquen", Region::Patagonia),
    ("rio negro", Region::Patagonia),
    ("santa cruz", Region::Patagonia),
    ("tierra del fuego", Region::Patagonia),
    (
        "tierra del fuego antartida e islas del atlantico sur",
        Region::Patagonia,
    ),
];

static PROVINCE_INDEX: LazyLock<FxHashMap<&'static str, Region>> =
    LazyLock::new(|| PROVINCE_REGIONS.iter().copied().collect());

/// Resolve a province name to its statistical region
pub fn region_for_province(name: &str) -> Result<Region> {
    let key = normalize_label(name);
    PROVINCE_INDEX
        .get(key.as_str())
        .copied()
        .ok_or_else(|| CalculatorError::invalid(format!("unknown province '{}'", name.trim())))
}

/// Canonical province names accepted by [`region_for_province`], aliases excluded
#[must_use]
pub fn province_names() -> Vec<&'static str> {
    const ALIASES: &[&str] = &[
        "caba",
        "capital federal",
        "conurbano bonaerense",
        "gba",
        "resto de buenos aires",
        "tierra del fuego antartida e islas del atlantico sur",
    ];
    PROVINCE_REGIONS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !ALIASES.contains(name))
        .collect()
}
