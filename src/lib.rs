//! Estimate whether a household falls below the poverty or destitution lines
//! published by INDEC, from its composition, region and monthly income.

pub mod algorithm;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use calculator::{Assessment, Calculator};
pub use config::{CalculatorConfig, SheetLayout};
pub use error::{CalculatorError, Result};

// Domain models
pub use models::{Household, Perception, Person, ReferencePeriod, Region, Sex};

// Computations
pub use algorithm::{
    Classification, PerceptionOutcome, Stratum, ThresholdGap, Thresholds, classify, equivalence,
    gap, thresholds,
};

// Reference data
pub use loader::{BasketSource, FileSource, HttpSource, load_reference};
