//! Core computations
//!
//! Equivalence scale, regional thresholds and income classification. All
//! functions here are pure.

pub mod classification;
pub mod equivalence;
pub mod perception;
pub mod thresholds;

pub use classification::{Classification, Stratum, ThresholdGap, classify, gap};
pub use equivalence::{equivalence, equivalence_for_label};
pub use perception::PerceptionOutcome;
pub use thresholds::{RegionalBaskets, Thresholds, regional_baskets, thresholds, thresholds_for_code};
