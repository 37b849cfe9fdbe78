//! Calculator facade
//!
//! Holds the reference period for a session and turns a household, a region
//! and an income into an [`Assessment`].

use log::{debug, info};
use serde::Serialize;

use crate::algorithm::{
    Classification, PerceptionOutcome, RegionalBaskets, ThresholdGap, Thresholds, classify, gap,
    regional_baskets, thresholds,
};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::loader::{BasketSource, load_reference};
use crate::models::{Household, HouseholdSummary, Perception, ReferencePeriod, Region};

/// Everything computed for one household
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Reference period label, e.g. "marzo de 2025"
    pub period_label: String,
    /// Reference period values
    pub period: ReferencePeriod,
    /// Region of the household
    pub region: Region,
    /// Regional baskets for one adult equivalent
    pub baskets: RegionalBaskets,
    /// Household composition
    pub household: HouseholdSummary,
    /// Total monthly household income
    pub income: f64,
    /// Household lines
    pub thresholds: Thresholds,
    /// Result
    pub classification: Classification,
    /// Income minus the poverty line
    pub poverty_gap: ThresholdGap,
    /// Income minus the destitution line
    pub destitution_gap: ThresholdGap,
    /// Respondent's perception
    pub perception: Perception,
    /// Perception compared with the result
    pub perception_outcome: PerceptionOutcome,
}

/// Poverty line calculator bound to one reference period
#[derive(Debug, Clone)]
pub struct Calculator {
    period: ReferencePeriod,
}

impl Calculator {
    /// Create a calculator for a known reference period
    #[must_use]
    pub fn new(period: ReferencePeriod) -> Self {
        Self { period }
    }

    /// Load the latest reference period from `source`
    pub async fn load<S: BasketSource>(source: &S, config: &CalculatorConfig) -> Result<Self> {
        debug!("{config}");
        let period = load_reference(source, &config.layout).await?;
        Ok(Self::new(period))
    }

    /// Reference period in use
    #[must_use]
    pub fn period(&self) -> &ReferencePeriod {
        &self.period
    }

    /// Lines for a household in a region
    pub fn thresholds(&self, region: Region, household: &Household) -> Result<Thresholds> {
        thresholds(region, household.equivalence_units(), &self.period)
    }

    /// Assess a household income
    pub fn assess(
        &self,
        region: Region,
        household: &Household,
        income: f64,
        perception: Perception,
    ) -> Result<Assessment> {
        let summary = household.summary();
        let lines = self.thresholds(region, household)?;
        let classification = classify(income, lines.poverty_line, lines.destitution_line)?;

        info!(
            "Household of {} ({:.2} adult equivalents) in {}: income {:.2} is {}",
            summary.size, summary.equivalence_units, region, income, classification
        );

        Ok(Assessment {
            period_label: self.period.label(),
            period: self.period,
            region,
            baskets: regional_baskets(region, &self.period),
            household: summary,
            income,
            thresholds: lines,
            classification,
            poverty_gap: gap(income, lines.poverty_line),
            destitution_gap: gap(income, lines.destitution_line),
            perception,
            perception_outcome: perception.compare(classification),
        })
    }
}
