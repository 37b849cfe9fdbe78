//! Comparison between the respondent's perception and the estimate

use serde::Serialize;

use crate::algorithm::classification::Classification;
use crate::models::Perception;

/// Outcome of comparing a perception with a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionOutcome {
    /// Respondent expected poverty and the household is poor or destitute
    MatchesVulnerability,
    /// Respondent expected no poverty and the household is not poor
    MatchesNonPoverty,
    /// Respondent had no opinion
    NoPriorOpinion,
    /// Perception and estimate disagree
    Differs,
}

impl PerceptionOutcome {
    /// Message shown to the respondent
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MatchesVulnerability => {
                "Sí, coincide: reconociste una situación de vulnerabilidad."
            }
            Self::MatchesNonPoverty => {
                "Sí, coincide: estimamos que tu hogar no está en situación de pobreza."
            }
            Self::NoPriorOpinion => {
                "Ahora tenés una estimación técnica que te puede ayudar a reflexionar."
            }
            Self::Differs => {
                "Hay una diferencia entre tu percepción y la estimación. Puede ser útil analizar por qué."
            }
        }
    }
}

impl Perception {
    /// Compare this perception with the estimated classification
    #[must_use]
    pub fn compare(self, classification: Classification) -> PerceptionOutcome {
        match (self, classification.is_poor()) {
            (Self::Unsure, _) => PerceptionOutcome::NoPriorOpinion,
            (Self::BelowLine, true) => PerceptionOutcome::MatchesVulnerability,
            (Self::AboveLine, false) => PerceptionOutcome::MatchesNonPoverty,
            _ => PerceptionOutcome::Differs,
        }
    }
}
