//! Household model
//!
//! A household is the ordered list of people who share the income being
//! assessed. The first member is the respondent.

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{CalculatorError, Result};
use crate::models::person::Person;

/// Ordered collection of household members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    members: SmallVec<[Person; 8]>,
}

/// Composition figures reported alongside the result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseholdSummary {
    /// Number of members
    pub size: usize,
    /// Sum of adult-equivalent factors
    pub equivalence_units: f64,
    /// Members under 18
    pub minors: usize,
    /// Members aged 65 or more
    pub seniors: usize,
}

impl Household {
    /// Create a household with its respondent
    #[must_use]
    pub fn new(respondent: Person) -> Self {
        let mut members = SmallVec::new();
        members.push(respondent);
        Self { members }
    }

    /// Create a household from a list of members; the list must not be empty
    pub fn from_members(members: impl IntoIterator<Item = Person>) -> Result<Self> {
        let members: SmallVec<[Person; 8]> = members.into_iter().collect();
        if members.is_empty() {
            return Err(CalculatorError::invalid("a household needs at least one member"));
        }
        Ok(Self { members })
    }

    /// Add a member
    pub fn push(&mut self, person: Person) {
        self.members.push(person);
    }

    /// Builder-style [`Household::push`]
    #[must_use]
    pub fn with_member(mut self, person: Person) -> Self {
        self.push(person);
        self
    }

    /// Members in insertion order
    #[must_use]
    pub fn members(&self) -> &[Person] {
        &self.members
    }

    /// The respondent
    #[must_use]
    pub fn respondent(&self) -> &Person {
        &self.members[0]
    }

    /// Number of members
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Sum of adult-equivalent factors
    #[must_use]
    pub fn equivalence_units(&self) -> f64 {
        self.members.iter().map(Person::equivalence).sum()
    }

    /// Members under 18
    #[must_use]
    pub fn minors(&self) -> usize {
        self.members.iter().filter(|p| p.is_minor()).count()
    }

    /// Members aged 65 or more
    #[must_use]
    pub fn seniors(&self) -> usize {
        self.members.iter().filter(|p| p.is_senior()).count()
    }

    /// Composition summary
    #[must_use]
    pub fn summary(&self) -> HouseholdSummary {
        HouseholdSummary {
            size: self.size(),
            equivalence_units: self.equivalence_units(),
            minors: self.minors(),
            seniors: self.seniors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Sex;

    fn family() -> Household {
        Household::new(Person::new(35, Sex::Male))
            .with_member(Person::new(31, Sex::Female))
            .with_member(Person::new(5, Sex::Male))
            .with_member(Person::new(8, Sex::Female))
    }

    #[test]
    fn test_reference_household_units() {
        // INDEC reference household: 1.00 + 0.77 + 0.60 + 0.68
        let household = family();
        assert!((household.equivalence_units() - 3.05).abs() < 1e-9);
        assert_eq!(household.size(), 4);
        assert_eq!(household.respondent().age, 35);
    }

    #[test]
    fn test_summary_counts() {
        let household = family().with_member(Person::new(70, Sex::Female));
        let summary = household.summary();

        assert_eq!(summary.size, 5);
        assert_eq!(summary.minors, 2);
        assert_eq!(summary.seniors, 1);
        assert!((summary.equivalence_units - 3.72).abs() < 1e-9);
    }

    #[test]
    fn test_from_members_rejects_empty() {
        assert!(matches!(
            Household::from_members(Vec::new()),
            Err(CalculatorError::InvalidInput(_))
        ));

        let household =
            Household::from_members([Person::new(40, Sex::Female), Person::new(2, Sex::Male)])
                .unwrap();
        assert_eq!(household.members().len(), 2);
    }
}
