//! Domain models
//!
//! Household composition, statistical regions and the reference basket
//! period used by the calculator.

pub mod household;
pub mod person;
pub mod reference;
pub mod region;
pub mod types;

// Re-export commonly used items
pub use household::{Household, HouseholdSummary};
pub use person::{MAX_AGE, Person};
pub use reference::ReferencePeriod;
pub use region::{Region, province_names, region_for_province};
pub use types::{Perception, Sex};
