//! Shared value types and canonical metric keys
//!
//! The metric keys below are the two map entries the query functions treat
//! specially: the canonical total-population count and the poverty share.

use crate::error::{DemographicsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Population metric used as the canonical total population of a county
pub const POPULATION_2014: &str = "2014 Population";

/// Income metric holding the percentage of persons below the poverty level
pub const BELOW_POVERTY_LEVEL: &str = "Persons Below Poverty Level";

/// A validated two-character state abbreviation
///
/// Validation covers length only; equality against record state fields
/// decides whether a code actually matches any county.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCode(String);

impl StateCode {
    /// Parse a region code, requiring exactly two characters
    ///
    /// # Errors
    /// Returns [`DemographicsError::InvalidRegionCode`] for any other length.
    pub fn parse(code: &str) -> Result<Self> {
        if code.chars().count() == 2 {
            Ok(Self(code.to_string()))
        } else {
            Err(DemographicsError::InvalidRegionCode(code.to_string()))
        }
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
