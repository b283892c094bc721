//! Filtering criteria for county records
//!
//! This module defines the predicate side of the filter functions: a small
//! criteria trait and a combinator enum covering state membership and
//! threshold comparisons on category shares. Missing map keys compare as 0,
//! so a county with no recorded share sorts below any positive threshold.

use crate::models::CountyRecord;

/// Defines a criterion for selecting records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a county record
#[derive(Debug, Clone, PartialEq)]
pub enum CountyFilter {
    /// Filter by state abbreviation (exact match; a code that is not two
    /// characters matches nothing)
    State(String),
    /// Education share strictly above a threshold
    EducationAbove {
        /// Education attainment category
        category: String,
        /// Exclusive lower bound on the share
        threshold: f64,
    },
    /// Education share strictly below a threshold
    EducationBelow {
        /// Education attainment category
        category: String,
        /// Exclusive upper bound on the share
        threshold: f64,
    },
    /// Ethnicity share strictly above a threshold
    EthnicityAbove {
        /// Ethnicity category
        category: String,
        /// Exclusive lower bound on the share
        threshold: f64,
    },
    /// Ethnicity share strictly below a threshold
    EthnicityBelow {
        /// Ethnicity category
        category: String,
        /// Exclusive upper bound on the share
        threshold: f64,
    },
    /// Poverty share strictly above a threshold
    PovertyAbove(f64),
    /// Poverty share strictly below a threshold
    PovertyBelow(f64),
    /// Combined filter that requires all criteria to be met
    All(Vec<CountyFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<CountyFilter>),
}

impl FilterCriteria<CountyRecord> for CountyFilter {
    fn meets_criteria(&self, county: &CountyRecord) -> bool {
        match self {
            Self::State(code) => code.chars().count() == 2 && county.state == *code,
            Self::EducationAbove {
                category,
                threshold,
            } => county.education_share(category).unwrap_or(0.0) > *threshold,
            Self::EducationBelow {
                category,
                threshold,
            } => county.education_share(category).unwrap_or(0.0) < *threshold,
            Self::EthnicityAbove {
                category,
                threshold,
            } => county.ethnicity_share(category).unwrap_or(0.0) > *threshold,
            Self::EthnicityBelow {
                category,
                threshold,
            } => county.ethnicity_share(category).unwrap_or(0.0) < *threshold,
            Self::PovertyAbove(threshold) => {
                county.poverty_level_share().unwrap_or(0.0) > *threshold
            }
            Self::PovertyBelow(threshold) => {
                county.poverty_level_share().unwrap_or(0.0) < *threshold
            }
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(county)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(county)),
        }
    }
}
