//! A Rust library for aggregating and filtering in-memory county demographic
//! records.
//!
//! The crate operates on already-constructed [`CountyRecord`] values: it
//! computes population totals, sub-population totals and percentages by
//! category, and filters counties by state or by threshold comparisons on a
//! category value. Loading records from a backing data source is the job of
//! an external collaborator; every function here is a pure, single-pass read
//! over the records it is given.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod models;
pub mod statistics;

// Re-export the most common types for easier use
// Core types
pub use error::{DemographicsError, Result};
pub use models::types::{BELOW_POVERTY_LEVEL, POPULATION_2014};
pub use models::{CountyRecord, StateCode};

// Aggregation functions
pub use aggregate::{
    percent_below_poverty_level, percent_by_education, percent_by_ethnicity,
    population_below_poverty_level, population_by_education, population_by_ethnicity,
    population_total,
};

// Filtering capabilities
pub use filter::criteria::{CountyFilter, FilterCriteria};
pub use filter::{
    below_poverty_level_greater_than, below_poverty_level_less_than, education_greater_than,
    education_less_than, ethnicity_greater_than, ethnicity_less_than, filter_by_state,
    filter_counties,
};

// Statistics
pub use statistics::{DemographicsStatistics, DemographicsStats};
