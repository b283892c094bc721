//! Population aggregation over county records
//!
//! This module provides the summation side of the query library: total
//! population, sub-population totals for an education or ethnicity category,
//! the poverty sub-population, and the corresponding percentages of the
//! total. Every function is a pure single pass over the input slice; a
//! record that lacks the requested metric contributes nothing.

use crate::models::CountyRecord;

/// Sum the canonical 2014 population across all records
///
/// A record without the metric counts as 0. Returns 0 for an empty input.
#[must_use]
pub fn population_total(records: &[CountyRecord]) -> u64 {
    records.iter().map(CountyRecord::total_population).sum()
}

/// Total sub-population holding the given education attainment
///
/// For each record carrying the category, the contribution is the county
/// population scaled by the category share. Records lacking the category
/// contribute nothing.
#[must_use]
pub fn population_by_education(records: &[CountyRecord], category: &str) -> f64 {
    records
        .iter()
        .filter_map(|county| {
            county
                .education_share(category)
                .map(|share| county.total_population() as f64 * share / 100.0)
        })
        .sum()
}

/// Total sub-population of the given ethnicity
#[must_use]
pub fn population_by_ethnicity(records: &[CountyRecord], category: &str) -> f64 {
    records
        .iter()
        .filter_map(|county| {
            county
                .ethnicity_share(category)
                .map(|share| county.total_population() as f64 * share / 100.0)
        })
        .sum()
}

/// Total sub-population below the poverty level
#[must_use]
pub fn population_below_poverty_level(records: &[CountyRecord]) -> f64 {
    records
        .iter()
        .filter_map(|county| {
            county
                .poverty_level_share()
                .map(|share| county.total_population() as f64 * share / 100.0)
        })
        .sum()
}

/// Percentage (0-100) of the total population holding the given education
/// attainment
///
/// Returns 0.0 when the total population is 0, so an empty input never
/// divides by zero.
#[must_use]
pub fn percent_by_education(records: &[CountyRecord], category: &str) -> f64 {
    as_percent_of_total(records, population_by_education(records, category))
}

/// Percentage (0-100) of the total population of the given ethnicity
#[must_use]
pub fn percent_by_ethnicity(records: &[CountyRecord], category: &str) -> f64 {
    as_percent_of_total(records, population_by_ethnicity(records, category))
}

/// Percentage (0-100) of the total population below the poverty level
#[must_use]
pub fn percent_below_poverty_level(records: &[CountyRecord]) -> f64 {
    as_percent_of_total(records, population_below_poverty_level(records))
}

/// Express a sub-population as a percentage of the total population
fn as_percent_of_total(records: &[CountyRecord], sub_population: f64) -> f64 {
    let total = population_total(records);
    if total == 0 {
        return 0.0;
    }
    sub_population / total as f64 * 100.0
}
