//! Filtering of county records by state and by category thresholds
//!
//! The functions here return references into the input slice, preserving its
//! order; records are never cloned or mutated. All comparisons are strict,
//! so a county whose share equals the threshold appears in neither the
//! greater-than nor the less-than result.

pub mod criteria;

use crate::models::{CountyRecord, StateCode};
use criteria::{CountyFilter, FilterCriteria};

/// Filter counties using the specified criteria, preserving input order
pub fn filter_counties<'a, F>(records: &'a [CountyRecord], filter: &F) -> Vec<&'a CountyRecord>
where
    F: FilterCriteria<CountyRecord>,
{
    let matched: Vec<&CountyRecord> = records
        .iter()
        .filter(|county| filter.meets_criteria(county))
        .collect();
    log::debug!("filter matched {} of {} counties", matched.len(), records.len());
    matched
}

/// Counties whose state equals the given region code
///
/// A code that is not exactly two characters yields an empty result
/// regardless of the input.
pub fn filter_by_state<'a>(
    records: &'a [CountyRecord],
    region_code: &str,
) -> Vec<&'a CountyRecord> {
    match StateCode::parse(region_code) {
        Ok(code) => filter_counties(records, &CountyFilter::State(code.as_str().to_string())),
        Err(err) => {
            log::warn!("{err}, returning no counties");
            Vec::new()
        }
    }
}

/// Counties whose education share for the category is strictly above the threshold
pub fn education_greater_than<'a>(
    records: &'a [CountyRecord],
    category: &str,
    threshold: f64,
) -> Vec<&'a CountyRecord> {
    filter_counties(
        records,
        &CountyFilter::EducationAbove {
            category: category.to_string(),
            threshold,
        },
    )
}

/// Counties whose education share for the category is strictly below the threshold
pub fn education_less_than<'a>(
    records: &'a [CountyRecord],
    category: &str,
    threshold: f64,
) -> Vec<&'a CountyRecord> {
    filter_counties(
        records,
        &CountyFilter::EducationBelow {
            category: category.to_string(),
            threshold,
        },
    )
}

/// Counties whose ethnicity share for the category is strictly above the threshold
pub fn ethnicity_greater_than<'a>(
    records: &'a [CountyRecord],
    category: &str,
    threshold: f64,
) -> Vec<&'a CountyRecord> {
    filter_counties(
        records,
        &CountyFilter::EthnicityAbove {
            category: category.to_string(),
            threshold,
        },
    )
}

/// Counties whose ethnicity share for the category is strictly below the threshold
pub fn ethnicity_less_than<'a>(
    records: &'a [CountyRecord],
    category: &str,
    threshold: f64,
) -> Vec<&'a CountyRecord> {
    filter_counties(
        records,
        &CountyFilter::EthnicityBelow {
            category: category.to_string(),
            threshold,
        },
    )
}

/// Counties whose poverty share is strictly above the threshold
pub fn below_poverty_level_greater_than(
    records: &[CountyRecord],
    threshold: f64,
) -> Vec<&CountyRecord> {
    filter_counties(records, &CountyFilter::PovertyAbove(threshold))
}

/// Counties whose poverty share is strictly below the threshold
pub fn below_poverty_level_less_than(
    records: &[CountyRecord],
    threshold: f64,
) -> Vec<&CountyRecord> {
    filter_counties(records, &CountyFilter::PovertyBelow(threshold))
}
