//! Population statistics and summaries over county records
//!
//! This module provides headline statistics for a set of county records and
//! a human-readable summary report for callers that want a quick overview of
//! a loaded data set.

use itertools::Itertools;

use crate::aggregate::population_total;
use crate::models::CountyRecord;

/// Functions for demographic statistics and summaries
pub struct DemographicsStatistics;

impl DemographicsStatistics {
    /// Calculate basic statistics for a set of county records
    #[must_use]
    pub fn calculate_basic_stats(records: &[CountyRecord]) -> DemographicsStats {
        let county_count = records.len();
        let state_count = records.iter().map(|c| c.state.as_str()).unique().count();
        let total_population = population_total(records);

        let mean_county_population = if county_count == 0 {
            0.0
        } else {
            total_population as f64 / county_count as f64
        };

        let largest_county_population = records
            .iter()
            .map(CountyRecord::total_population)
            .max()
            .unwrap_or(0);

        DemographicsStats {
            county_count,
            state_count,
            total_population,
            mean_county_population,
            largest_county_population,
        }
    }

    /// Generate a detailed population summary
    #[must_use]
    pub fn generate_summary(records: &[CountyRecord]) -> String {
        let stats = Self::calculate_basic_stats(records);

        let mut summary = String::new();
        summary.push_str("County Demographics Summary:\n");
        summary.push_str(&format!("  Counties: {}\n", stats.county_count));
        summary.push_str(&format!("  States: {}\n", stats.state_count));
        summary.push_str(&format!(
            "  Total 2014 Population: {}\n",
            stats.total_population
        ));
        summary.push_str(&format!(
            "  Mean County Population: {:.1}\n",
            stats.mean_county_population
        ));
        summary.push_str(&format!(
            "  Largest County Population: {}\n",
            stats.largest_county_population
        ));

        // Per-state breakdown, sorted by state code
        if !records.is_empty() {
            summary.push_str("\nCounties per State:\n");
            let counts = records.iter().map(|c| c.state.as_str()).counts();
            for (state, count) in counts.into_iter().sorted() {
                summary.push_str(&format!("  {state}: {count}\n"));
            }
        }

        summary
    }
}

/// Structure containing basic statistics for a set of county records
#[derive(Debug, Clone)]
pub struct DemographicsStats {
    /// Number of county records
    pub county_count: usize,
    /// Number of distinct states represented
    pub state_count: usize,
    /// Total 2014 population across all counties
    pub total_population: u64,
    /// Mean 2014 population per county
    pub mean_county_population: f64,
    /// Largest single-county 2014 population
    pub largest_county_population: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::POPULATION_2014;

    fn sample_records() -> Vec<CountyRecord> {
        vec![
            CountyRecord::new("CA").with_population(POPULATION_2014, 1000),
            CountyRecord::new("CA").with_population(POPULATION_2014, 2000),
            CountyRecord::new("OR").with_population(POPULATION_2014, 600),
        ]
    }

    #[test]
    fn test_calculate_basic_stats() {
        let stats = DemographicsStatistics::calculate_basic_stats(&sample_records());

        assert_eq!(stats.county_count, 3);
        assert_eq!(stats.state_count, 2);
        assert_eq!(stats.total_population, 3600);
        assert_eq!(stats.mean_county_population, 1200.0);
        assert_eq!(stats.largest_county_population, 2000);
    }

    #[test]
    fn test_stats_for_empty_input() {
        let stats = DemographicsStatistics::calculate_basic_stats(&[]);

        assert_eq!(stats.county_count, 0);
        assert_eq!(stats.state_count, 0);
        assert_eq!(stats.total_population, 0);
        assert_eq!(stats.mean_county_population, 0.0);
        assert_eq!(stats.largest_county_population, 0);
    }

    #[test]
    fn test_generate_summary() {
        let summary = DemographicsStatistics::generate_summary(&sample_records());

        assert!(summary.contains("Counties: 3"));
        assert!(summary.contains("Total 2014 Population: 3600"));
        assert!(summary.contains("Counties per State:"));
        assert!(summary.contains("  CA: 2\n"));
        assert!(summary.contains("  OR: 1\n"));

        // The breakdown section is omitted for an empty record set
        let empty_summary = DemographicsStatistics::generate_summary(&[]);
        assert!(!empty_summary.contains("Counties per State:"));
    }
}
