//! Structural properties of the query functions: additivity, threshold
//! complementarity, percentage bounds, and degenerate inputs.

use county_demographics::{
    BELOW_POVERTY_LEVEL, CountyRecord, POPULATION_2014, below_poverty_level_greater_than,
    below_poverty_level_less_than, education_greater_than, education_less_than,
    ethnicity_greater_than, ethnicity_less_than, filter_by_state, percent_below_poverty_level,
    percent_by_education, percent_by_ethnicity, population_total,
};

fn mixed_counties() -> Vec<CountyRecord> {
    vec![
        CountyRecord::new("CA")
            .with_population(POPULATION_2014, 10_000)
            .with_education("Bachelor's Degree or Higher", 35.0)
            .with_ethnicity("Hispanic or Latino", 38.0)
            .with_income(BELOW_POVERTY_LEVEL, 15.0),
        CountyRecord::new("OR")
            .with_population(POPULATION_2014, 4000)
            .with_education("Bachelor's Degree or Higher", 20.0)
            .with_ethnicity("Hispanic or Latino", 12.0)
            .with_income(BELOW_POVERTY_LEVEL, 20.0),
        // Shares exactly at the thresholds used below
        CountyRecord::new("WA")
            .with_population(POPULATION_2014, 2000)
            .with_education("Bachelor's Degree or Higher", 25.0)
            .with_ethnicity("Hispanic or Latino", 12.5)
            .with_income(BELOW_POVERTY_LEVEL, 17.5),
        // No metrics at all
        CountyRecord::new("NV"),
    ]
}

#[test]
fn test_population_total_is_additive() {
    let records = mixed_counties();
    let (a, b) = records.split_at(2);

    assert_eq!(population_total(&records), population_total(a) + population_total(b));
    assert_eq!(population_total(&[]), 0);
}

#[test]
fn test_filter_by_state_malformed_and_unknown_codes() {
    let records = mixed_counties();

    // No county has this state
    assert!(filter_by_state(&records, "ZZ").is_empty());

    // Malformed codes yield nothing regardless of the input
    assert!(filter_by_state(&records, "X").is_empty());
    assert!(filter_by_state(&records, "CAL").is_empty());
    assert!(filter_by_state(&records, "").is_empty());
    assert!(filter_by_state(&[], "X").is_empty());
}

#[test]
fn test_percentages_are_bounded() {
    let records = mixed_counties();

    for percent in [
        percent_by_education(&records, "Bachelor's Degree or Higher"),
        percent_by_ethnicity(&records, "Hispanic or Latino"),
        percent_below_poverty_level(&records),
        percent_by_education(&records, "No Such Category"),
    ] {
        assert!((0.0..=100.0).contains(&percent), "out of range: {percent}");
    }

    assert_eq!(percent_by_education(&[], "Bachelor's Degree or Higher"), 0.0);
}

#[test]
fn test_threshold_complementarity() {
    let records = mixed_counties();
    let category = "Bachelor's Degree or Higher";

    // The WA county sits exactly at each threshold
    for threshold in [25.0, 12.5, 17.5] {
        let greater = education_greater_than(&records, category, threshold);
        let less = education_less_than(&records, category, threshold);

        for county in &records {
            let in_greater = greater.contains(&county);
            let in_less = less.contains(&county);
            assert!(!(in_greater && in_less), "county in both partitions");

            let share = county.education_share(category).unwrap_or(0.0);
            if share == threshold {
                assert!(!in_greater && !in_less, "boundary county not excluded");
            } else {
                assert!(in_greater || in_less, "county missing from both partitions");
            }
        }
    }
}

#[test]
fn test_threshold_filters_preserve_order_and_default_missing_to_zero() {
    let records = mixed_counties();

    // CA (38.0) and OR (12.0) clear 5%; WA (12.5) also does; NV has no share
    let hispanic = ethnicity_greater_than(&records, "Hispanic or Latino", 5.0);
    assert_eq!(hispanic, vec![&records[0], &records[1], &records[2]]);

    // The metric-less NV county compares as 0 and matches any positive cutoff
    let sparse = ethnicity_less_than(&records, "Hispanic or Latino", 1.0);
    assert_eq!(sparse, vec![&records[3]]);

    let poor = below_poverty_level_greater_than(&records, 16.0);
    assert_eq!(poor, vec![&records[1], &records[2]]);

    let not_poor = below_poverty_level_less_than(&records, 16.0);
    assert_eq!(not_poor, vec![&records[0], &records[3]]);
}
