//! County record entity model
//!
//! This module contains the `CountyRecord` model, one county's demographic
//! snapshot: a state code plus named maps for population counts and for
//! education, ethnicity, and income percentage shares. The maps carry
//! whatever metrics the data source provided; the accessors encapsulate the
//! lookup-or-default policy the query functions rely on.

use crate::models::types::{BELOW_POVERTY_LEVEL, POPULATION_2014};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One county's demographic snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    /// Two-letter state abbreviation
    pub state: String,
    /// Named population metrics (counts)
    pub population: BTreeMap<String, u64>,
    /// Education attainment category -> percentage of the population (0-100)
    pub education: BTreeMap<String, f64>,
    /// Ethnicity category -> percentage of the population (0-100)
    pub ethnicities: BTreeMap<String, f64>,
    /// Income metrics -> percentage values (0-100)
    pub income: BTreeMap<String, f64>,
}

impl CountyRecord {
    /// Create a new record for a state with empty metric maps
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            population: BTreeMap::new(),
            education: BTreeMap::new(),
            ethnicities: BTreeMap::new(),
            income: BTreeMap::new(),
        }
    }

    /// Add a population metric
    #[must_use]
    pub fn with_population(mut self, metric: impl Into<String>, count: u64) -> Self {
        self.population.insert(metric.into(), count);
        self
    }

    /// Add an education attainment share
    #[must_use]
    pub fn with_education(mut self, category: impl Into<String>, share: f64) -> Self {
        self.education.insert(category.into(), share);
        self
    }

    /// Add an ethnicity share
    #[must_use]
    pub fn with_ethnicity(mut self, category: impl Into<String>, share: f64) -> Self {
        self.ethnicities.insert(category.into(), share);
        self
    }

    /// Add an income metric
    #[must_use]
    pub fn with_income(mut self, metric: impl Into<String>, share: f64) -> Self {
        self.income.insert(metric.into(), share);
        self
    }

    /// The canonical 2014 total population, 0 when the metric is absent
    #[must_use]
    pub fn total_population(&self) -> u64 {
        self.population.get(POPULATION_2014).copied().unwrap_or(0)
    }

    /// Share of the population with the given education attainment, if recorded
    #[must_use]
    pub fn education_share(&self, category: &str) -> Option<f64> {
        self.education.get(category).copied()
    }

    /// Share of the population with the given ethnicity, if recorded
    #[must_use]
    pub fn ethnicity_share(&self, category: &str) -> Option<f64> {
        self.ethnicities.get(category).copied()
    }

    /// Share of the population below the poverty level, if recorded
    #[must_use]
    pub fn poverty_level_share(&self) -> Option<f64> {
        self.income.get(BELOW_POVERTY_LEVEL).copied()
    }
}
