// Planner configuration shared by both strategies

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{CostModel, Time};

/// Parameters for one planning run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Cost constants used to score routes
    pub cost: CostModel,

    /// Maximum total time a route may take
    pub budget: Time,

    /// Number of raw permutations the bounded search may enumerate
    pub max_permutations: usize,
}

impl PlannerConfig {
    pub const DEFAULT_BUDGET: Time = 200.0;
    pub const DEFAULT_MAX_PERMUTATIONS: usize = 1000;

    /// Creates a configuration with default cost constants
    pub fn new(budget: Time, max_permutations: usize) -> Self {
        Self {
            cost: CostModel::default(),
            budget,
            max_permutations,
        }
    }

    /// Replaces the cost model
    pub fn with_cost(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` for a negative or non-finite budget or
    /// cost constant, and for a zero permutation cap.
    pub fn validate(&self) -> Result<(), PlanError> {
        check_non_negative("budget", self.budget)?;
        check_non_negative("search_time_per_cell", self.cost.search_time_per_cell)?;
        check_non_negative("travel_time_per_unit", self.cost.travel_time_per_unit)?;
        if self.max_permutations == 0 {
            return Err(PlanError::InvalidInput(
                "max_permutations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUDGET, Self::DEFAULT_MAX_PERMUTATIONS)
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), PlanError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} must be a finite non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.budget, 200.0);
        assert_eq!(config.max_permutations, 1000);
        assert_eq!(config.cost.search_time_per_cell, 6.0);
        assert_eq!(config.cost.travel_time_per_unit, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PlannerConfig::new(-1.0, 10).validate().is_err());
        assert!(PlannerConfig::new(f64::NAN, 10).validate().is_err());
        assert!(PlannerConfig::new(20.0, 0).validate().is_err());
        assert!(PlannerConfig::new(20.0, 10)
            .with_cost(CostModel::new(6.0, f64::INFINITY))
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{ "budget": 60.0 }"#).unwrap();
        assert_eq!(config.budget, 60.0);
        assert_eq!(config.max_permutations, 1000);
        assert_eq!(config.cost, CostModel::default());
    }
}
