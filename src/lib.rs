use crate::domain::generator::{Scenario, ScenarioGenerator, ScenarioParameters};

pub mod api;
pub mod domain;
pub mod driver;
pub mod error;
pub mod export;
pub mod logger;

/// Generates one scenario from one seed. Convenience entry point for callers
/// that do not need the dataset driver loop.
pub fn generate_scenario(seed: u64, params: &ScenarioParameters) -> Scenario {
    ScenarioGenerator::new(seed).generate(params)
}
