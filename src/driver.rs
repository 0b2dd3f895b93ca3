use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::fs;
use std::path::Path;

use crate::domain::context::{PlacementStrategy, TimeContext, WeatherCondition};
use crate::domain::generator::{ScenarioGenerator, ScenarioParameters};
use crate::error::Result;
use crate::export;

/// Generates `num_scenarios` export files under `output_dir`, one scenario per
/// file, named with a zero-padded sequential index.
///
/// Scenario `i` is generated from seed `base_seed + i`, so the dataset is
/// reproducible while every scenario stays distinct. The per-scenario knobs
/// (weather, time context, placement strategy, background load) are sampled by
/// a driver-owned RNG seeded from `base_seed`.
///
/// A failed export aborts that scenario only; files already written stay intact.
pub fn generate_dataset(num_scenarios: u32, output_dir: &Path, base_seed: u64) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut driver_rng = StdRng::seed_from_u64(base_seed);
    let mut failed = 0u32;

    for i in 0..num_scenarios {
        let weather = WeatherCondition::CANDIDATES.choose(&mut driver_rng).copied().unwrap_or(WeatherCondition::Clear);
        let time_context = TimeContext::CANDIDATES.choose(&mut driver_rng).copied().unwrap_or(TimeContext::OffPeak);
        let placement = PlacementStrategy::CANDIDATES.choose(&mut driver_rng).copied().unwrap_or(PlacementStrategy::Random);

        // Peak hours carry markedly more contending noise on the uplink.
        let background_flows = if time_context == TimeContext::Peak { driver_rng.random_range(60..=100) } else { driver_rng.random_range(10..=30) };

        let params = ScenarioParameters { weather, time_context, placement, background_flows };
        let scenario = ScenarioGenerator::new(base_seed + u64::from(i)).generate(&params);

        let path = output_dir.join(format!("scenario_{:04}.json", i));
        if let Err(e) = export::export_scenario(&scenario, &path, i, weather) {
            log::error!("Export of scenario {} to '{}' failed: {}", i, path.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        log::warn!("{} of {} scenarios failed to export.", failed, num_scenarios);
    } else {
        log::info!("Successfully generated {} scenarios in '{}'.", num_scenarios, output_dir.display());
    }

    Ok(())
}
