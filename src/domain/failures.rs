use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::domain::entity::failure::{FailureEvent, FailureType};
use crate::domain::topology::{Topology, WAN_BOTTLENECK_LINK};

/// Selects the failure regime for one scenario from a single uniform draw.
///
/// The partition of [0, 1) is dataset-balancing policy, not a physical model:
/// 15% single edge shutdown, 15% WAN degradation, 5% double shutdown, 65% no
/// failure. The thresholds are label-compatibility constants for the existing
/// scenario corpus and must not be retuned.
pub fn generate_failures(topology: &Topology, rng: &mut StdRng) -> Vec<FailureEvent> {
    let mut failures = Vec::new();
    let scenario_roll: f64 = rng.random();

    // The core gateway is a deliberate single point of failure and is excluded
    // from every shutdown regime.
    let targets: Vec<&str> = topology.non_gateway_edges().iter().map(|e| e.id.as_str()).collect();

    if scenario_roll > 0.85 {
        // Single edge shutdown, total outage.
        if let Some(edge) = targets.choose(rng) {
            let start = rng.random_range(100..=400);
            failures.push(FailureEvent { target: edge.to_string(), failure_type: FailureType::Shutdown, start_time_s: start, duration_s: 120, severity: 1.0 });
            log::info!("Generated EVENT: {} shutdown", edge);
        }
    } else if scenario_roll > 0.70 {
        // Partial degradation of the WAN bottleneck.
        let start = rng.random_range(50..=300);
        failures.push(FailureEvent {
            target: WAN_BOTTLENECK_LINK.to_string(),
            failure_type: FailureType::LinkDegradation,
            start_time_s: start,
            duration_s: 200,
            severity: 0.2,
        });
        log::info!("Generated EVENT: {} degraded", WAN_BOTTLENECK_LINK);
    } else if scenario_roll > 0.65 {
        // Rare double shutdown with staggered start times.
        if targets.len() >= 2 {
            let first = targets[0];
            let last = targets[targets.len() - 1];
            failures.push(FailureEvent { target: first.to_string(), failure_type: FailureType::Shutdown, start_time_s: 100, duration_s: 60, severity: 1.0 });
            failures.push(FailureEvent { target: last.to_string(), failure_type: FailureType::Shutdown, start_time_s: 120, duration_s: 60, severity: 1.0 });
            log::info!("Generated EVENT: Double Shutdown ({}, {})", first, last);
        }
    }

    failures
}
