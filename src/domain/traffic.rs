use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::domain::entity::background_traffic::{BackgroundTraffic, TransportType};
use crate::domain::topology::CLOUD_PRIMARY;

// Background traffic originates at the terminal edges with analytics workloads;
// the security and perimeter hubs carry no generic office/retail traffic.
const SOURCE_EDGES: [&str; 3] = ["edge_termA", "edge_termB", "edge_termC"];

/// Synthesizes `num_flows` independent contending flows over the shared WAN
/// uplink. No correlation between flows is modeled.
pub fn generate_background_traffic(num_flows: usize, rng: &mut StdRng) -> Vec<BackgroundTraffic> {
    let mut flows = Vec::with_capacity(num_flows);

    for i in 0..num_flows {
        let src = SOURCE_EDGES.choose(rng).copied().unwrap_or(SOURCE_EDGES[0]);

        flows.push(BackgroundTraffic {
            id: format!("bg_{}", i),
            src: src.to_string(),
            dst: CLOUD_PRIMARY.to_string(),
            start_time_s: rng.random_range(0..=600),
            duration_s: rng.random_range(30..=300),
            bitrate_mbps: rng.random_range(5.0..=20.0),
            flow_type: TransportType::Tcp,
        });
    }

    flows
}
