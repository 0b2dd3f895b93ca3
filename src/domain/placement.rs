use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::domain::context::PlacementStrategy;
use crate::domain::entity::camera::Camera;
use crate::domain::entity::id::FlowId;
use crate::domain::entity::video_flow::{AnalyticsType, VideoFlow};
use crate::domain::entity::zone::PolicyZone;
use crate::domain::topology::{BACKUP_EDGE, CLOUD_PRIMARY, Topology, edge_for_terminal};

fn analytics_for_zone(zone: PolicyZone) -> AnalyticsType {
    match zone {
        PolicyZone::Pz1CriticalSecurity => AnalyticsType::Intrusion,
        PolicyZone::Pz2BoardingGates => AnalyticsType::PassengerFlow,
        PolicyZone::Pz3PublicArea => AnalyticsType::CrowdAnalytics,
        PolicyZone::Pz4VipRestricted => AnalyticsType::Occupancy,
        PolicyZone::Pz5ArrivalBaggage => AnalyticsType::BaggageTracking,
    }
}

/// Base workload profile per analytics task: (compute intensity, processing delay in ms).
fn analytics_profile(analytics: AnalyticsType) -> (f64, f64) {
    match analytics {
        AnalyticsType::Intrusion => (0.8, 150.0),
        AnalyticsType::CrowdAnalytics => (0.4, 60.0),
        AnalyticsType::PassengerFlow => (0.5, 80.0),
        AnalyticsType::Occupancy => (0.1, 20.0),
        AnalyticsType::BaggageTracking => (0.6, 90.0),
    }
}

/// Places exactly one analytics flow per camera. The core gateway is never a
/// valid destination under any strategy, and the backup destination always
/// differs from the primary one.
pub fn generate_flows(topology: &Topology, strategy: PlacementStrategy, rng: &mut StdRng) -> Vec<VideoFlow> {
    // Candidate pool for the random strategy: all analytics edges plus the primary cloud.
    let mut candidates: Vec<&str> = topology.non_gateway_edges().iter().map(|e| e.id.as_str()).collect();
    candidates.push(CLOUD_PRIMARY);

    let mut flows = Vec::with_capacity(topology.cameras.len());

    for cam in &topology.cameras {
        let local_edge = edge_for_terminal(cam.terminal());

        let destination = match strategy {
            PlacementStrategy::AllEdge => local_edge,
            PlacementStrategy::AllCloud => CLOUD_PRIMARY,
            PlacementStrategy::CriticalEdge => {
                if cam.zone == PolicyZone::Pz1CriticalSecurity {
                    local_edge
                } else {
                    CLOUD_PRIMARY
                }
            }
            PlacementStrategy::Random => candidates.choose(rng).copied().unwrap_or(local_edge),
        };

        // Cloud backs up edge placements; the security edge backs up cloud placements.
        let backup = if destination == CLOUD_PRIMARY { BACKUP_EDGE } else { CLOUD_PRIMARY };

        let analytics_type = analytics_for_zone(cam.zone);
        let (base_intensity, base_delay) = analytics_profile(analytics_type);

        // Per-flow workload jitter of +/- 10%, with intensity capped at 1.0.
        let jitter = rng.random_range(0.9..=1.1);
        let compute_intensity = (base_intensity * jitter).min(1.0);
        let processing_delay_ms = base_delay * jitter;

        flows.push(VideoFlow {
            id: FlowId::new(format!("flow_{}", cam.id)),
            camera_id: cam.id.clone(),
            zone: cam.zone,
            source: cam.id.to_string(),
            destination: destination.to_string(),
            backup_destination: backup.to_string(),
            bitrate_mbps: cam.bitrate_mbps,
            priority: cam.priority,
            analytics_type,
            compute_intensity,
            processing_delay_ms,
        });
    }

    flows
}
