use serde::Serialize;

use crate::domain::entity::id::{CameraId, FlowId};
use crate::domain::entity::zone::PolicyZone;

/// The analytics task a flow feeds, looked up from the camera's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsType {
    Intrusion,
    PassengerFlow,
    CrowdAnalytics,
    Occupancy,
    BaggageTracking,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoFlow {
    pub id: FlowId,
    pub camera_id: CameraId,
    pub zone: PolicyZone,
    pub source: String,
    pub destination: String,
    pub backup_destination: String,
    pub bitrate_mbps: f64,
    pub priority: u8,
    pub analytics_type: AnalyticsType,
    pub compute_intensity: f64,
    pub processing_delay_ms: f64,
}
