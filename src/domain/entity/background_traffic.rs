use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportType {
    Tcp,
}

/// Generic contending traffic on the shared uplink. Sources at a terminal edge,
/// sinks at the primary cloud, so it always crosses the WAN bottleneck.
#[derive(Debug, Clone, Serialize)]
pub struct BackgroundTraffic {
    pub id: String,
    pub src: String,
    pub dst: String,
    pub start_time_s: u32,
    pub duration_s: u32,
    pub bitrate_mbps: f64,
    pub flow_type: TransportType,
}
