use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    Shutdown,
    LinkDegradation,
}

/// A single injected fault. For shutdowns the target is an edge server id; for
/// link degradations it is the synthetic id of the WAN bottleneck link.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEvent {
    pub target: String,
    pub failure_type: FailureType,
    pub start_time_s: u32,
    pub duration_s: u32,
    pub severity: f64,
}
