use serde::Serialize;

use crate::domain::entity::id::EdgeServerId;

#[derive(Debug, Clone, Serialize)]
pub struct EdgeServer {
    pub id: EdgeServerId,
    pub location: String,
    pub cpu_cores: u32,
    pub memory_gb: u32,
    pub network_bandwidth_gbps: f64,
}

impl EdgeServer {
    pub fn new(id: &str, location: &str, cpu_cores: u32, memory_gb: u32, network_bandwidth_gbps: f64) -> Self {
        EdgeServer { id: EdgeServerId::new(id), location: location.to_string(), cpu_cores, memory_gb, network_bandwidth_gbps }
    }
}
