use serde::Serialize;

use crate::domain::entity::id::CloudEndpointId;

#[derive(Debug, Clone, Serialize)]
pub struct CloudEndpoint {
    pub id: CloudEndpointId,
    pub location: String,
    pub bandwidth_gbps: f64,
}

impl CloudEndpoint {
    pub fn new(id: &str, location: &str, bandwidth_gbps: f64) -> Self {
        CloudEndpoint { id: CloudEndpointId::new(id), location: location.to_string(), bandwidth_gbps }
    }
}
