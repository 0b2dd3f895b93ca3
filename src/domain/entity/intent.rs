use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::entity::zone::PolicyZone;

/// Closed set of intent categories understood by the downstream policy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentCategory {
    SafetyCritical,
    CrowdMonitoring,
    CostOptimization,
    NetworkQos,
    ContextAware,
    FaultTolerance,
    MultiObjective,
}

/// A declarative requirement. The constraint payload is opaque to the generator;
/// its schema is owned by the consumer. An ordered map keeps serialization deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct Intent {
    pub id: String,
    pub category: IntentCategory,
    pub description: String,
    pub target_zones: Vec<PolicyZone>,
    pub constraints: BTreeMap<String, Value>,
    pub priority: u8,
}

impl Intent {
    pub fn new(id: &str, category: IntentCategory, description: &str, target_zones: Vec<PolicyZone>, constraints: BTreeMap<String, Value>, priority: u8) -> Self {
        Intent { id: id.to_string(), category, description: description.to_string(), target_zones, constraints, priority }
    }
}
