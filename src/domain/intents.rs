use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::domain::context::TimeContext;
use crate::domain::entity::intent::{Intent, IntentCategory};
use crate::domain::entity::zone::PolicyZone;

fn constraint(key: &str, value: Value) -> BTreeMap<String, Value> {
    BTreeMap::from([(key.to_string(), value)])
}

/// Produces the fixed base intent set plus at most one context-dependent intent.
/// Constraint payloads are opaque; the generator never interprets them.
pub fn generate_intents(time_context: TimeContext) -> Vec<Intent> {
    let all_zones = PolicyZone::ALL.to_vec();
    let critical = vec![PolicyZone::Pz1CriticalSecurity];

    let mut intents = vec![
        Intent::new("SC1", IntentCategory::SafetyCritical, "Sub-200ms latency for security", critical.clone(), constraint("max_latency", json!(200)), 1),
        Intent::new("SC2", IntentCategory::SafetyCritical, "Prioritize intrusion detection", critical.clone(), constraint("priority_boost", json!(true)), 1),
        Intent::new(
            "CM1",
            IntentCategory::CrowdMonitoring,
            "Optimize check-in density monitoring",
            vec![PolicyZone::Pz3PublicArea],
            constraint("min_fps", json!(15)),
            2,
        ),
        Intent::new("CO1", IntentCategory::CostOptimization, "Minimize cloud egress cost", all_zones.clone(), constraint("max_cloud_ratio", json!(0.3)), 3),
        Intent::new("NQ1", IntentCategory::NetworkQos, "Limit packet loss < 1%", all_zones.clone(), constraint("max_loss", json!(0.01)), 2),
        Intent::new("FT1", IntentCategory::FaultTolerance, "Failover to nearest edge", all_zones.clone(), constraint("failover_enabled", json!(true)), 1),
    ];

    match time_context {
        TimeContext::Peak => {
            intents.push(Intent::new("CA1", IntentCategory::ContextAware, "Peak hour security boost", critical, constraint("bw_reservation", json!("50%")), 1));
        }
        TimeContext::Emergency => {
            intents.push(Intent::new("CA2", IntentCategory::ContextAware, "EMERGENCY: Max reliability", all_zones, constraint("override_cost", json!(true)), 1));
        }
        TimeContext::OffPeak => {}
    }

    intents
}
