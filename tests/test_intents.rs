use airnet_scenegen::domain::context::TimeContext;
use airnet_scenegen::domain::entity::intent::IntentCategory;
use airnet_scenegen::domain::entity::zone::PolicyZone;
use airnet_scenegen::domain::intents::generate_intents;

const BASE_IDS: [&str; 6] = ["SC1", "SC2", "CM1", "CO1", "NQ1", "FT1"];

#[test]
fn test_off_peak_produces_only_the_base_set() {
    let intents = generate_intents(TimeContext::OffPeak);

    assert_eq!(intents.len(), 6, "Off-peak gets no context-dependent intent");
    for (intent, expected_id) in intents.iter().zip(BASE_IDS.iter()) {
        assert_eq!(intent.id, *expected_id);
    }
}

#[test]
fn test_peak_adds_the_security_boost_intent() {
    let intents = generate_intents(TimeContext::Peak);

    assert_eq!(intents.len(), 7);

    let extra = intents.last().expect("Peak must add one intent");
    assert_eq!(extra.id, "CA1");
    assert_eq!(extra.category, IntentCategory::ContextAware);
    assert_eq!(extra.target_zones, vec![PolicyZone::Pz1CriticalSecurity], "The peak boost targets the critical-security zone only");
    assert!(extra.constraints.contains_key("bw_reservation"));
}

#[test]
fn test_emergency_adds_the_override_intent() {
    let intents = generate_intents(TimeContext::Emergency);

    assert_eq!(intents.len(), 7);

    let extra = intents.last().expect("Emergency must add one intent");
    assert_eq!(extra.id, "CA2");
    assert_eq!(extra.category, IntentCategory::ContextAware);
    assert_eq!(extra.target_zones.len(), PolicyZone::ALL.len(), "The emergency override targets every zone");
    assert_eq!(extra.priority, 1);
}

#[test]
fn test_base_intents_carry_their_constraint_payloads() {
    let intents = generate_intents(TimeContext::OffPeak);

    let co1 = intents.iter().find(|i| i.id == "CO1").expect("CO1 must be present");
    assert_eq!(co1.category, IntentCategory::CostOptimization);
    assert_eq!(co1.target_zones.len(), 5, "Cost optimization applies across all zones");
    assert_eq!(co1.constraints.get("max_cloud_ratio"), Some(&serde_json::json!(0.3)));

    let ft1 = intents.iter().find(|i| i.id == "FT1").expect("FT1 must be present");
    assert_eq!(ft1.constraints.get("failover_enabled"), Some(&serde_json::json!(true)));
}
