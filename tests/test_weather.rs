use airnet_scenegen::domain::context::WeatherCondition;
use airnet_scenegen::domain::entity::network_link::LinkType;
use airnet_scenegen::domain::topology::{CLOUD_BACKUP, CLOUD_PRIMARY, CORE_GATEWAY, Topology};
use airnet_scenegen::domain::weather::apply_weather;

#[test]
fn test_clear_weather_is_a_no_op() {
    let pristine = Topology::build();
    let weathered = apply_weather(Topology::build(), WeatherCondition::Clear);

    assert_eq!(pristine.network_links.len(), weathered.network_links.len());

    for (before, after) in pristine.network_links.iter().zip(weathered.network_links.iter()) {
        assert_eq!(before.capacity_mbps, after.capacity_mbps, "Clear weather must not touch capacity of {} -> {}", before.src, before.dst);
        assert_eq!(before.latency_ms, after.latency_ms, "Clear weather must not touch latency of {} -> {}", before.src, before.dst);
        assert_eq!(before.packet_loss_rate, after.packet_loss_rate, "Clear weather must not touch loss of {} -> {}", before.src, before.dst);
    }
}

#[test]
fn test_rain_degrades_wireless_links_only() {
    let weathered = apply_weather(Topology::build(), WeatherCondition::Rain);

    for link in &weathered.network_links {
        match link.link_type {
            LinkType::Wireless => {
                assert_eq!(link.packet_loss_rate, 0.05, "Rain fade sets wireless loss to exactly 0.05");
                assert_eq!(link.capacity_mbps, 240.0, "Rain reduces wireless capacity to 80% of its base 300 Mbps");
            }
            LinkType::Wan => {
                // Rain has no modeled effect on WAN congestion.
                assert_eq!(link.capacity_mbps, 1000.0, "Rain must not touch WAN capacity");
                assert_eq!(link.packet_loss_rate, 0.001, "Rain must not touch WAN loss");
            }
            LinkType::Wired => {
                assert!(!link.stochastic, "Wired links are never weather-affected");
            }
        }
    }
}

#[test]
fn test_storm_hits_wan_and_wireless() {
    let weathered = apply_weather(Topology::build(), WeatherCondition::Storm);

    let wan_primary = weathered
        .network_links
        .iter()
        .find(|l| l.src == CORE_GATEWAY && l.dst == CLOUD_PRIMARY)
        .expect("The WAN bottleneck link must exist");
    assert_eq!(wan_primary.capacity_mbps, 700.0, "Storm reduces WAN capacity to 70% of its base 1000 Mbps");
    assert_eq!(wan_primary.latency_ms, 22.5, "Storm raises WAN latency to 150% of its base 15 ms");

    let wan_backup = weathered
        .network_links
        .iter()
        .find(|l| l.src == CORE_GATEWAY && l.dst == CLOUD_BACKUP)
        .expect("The backup WAN link must exist");
    assert_eq!(wan_backup.capacity_mbps, 700.0);
    assert_eq!(wan_backup.latency_ms, 37.5);

    for link in weathered.network_links.iter().filter(|l| l.link_type == LinkType::Wireless) {
        assert_eq!(link.packet_loss_rate, 0.15, "Storm sets wireless loss to exactly 0.15");
        assert_eq!(link.capacity_mbps, 180.0, "Storm reduces wireless capacity to 60% of its base 300 Mbps");
    }
}

#[test]
fn test_weather_never_improves_link_quality() {
    let pristine = Topology::build();

    for condition in WeatherCondition::CANDIDATES {
        let weathered = apply_weather(Topology::build(), condition);

        for (before, after) in pristine.network_links.iter().zip(weathered.network_links.iter()) {
            assert!(after.capacity_mbps <= before.capacity_mbps, "Capacity of {} -> {} must never improve under {:?}", before.src, before.dst, condition);
            assert!(after.latency_ms >= before.latency_ms, "Latency of {} -> {} must never improve under {:?}", before.src, before.dst, condition);
            assert!(
                after.packet_loss_rate >= before.packet_loss_rate,
                "Loss of {} -> {} must never improve under {:?}",
                before.src,
                before.dst,
                condition
            );
        }
    }
}
