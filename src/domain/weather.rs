use crate::domain::context::WeatherCondition;
use crate::domain::entity::network_link::LinkType;
use crate::domain::topology::Topology;

/// Applies the weather model to a freshly built topology, mutating only links
/// marked stochastic. Link quality is never improved.
///
/// Consumes the topology and returns the weathered one, so the physics step
/// cannot be applied to the same pristine link set twice; compounding the
/// penalties would corrupt the capacity labels.
pub fn apply_weather(mut topology: Topology, condition: WeatherCondition) -> Topology {
    if condition == WeatherCondition::Clear {
        return topology;
    }

    log::info!("Applying weather physics: {}", condition);

    for link in &mut topology.network_links {
        if !link.stochastic {
            continue;
        }

        match link.link_type {
            // Wireless: rain fade on the perimeter camera uplinks.
            LinkType::Wireless => match condition {
                WeatherCondition::Rain => {
                    link.packet_loss_rate = 0.05;
                    link.capacity_mbps *= 0.8;
                }
                WeatherCondition::Storm => {
                    link.packet_loss_rate = 0.15;
                    link.capacity_mbps *= 0.6;
                }
                WeatherCondition::Clear => {}
            },

            // WAN: congestion, modeled for storms only. Rain has no effect here;
            // radio attenuation and internet congestion are driven differently.
            LinkType::Wan => {
                if condition == WeatherCondition::Storm {
                    link.capacity_mbps *= 0.7;
                    link.latency_ms *= 1.5;
                }
            }

            LinkType::Wired => {}
        }
    }

    topology
}
