use serde::Serialize;

use crate::domain::context::WeatherCondition;
use crate::domain::entity::background_traffic::BackgroundTraffic;
use crate::domain::entity::camera::Camera;
use crate::domain::entity::cloud_endpoint::CloudEndpoint;
use crate::domain::entity::edge_server::EdgeServer;
use crate::domain::entity::failure::FailureEvent;
use crate::domain::entity::intent::Intent;
use crate::domain::entity::network_link::NetworkLink;
use crate::domain::entity::video_flow::VideoFlow;
use crate::domain::generator::Scenario;

#[derive(Debug, Serialize)]
pub struct ScenarioContextDto {
    pub weather: WeatherCondition,
    pub time_of_day: &'static str,
}

/// The document consumed by the downstream graph-learning pipeline: one
/// self-contained scenario snapshot. Borrows the generator state; nothing is
/// copied for export.
#[derive(Debug, Serialize)]
pub struct ScenarioDto<'a> {
    pub scenario_id: u32,
    pub context: ScenarioContextDto,
    pub cameras: &'a [Camera],
    pub edge_servers: &'a [EdgeServer],
    pub cloud_endpoints: &'a [CloudEndpoint],
    pub network_links: &'a [NetworkLink],
    pub flows: &'a [VideoFlow],
    pub background_traffic: &'a [BackgroundTraffic],
    pub intents: &'a [Intent],
    pub failures: &'a [FailureEvent],
}

impl<'a> ScenarioDto<'a> {
    pub fn from_scenario(scenario: &'a Scenario, scenario_id: u32, weather: WeatherCondition) -> Self {
        ScenarioDto {
            scenario_id,
            context: ScenarioContextDto { weather, time_of_day: scenario.time_of_day_label() },
            cameras: &scenario.topology.cameras,
            edge_servers: &scenario.topology.edge_servers,
            cloud_endpoints: &scenario.topology.cloud_endpoints,
            network_links: &scenario.topology.network_links,
            flows: &scenario.flows,
            background_traffic: &scenario.background_traffic,
            intents: &scenario.intents,
            failures: &scenario.failures,
        }
    }
}
