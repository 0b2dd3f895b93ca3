use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Weather condition a scenario is generated under. Drives the physics step only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Rain,
    Storm,
}

impl WeatherCondition {
    pub const CANDIDATES: [WeatherCondition; 3] = [WeatherCondition::Clear, WeatherCondition::Rain, WeatherCondition::Storm];
}

impl FromStr for WeatherCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(WeatherCondition::Clear),
            "rain" => Ok(WeatherCondition::Rain),
            "storm" => Ok(WeatherCondition::Storm),
            _ => Err(Error::UnknownWeatherCondition(s.to_string())),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Storm => "storm",
        };
        write!(f, "{}", label)
    }
}

/// Time-of-day context that conditions the intent set and the background load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeContext {
    Peak,
    OffPeak,
    Emergency,
}

impl TimeContext {
    pub const CANDIDATES: [TimeContext; 3] = [TimeContext::Peak, TimeContext::OffPeak, TimeContext::Emergency];
}

impl FromStr for TimeContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peak" => Ok(TimeContext::Peak),
            "off_peak" => Ok(TimeContext::OffPeak),
            "emergency" => Ok(TimeContext::Emergency),
            _ => Err(Error::UnknownTimeContext(s.to_string())),
        }
    }
}

/// Policy governing which destination class each camera's analytics flow is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    Random,
    AllEdge,
    CriticalEdge,
    AllCloud,
}

impl PlacementStrategy {
    pub const CANDIDATES: [PlacementStrategy; 4] =
        [PlacementStrategy::Random, PlacementStrategy::AllEdge, PlacementStrategy::CriticalEdge, PlacementStrategy::AllCloud];
}

impl FromStr for PlacementStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(PlacementStrategy::Random),
            "all_edge" => Ok(PlacementStrategy::AllEdge),
            "critical_edge" => Ok(PlacementStrategy::CriticalEdge),
            "all_cloud" => Ok(PlacementStrategy::AllCloud),
            _ => Err(Error::UnknownPlacementStrategy(s.to_string())),
        }
    }
}
