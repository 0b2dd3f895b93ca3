use airnet_scenegen::domain::context::{PlacementStrategy, TimeContext, WeatherCondition};
use airnet_scenegen::error::Error;

#[test]
fn test_context_labels_parse() {
    assert_eq!("storm".parse::<WeatherCondition>().unwrap(), WeatherCondition::Storm);
    assert_eq!("off_peak".parse::<TimeContext>().unwrap(), TimeContext::OffPeak);
    assert_eq!("critical_edge".parse::<PlacementStrategy>().unwrap(), PlacementStrategy::CriticalEdge);
}

#[test]
fn test_unknown_labels_are_rejected() {
    assert!(matches!("drizzle".parse::<WeatherCondition>(), Err(Error::UnknownWeatherCondition(_))));
    assert!(matches!("midnight".parse::<TimeContext>(), Err(Error::UnknownTimeContext(_))));
    assert!(matches!("nearest".parse::<PlacementStrategy>(), Err(Error::UnknownPlacementStrategy(_))));
}

#[test]
fn test_weather_serializes_as_its_label() {
    let json = serde_json::to_string(&WeatherCondition::Storm).unwrap();
    assert_eq!(json, "\"storm\"");
    assert_eq!(WeatherCondition::Storm.to_string(), "storm");
}
