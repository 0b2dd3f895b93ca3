pub mod context;
pub mod entity;
pub mod failures;
pub mod generator;
pub mod intents;
pub mod placement;
pub mod topology;
pub mod traffic;
pub mod weather;
