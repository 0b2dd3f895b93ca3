pub mod background_traffic;
pub mod camera;
pub mod cloud_endpoint;
pub mod edge_server;
pub mod failure;
pub mod id;
pub mod intent;
pub mod network_link;
pub mod video_flow;
pub mod zone;
