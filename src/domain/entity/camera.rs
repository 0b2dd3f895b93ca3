use serde::Serialize;

use crate::domain::entity::id::CameraId;
use crate::domain::entity::zone::PolicyZone;

#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    pub id: CameraId,
    pub zone: PolicyZone,
    /// Location path in the form `<terminal>/<area>`.
    pub location: String,
    pub priority: u8,
    pub resolution: String,
    pub fps: u32,
    pub bitrate_mbps: f64,
}

impl Camera {
    /// The terminal component of the location path, used for the camera-to-edge mapping.
    pub fn terminal(&self) -> &str {
        self.location.split('/').next().unwrap_or(&self.location)
    }
}
