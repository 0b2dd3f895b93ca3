use crate::domain::entity::camera::Camera;
use crate::domain::entity::cloud_endpoint::CloudEndpoint;
use crate::domain::entity::edge_server::EdgeServer;
use crate::domain::entity::id::CameraId;
use crate::domain::entity::network_link::{LinkType, NetworkLink};
use crate::domain::entity::zone::PolicyZone;

/// The aggregation point. Terminates every intra-campus link and owns the WAN
/// uplink; it never hosts analytics and is never a failure-shutdown target.
pub const CORE_GATEWAY: &str = "core_gateway";

/// The primary cloud destination; every background flow and every cloud-placed
/// video flow terminates here.
pub const CLOUD_PRIMARY: &str = "cloud_primary";
pub const CLOUD_BACKUP: &str = "cloud_backup";

/// Fallback edge for cameras whose terminal is missing from the mapping table.
pub const FALLBACK_EDGE: &str = "edge_termA";

/// Fixed backup destination for flows whose primary destination is the cloud.
pub const BACKUP_EDGE: &str = "edge_security";

/// Synthetic id of the designed WAN bottleneck, used as a link-degradation target.
pub const WAN_BOTTLENECK_LINK: &str = "core_gateway_cloud_primary";

// Camera batches: terminal, area, zone, count. Fixed architectural template;
// the builder introduces no randomness of its own.
const CAMERA_BATCHES: &[(&str, &str, PolicyZone, usize)] = &[
    ("TerminalA", "CheckIn", PolicyZone::Pz3PublicArea, 8),
    ("TerminalA", "Gates_A", PolicyZone::Pz2BoardingGates, 10),
    ("TerminalA", "VIP", PolicyZone::Pz4VipRestricted, 3),
    ("TerminalB", "CheckIn", PolicyZone::Pz3PublicArea, 8),
    ("TerminalB", "Gates_B", PolicyZone::Pz2BoardingGates, 12),
    ("TerminalB", "VIP", PolicyZone::Pz4VipRestricted, 3),
    ("TerminalC", "Gates_C", PolicyZone::Pz2BoardingGates, 8),
    ("TerminalC", "Baggage", PolicyZone::Pz5ArrivalBaggage, 6),
    ("TerminalC", "Arrival", PolicyZone::Pz5ArrivalBaggage, 4),
    ("Security", "Screening", PolicyZone::Pz1CriticalSecurity, 15),
    ("Perimeter", "Fence", PolicyZone::Pz1CriticalSecurity, 20),
    ("Perimeter", "Apron", PolicyZone::Pz1CriticalSecurity, 12),
    ("Staff", "Corridors", PolicyZone::Pz1CriticalSecurity, 8),
    ("Retail", "Shops", PolicyZone::Pz3PublicArea, 10),
];

/// Maps a terminal to the edge server processing its cameras. Unknown terminals
/// fall back to a default edge instead of failing.
pub fn edge_for_terminal(terminal: &str) -> &'static str {
    match terminal {
        "TerminalA" => "edge_termA",
        "TerminalB" => "edge_termB",
        "TerminalC" => "edge_termC",
        "Security" => "edge_security",
        "Perimeter" => "edge_perimeter",
        "Staff" => "edge_security",
        "Retail" => "edge_termA",
        other => {
            log::warn!("Terminal '{}' is not in the edge mapping table, falling back to '{}'.", other, FALLBACK_EDGE);
            FALLBACK_EDGE
        }
    }
}

/// Zone-driven camera profile: (resolution, fps, bitrate in Mbps).
/// Critical-security zones record at the highest quality.
fn camera_profile(zone: PolicyZone) -> (&'static str, u32, f64) {
    match zone {
        PolicyZone::Pz1CriticalSecurity => ("4K", 30, 25.0),
        PolicyZone::Pz2BoardingGates | PolicyZone::Pz4VipRestricted => ("1080p", 30, 8.0),
        PolicyZone::Pz3PublicArea | PolicyZone::Pz5ArrivalBaggage => ("1080p", 25, 6.0),
    }
}

/// Star topology of the surveillance network, fully determined by the fixed
/// camera/edge/terminal tables. Scenario diversity comes entirely from the
/// later generation steps.
#[derive(Debug)]
pub struct Topology {
    pub cameras: Vec<Camera>,
    pub edge_servers: Vec<EdgeServer>,
    pub cloud_endpoints: Vec<CloudEndpoint>,
    pub network_links: Vec<NetworkLink>,
}

impl Topology {
    pub fn build() -> Topology {
        let cameras = Self::setup_cameras();
        let edge_servers = Self::setup_edge_servers();
        let cloud_endpoints = Self::setup_cloud_endpoints();
        let network_links = Self::setup_network_links(&cameras, &edge_servers);

        log::debug!(
            "Topology built: {} cameras, {} edge servers, {} cloud endpoints, {} links.",
            cameras.len(),
            edge_servers.len(),
            cloud_endpoints.len(),
            network_links.len()
        );

        Topology { cameras, edge_servers, cloud_endpoints, network_links }
    }

    fn setup_cameras() -> Vec<Camera> {
        let mut cameras = Vec::new();

        for &(terminal, area, zone, count) in CAMERA_BATCHES {
            let (resolution, fps, bitrate_mbps) = camera_profile(zone);

            for i in 0..count {
                cameras.push(Camera {
                    id: CameraId::new(format!("cam_{}_{}_{:02}", terminal, area, i)),
                    zone,
                    location: format!("{}/{}", terminal, area),
                    priority: zone.priority(),
                    resolution: resolution.to_string(),
                    fps,
                    bitrate_mbps,
                });
            }
        }

        cameras
    }

    fn setup_edge_servers() -> Vec<EdgeServer> {
        vec![
            EdgeServer::new("edge_termA", "Terminal A", 16, 64, 10.0),
            EdgeServer::new("edge_termB", "Terminal B", 16, 64, 10.0),
            EdgeServer::new("edge_termC", "Terminal C", 16, 64, 10.0),
            EdgeServer::new("edge_security", "Security Hub", 32, 128, 25.0),
            EdgeServer::new("edge_perimeter", "Perimeter Control", 16, 64, 10.0),
            // The core gateway aggregates traffic and does not process video.
            EdgeServer::new(CORE_GATEWAY, "Server Room", 64, 128, 100.0),
        ]
    }

    fn setup_cloud_endpoints() -> Vec<CloudEndpoint> {
        vec![CloudEndpoint::new(CLOUD_PRIMARY, "Region-1", 100.0), CloudEndpoint::new(CLOUD_BACKUP, "Region-2", 100.0)]
    }

    fn setup_network_links(cameras: &[Camera], edge_servers: &[EdgeServer]) -> Vec<NetworkLink> {
        let mut links = Vec::new();

        // Edge -> core gateway: intra-campus fiber, high capacity, stable.
        for edge in edge_servers {
            if edge.id.as_str() == CORE_GATEWAY {
                continue;
            }
            links.push(NetworkLink::new(edge.id.as_str(), CORE_GATEWAY, 10_000.0, 1.0, 0.0, false, LinkType::Wired));
        }

        // Core gateway -> cloud: the shared WAN uplink, capacity fixed at the
        // bottleneck value and subject to weather-driven congestion.
        links.push(NetworkLink::new(CORE_GATEWAY, CLOUD_PRIMARY, 1_000.0, 15.0, 0.001, true, LinkType::Wan));
        links.push(NetworkLink::new(CORE_GATEWAY, CLOUD_BACKUP, 1_000.0, 25.0, 0.001, true, LinkType::Wan));

        // Camera -> edge: wired indoors, lossy wireless for the perimeter.
        for cam in cameras {
            let edge = edge_for_terminal(cam.terminal());
            let is_outdoor = cam.terminal() == "Perimeter";

            let link = if is_outdoor {
                NetworkLink::new(cam.id.as_str(), edge, 300.0, 8.0, 0.005, true, LinkType::Wireless)
            } else {
                NetworkLink::new(cam.id.as_str(), edge, 1_000.0, 1.0, 0.0001, false, LinkType::Wired)
            };
            links.push(link);
        }

        links
    }

    /// Edge servers that host analytics, i.e. every edge except the core gateway.
    pub fn non_gateway_edges(&self) -> Vec<&EdgeServer> {
        self.edge_servers.iter().filter(|e| e.id.as_str() != CORE_GATEWAY).collect()
    }
}
