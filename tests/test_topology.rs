use airnet_scenegen::domain::entity::network_link::LinkType;
use airnet_scenegen::domain::entity::zone::PolicyZone;
use airnet_scenegen::domain::topology::{CORE_GATEWAY, FALLBACK_EDGE, Topology, edge_for_terminal};

use std::collections::HashSet;

#[test]
fn test_topology_counts() {
    let topology = Topology::build();

    // 8+10+3 + 8+12+3 + 8+6+4 + 15 + 20+12 + 8 + 10 cameras from the fixed batches.
    assert_eq!(topology.cameras.len(), 127, "Camera batches should produce exactly 127 cameras");
    assert_eq!(topology.edge_servers.len(), 6, "Five analytics edges plus the core gateway");
    assert_eq!(topology.cloud_endpoints.len(), 2, "Primary and backup cloud endpoints");

    // 5 edge uplinks + 2 WAN links + one access link per camera.
    assert_eq!(topology.network_links.len(), 5 + 2 + 127, "Star topology link count");
}

#[test]
fn test_every_link_references_existing_entities() {
    let topology = Topology::build();

    let mut known_ids: HashSet<&str> = HashSet::new();
    known_ids.extend(topology.cameras.iter().map(|c| c.id.as_str()));
    known_ids.extend(topology.edge_servers.iter().map(|e| e.id.as_str()));
    known_ids.extend(topology.cloud_endpoints.iter().map(|c| c.id.as_str()));

    for link in &topology.network_links {
        assert!(known_ids.contains(link.src.as_str()), "Link source '{}' must reference an existing entity", link.src);
        assert!(known_ids.contains(link.dst.as_str()), "Link destination '{}' must reference an existing entity", link.dst);
    }
}

#[test]
fn test_exactly_one_core_gateway() {
    let topology = Topology::build();

    let gateways: Vec<_> = topology.edge_servers.iter().filter(|e| e.id.as_str() == CORE_GATEWAY).collect();
    assert_eq!(gateways.len(), 1, "Exactly one edge server is the core gateway");

    assert_eq!(topology.non_gateway_edges().len(), 5, "The gateway is excluded from the analytics edge set");
}

#[test]
fn test_stochastic_flag_matches_link_type() {
    let topology = Topology::build();

    for link in &topology.network_links {
        match link.link_type {
            LinkType::Wired => assert!(!link.stochastic, "Wired link {} -> {} must not be stochastic", link.src, link.dst),
            LinkType::Wireless | LinkType::Wan => {
                assert!(link.stochastic, "Link {} -> {} of type {:?} must be stochastic", link.src, link.dst, link.link_type)
            }
        }
    }
}

#[test]
fn test_only_perimeter_cameras_are_wireless() {
    let topology = Topology::build();

    for link in &topology.network_links {
        if link.link_type == LinkType::Wireless {
            assert!(link.src.starts_with("cam_Perimeter_"), "Wireless access link found for non-perimeter source '{}'", link.src);
        }
    }

    let wireless_count = topology.network_links.iter().filter(|l| l.link_type == LinkType::Wireless).count();
    assert_eq!(wireless_count, 32, "Fence (20) and Apron (12) cameras are the only wireless ones");
}

#[test]
fn test_camera_profiles_follow_zone() {
    let topology = Topology::build();

    for cam in &topology.cameras {
        assert_eq!(cam.priority, cam.zone.priority(), "Camera priority is derived solely from the zone");

        if cam.zone == PolicyZone::Pz1CriticalSecurity {
            assert_eq!(cam.resolution, "4K", "Critical-security cameras record in 4K");
            assert_eq!(cam.bitrate_mbps, 25.0, "Critical-security cameras carry the highest bitrate");
        }
    }

    // Deterministic naming scheme: cam_<terminal>_<area>_<index>.
    let first = &topology.cameras[0];
    assert_eq!(first.id.as_str(), "cam_TerminalA_CheckIn_00");
    assert_eq!(first.location, "TerminalA/CheckIn");
}

#[test]
fn test_unknown_terminal_falls_back_to_default_edge() {
    assert_eq!(edge_for_terminal("Atrium"), FALLBACK_EDGE, "Unknown terminals map to the fallback edge instead of failing");
    assert_eq!(edge_for_terminal("Staff"), "edge_security");
    assert_eq!(edge_for_terminal("Retail"), "edge_termA");
}
