use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Wired,
    Wireless,
    Wan,
}

/// A directed link of the star topology. The physical attributes are mutated
/// exactly once, by the weather physics step; everything else is fixed at build time.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkLink {
    pub src: String,
    pub dst: String,
    pub capacity_mbps: f64,
    pub latency_ms: f64,
    pub packet_loss_rate: f64,
    /// Only wireless and WAN links are subject to weather-driven mutation.
    pub stochastic: bool,
    pub link_type: LinkType,
}

impl NetworkLink {
    pub fn new(src: impl Into<String>, dst: impl Into<String>, capacity_mbps: f64, latency_ms: f64, packet_loss_rate: f64, stochastic: bool, link_type: LinkType) -> Self {
        NetworkLink { src: src.into(), dst: dst.into(), capacity_mbps, latency_ms, packet_loss_rate, stochastic, link_type }
    }
}
