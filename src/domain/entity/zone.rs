use serde::Serialize;

/// The five surveillance policy zones of the airport. Closed set; every camera,
/// flow and intent references one or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyZone {
    Pz1CriticalSecurity,
    Pz2BoardingGates,
    Pz3PublicArea,
    Pz4VipRestricted,
    Pz5ArrivalBaggage,
}

impl PolicyZone {
    pub const ALL: [PolicyZone; 5] = [
        PolicyZone::Pz1CriticalSecurity,
        PolicyZone::Pz2BoardingGates,
        PolicyZone::Pz3PublicArea,
        PolicyZone::Pz4VipRestricted,
        PolicyZone::Pz5ArrivalBaggage,
    ];

    /// Camera priority is derived solely from the zone (1 = highest).
    pub fn priority(self) -> u8 {
        match self {
            PolicyZone::Pz1CriticalSecurity => 1,
            PolicyZone::Pz2BoardingGates => 2,
            PolicyZone::Pz3PublicArea => 3,
            PolicyZone::Pz4VipRestricted => 2,
            PolicyZone::Pz5ArrivalBaggage => 3,
        }
    }
}
