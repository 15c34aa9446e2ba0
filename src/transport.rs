//! Per-mode travel time and cost estimators.
//!
//! These are closed-form estimates over straight-line distance, not queries
//! against a live routing service. They are pure and deterministic so the
//! optimizers above them stay property-testable.

use serde::{Deserialize, Serialize};

/// Transport modes known to the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    Cycling,
    PublicTransport,
    Driving,
}

impl TransportMode {
    /// Average speed in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Walking => 5.0,
            TransportMode::Cycling => 15.0,
            TransportMode::PublicTransport => 25.0,
            TransportMode::Driving => 40.0,
        }
    }

    /// Parses a mode tag; unknown tags fall back to public transport.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "walking" => TransportMode::Walking,
            "cycling" => TransportMode::Cycling,
            "driving" => TransportMode::Driving,
            _ => TransportMode::PublicTransport,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::PublicTransport => "public_transport",
            TransportMode::Driving => "driving",
        }
    }
}

/// Travel time in minutes for a leg of `distance_km` at the mode's speed.
pub fn travel_time_minutes(distance_km: f64, mode: TransportMode) -> f64 {
    distance_km / mode.speed_kmh() * 60.0
}

/// Monetary cost for a leg. Walking and cycling are free; driving is billed
/// per km; public transport is a base fare plus a per-km charge beyond the
/// first 5 km.
pub fn travel_cost(distance_km: f64, mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walking | TransportMode::Cycling => 0.0,
        TransportMode::Driving => distance_km * 0.5,
        TransportMode::PublicTransport => 2.5 + (distance_km - 5.0).max(0.0) * 0.3,
    }
}

/// One feasible way for an individual to reach a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportOption {
    pub mode: TransportMode,
    /// Estimated travel time in minutes.
    pub time_minutes: f64,
    pub cost: f64,
    pub distance_km: f64,
    /// Qualitative accessibility tag ("high" / "medium" / "low").
    pub accessibility: &'static str,
}
