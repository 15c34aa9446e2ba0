//! Proximity clustering and count-based workload balancing.
//!
//! Clustering is single-pass: a cluster absorbs only stops within the
//! radius of its seed, never of already-absorbed members. Transitive
//! clustering would change cluster sizes and everything downstream of the
//! balancer, so the single-pass behavior is part of the contract.

use serde::Serialize;

use crate::geo::distance_km;
use crate::model::{Stop, Traveler};

/// Default proximity radius for forming clusters.
pub const CLUSTER_RADIUS_KM: f64 = 5.0;

/// Stops assigned to one traveler, in assignment order.
#[derive(Debug, Clone, Serialize)]
pub struct TravelerAssignment {
    pub traveler_id: String,
    pub stops: Vec<Stop>,
}

/// The full stop-to-traveler mapping. Every input stop appears in exactly
/// one traveler's list.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub per_traveler: Vec<TravelerAssignment>,
}

impl Assignment {
    pub fn assigned_count(&self) -> usize {
        self.per_traveler.iter().map(|a| a.stops.len()).sum()
    }
}

/// Groups stops into proximity clusters of the given radius.
///
/// The first unclustered stop seeds each cluster and absorbs every other
/// unclustered stop within `radius_km` of it.
pub fn cluster_stops(stops: &[Stop], radius_km: f64) -> Vec<Vec<Stop>> {
    let mut clusters = Vec::new();
    let mut unclustered: Vec<&Stop> = stops.iter().collect();

    while !unclustered.is_empty() {
        let seed = unclustered.remove(0);
        let mut cluster = vec![seed.clone()];

        let mut remaining = Vec::with_capacity(unclustered.len());
        for stop in unclustered {
            if distance_km(seed.location, stop.location) <= radius_km {
                cluster.push(stop.clone());
            } else {
                remaining.push(stop);
            }
        }

        unclustered = remaining;
        clusters.push(cluster);
    }

    clusters
}

/// Assigns clusters to travelers, largest cluster first, each in full to
/// whichever traveler currently holds the fewest stops.
///
/// Count-based, not distance-based: a traveler can end up with two clusters
/// far apart. That is a documented limitation of the balancer, not a bug.
pub fn balance_assignments(travelers: &[Traveler], clusters: Vec<Vec<Stop>>) -> Assignment {
    let mut per_traveler: Vec<TravelerAssignment> = travelers
        .iter()
        .map(|t| TravelerAssignment {
            traveler_id: t.id.clone(),
            stops: Vec::new(),
        })
        .collect();

    let mut ordered = clusters;
    // Stable sort: equal-size clusters keep formation order.
    ordered.sort_by_key(|cluster| std::cmp::Reverse(cluster.len()));

    for cluster in ordered {
        if let Some(lightest) = per_traveler.iter_mut().min_by_key(|a| a.stops.len()) {
            lightest.stops.extend(cluster);
        }
    }

    Assignment { per_traveler }
}
