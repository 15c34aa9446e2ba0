//! Multi-traveler optimization: cluster, assign, then route each traveler.
//!
//! The assignment step is sequential by design (its greedy tie-breaks are
//! order-dependent); per-traveler route construction is independent and
//! runs in parallel.

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::cluster::{balance_assignments, cluster_stops, Assignment, CLUSTER_RADIUS_KM};
use crate::error::{PlanError, PlanResult};
use crate::geo::Coordinate;
use crate::model::{validate_stops, Route, RouteConstraints, Stop, Traveler};
use crate::route::assemble_route;
use crate::tour::{construct_order, improve_order, DistanceMatrix};

/// A full working day in minutes, for workload normalization.
const FULL_DAY_MINUTES: f64 = 480.0;

/// Distance considered a full day's driving, for workload normalization.
const FULL_DAY_KM: f64 = 100.0;

/// One traveler's routed share of the fleet plan.
#[derive(Debug, Clone, Serialize)]
pub struct TravelerRoute {
    pub traveler_id: String,
    pub traveler_name: String,
    pub route: Route,
    pub stop_count: usize,
    /// Normalized time/distance load in [0,1].
    pub workload_score: f64,
}

/// Result of a multi-traveler optimization.
#[derive(Debug, Clone, Serialize)]
pub struct FleetPlan {
    pub date: NaiveDate,
    pub assignment: Assignment,
    pub routes: Vec<TravelerRoute>,
    pub total_stops: usize,
    /// Fraction of input stops assigned; 1.0 unless the input was empty.
    pub coverage: f64,
    /// 1.0 when every traveler carries the same workload, lower as the
    /// spread grows.
    pub balance_score: f64,
}

/// Partitions `stops` across `travelers` and builds each traveler's route.
///
/// Zero stops is a valid empty plan; zero travelers is `EmptyInput`.
pub fn optimize_fleet(
    travelers: &[Traveler],
    stops: &[Stop],
    date: Option<NaiveDate>,
) -> PlanResult<FleetPlan> {
    if travelers.is_empty() {
        return Err(PlanError::EmptyInput("travelers"));
    }
    for traveler in travelers {
        Coordinate::new(traveler.home.lat, traveler.home.lon)?;
    }
    validate_stops(stops)?;

    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let clusters = cluster_stops(stops, CLUSTER_RADIUS_KM);
    let assignment = balance_assignments(travelers, clusters);

    let routes: Vec<TravelerRoute> = assignment
        .per_traveler
        .par_iter()
        .map(|assigned| {
            let traveler = travelers
                .iter()
                .find(|t| t.id == assigned.traveler_id)
                .expect("assignment only references input travelers");
            route_traveler(traveler, &assigned.stops)
        })
        .collect();

    let coverage = if stops.is_empty() {
        0.0
    } else {
        assignment.assigned_count() as f64 / stops.len() as f64
    };
    let balance_score = balance(&routes);

    info!(
        travelers = travelers.len(),
        stops = stops.len(),
        %date,
        balance_score,
        "fleet optimized"
    );

    Ok(FleetPlan {
        date,
        assignment,
        routes,
        total_stops: stops.len(),
        coverage,
        balance_score,
    })
}

fn route_traveler(traveler: &Traveler, assigned: &[Stop]) -> TravelerRoute {
    let constraints = RouteConstraints {
        mode: traveler.mode,
        max_minutes: Some(traveler.available_minutes),
        max_distance_km: None,
    };

    // Travelers can legitimately end up with nothing; the assembler handles
    // an empty order, so no EmptyInput round-trip here.
    let matrix = DistanceMatrix::build(traveler.home, assigned);
    let order = improve_order(&matrix, construct_order(assigned, &matrix));
    let ordered: Vec<Stop> = order.iter().map(|&i| assigned[i].clone()).collect();
    let route = assemble_route(traveler.home, &ordered, &constraints);

    let workload_score = workload(&route);
    TravelerRoute {
        traveler_id: traveler.id.clone(),
        traveler_name: traveler.name.clone(),
        stop_count: ordered.len(),
        workload_score,
        route,
    }
}

/// Normalized workload: mean of time (vs. an 8-hour day) and distance
/// (vs. 100 km), each capped at 1.
fn workload(route: &Route) -> f64 {
    let time_score = (route.total_minutes / FULL_DAY_MINUTES).min(1.0);
    let distance_score = (route.total_distance_km / FULL_DAY_KM).min(1.0);
    (time_score + distance_score) / 2.0
}

/// Balance is one minus the standard deviation of the workload scores,
/// floored at zero.
fn balance(routes: &[TravelerRoute]) -> f64 {
    if routes.is_empty() {
        return 1.0;
    }
    let workloads: Vec<f64> = routes.iter().map(|r| r.workload_score).collect();
    let mean = workloads.iter().sum::<f64>() / workloads.len() as f64;
    let variance =
        workloads.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / workloads.len() as f64;
    (1.0 - variance.sqrt()).max(0.0)
}
