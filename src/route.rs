//! Route assembly and the single-traveler optimization entry point.

use serde::Serialize;
use tracing::debug;

use crate::error::{PlanError, PlanResult};
use crate::geo::{distance_km, Coordinate};
use crate::model::{validate_stops, Route, RouteConstraints, Stop};
use crate::tour::{construct_order, improve_order, DistanceMatrix};
use crate::transport::{travel_cost, travel_time_minutes};

/// Accessibility rating assumed for stops that were never assessed.
const DEFAULT_STOP_RATING: f64 = 0.7;

/// Result of a single-traveler optimization.
#[derive(Debug, Clone, Serialize)]
pub struct TourPlan {
    pub route: Route,
    /// Stop ids in visit order.
    pub order: Vec<String>,
    /// Alternative routes. The base planner offers none; this is the hook
    /// for variants that do.
    pub alternatives: Vec<Route>,
}

/// Sequences `stops` into a visiting order from `start` and assembles the
/// resulting route.
///
/// Returns `EmptyInput` for a zero-length stop list; a tour over nothing is
/// a caller error, not an empty route.
pub fn optimize_tour(
    start: Coordinate,
    stops: &[Stop],
    constraints: &RouteConstraints,
) -> PlanResult<TourPlan> {
    Coordinate::new(start.lat, start.lon)?;
    validate_stops(stops)?;
    if stops.is_empty() {
        return Err(PlanError::EmptyInput("stops"));
    }

    let matrix = DistanceMatrix::build(start, stops);
    let order = construct_order(stops, &matrix);
    let order = improve_order(&matrix, order);

    let ordered: Vec<Stop> = order.iter().map(|&i| stops[i].clone()).collect();
    let route = assemble_route(start, &ordered, constraints);

    debug!(
        stops = stops.len(),
        distance_km = route.total_distance_km,
        minutes = route.total_minutes,
        "tour optimized"
    );

    Ok(TourPlan {
        order: ordered.iter().map(|stop| stop.id.clone()).collect(),
        alternatives: alternative_routes(start, &ordered, constraints),
        route,
    })
}

/// Walks an ordered stop list accumulating distance, travel and wait time,
/// and cost, and collects the waypoint list (start plus each stop).
///
/// Constraints are not enforced here: the route is always returned in full
/// and callers post-check the totals against any maxima.
pub fn assemble_route(start: Coordinate, ordered: &[Stop], constraints: &RouteConstraints) -> Route {
    let mode = constraints.mode;
    let mut waypoints = Vec::with_capacity(ordered.len() + 1);
    waypoints.push(start);

    let mut total_distance_km = 0.0;
    let mut total_minutes = 0.0;
    let mut total_cost = 0.0;

    let mut current = start;
    for stop in ordered {
        let leg_km = distance_km(current, stop.location);
        total_distance_km += leg_km;
        total_minutes += travel_time_minutes(leg_km, mode) + f64::from(stop.wait_minutes);
        total_cost += travel_cost(leg_km, mode);
        waypoints.push(stop.location);
        current = stop.location;
    }

    Route {
        stops: ordered.to_vec(),
        waypoints,
        total_distance_km,
        total_minutes,
        total_cost,
        accessibility_score: mean_accessibility(ordered),
        mode,
    }
}

/// Mean of the stops' pre-existing accessibility ratings. Intentionally
/// coarse; per-individual nuance belongs to the accessibility scorer.
fn mean_accessibility(stops: &[Stop]) -> f64 {
    if stops.is_empty() {
        return 1.0;
    }
    let sum: f64 = stops
        .iter()
        .map(|stop| stop.accessibility_rating.unwrap_or(DEFAULT_STOP_RATING))
        .sum();
    sum / stops.len() as f64
}

/// Alternative-route generation hook. The base planner returns none.
fn alternative_routes(
    _start: Coordinate,
    _ordered: &[Stop],
    _constraints: &RouteConstraints,
) -> Vec<Route> {
    Vec::new()
}
