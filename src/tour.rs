//! Single-traveler tour construction and improvement.
//!
//! Nearest-neighbor greedy construction followed by bounded 2-opt local
//! search. The improver never lengthens a tour and always terminates, but
//! makes no global-optimality guarantee; the pass cap bounds worst-case
//! runtime on pathological inputs.

use crate::geo::{distance_km, Coordinate};
use crate::model::Stop;

/// Maximum number of full 2-opt improvement passes.
const MAX_IMPROVEMENT_PASSES: usize = 100;

/// Pairwise leg distances for a start point plus a set of stops.
///
/// Index 0 is the start; stop `k` sits at index `k + 1`. Computed once per
/// optimization call and discarded with it; no state survives between calls.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    dist: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn build(start: Coordinate, stops: &[Stop]) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 1);
        points.push(start);
        points.extend(stops.iter().map(|stop| stop.location));

        let n = points.len();
        let mut dist = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance_km(points[i], points[j]);
                dist[i][j] = d;
                dist[j][i] = d;
            }
        }

        Self { dist }
    }

    /// Leg distance between matrix indices (0 = start, k+1 = stop k).
    pub fn leg(&self, from: usize, to: usize) -> f64 {
        self.dist[from][to]
    }

    /// Total path length of start followed by the given stop order.
    pub fn path_km(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut current = 0;
        for &stop in order {
            total += self.dist[current][stop + 1];
            current = stop + 1;
        }
        total
    }
}

/// Builds a visiting order by repeatedly stepping to the nearest unvisited
/// stop, starting from the start point. Ties break on the lowest stop id.
///
/// Returns indices into `stops`. Degenerates to the input order for fewer
/// than two stops.
pub fn construct_order(stops: &[Stop], matrix: &DistanceMatrix) -> Vec<usize> {
    let mut unvisited: Vec<usize> = (0..stops.len()).collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = 0; // matrix index of the start point

    while !unvisited.is_empty() {
        let mut best = 0;
        for pos in 1..unvisited.len() {
            let cand = unvisited[pos];
            let chosen = unvisited[best];
            let d_cand = matrix.leg(current, cand + 1);
            let d_chosen = matrix.leg(current, chosen + 1);
            if d_cand < d_chosen || (d_cand == d_chosen && stops[cand].id < stops[chosen].id) {
                best = pos;
            }
        }
        let next = unvisited.remove(best);
        order.push(next);
        current = next + 1;
    }

    order
}

/// Refines an order with 2-opt: reverses any sub-segment whose reversal
/// strictly shortens the total path (start leg included), sweeping until a
/// full pass finds no improvement or the pass cap is hit.
pub fn improve_order(matrix: &DistanceMatrix, mut order: Vec<usize>) -> Vec<usize> {
    if order.len() < 3 {
        return order;
    }

    let mut best_km = matrix.path_km(&order);
    for _ in 0..MAX_IMPROVEMENT_PASSES {
        let mut improved = false;

        for i in 0..order.len() - 1 {
            for j in (i + 2)..order.len() {
                order[i + 1..=j].reverse();
                let candidate_km = matrix.path_km(&order);
                if candidate_km < best_km {
                    best_km = candidate_km;
                    improved = true;
                } else {
                    order[i + 1..=j].reverse();
                }
            }
        }

        if !improved {
            break;
        }
    }

    order
}
