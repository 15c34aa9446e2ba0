//! Service-coverage analysis over a discretized bounding box.
//!
//! The box is tiled with ~2 km cells; each cell is scored by distance to
//! its nearest service. Boundary cells may be partial — the grid tiles
//! without overlap but makes no exact edge-alignment guarantee.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanResult;
use crate::geo::{distance_km, BoundingBox, Coordinate, KM_PER_DEGREE};
use crate::model::{validate_stops, Stop};

/// Grid step in kilometers.
const GRID_STEP_KM: f64 = 2.0;

/// Distance beyond which a cell counts as entirely uncovered.
const COVERAGE_RADIUS_KM: f64 = 10.0;

/// Cells scoring below this are service gaps.
const GAP_THRESHOLD: f64 = 0.5;

/// Gaps with priority above this are high priority.
const HIGH_PRIORITY_THRESHOLD: f64 = 0.7;

/// A population measurement at a point, used to weight gap priorities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySample {
    pub location: Coordinate,
    pub population: u32,
}

/// One grid cell's coverage assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageCell {
    pub bounds: BoundingBox,
    pub center: Coordinate,
    /// Id of the nearest service, if any exist.
    pub nearest_service: Option<String>,
    /// Distance to the nearest service; infinite when there are none.
    pub distance_km: f64,
    /// max(0, 1 - distance/10): 1 at a service, 0 beyond 10 km.
    pub coverage_score: f64,
    /// Sum of density samples inside the cell; 0 without density data.
    pub population: u32,
}

/// An underserved cell, ranked for attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceGap {
    pub center: Coordinate,
    pub coverage_score: f64,
    pub nearest_service: Option<String>,
    pub distance_km: f64,
    pub population: u32,
    /// (1 - coverage score), +0.2 for populations over 1000, capped at 1.
    pub priority: f64,
}

/// A suggestion to open a new service at a gap center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRecommendation {
    pub location: Coordinate,
    pub priority: f64,
    /// People a new service here would serve, from density data.
    pub population: u32,
    /// Access distance a new service here would remove.
    pub distance_improvement_km: f64,
}

/// Full coverage analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub cells: Vec<CoverageCell>,
    /// Gaps sorted by descending priority.
    pub gaps: Vec<ServiceGap>,
    pub total_gaps: usize,
    pub high_priority_gaps: Vec<ServiceGap>,
    /// Mean cell coverage score as a percentage.
    pub coverage_percentage: f64,
    /// Recommendations for the top five gaps.
    pub recommendations: Vec<GapRecommendation>,
}

/// Grids the bounding box, scores every cell against the nearest service,
/// and ranks the underserved cells.
///
/// Zero services is valid input: every cell scores 0 and appears as a gap.
pub fn analyze_coverage(
    services: &[Stop],
    area: BoundingBox,
    density: &[DensitySample],
) -> PlanResult<CoverageReport> {
    area.validate()?;
    validate_stops(services)?;
    for sample in density {
        Coordinate::new(sample.location.lat, sample.location.lon)?;
    }

    let cells = build_cells(area, services, density);

    let mut gaps: Vec<ServiceGap> = cells
        .iter()
        .filter(|cell| cell.coverage_score < GAP_THRESHOLD)
        .map(|cell| ServiceGap {
            center: cell.center,
            coverage_score: cell.coverage_score,
            nearest_service: cell.nearest_service.clone(),
            distance_km: cell.distance_km,
            population: cell.population,
            priority: gap_priority(cell),
        })
        .collect();
    // Stable sort keeps grid order for equal priorities.
    gaps.sort_by(|a, b| b.priority.partial_cmp(&a.priority).expect("priorities are finite"));

    let coverage_percentage = if cells.is_empty() {
        0.0
    } else {
        cells.iter().map(|c| c.coverage_score).sum::<f64>() / cells.len() as f64 * 100.0
    };

    let high_priority_gaps: Vec<ServiceGap> = gaps
        .iter()
        .filter(|gap| gap.priority > HIGH_PRIORITY_THRESHOLD)
        .cloned()
        .collect();

    let recommendations = gaps
        .iter()
        .take(5)
        .map(|gap| GapRecommendation {
            location: gap.center,
            priority: gap.priority,
            population: gap.population,
            distance_improvement_km: gap.distance_km,
        })
        .collect();

    debug!(
        cells = cells.len(),
        gaps = gaps.len(),
        coverage_percentage,
        "coverage analyzed"
    );

    Ok(CoverageReport {
        total_gaps: gaps.len(),
        high_priority_gaps,
        coverage_percentage,
        recommendations,
        cells,
        gaps,
    })
}

/// Tiles the box with step-sized cells, lat-major then lon, excluding the
/// max edges. Each cell's center is its lower-left corner plus half a step.
fn build_cells(area: BoundingBox, services: &[Stop], density: &[DensitySample]) -> Vec<CoverageCell> {
    let step = GRID_STEP_KM / KM_PER_DEGREE;
    let mut cells = Vec::new();

    let mut lat = area.min_lat;
    while lat < area.max_lat {
        let mut lon = area.min_lon;
        while lon < area.max_lon {
            let bounds = BoundingBox {
                min_lat: lat,
                max_lat: lat + step,
                min_lon: lon,
                max_lon: lon + step,
            };
            let center = Coordinate {
                lat: lat + step / 2.0,
                lon: lon + step / 2.0,
            };

            let (nearest_service, dist) = nearest_service(center, services);
            let population = density
                .iter()
                .filter(|sample| bounds.contains(sample.location))
                .map(|sample| sample.population)
                .sum();

            cells.push(CoverageCell {
                bounds,
                center,
                nearest_service,
                distance_km: dist,
                coverage_score: (1.0 - dist / COVERAGE_RADIUS_KM).max(0.0),
                population,
            });

            lon += step;
        }
        lat += step;
    }

    cells
}

fn nearest_service(center: Coordinate, services: &[Stop]) -> (Option<String>, f64) {
    let mut nearest: Option<&Stop> = None;
    let mut best = f64::INFINITY;
    for service in services {
        let d = distance_km(center, service.location);
        if d < best {
            best = d;
            nearest = Some(service);
        }
    }
    (nearest.map(|s| s.id.clone()), best)
}

fn gap_priority(cell: &CoverageCell) -> f64 {
    let mut priority = 1.0 - cell.coverage_score;
    if cell.population > 1000 {
        priority += 0.2;
    }
    priority.min(1.0)
}
