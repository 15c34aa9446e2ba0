//! Coverage-gap analysis tests.

mod fixtures;

use outreach_planner::coverage::{analyze_coverage, DensitySample};
use outreach_planner::error::PlanError;
use outreach_planner::geo::{BoundingBox, Coordinate};

use fixtures::manhattan_locations::{stop, stop_at, SERVICES};

fn manhattan_box() -> BoundingBox {
    BoundingBox {
        min_lat: 40.70,
        max_lat: 40.78,
        min_lon: -74.02,
        max_lon: -73.94,
    }
}

#[test]
fn zero_services_leaves_every_cell_uncovered() {
    let report = analyze_coverage(&[], manhattan_box(), &[]).unwrap();

    assert!(!report.cells.is_empty());
    assert_eq!(report.total_gaps, report.cells.len());
    assert_eq!(report.coverage_percentage, 0.0);
    for cell in &report.cells {
        assert_eq!(cell.coverage_score, 0.0);
        assert!(cell.nearest_service.is_none());
    }
    // Fully uncovered cells all rank at maximum priority.
    assert_eq!(report.high_priority_gaps.len(), report.total_gaps);
    assert!(report.recommendations.len() <= 5);
}

#[test]
fn dense_services_cover_the_whole_box() {
    let services: Vec<_> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, place)| stop(&format!("svc{i}"), *place))
        .collect();

    // A tight box around the service cluster: every cell center is within
    // a few km of some service.
    let tight = BoundingBox {
        min_lat: 40.72,
        max_lat: 40.76,
        min_lon: -74.00,
        max_lon: -73.96,
    };
    let report = analyze_coverage(&services, tight, &[]).unwrap();

    assert_eq!(report.total_gaps, 0);
    assert!(report.gaps.is_empty());
    assert!(report.coverage_percentage > 50.0);
    for cell in &report.cells {
        assert!((0.0..=1.0).contains(&cell.coverage_score));
        assert!(cell.nearest_service.is_some());
        assert!(cell.distance_km.is_finite());
    }
}

#[test]
fn gaps_are_ranked_by_priority() {
    // One service in the corner leaves the far side underserved.
    let services = vec![stop_at("corner", 40.70, -74.02)];
    let report = analyze_coverage(&services, manhattan_box(), &[]).unwrap();

    assert!(report.total_gaps > 0);
    for pair in report.gaps.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
    for gap in &report.gaps {
        assert!(gap.coverage_score < 0.5);
        assert!((0.0..=1.0).contains(&gap.priority));
    }
    for gap in &report.high_priority_gaps {
        assert!(gap.priority > 0.7);
    }
}

#[test]
fn density_samples_feed_cell_populations() {
    let sample = DensitySample {
        location: Coordinate::new(40.701, -74.019).unwrap(),
        population: 2500,
    };
    let report = analyze_coverage(&[], manhattan_box(), &[sample]).unwrap();

    let populated: Vec<_> = report.cells.iter().filter(|c| c.population > 0).collect();
    assert_eq!(populated.len(), 1, "one sample lands in exactly one cell");
    assert_eq!(populated[0].population, 2500);
}

#[test]
fn malformed_bounding_boxes_are_rejected() {
    let inverted = BoundingBox {
        min_lat: 40.78,
        max_lat: 40.70,
        min_lon: -74.02,
        max_lon: -73.94,
    };
    assert_eq!(
        analyze_coverage(&[], inverted, &[]).unwrap_err(),
        PlanError::MalformedBoundingBox
    );

    let degenerate = BoundingBox {
        min_lat: 40.70,
        max_lat: 40.78,
        min_lon: -74.02,
        max_lon: -74.02,
    };
    assert_eq!(
        analyze_coverage(&[], degenerate, &[]).unwrap_err(),
        PlanError::MalformedBoundingBox
    );
}

#[test]
fn identical_inputs_give_identical_reports() {
    let services = vec![stop_at("svc", 40.74, -73.98)];
    let first = analyze_coverage(&services, manhattan_box(), &[]).unwrap();
    let second = analyze_coverage(&services, manhattan_box(), &[]).unwrap();

    assert_eq!(first.cells, second.cells);
    assert_eq!(first.gaps, second.gaps);
    assert_eq!(first.coverage_percentage, second.coverage_percentage);
}
