//! Real Manhattan locations for realistic test fixtures.
//!
//! Coordinates are actual places (sourced from OpenStreetMap), so distances
//! and travel times computed over them are plausible city-scale values.

use outreach_planner::access::Resource;
use outreach_planner::geo::Coordinate;
use outreach_planner::model::{Stop, Traveler};
use outreach_planner::transport::TransportMode;

/// A named place with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon).expect("fixture coordinates are valid")
    }
}

/// City Hall — the standard start point for downtown tours.
pub const CITY_HALL: Place = Place::new("City Hall", 40.7128, -74.0060);

/// Service locations across Midtown and Downtown.
pub const SERVICES: &[Place] = &[
    Place::new("Times Square Center", 40.758, -73.9855),
    Place::new("Turtle Bay Clinic", 40.7489, -73.968),
    Place::new("NoHo Shelter", 40.7282, -73.9942),
    Place::new("Chelsea Outreach", 40.7465, -74.0014),
    Place::new("Lower East Side Pantry", 40.715, -73.9843),
];

pub fn stop(id: &str, place: Place) -> Stop {
    Stop::new(id, place.name, place.coordinate())
}

pub fn stop_at(id: &str, lat: f64, lon: f64) -> Stop {
    Stop::new(id, id, Coordinate::new(lat, lon).expect("fixture coordinates are valid"))
}

pub fn traveler(id: &str, lat: f64, lon: f64, mode: TransportMode) -> Traveler {
    Traveler {
        id: id.to_string(),
        name: format!("Worker {id}"),
        home: Coordinate::new(lat, lon).expect("fixture coordinates are valid"),
        available_minutes: 480.0,
        mode,
    }
}

pub fn resource(id: &str, lat: f64, lon: f64) -> Resource {
    Resource {
        id: id.to_string(),
        name: id.to_string(),
        category: "shelter".to_string(),
        location: Coordinate::new(lat, lon).expect("fixture coordinates are valid"),
        wheelchair_accessible: false,
        public_transport_nearby: false,
    }
}
