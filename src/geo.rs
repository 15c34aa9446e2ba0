//! Geodesy primitives: validated coordinates, haversine distance, and
//! bounding boxes.
//!
//! This is the one place where floating-point tolerance matters, so the
//! math lives behind explicit pure functions rather than being mixed into
//! the optimizers.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude, used for grid discretization.
pub(crate) const KM_PER_DEGREE: f64 = 111.0;

/// A (latitude, longitude) pair in degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside the lat/lon domain.
    pub fn new(lat: f64, lon: f64) -> PlanResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(PlanError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// Great-circle (haversine) distance between two coordinates in kilometers.
///
/// Symmetric, zero for identical points, and deterministic.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Caller-facing convenience conversion; distances are computed in km.
pub fn km_to_miles(km: f64) -> f64 {
    km * 0.621371
}

/// A geographic bounding box. `validate` must pass before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Requires min < max on both axes and corners inside the lat/lon domain.
    pub fn validate(&self) -> PlanResult<()> {
        if self.min_lat >= self.max_lat || self.min_lon >= self.max_lon {
            return Err(PlanError::MalformedBoundingBox);
        }
        Coordinate::new(self.min_lat, self.min_lon)?;
        Coordinate::new(self.max_lat, self.max_lon)?;
        Ok(())
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.min_lat
            && point.lat < self.max_lat
            && point.lon >= self.min_lon
            && point.lon < self.max_lon
    }
}
