//! Engine error type.
//!
//! All failures are input-validation failures surfaced before any
//! computation begins; there are no transient errors to retry. Callers can
//! rely on the distinction between a hard error and a valid empty result
//! (zero resources, zero clusters, a fully covered grid).

use thiserror::Error;

/// The error type for all planner operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("{0} must contain at least one element")]
    EmptyInput(&'static str),

    #[error("malformed bounding box: min must be strictly less than max on both axes")]
    MalformedBoundingBox,
}

/// Shorthand result type for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;
