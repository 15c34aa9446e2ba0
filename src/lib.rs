//! outreach-planner core
//!
//! Stateless geospatial route and coverage optimization for outreach work:
//! multi-stop tour sequencing, fleet assignment with workload balancing,
//! per-individual resource accessibility scoring, and service-coverage gap
//! analysis. Every operation is a pure computation over its inputs; travel
//! time and cost are closed-form estimates, not live routing queries.

pub mod access;
pub mod cluster;
pub mod coverage;
pub mod error;
pub mod fleet;
pub mod geo;
pub mod model;
pub mod route;
pub mod schedule;
pub mod tour;
pub mod transport;
