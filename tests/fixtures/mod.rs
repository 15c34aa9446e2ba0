//! Test fixtures for outreach-planner.
//!
//! Provides real Manhattan locations plus builders for stops, travelers,
//! and resources. Not every test binary uses every helper.
#![allow(dead_code)]

pub mod manhattan_locations;

pub use manhattan_locations::*;
