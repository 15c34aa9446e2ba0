//! Domain records exchanged with the (out-of-scope) HTTP layer.
//!
//! Everything here is a plain value: the engine never mutates its inputs
//! and every result is an owned, immutable snapshot. Object graphs use ids
//! rather than shared references.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PlanResult;
use crate::geo::Coordinate;
use crate::transport::TransportMode;

/// Open/close times for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Weekly operating hours. A `None` day means closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl WeekHours {
    pub fn for_day(&self, day: Weekday) -> Option<DayHours> {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Names of the weekdays with posted hours.
    pub fn open_days(&self) -> Vec<&'static str> {
        [
            (self.monday, "Monday"),
            (self.tuesday, "Tuesday"),
            (self.wednesday, "Wednesday"),
            (self.thursday, "Thursday"),
            (self.friday, "Friday"),
            (self.saturday, "Saturday"),
            (self.sunday, "Sunday"),
        ]
        .into_iter()
        .filter_map(|(hours, name)| hours.map(|_| name))
        .collect()
    }
}

/// A destination to be visited: shelter, job site, medical service, or an
/// individual's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    /// Category tag, e.g. "shelter", "job", "medical", "individual".
    pub category: String,
    #[serde(default)]
    pub hours: Option<WeekHours>,
    /// Average wait at this stop in minutes.
    #[serde(default)]
    pub wait_minutes: u32,
    /// Pre-existing accessibility rating in [0,1], if assessed.
    #[serde(default)]
    pub accessibility_rating: Option<f64>,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            category: "unknown".to_string(),
            hours: None,
            wait_minutes: 0,
            accessibility_rating: None,
        }
    }
}

/// An outreach worker with a home base, a daily time budget, and a
/// preferred way of getting around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub id: String,
    pub name: String,
    pub home: Coordinate,
    /// Available time budget in minutes. Must be positive.
    pub available_minutes: f64,
    pub mode: TransportMode,
}

/// Constraints for a single tour. The assembler reports totals but never
/// truncates a route; callers post-check against the maxima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteConstraints {
    pub mode: TransportMode,
    #[serde(default)]
    pub max_minutes: Option<f64>,
    #[serde(default)]
    pub max_distance_km: Option<f64>,
}

impl RouteConstraints {
    pub fn for_mode(mode: TransportMode) -> Self {
        Self {
            mode,
            max_minutes: None,
            max_distance_km: None,
        }
    }
}

/// An assembled route: ordered stops plus accumulated totals. Immutable
/// once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub stops: Vec<Stop>,
    /// Start coordinate followed by each stop's coordinate, in visit order.
    pub waypoints: Vec<Coordinate>,
    pub total_distance_km: f64,
    /// Travel plus per-stop wait, in minutes.
    pub total_minutes: f64,
    pub total_cost: f64,
    /// Mean of the stops' accessibility ratings, in [0,1].
    pub accessibility_score: f64,
    pub mode: TransportMode,
}

/// Checks every stop's coordinate before any computation begins.
pub(crate) fn validate_stops(stops: &[Stop]) -> PlanResult<()> {
    for stop in stops {
        Coordinate::new(stop.location.lat, stop.location.lon)?;
    }
    Ok(())
}
