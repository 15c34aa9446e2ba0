//! Visit-window suggestions from a stop's posted operating hours.
//!
//! A plain lookup, not an optimization: slots and their crowd estimates
//! come from a fixed daily pattern, anchored to the stop's open and close
//! times for the requested weekday.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::Serialize;

use crate::model::{DayHours, Stop};

/// One suggested time window for a visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitWindow {
    /// "HH:MM - HH:MM" display form.
    pub slot: String,
    pub score: f64,
    pub wait_estimate: &'static str,
    pub reason: &'static str,
    pub recommended: bool,
}

/// Either the suggested windows for the day, or a closed-day answer with
/// the weekdays that do have posted hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VisitSuggestions {
    Closed {
        day: String,
        open_days: Vec<&'static str>,
    },
    Open {
        windows: Vec<VisitWindow>,
    },
}

/// Suggests visit windows for the stop on the given date (today when
/// absent). Stops without an hours table are assumed open 09:00-17:00.
pub fn suggest_visit_windows(stop: &Stop, date: Option<NaiveDate>) -> VisitSuggestions {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let weekday = date.weekday();

    let hours = match &stop.hours {
        Some(week) => match week.for_day(weekday) {
            Some(day_hours) => day_hours,
            None => {
                return VisitSuggestions::Closed {
                    day: weekday_name(weekday).to_string(),
                    open_days: week.open_days(),
                }
            }
        },
        None => default_hours(),
    };

    VisitSuggestions::Open {
        windows: day_windows(hours),
    }
}

fn default_hours() -> DayHours {
    DayHours {
        open: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        close: NaiveTime::from_hms_opt(17, 0, 0).expect("valid time"),
    }
}

fn day_windows(hours: DayHours) -> Vec<VisitWindow> {
    use chrono::Timelike;

    let mut windows = Vec::new();
    let open_hour = hours.open.hour();
    let close_hour = hours.close.hour();

    if open_hour < 10 {
        windows.push(VisitWindow {
            slot: format!(
                "{} - {:02}:00",
                hours.open.format("%H:%M"),
                (open_hour + 2).min(close_hour)
            ),
            score: 0.9,
            wait_estimate: "Low (5-10 min)",
            reason: "Early morning - typically less crowded",
            recommended: true,
        });
    }

    windows.push(VisitWindow {
        slot: "10:00 - 12:00".to_string(),
        score: 0.7,
        wait_estimate: "Medium (15-25 min)",
        reason: "Mid-morning - moderate crowd",
        recommended: false,
    });

    windows.push(VisitWindow {
        slot: "14:00 - 16:00".to_string(),
        score: 0.6,
        wait_estimate: "Medium-High (20-30 min)",
        reason: "Afternoon - busier period",
        recommended: false,
    });

    if close_hour >= 17 {
        windows.push(VisitWindow {
            slot: format!("16:00 - {}", hours.close.format("%H:%M")),
            score: 0.8,
            wait_estimate: "Low-Medium (10-20 min)",
            reason: "Late afternoon - crowd decreasing",
            recommended: true,
        });
    }

    windows
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
