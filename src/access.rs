//! Per-individual resource accessibility scoring.
//!
//! For each resource the scorer enumerates the transport options actually
//! open to the individual, then applies an ordered, additive penalty policy
//! with a single clamp at the end. The policy is not a probability; scores
//! only rank resources for one individual.

use serde::{Deserialize, Serialize};

use crate::error::PlanResult;
use crate::geo::{distance_km, Coordinate};
use crate::transport::{travel_cost, travel_time_minutes, TransportMode, TransportOption};

/// Walking is only offered up to this distance.
const MAX_WALK_KM: f64 = 3.0;

/// Cycling is only offered up to this distance.
const MAX_CYCLE_KM: f64 = 10.0;

/// Mobility and transport constraints for one individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualProfile {
    #[serde(default)]
    pub mobility_issues: bool,
    /// Carried through from intake records; the option enumeration rules do
    /// not currently branch on it.
    #[serde(default)]
    pub has_own_transport: bool,
}

/// A service resource to be scored for one individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    /// Category tag, e.g. "shelter", "medical", "food".
    pub category: String,
    pub location: Coordinate,
    #[serde(default)]
    pub wheelchair_accessible: bool,
    #[serde(default)]
    pub public_transport_nearby: bool,
}

/// One resource's accessibility assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceScore {
    pub resource_id: String,
    pub resource_name: String,
    pub category: String,
    pub distance_km: f64,
    /// Accessibility score in [0,1].
    pub score: f64,
    pub options: Vec<TransportOption>,
    /// Time and cost of the first enumerated option, when any exists.
    pub estimated_minutes: Option<f64>,
    pub estimated_cost: Option<f64>,
    pub notes: Vec<String>,
}

/// Scores every resource for the individual and returns them sorted by
/// descending accessibility. Zero resources is a valid empty result.
pub fn score_accessibility(
    individual: Coordinate,
    resources: &[Resource],
    profile: &IndividualProfile,
) -> PlanResult<Vec<ResourceScore>> {
    Coordinate::new(individual.lat, individual.lon)?;
    for resource in resources {
        Coordinate::new(resource.location.lat, resource.location.lon)?;
    }

    let mut scored: Vec<ResourceScore> = resources
        .iter()
        .map(|resource| {
            let distance = distance_km(individual, resource.location);
            let options = transport_options(distance, profile);
            let score = accessibility_score(distance, &options, resource, profile);

            ResourceScore {
                resource_id: resource.id.clone(),
                resource_name: resource.name.clone(),
                category: resource.category.clone(),
                distance_km: round2(distance),
                score: round3(score),
                estimated_minutes: options.first().map(|opt| opt.time_minutes),
                estimated_cost: options.first().map(|opt| opt.cost),
                notes: accessibility_notes(score, &options, profile),
                options,
            }
        })
        .collect();

    // Stable sort so equal scores keep input order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).expect("scores are finite"));

    Ok(scored)
}

/// Enumerates the transport options open to the individual for a trip of
/// the given length: walking within 3 km, public transport always, cycling
/// within 10 km for individuals without mobility issues.
pub fn transport_options(distance_km: f64, profile: &IndividualProfile) -> Vec<TransportOption> {
    let mut options = Vec::with_capacity(3);

    if distance_km <= MAX_WALK_KM {
        options.push(TransportOption {
            mode: TransportMode::Walking,
            time_minutes: travel_time_minutes(distance_km, TransportMode::Walking),
            cost: 0.0,
            distance_km,
            accessibility: if profile.mobility_issues { "low" } else { "high" },
        });
    }

    options.push(TransportOption {
        mode: TransportMode::PublicTransport,
        time_minutes: travel_time_minutes(distance_km, TransportMode::PublicTransport),
        cost: travel_cost(distance_km, TransportMode::PublicTransport),
        distance_km,
        accessibility: "high",
    });

    if distance_km <= MAX_CYCLE_KM && !profile.mobility_issues {
        options.push(TransportOption {
            mode: TransportMode::Cycling,
            time_minutes: travel_time_minutes(distance_km, TransportMode::Cycling),
            cost: 0.0,
            distance_km,
            accessibility: "medium",
        });
    }

    options
}

/// The additive scoring policy. Starts at 1.0, applies penalties and
/// bonuses in a fixed order, clamps once at the end.
fn accessibility_score(
    distance: f64,
    options: &[TransportOption],
    resource: &Resource,
    profile: &IndividualProfile,
) -> f64 {
    let mut score: f64 = 1.0;

    if distance > 10.0 {
        score -= 0.3;
    } else if distance > 5.0 {
        score -= 0.15;
    }

    if options.is_empty() {
        score -= 0.4;
    } else if options.len() == 1 {
        score -= 0.1;
    }

    if let Some(min_cost) = options
        .iter()
        .map(|opt| opt.cost)
        .min_by(|a, b| a.partial_cmp(b).expect("costs are finite"))
    {
        if min_cost > 5.0 {
            score -= 0.2;
        } else if min_cost > 2.0 {
            score -= 0.1;
        }
    }

    if profile.mobility_issues
        && !options.iter().any(|opt| opt.mode == TransportMode::PublicTransport)
    {
        score -= 0.3;
    }

    if resource.wheelchair_accessible {
        score += 0.1;
    }
    if resource.public_transport_nearby {
        score += 0.1;
    }

    score.clamp(0.0, 1.0)
}

fn accessibility_notes(
    score: f64,
    options: &[TransportOption],
    profile: &IndividualProfile,
) -> Vec<String> {
    let mut notes = Vec::new();

    if score >= 0.8 {
        notes.push("Highly accessible location".to_string());
    } else if score >= 0.6 {
        notes.push("Moderately accessible".to_string());
    } else {
        notes.push("Limited accessibility - may require assistance".to_string());
    }

    if let Some(cheapest) = options
        .iter()
        .min_by(|a, b| a.cost.partial_cmp(&b.cost).expect("costs are finite"))
    {
        notes.push(format!(
            "Best option: {} (${:.2})",
            cheapest.mode.as_tag(),
            cheapest.cost
        ));
    }

    if profile.mobility_issues && score < 0.7 {
        notes.push("Consider arranging transportation assistance".to_string());
    }

    notes
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile() -> IndividualProfile {
        IndividualProfile::default()
    }

    fn impaired() -> IndividualProfile {
        IndividualProfile {
            mobility_issues: true,
            has_own_transport: false,
        }
    }

    fn resource_at(distance_note: &str) -> Resource {
        Resource {
            id: "r1".to_string(),
            name: distance_note.to_string(),
            category: "shelter".to_string(),
            location: Coordinate::new(40.7, -74.0).unwrap(),
            wheelchair_accessible: false,
            public_transport_nearby: false,
        }
    }

    #[test]
    fn short_trips_offer_all_three_modes() {
        let options = transport_options(2.0, &mobile());
        let modes: Vec<TransportMode> = options.iter().map(|o| o.mode).collect();
        assert_eq!(
            modes,
            vec![TransportMode::Walking, TransportMode::PublicTransport, TransportMode::Cycling]
        );
    }

    #[test]
    fn mobility_issues_remove_cycling() {
        let options = transport_options(2.0, &impaired());
        assert!(!options.iter().any(|o| o.mode == TransportMode::Cycling));
        // Walking stays offered but is flagged low-accessibility.
        let walk = options.iter().find(|o| o.mode == TransportMode::Walking).unwrap();
        assert_eq!(walk.accessibility, "low");
    }

    #[test]
    fn long_trips_only_offer_transit() {
        let options = transport_options(15.0, &mobile());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].mode, TransportMode::PublicTransport);
    }

    #[test]
    fn nearby_cheap_resource_scores_high() {
        // 2 km: three options, transit fare 2.5 but walking is free.
        let options = transport_options(2.0, &mobile());
        let score = accessibility_score(2.0, &options, &resource_at("near"), &mobile());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn distance_and_single_option_penalties_stack() {
        // 12 km with mobility issues: only transit. -0.3 distance, -0.1
        // single option, -0.1 cost (2.5 + 2.1 = 4.6 > 2).
        let profile = impaired();
        let options = transport_options(12.0, &profile);
        let score = accessibility_score(12.0, &options, &resource_at("far"), &profile);
        assert!((score - 0.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn bonuses_apply_after_penalties() {
        let mut resource = resource_at("near");
        resource.wheelchair_accessible = true;
        resource.public_transport_nearby = true;
        let options = transport_options(2.0, &mobile());
        // Clamped to 1.0 even with both bonuses.
        let score = accessibility_score(2.0, &options, &resource, &mobile());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn score_never_leaves_unit_interval() {
        for distance in [0.5, 3.0, 6.0, 9.0, 11.0, 40.0] {
            for profile in [mobile(), impaired()] {
                let options = transport_options(distance, &profile);
                let score =
                    accessibility_score(distance, &options, &resource_at("sweep"), &profile);
                assert!((0.0..=1.0).contains(&score), "score {score} at {distance} km");
            }
        }
    }
}
