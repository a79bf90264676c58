use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::team::TeamProfile;

/// Which teams contribute archetype tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagScope {
    /// Scan home then away; first occurrence of a label wins.
    BothTeams,
    /// Scan only the home team (the ticket view).
    #[default]
    HomeOnly,
}

/// Collect the archetype labels present in the matchup.
///
/// Labels are deduplicated and ordered by team, then by canonical flag order.
/// `chaos_score` and `collapse_risk` are accepted for threshold-based tags but
/// not consumed yet.
pub fn generate_tags(
    home: &TeamProfile,
    away: &TeamProfile,
    _chaos_score: f64,
    _collapse_risk: f64,
    scope: TagScope,
) -> Vec<String> {
    let both = [home, away];
    let teams = match scope {
        TagScope::BothTeams => &both[..],
        TagScope::HomeOnly => &both[..1],
    };

    let mut seen: Vec<Archetype> = Vec::new();
    for team in teams {
        for archetype in team.archetypes() {
            if !seen.contains(&archetype) {
                seen.push(archetype);
            }
        }
    }

    seen.iter().map(|archetype| archetype.label().to_string()).collect()
}

/// Map each tag to its explanation, preserving order.
///
/// Tags without an entry are skipped.
pub fn generate_notes<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .filter_map(|tag| Archetype::from_label(tag.as_ref()))
        .map(|archetype| archetype.note().to_string())
        .collect()
}
