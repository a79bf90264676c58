use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bands::{compute_spread_band, compute_total_band, SpreadBand, TotalBand};
use crate::config::EngineConfig;
use crate::error::{ChaosError, Result};
use crate::game::GameContext;
use crate::risk::{compute_chaos_score, compute_collapse_risk, compute_flop_meter};
use crate::tags::{generate_notes, generate_tags};
use crate::team::TeamProfile;

/// Side of the bettor's pick. Unrecognised values read as `Home`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<Value>")]
pub enum PickSide {
    #[default]
    Home,
    Away,
}

impl PickSide {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "home" => PickSide::Home,
            "away" => PickSide::Away,
            other => {
                tracing::warn!(pick_side = other, "unrecognised pick side, treating as home");
                PickSide::Home
            }
        }
    }
}

impl From<Option<Value>> for PickSide {
    fn from(raw: Option<Value>) -> Self {
        match raw {
            None | Some(Value::Null) => PickSide::default(),
            Some(Value::String(side)) => PickSide::parse_lenient(&side),
            Some(other) => PickSide::parse_lenient(&other.to_string()),
        }
    }
}

/// Market of the bettor's pick. Unrecognised values read as `Spread`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<Value>")]
pub enum PickType {
    #[default]
    Spread,
    Ml,
    Total,
}

impl PickType {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "spread" => PickType::Spread,
            "ml" => PickType::Ml,
            "total" => PickType::Total,
            other => {
                tracing::warn!(pick_type = other, "unrecognised pick type, treating as spread");
                PickType::Spread
            }
        }
    }
}

impl From<Option<Value>> for PickType {
    fn from(raw: Option<Value>) -> Self {
        match raw {
            None | Some(Value::Null) => PickType::default(),
            Some(Value::String(kind)) => PickType::parse_lenient(&kind),
            Some(other) => PickType::parse_lenient(&other.to_string()),
        }
    }
}

/// House lines for a ticket, plus the bettor's pick.
///
/// The pick is carried for the caller; no formula reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketRequest {
    pub house_total: f64,
    pub house_spread: f64,
    pub pick_side: PickSide,
    pub pick_type: PickType,
}

/// Everything needed to score one matchup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matchup {
    pub home: TeamProfile,
    pub away: TeamProfile,
    pub game: GameContext,
    pub ticket: TicketRequest,
}

impl Matchup {
    pub fn new(
        home: TeamProfile,
        away: TeamProfile,
        game: GameContext,
        ticket: TicketRequest,
    ) -> Self {
        Matchup {
            home,
            away,
            game,
            ticket,
        }
    }

    /// Decode a matchup payload; absent fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ChaosError::Payload)
    }
}

/// Scores, bands, tags and notes for one matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub chaos_score: f64,
    pub collapse_risk: f64,
    pub flop_risk: f64,
    pub total_band: TotalBand,
    pub spread_band: SpreadBand,
    pub tags: Vec<String>,
    pub notes: Vec<String>,
}

/// Stateless scorer; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Score a single matchup.
    ///
    /// The three risk scores and the spread band are independent; the total
    /// band is derived from the chaos score.
    pub fn score(&self, matchup: &Matchup) -> ScoreResult {
        let Matchup {
            home,
            away,
            game,
            ticket,
        } = matchup;

        let chaos_score = compute_chaos_score(home, away);
        let collapse_risk = compute_collapse_risk(home, away);
        let flop_risk = compute_flop_meter(home, away, game);

        let total_band = compute_total_band(ticket.house_total, chaos_score);
        let spread_band = compute_spread_band(ticket.house_spread, home, away);

        let tags = generate_tags(home, away, chaos_score, collapse_risk, self.config.tag_scope);
        let notes = generate_notes(&tags);

        tracing::debug!(
            home = %home.team_id,
            away = %away.team_id,
            chaos_score,
            collapse_risk,
            flop_risk,
            tags = tags.len(),
            "scored matchup"
        );

        ScoreResult {
            chaos_score,
            collapse_risk,
            flop_risk,
            total_band,
            spread_band,
            tags,
            notes,
        }
    }

    /// Score many matchups in parallel. Output order matches input order.
    pub fn score_batch(&self, matchups: &[Matchup]) -> Vec<ScoreResult> {
        tracing::debug!(matchups = matchups.len(), "scoring batch");
        matchups.par_iter().map(|matchup| self.score(matchup)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;
    use crate::grade::Grade;
    use crate::tags::TagScope;

    fn sample_matchup() -> Matchup {
        let home = TeamProfile::new("BOS", "Boston")
            .with_archetype(Archetype::HighVariance)
            .with_rates(0.0, 0.0);
        let away = TeamProfile::new("NYK", "New York")
            .with_archetype(Archetype::CannotHoldLeads)
            .with_rates(0.0, 0.0);
        let ticket = TicketRequest {
            house_total: 220.0,
            house_spread: -3.5,
            ..TicketRequest::default()
        };
        Matchup::new(home, away, GameContext::default(), ticket)
    }

    #[test]
    fn test_score_home_only() {
        let engine = ScoringEngine::default();
        let result = engine.score(&sample_matchup());

        assert_eq!(result.chaos_score, 15.0);
        assert_eq!(result.collapse_risk, 20.0);
        assert_eq!(result.flop_risk, 0.0);
        assert_eq!(result.total_band.low, (220.0 - 9.5, 220.0 - 5.5));
        assert_eq!(result.spread_band, SpreadBand { min: -7.5, max: -3.5 });
        assert_eq!(result.tags, vec!["Stepperz"]);
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_score_both_teams() {
        let engine = ScoringEngine::new(EngineConfig::new(TagScope::BothTeams));
        let result = engine.score(&sample_matchup());
        assert_eq!(result.tags, vec!["Stepperz", "Scrubs"]);
        assert_eq!(result.notes[1], "Scrubs team: cannot hold leads, fake safety risk");
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = ScoringEngine::default();
        let quiet = Matchup::default();
        let loud = sample_matchup();
        let matchups = vec![loud.clone(), quiet.clone(), loud.clone()];

        let results = engine.score_batch(&matchups);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], engine.score(&loud));
        assert_eq!(results[1], engine.score(&quiet));
        assert_eq!(results[2], results[0]);
    }

    #[test]
    fn test_from_json_defaults() {
        let matchup = Matchup::from_json(
            r#"{"home": {"isOma": true}, "ticket": {"houseTotal": 210.5, "pickSide": "away"}}"#,
        )
        .unwrap();
        assert!(matchup.home.star_dependent);
        assert_eq!(matchup.away, TeamProfile::default());
        assert_eq!(matchup.game.pace, 96.0);
        assert_eq!(matchup.ticket.house_total, 210.5);
        assert_eq!(matchup.ticket.pick_side, PickSide::Away);
        assert_eq!(matchup.ticket.pick_type, PickType::Spread);
    }

    #[test]
    fn test_from_json_tolerates_bad_grades() {
        let matchup =
            Matchup::from_json(r#"{"home": {"q4Grade": null}, "away": {"last3Grade": 3}}"#)
                .unwrap();
        assert_eq!(matchup.home.q4_grade, Grade::Mid);
        assert_eq!(matchup.away.last3_grade, Grade::Mid);

        let engine = ScoringEngine::default();
        let baseline = engine.score(&Matchup::default());
        assert_eq!(engine.score(&matchup).chaos_score, baseline.chaos_score);
    }

    #[test]
    fn test_from_json_tolerates_bad_picks() {
        let matchup =
            Matchup::from_json(r#"{"ticket": {"pickSide": "sideways", "pickType": 7}}"#).unwrap();
        assert_eq!(matchup.ticket.pick_side, PickSide::Home);
        assert_eq!(matchup.ticket.pick_type, PickType::Spread);

        let matchup = Matchup::from_json(r#"{"ticket": {"pickSide": null, "pickType": "ml"}}"#)
            .unwrap();
        assert_eq!(matchup.ticket.pick_side, PickSide::Home);
        assert_eq!(matchup.ticket.pick_type, PickType::Ml);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Matchup::from_json("not json").unwrap_err();
        assert!(matches!(err, ChaosError::Payload(_)));
    }
}
