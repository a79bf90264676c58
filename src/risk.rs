use crate::archetype::{ArchetypeWeights, ARCHETYPE_TABLE};
use crate::constants::{
    clamp_score, CHAOS_RATE_DIVISOR, COLLAPSE_TURNOVER_DIVISOR, FLOP_MOMENTUM_DELTA,
    FLOP_MOMENTUM_THRESHOLD, FLOP_PACE_DELTA, FLOP_PACE_THRESHOLD, FLOP_RATE_DIVISOR,
};
use crate::game::GameContext;
use crate::team::TeamProfile;

/// Sum one weight column over every flag set on `team`.
fn per_team_sum(team: &TeamProfile, column: fn(&ArchetypeWeights) -> f64) -> f64 {
    ARCHETYPE_TABLE
        .iter()
        .filter(|(archetype, _)| team.has(*archetype))
        .map(|(_, weights)| column(weights))
        .sum()
}

/// Sum one weight column over every flag set on either team, counting each once.
fn matchup_sum(
    home: &TeamProfile,
    away: &TeamProfile,
    column: fn(&ArchetypeWeights) -> f64,
) -> f64 {
    ARCHETYPE_TABLE
        .iter()
        .filter(|(archetype, _)| home.has(*archetype) || away.has(*archetype))
        .map(|(_, weights)| column(weights))
        .sum()
}

/// Calculate the chaos score for a matchup.
///
/// Adds per-team archetype weights, recent-form and fourth-quarter grade
/// effects, and a quarter of both teams' turnover and foul rates.
///
/// # Returns
/// Chaos score clamped to [0, 100]
pub fn compute_chaos_score(home: &TeamProfile, away: &TeamProfile) -> f64 {
    let mut score = 0.0;

    for team in [home, away] {
        // Volatility and shooting archetypes
        score += per_team_sum(team, |w| w.chaos);

        score += team.last3_grade.form_effect();
        score += team.q4_grade.quarter_effect();
    }

    score += (home.turnover_rate + away.turnover_rate) / CHAOS_RATE_DIVISOR;
    score += (home.foul_rate + away.foul_rate) / CHAOS_RATE_DIVISOR;

    clamp_score(score)
}

/// Calculate the risk that a leading team fails to close out the game.
///
/// # Returns
/// Collapse risk clamped to [0, 100]
pub fn compute_collapse_risk(home: &TeamProfile, away: &TeamProfile) -> f64 {
    let mut risk = per_team_sum(home, |w| w.collapse) + per_team_sum(away, |w| w.collapse);

    risk += (home.turnover_rate + away.turnover_rate) / COLLAPSE_TURNOVER_DIVISOR;

    clamp_score(risk)
}

/// Calculate late-game meltdown risk from pace, archetypes, rates and momentum.
///
/// Archetype contributions count once per matchup, not once per team.
///
/// # Returns
/// Flop risk clamped to [0, 100]
pub fn compute_flop_meter(home: &TeamProfile, away: &TeamProfile, game: &GameContext) -> f64 {
    let mut risk = 0.0;

    if game.pace < FLOP_PACE_THRESHOLD {
        risk += FLOP_PACE_DELTA;
    }

    // Star fatigue and bench drop
    risk += matchup_sum(home, away, |w| w.flop);

    risk += (home.turnover_rate + away.turnover_rate) / FLOP_RATE_DIVISOR;
    risk += (home.foul_rate + away.foul_rate) / FLOP_RATE_DIVISOR;

    if game.momentum.abs() > FLOP_MOMENTUM_THRESHOLD {
        risk += FLOP_MOMENTUM_DELTA;
    }

    clamp_score(risk)
}
