//! Python bindings mirroring the backend's dict-based engine functions.
//!
//! Team, game and ticket arguments are plain dicts keyed the same way as the
//! JSON payloads (`isStepperz`, `last3Grade`, `houseTotal`, ...). Absent or
//! `None` keys fall back to the documented defaults.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing_subscriber::EnvFilter;

use crate::archetype::Archetype;
use crate::bands::{compute_spread_band, compute_total_band, TotalBand};
use crate::config::EngineConfig;
use crate::game::GameContext;
use crate::grade::Grade;
use crate::risk::{compute_chaos_score, compute_collapse_risk, compute_flop_meter};
use crate::tags::{generate_notes, generate_tags, TagScope};
use crate::team::TeamProfile;
use crate::ticket::{Matchup, PickSide, PickType, ScoringEngine, TicketRequest};

/// Install a stderr subscriber filtered by `CHAOS_CORE_LOG` (default `warn`).
pub(crate) fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CHAOS_CORE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A host application may already own the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn lookup<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
    Ok(dict.get_item(key)?.filter(|value| !value.is_none()))
}

fn read_flag(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<bool> {
    match lookup(dict, key)? {
        Some(value) => value.is_truthy(),
        None => Ok(false),
    }
}

fn read_f64(dict: &Bound<'_, PyDict>, key: &str, default: f64) -> PyResult<f64> {
    match lookup(dict, key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

fn read_string(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<String>> {
    match lookup(dict, key)? {
        Some(value) => Ok(Some(value.str()?.to_string())),
        None => Ok(None),
    }
}

fn read_grade(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Grade> {
    Ok(read_string(dict, key)?
        .map(|raw| Grade::parse_lenient(&raw))
        .unwrap_or_default())
}

fn team_from_dict(dict: &Bound<'_, PyDict>) -> PyResult<TeamProfile> {
    let defaults = TeamProfile::default();
    let mut team = TeamProfile {
        team_id: read_string(dict, "teamId")?.unwrap_or_default(),
        team_name: read_string(dict, "teamName")?.unwrap_or_default(),
        home_rating: read_f64(dict, "homeRating", defaults.home_rating)?,
        away_rating: read_f64(dict, "awayRating", defaults.away_rating)?,
        last3_grade: read_grade(dict, "last3Grade")?,
        q1_grade: read_grade(dict, "q1Grade")?,
        q2_grade: read_grade(dict, "q2Grade")?,
        q3_grade: read_grade(dict, "q3Grade")?,
        q4_grade: read_grade(dict, "q4Grade")?,
        foul_rate: read_f64(dict, "foulRate", defaults.foul_rate)?,
        turnover_rate: read_f64(dict, "turnoverRate", defaults.turnover_rate)?,
        ..defaults
    };

    for (archetype, key) in ARCHETYPE_KEYS {
        team.set(archetype, read_flag(dict, key)?);
    }

    Ok(team)
}

const ARCHETYPE_KEYS: [(Archetype, &str); 7] = [
    (Archetype::HighVariance, "isStepperz"),
    (Archetype::CannotHoldLeads, "isScrubs"),
    (Archetype::SlowsWhenAhead, "isHeadaches"),
    (Archetype::ComebackEquity, "isFortified"),
    (Archetype::StarDependent, "isOma"),
    (Archetype::PoorShootingFloor, "isBricksquad"),
    (Archetype::StableShootingFloor, "isHitterz"),
];

fn game_from_dict(dict: Option<&Bound<'_, PyDict>>) -> PyResult<GameContext> {
    let mut game = GameContext::default();
    if let Some(dict) = dict {
        game.pace = read_f64(dict, "pace", game.pace)?;
        game.momentum = read_f64(dict, "momentum", game.momentum)?;
        if let Some(quarter) = lookup(dict, "quarter")? {
            game.quarter = quarter.extract()?;
        }
        if let Some(clock) = read_string(dict, "timeRemaining")? {
            game.time_remaining = clock;
        }
    }
    Ok(game)
}

fn ticket_from_dict(dict: Option<&Bound<'_, PyDict>>) -> PyResult<TicketRequest> {
    let mut ticket = TicketRequest::default();
    if let Some(dict) = dict {
        ticket.house_total = read_f64(dict, "houseTotal", 0.0)?;
        ticket.house_spread = read_f64(dict, "houseSpread", 0.0)?;
        if let Some(side) = read_string(dict, "pickSide")? {
            ticket.pick_side = PickSide::parse_lenient(&side);
        }
        if let Some(kind) = read_string(dict, "pickType")? {
            ticket.pick_type = PickType::parse_lenient(&kind);
        }
    }
    Ok(ticket)
}

fn parse_scope(scope: &str) -> PyResult<TagScope> {
    match scope {
        "both" | "both_teams" => Ok(TagScope::BothTeams),
        "home" | "home_only" => Ok(TagScope::HomeOnly),
        other => Err(PyValueError::new_err(format!("Invalid tag scope: {}", other))),
    }
}

fn total_band_dict<'py>(py: Python<'py>, band: &TotalBand) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("low", band.low)?;
    dict.set_item("mid", band.mid)?;
    dict.set_item("high", band.high)?;
    dict.set_item("insane", band.insane)?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(name = "compute_chaos_score")]
pub fn py_compute_chaos_score(
    home: &Bound<'_, PyDict>,
    away: &Bound<'_, PyDict>,
) -> PyResult<f64> {
    Ok(compute_chaos_score(&team_from_dict(home)?, &team_from_dict(away)?))
}

#[pyfunction]
#[pyo3(name = "compute_collapse_risk")]
pub fn py_compute_collapse_risk(
    home: &Bound<'_, PyDict>,
    away: &Bound<'_, PyDict>,
) -> PyResult<f64> {
    Ok(compute_collapse_risk(&team_from_dict(home)?, &team_from_dict(away)?))
}

#[pyfunction]
#[pyo3(name = "compute_flop_meter", signature = (home, away, game = None))]
pub fn py_compute_flop_meter(
    home: &Bound<'_, PyDict>,
    away: &Bound<'_, PyDict>,
    game: Option<&Bound<'_, PyDict>>,
) -> PyResult<f64> {
    Ok(compute_flop_meter(
        &team_from_dict(home)?,
        &team_from_dict(away)?,
        &game_from_dict(game)?,
    ))
}

#[pyfunction]
#[pyo3(name = "compute_total_band")]
pub fn py_compute_total_band(
    py: Python<'_>,
    house_total: f64,
    chaos_score: f64,
) -> PyResult<Bound<'_, PyDict>> {
    total_band_dict(py, &compute_total_band(house_total, chaos_score))
}

#[pyfunction]
#[pyo3(name = "compute_spread_band")]
pub fn py_compute_spread_band<'py>(
    py: Python<'py>,
    house_spread: f64,
    home: &Bound<'py, PyDict>,
    away: &Bound<'py, PyDict>,
) -> PyResult<Bound<'py, PyDict>> {
    let band =
        compute_spread_band(house_spread, &team_from_dict(home)?, &team_from_dict(away)?);
    let dict = PyDict::new_bound(py);
    dict.set_item("min", band.min)?;
    dict.set_item("max", band.max)?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(
    name = "generate_tags",
    signature = (home, away, chaos_score = 0.0, collapse_risk = 0.0, scope = "both")
)]
pub fn py_generate_tags(
    home: &Bound<'_, PyDict>,
    away: &Bound<'_, PyDict>,
    chaos_score: f64,
    collapse_risk: f64,
    scope: &str,
) -> PyResult<Vec<String>> {
    Ok(generate_tags(
        &team_from_dict(home)?,
        &team_from_dict(away)?,
        chaos_score,
        collapse_risk,
        parse_scope(scope)?,
    ))
}

#[pyfunction]
#[pyo3(name = "generate_notes")]
pub fn py_generate_notes(tags: Vec<String>) -> Vec<String> {
    generate_notes(&tags)
}

/// Score a full ticket and return the response body as a dict.
#[pyfunction]
#[pyo3(
    name = "score_ticket",
    signature = (home, away, game = None, ticket = None, scope = "home")
)]
pub fn py_score_ticket<'py>(
    py: Python<'py>,
    home: &Bound<'py, PyDict>,
    away: &Bound<'py, PyDict>,
    game: Option<&Bound<'py, PyDict>>,
    ticket: Option<&Bound<'py, PyDict>>,
    scope: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let matchup = Matchup::new(
        team_from_dict(home)?,
        team_from_dict(away)?,
        game_from_dict(game)?,
        ticket_from_dict(ticket)?,
    );
    let engine = ScoringEngine::new(EngineConfig::new(parse_scope(scope)?));
    let result = engine.score(&matchup);

    let spread = PyDict::new_bound(py);
    spread.set_item("min", result.spread_band.min)?;
    spread.set_item("max", result.spread_band.max)?;

    let dict = PyDict::new_bound(py);
    dict.set_item("chaosScore", result.chaos_score)?;
    dict.set_item("collapseRisk", result.collapse_risk)?;
    dict.set_item("flopRisk", result.flop_risk)?;
    dict.set_item("totalBand", total_band_dict(py, &result.total_band)?)?;
    dict.set_item("spreadBand", spread)?;
    dict.set_item("tags", result.tags)?;
    dict.set_item("notes", result.notes)?;
    Ok(dict)
}

/// Load an engine config file and return the tag scope it selects.
#[pyfunction]
#[pyo3(name = "read_tag_scope")]
pub fn py_read_tag_scope(filepath: &str) -> PyResult<String> {
    let config = EngineConfig::read_from_file(filepath)?;
    Ok(match config.tag_scope {
        TagScope::BothTeams => "both".to_string(),
        TagScope::HomeOnly => "home".to_string(),
    })
}
