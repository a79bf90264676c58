//! Chaos Core - matchup volatility scoring and betting bands.
//!
//! Maps two team profiles and a game context to chaos, collapse and flop
//! scores, total/spread bands around the house lines, and archetype tags
//! with notes. Every calculator is a pure function.
//!
//! Python bindings are built with the `extension-module` feature.

pub mod archetype;
pub mod bands;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod grade;
pub mod risk;
pub mod tags;
pub mod team;
pub mod ticket;

#[cfg(feature = "python")]
mod python;

pub use archetype::{Archetype, ArchetypeWeights, BandEdge, SpreadShift, ARCHETYPE_TABLE};
pub use bands::{compute_spread_band, compute_total_band, SpreadBand, TotalBand};
pub use config::EngineConfig;
pub use error::{ChaosError, Result};
pub use game::GameContext;
pub use grade::Grade;
pub use risk::{compute_chaos_score, compute_collapse_risk, compute_flop_meter};
pub use tags::{generate_notes, generate_tags, TagScope};
pub use team::TeamProfile;
pub use ticket::{Matchup, PickSide, PickType, ScoreResult, ScoringEngine, TicketRequest};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn chaos_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::init_logging();

    // Calculators
    m.add_function(wrap_pyfunction!(python::py_compute_chaos_score, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_compute_collapse_risk, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_compute_flop_meter, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_compute_total_band, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_compute_spread_band, m)?)?;

    // Tags and notes
    m.add_function(wrap_pyfunction!(python::py_generate_tags, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_generate_notes, m)?)?;

    // Full ticket
    m.add_function(wrap_pyfunction!(python::py_score_ticket, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_read_tag_scope, m)?)?;

    // Constants
    m.add("SCORE_MAX", constants::SCORE_MAX)?;
    m.add("DEFAULT_PACE", constants::DEFAULT_PACE)?;
    m.add("TAGS", Archetype::ALL.iter().map(|a| a.label()).collect::<Vec<_>>())?;

    Ok(())
}
