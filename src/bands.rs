use serde::{Deserialize, Serialize};

use crate::archetype::{BandEdge, ARCHETYPE_TABLE};
use crate::constants::{
    CHAOS_FACTOR_DIVISOR, HIGH_BAND_OFFSETS, INSANE_BAND_OFFSETS, LOW_BAND_OFFSETS,
    MID_BAND_HALF_WIDTH,
};
use crate::team::TeamProfile;

/// Four ranges around a house total, each a (low, high) pair.
///
/// Serialises as `{"low": [a, b], "mid": [a, b], ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalBand {
    pub low: (f64, f64),
    pub mid: (f64, f64),
    pub high: (f64, f64),
    pub insane: (f64, f64),
}

/// Range around a house spread.
///
/// `min` is not guaranteed to be <= `max`; the pair is reported as computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadBand {
    pub min: f64,
    pub max: f64,
}

/// Compute total band ranges from the house total and chaos score.
///
/// Higher chaos pushes the low band down and the high/insane bands up; the
/// mid band is always the line plus or minus three. No clamping is applied.
pub fn compute_total_band(house_total: f64, chaos_score: f64) -> TotalBand {
    let chaos_factor = chaos_score / CHAOS_FACTOR_DIVISOR;

    TotalBand {
        low: (
            house_total - (LOW_BAND_OFFSETS.0 + chaos_factor),
            house_total - (LOW_BAND_OFFSETS.1 + chaos_factor),
        ),
        mid: (house_total - MID_BAND_HALF_WIDTH, house_total + MID_BAND_HALF_WIDTH),
        high: (
            house_total + (HIGH_BAND_OFFSETS.0 + chaos_factor),
            house_total + (HIGH_BAND_OFFSETS.1 + chaos_factor),
        ),
        insane: (
            house_total + (INSANE_BAND_OFFSETS.0 + chaos_factor),
            house_total + (INSANE_BAND_OFFSETS.1 + chaos_factor),
        ),
    }
}

/// Compute the spread band from the house spread and team archetypes.
///
/// Each shifting archetype moves one edge outward for the home team and the
/// opposite edge outward for the away team.
pub fn compute_spread_band(
    house_spread: f64,
    home: &TeamProfile,
    away: &TeamProfile,
) -> SpreadBand {
    let mut band = SpreadBand {
        min: house_spread,
        max: house_spread,
    };

    for (archetype, weights) in ARCHETYPE_TABLE.iter() {
        let Some(shift) = weights.spread else {
            continue;
        };

        if home.has(*archetype) {
            band.push(shift.home_edge, shift.magnitude);
        }
        if away.has(*archetype) {
            band.push(shift.home_edge.opposite(), shift.magnitude);
        }
    }

    band
}

impl SpreadBand {
    /// Move `edge` away from the line by `magnitude`.
    fn push(&mut self, edge: BandEdge, magnitude: f64) {
        match edge {
            BandEdge::Min => self.min -= magnitude,
            BandEdge::Max => self.max += magnitude,
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}
