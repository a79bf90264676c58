use serde::{Deserialize, Serialize};
use std::fmt;

/// Recurring behavioural pattern a team can be flagged with.
///
/// Variant order is the canonical tag order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Blowout-prone, high-variance scoring ("Stepperz")
    HighVariance,
    /// Cannot hold leads ("Scrubs")
    CannotHoldLeads,
    /// Slows down when ahead, allows fake comebacks ("Headaches")
    SlowsWhenAhead,
    /// Real comeback equity ("Fortified")
    ComebackEquity,
    /// One man army ("OMA")
    StarDependent,
    /// Poor shooting floor ("Bricksquad")
    PoorShootingFloor,
    /// Stable shooting floor ("Hitterz-Ballerz")
    StableShootingFloor,
}

/// Which edge of the spread band an archetype pushes outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandEdge {
    Min,
    Max,
}

impl BandEdge {
    pub fn opposite(self) -> Self {
        match self {
            BandEdge::Min => BandEdge::Max,
            BandEdge::Max => BandEdge::Min,
        }
    }
}

/// Spread band shift for an archetype.
///
/// The home team's flag pushes `home_edge` outward by `magnitude`; the away
/// team's flag pushes the opposite edge outward by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpreadShift {
    pub home_edge: BandEdge,
    pub magnitude: f64,
}

/// Fixed score deltas contributed by one archetype.
///
/// `chaos` and `collapse` apply once per team carrying the flag. `flop`
/// applies once per matchup if either team carries it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeWeights {
    pub chaos: f64,
    pub collapse: f64,
    pub flop: f64,
    pub spread: Option<SpreadShift>,
}

const fn weights(
    chaos: f64,
    collapse: f64,
    flop: f64,
    spread: Option<SpreadShift>,
) -> ArchetypeWeights {
    ArchetypeWeights {
        chaos,
        collapse,
        flop,
        spread,
    }
}

const fn shift(home_edge: BandEdge, magnitude: f64) -> Option<SpreadShift> {
    Some(SpreadShift {
        home_edge,
        magnitude,
    })
}

/// Scoring table, one row per archetype in canonical order.
pub const ARCHETYPE_TABLE: [(Archetype, ArchetypeWeights); 7] = [
    (Archetype::HighVariance, weights(15.0, 0.0, 0.0, shift(BandEdge::Min, 4.0))),
    (Archetype::CannotHoldLeads, weights(0.0, 20.0, 0.0, None)),
    (Archetype::SlowsWhenAhead, weights(12.0, 15.0, 12.0, None)),
    (Archetype::ComebackEquity, weights(0.0, 10.0, 0.0, shift(BandEdge::Min, 3.0))),
    (Archetype::StarDependent, weights(10.0, 0.0, 8.0, None)),
    (Archetype::PoorShootingFloor, weights(8.0, 0.0, 0.0, shift(BandEdge::Max, 6.0))),
    (Archetype::StableShootingFloor, weights(-5.0, 0.0, 0.0, None)),
];

impl Archetype {
    pub const ALL: [Archetype; 7] = [
        Archetype::HighVariance,
        Archetype::CannotHoldLeads,
        Archetype::SlowsWhenAhead,
        Archetype::ComebackEquity,
        Archetype::StarDependent,
        Archetype::PoorShootingFloor,
        Archetype::StableShootingFloor,
    ];

    /// Tag label shown to bettors.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::HighVariance => "Stepperz",
            Archetype::CannotHoldLeads => "Scrubs",
            Archetype::SlowsWhenAhead => "Headaches",
            Archetype::ComebackEquity => "Fortified",
            Archetype::StarDependent => "OMA",
            Archetype::PoorShootingFloor => "Bricksquad",
            Archetype::StableShootingFloor => "Hitterz-Ballerz",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Archetype::ALL.into_iter().find(|archetype| archetype.label() == label)
    }

    /// Human-readable explanation attached to the tag.
    pub fn note(&self) -> &'static str {
        match self {
            Archetype::HighVariance => "Stepperz team detected: blowout + over-smash risk",
            Archetype::CannotHoldLeads => "Scrubs team: cannot hold leads, fake safety risk",
            Archetype::SlowsWhenAhead => {
                "Headaches team: slows down when up, allows fake comebacks"
            }
            Archetype::ComebackEquity => "Fortified team: real comeback equity from +15",
            Archetype::StarDependent => "One Man Army: high volatility when star sits",
            Archetype::PoorShootingFloor => "Bricksquad: low shooting floor, drought risk",
            Archetype::StableShootingFloor => "Hitterz-Ballerz: stable shooting floor",
        }
    }

    pub fn weights(&self) -> &'static ArchetypeWeights {
        &ARCHETYPE_TABLE[*self as usize].1
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
