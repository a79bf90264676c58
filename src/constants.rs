/// Lower bound of every risk score
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every risk score
pub const SCORE_MAX: f64 = 100.0;

/// Default foul rate (fouls per game, percent)
pub const DEFAULT_FOUL_RATE: f64 = 15.0;

/// Default turnover rate (turnovers per game, percent)
pub const DEFAULT_TURNOVER_RATE: f64 = 14.0;

/// Default home/away rating (0-100 scale)
pub const DEFAULT_RATING: f64 = 50.0;

/// Default game pace (possessions per game)
pub const DEFAULT_PACE: f64 = 96.0;

/// Default momentum (signed, -100 to +100)
pub const DEFAULT_MOMENTUM: f64 = 0.0;

/// Chaos adds (turnovers + fouls) of both teams divided by this
pub const CHAOS_RATE_DIVISOR: f64 = 4.0;

/// Collapse risk adds both teams' turnovers divided by this
pub const COLLAPSE_TURNOVER_DIVISOR: f64 = 5.0;

/// Flop risk adds (turnovers + fouls) of both teams divided by this
pub const FLOP_RATE_DIVISOR: f64 = 4.0;

/// Pace below this counts as a pace collapse
pub const FLOP_PACE_THRESHOLD: f64 = 92.0;

/// Flop points for a pace collapse
pub const FLOP_PACE_DELTA: f64 = 15.0;

/// Absolute momentum above this counts as a momentum swing
pub const FLOP_MOMENTUM_THRESHOLD: f64 = 40.0;

/// Flop points for a momentum swing
pub const FLOP_MOMENTUM_DELTA: f64 = 10.0;

/// Chaos score is divided by this to get the total band widening factor
pub const CHAOS_FACTOR_DIVISOR: f64 = 10.0;

/// Half-width of the chaos-independent mid total band
pub const MID_BAND_HALF_WIDTH: f64 = 3.0;

/// Low total band offsets below the line, before chaos widening: (far, near)
pub const LOW_BAND_OFFSETS: (f64, f64) = (8.0, 4.0);

/// High total band offsets above the line, before chaos widening: (near, far)
pub const HIGH_BAND_OFFSETS: (f64, f64) = (4.0, 10.0);

/// Insane total band offsets above the line, before chaos widening: (near, far)
pub const INSANE_BAND_OFFSETS: (f64, f64) = (11.0, 22.0);

/// Clamp a raw score into [SCORE_MIN, SCORE_MAX]
pub fn clamp_score(raw: f64) -> f64 {
    raw.max(SCORE_MIN).min(SCORE_MAX)
}
