use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOMENTUM, DEFAULT_PACE};

/// Static game state consumed by the flop meter.
///
/// `quarter` and `time_remaining` are carried through but not used by any
/// formula yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameContext {
    /// Possessions per game
    pub pace: f64,

    /// Signed momentum, -100 to +100
    pub momentum: f64,

    pub quarter: u8,

    /// Clock string such as "5:32"
    pub time_remaining: String,
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext {
            pace: DEFAULT_PACE,
            momentum: DEFAULT_MOMENTUM,
            quarter: 1,
            time_remaining: "12:00".to_string(),
        }
    }
}

impl GameContext {
    pub fn new(pace: f64, momentum: f64) -> Self {
        GameContext {
            pace,
            momentum,
            ..GameContext::default()
        }
    }
}
