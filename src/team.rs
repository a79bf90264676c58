use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::constants::{DEFAULT_FOUL_RATE, DEFAULT_RATING, DEFAULT_TURNOVER_RATE};
use crate::grade::Grade;

/// Team profile with archetype flags, grades and rate statistics.
///
/// Field names on the wire are camelCase (`isStepperz`, `last3Grade`, ...).
/// Every field is optional on input and falls back to its documented default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamProfile {
    pub team_id: String,

    pub team_name: String,

    #[serde(rename = "isStepperz")]
    pub high_variance: bool,

    #[serde(rename = "isScrubs")]
    pub cannot_hold_leads: bool,

    #[serde(rename = "isHeadaches")]
    pub slows_when_ahead: bool,

    #[serde(rename = "isFortified")]
    pub comeback_equity: bool,

    #[serde(rename = "isOma")]
    pub star_dependent: bool,

    #[serde(rename = "isBricksquad")]
    pub poor_shooting_floor: bool,

    #[serde(rename = "isHitterz")]
    pub stable_shooting_floor: bool,

    /// Strength at home, 0-100. Not consumed by any score.
    pub home_rating: f64,

    /// Strength on the road, 0-100. Not consumed by any score.
    pub away_rating: f64,

    /// Form over the last three games
    #[serde(rename = "last3Grade")]
    pub last3_grade: Grade,

    #[serde(rename = "q1Grade")]
    pub q1_grade: Grade,

    #[serde(rename = "q2Grade")]
    pub q2_grade: Grade,

    #[serde(rename = "q3Grade")]
    pub q3_grade: Grade,

    #[serde(rename = "q4Grade")]
    pub q4_grade: Grade,

    /// Fouls per game, percent
    pub foul_rate: f64,

    /// Turnovers per game, percent
    pub turnover_rate: f64,
}

impl Default for TeamProfile {
    fn default() -> Self {
        TeamProfile {
            team_id: String::new(),
            team_name: String::new(),
            high_variance: false,
            cannot_hold_leads: false,
            slows_when_ahead: false,
            comeback_equity: false,
            star_dependent: false,
            poor_shooting_floor: false,
            stable_shooting_floor: false,
            home_rating: DEFAULT_RATING,
            away_rating: DEFAULT_RATING,
            last3_grade: Grade::Mid,
            q1_grade: Grade::Mid,
            q2_grade: Grade::Mid,
            q3_grade: Grade::Mid,
            q4_grade: Grade::Mid,
            foul_rate: DEFAULT_FOUL_RATE,
            turnover_rate: DEFAULT_TURNOVER_RATE,
        }
    }
}

impl TeamProfile {
    /// Create a profile with default flags, grades and rates.
    pub fn new(team_id: impl Into<String>, team_name: impl Into<String>) -> Self {
        TeamProfile {
            team_id: team_id.into(),
            team_name: team_name.into(),
            ..TeamProfile::default()
        }
    }

    pub fn has(&self, archetype: Archetype) -> bool {
        match archetype {
            Archetype::HighVariance => self.high_variance,
            Archetype::CannotHoldLeads => self.cannot_hold_leads,
            Archetype::SlowsWhenAhead => self.slows_when_ahead,
            Archetype::ComebackEquity => self.comeback_equity,
            Archetype::StarDependent => self.star_dependent,
            Archetype::PoorShootingFloor => self.poor_shooting_floor,
            Archetype::StableShootingFloor => self.stable_shooting_floor,
        }
    }

    pub fn set(&mut self, archetype: Archetype, value: bool) {
        let flag = match archetype {
            Archetype::HighVariance => &mut self.high_variance,
            Archetype::CannotHoldLeads => &mut self.cannot_hold_leads,
            Archetype::SlowsWhenAhead => &mut self.slows_when_ahead,
            Archetype::ComebackEquity => &mut self.comeback_equity,
            Archetype::StarDependent => &mut self.star_dependent,
            Archetype::PoorShootingFloor => &mut self.poor_shooting_floor,
            Archetype::StableShootingFloor => &mut self.stable_shooting_floor,
        };
        *flag = value;
    }

    /// Flags set on this team, in canonical order.
    pub fn archetypes(&self) -> impl Iterator<Item = Archetype> + '_ {
        Archetype::ALL.into_iter().filter(move |&archetype| self.has(archetype))
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.set(archetype, true);
        self
    }

    pub fn with_rates(mut self, foul_rate: f64, turnover_rate: f64) -> Self {
        self.foul_rate = foul_rate;
        self.turnover_rate = turnover_rate;
        self
    }

    pub fn with_form(mut self, grade: Grade) -> Self {
        self.last3_grade = grade;
        self
    }

    pub fn with_q4(mut self, grade: Grade) -> Self {
        self.q4_grade = grade;
        self
    }
}
