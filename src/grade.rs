use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Performance grade for recent form or a single quarter.
///
/// Payloads carry grades as lowercase strings. Anything else, including null
/// or a non-string value, is read as `Mid`, which has zero effect on every
/// score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<Value>")]
pub enum Grade {
    Elite,
    #[default]
    Mid,
    Trash,
}

impl Grade {
    /// Parse a grade, falling back to `Mid` for unrecognised input.
    ///
    /// The fallback never changes a computed score relative to `"mid"`, but
    /// it is logged so bad upstream data is visible.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "elite" => Grade::Elite,
            "mid" => Grade::Mid,
            "trash" => Grade::Trash,
            other => {
                tracing::warn!(grade = other, "unrecognised grade, treating as mid");
                Grade::Mid
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Elite => "elite",
            Grade::Mid => "mid",
            Grade::Trash => "trash",
        }
    }

    /// Chaos contribution of the last-three-games grade.
    pub fn form_effect(&self) -> f64 {
        match self {
            Grade::Elite => -5.0,
            Grade::Mid => 0.0,
            Grade::Trash => 10.0,
        }
    }

    /// Chaos contribution of the fourth-quarter grade.
    pub fn quarter_effect(&self) -> f64 {
        match self {
            Grade::Elite => -3.0,
            Grade::Mid => 0.0,
            Grade::Trash => 5.0,
        }
    }
}

impl From<Option<Value>> for Grade {
    fn from(raw: Option<Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Grade::Mid,
            Some(Value::String(grade)) => Grade::parse_lenient(&grade),
            Some(other) => Grade::parse_lenient(&other.to_string()),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_grades() {
        assert_eq!(Grade::parse_lenient("elite"), Grade::Elite);
        assert_eq!(Grade::parse_lenient("mid"), Grade::Mid);
        assert_eq!(Grade::parse_lenient("trash"), Grade::Trash);
    }

    #[test]
    fn test_unknown_grade_is_mid() {
        assert_eq!(Grade::parse_lenient("elitee"), Grade::Mid);
        assert_eq!(Grade::parse_lenient("Elite"), Grade::Mid);
        assert_eq!(Grade::parse_lenient(""), Grade::Mid);
    }

    #[test]
    fn test_effect_tables() {
        assert_eq!(Grade::Elite.form_effect(), -5.0);
        assert_eq!(Grade::Trash.form_effect(), 10.0);
        assert_eq!(Grade::Elite.quarter_effect(), -3.0);
        assert_eq!(Grade::Trash.quarter_effect(), 5.0);
        assert_eq!(Grade::Mid.form_effect() + Grade::Mid.quarter_effect(), 0.0);
    }

    #[test]
    fn test_serde_lenient() {
        let grades: Vec<Grade> =
            serde_json::from_str(r#"["trash", "bogus", "elite", null, 3, true]"#).unwrap();
        assert_eq!(
            grades,
            vec![Grade::Trash, Grade::Mid, Grade::Elite, Grade::Mid, Grade::Mid, Grade::Mid]
        );
        assert_eq!(serde_json::to_string(&Grade::Elite).unwrap(), "\"elite\"");
    }
}
