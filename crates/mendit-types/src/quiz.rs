//! Conflict-style quiz types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The style an individual quiz option points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizAnswer {
    Direct,
    Harmonizer,
    Collaborator,
    Avoider,
}

impl QuizAnswer {
    pub const ALL: [QuizAnswer; 4] = [
        QuizAnswer::Direct,
        QuizAnswer::Harmonizer,
        QuizAnswer::Collaborator,
        QuizAnswer::Avoider,
    ];
}

impl fmt::Display for QuizAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizAnswer::Direct => write!(f, "direct"),
            QuizAnswer::Harmonizer => write!(f, "harmonizer"),
            QuizAnswer::Collaborator => write!(f, "collaborator"),
            QuizAnswer::Avoider => write!(f, "avoider"),
        }
    }
}

impl FromStr for QuizAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(QuizAnswer::Direct),
            "harmonizer" => Ok(QuizAnswer::Harmonizer),
            "collaborator" => Ok(QuizAnswer::Collaborator),
            "avoider" => Ok(QuizAnswer::Avoider),
            other => Err(format!("invalid quiz answer: '{other}'")),
        }
    }
}

/// A user's conflict style, derived once from quiz answers and persisted.
///
/// `recommended_tone` is used as the default tone for new mediations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictStyle {
    pub style: String,
    pub description: String,
    pub recommended_tone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_answer_parse() {
        assert_eq!("Direct".parse::<QuizAnswer>().unwrap(), QuizAnswer::Direct);
        assert!("yeller".parse::<QuizAnswer>().is_err());
    }

    #[test]
    fn test_conflict_style_camel_case() {
        let style = ConflictStyle {
            style: "The Harmonizer".to_string(),
            description: "d".to_string(),
            recommended_tone: "compassionate".to_string(),
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["recommendedTone"], "compassionate");
        let parsed: ConflictStyle = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, style);
    }
}
