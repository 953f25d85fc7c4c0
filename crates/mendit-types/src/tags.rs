//! Tone and relationship tags.
//!
//! Both tags select template banks in the content generator. Mediation
//! results keep the raw tag strings, so these enums are the *known* values;
//! anything else is resolved through the generator's fallback order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style of mediation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Funny,
    Compassionate,
    Direct,
    Formal,
}

impl Tone {
    /// Every known tone, in the order offered to users.
    pub const ALL: [Tone; 4] = [Tone::Funny, Tone::Compassionate, Tone::Direct, Tone::Formal];

    /// The tag string stored in mediation results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Funny => "funny",
            Tone::Compassionate => "compassionate",
            Tone::Direct => "direct",
            Tone::Formal => "formal",
        }
    }

    /// Human-facing label with its emoji.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Funny => "😄 Funny",
            Tone::Compassionate => "💗 Compassionate",
            Tone::Direct => "🎯 Direct",
            Tone::Formal => "📋 Formal",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Compassionate
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "funny" => Ok(Tone::Funny),
            "compassionate" => Ok(Tone::Compassionate),
            "direct" => Ok(Tone::Direct),
            "formal" => Ok(Tone::Formal),
            other => Err(format!("invalid tone: '{other}'")),
        }
    }
}

/// Kind of relationship the conflict happens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Couple,
    Friends,
    Family,
    Colleagues,
    Other,
}

impl Relationship {
    /// Every known relationship, in the order offered to users.
    pub const ALL: [Relationship; 5] = [
        Relationship::Couple,
        Relationship::Friends,
        Relationship::Family,
        Relationship::Colleagues,
        Relationship::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Couple => "couple",
            Relationship::Friends => "friends",
            Relationship::Family => "family",
            Relationship::Colleagues => "colleagues",
            Relationship::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Couple => "💕 Couple",
            Relationship::Friends => "👫 Friends",
            Relationship::Family => "👪 Family",
            Relationship::Colleagues => "🤝 Colleagues",
            Relationship::Other => "🤷 Other",
        }
    }
}

impl Default for Relationship {
    fn default() -> Self {
        Relationship::Other
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "couple" => Ok(Relationship::Couple),
            "friends" => Ok(Relationship::Friends),
            "family" => Ok(Relationship::Family),
            "colleagues" => Ok(Relationship::Colleagues),
            "other" => Ok(Relationship::Other),
            other => Err(format!("invalid relationship: '{other}'")),
        }
    }
}
