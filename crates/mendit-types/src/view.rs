//! Screens of the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The view currently presented to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Mediate,
    Healing,
    Archive,
    Quiz,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Mediate => write!(f, "mediate"),
            View::Healing => write!(f, "healing"),
            View::Archive => write!(f, "archive"),
            View::Quiz => write!(f, "quiz"),
        }
    }
}
