//! Healing reflections: the journal and mood captured when a mediation is
//! marked as healed.

use std::time::Duration;

use mendit_types::error::HealingError;
use mendit_types::mediation::{HealingReflection, MediationResult};

/// Pause front ends show between submitting a reflection and moving on.
pub const HEALING_DELAY: Duration = Duration::from_millis(1500);

/// A selectable mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const MOOD_OPTIONS: [MoodOption; 6] = [
    MoodOption { emoji: "😊", label: "Peaceful", color: "from-green-400 to-blue-400" },
    MoodOption { emoji: "🥰", label: "Grateful", color: "from-pink-400 to-purple-400" },
    MoodOption { emoji: "😌", label: "Relieved", color: "from-blue-400 to-indigo-400" },
    MoodOption { emoji: "💪", label: "Empowered", color: "from-orange-400 to-red-400" },
    MoodOption { emoji: "🌟", label: "Hopeful", color: "from-yellow-400 to-orange-400" },
    MoodOption { emoji: "🤗", label: "Connected", color: "from-purple-400 to-pink-400" },
];

/// Look up a mood by label (case-insensitive).
pub fn mood(label: &str) -> Option<&'static MoodOption> {
    let label = label.trim();
    MOOD_OPTIONS
        .iter()
        .find(|m| m.label.eq_ignore_ascii_case(label))
}

/// Build a reflection from a journal entry and a mood label.
///
/// The journal must contain something other than whitespace; it is stored
/// as written.
pub fn reflect(journal: &str, mood_label: &str) -> Result<HealingReflection, HealingError> {
    if journal.trim().is_empty() {
        return Err(HealingError::EmptyJournal);
    }
    let mood = mood(mood_label).ok_or_else(|| HealingError::UnknownMood(mood_label.to_string()))?;

    Ok(HealingReflection {
        journal: journal.to_string(),
        mood: mood.label.to_string(),
        mood_color: mood.color.to_string(),
    })
}

/// Validate the reflection and attach it to `result` in one step.
pub fn heal(
    result: &mut MediationResult,
    journal: &str,
    mood_label: &str,
) -> Result<(), HealingError> {
    let reflection = reflect(journal, mood_label)?;
    tracing::info!(id = %result.id, mood = %reflection.mood, "Mediation healed");
    result.heal(reflection);
    Ok(())
}
