//! Mediation results: the persisted record of one conflict-resolution attempt.
//!
//! A result is created when a mediation completes, mutated once to attach a
//! healing reflection, and then stored permanently in the archive.
//!
//! `isHealed` is never stored independently. It is recomputed from the
//! presence of `healingReflection` on every (de)serialization, so a stored
//! record can never claim to be healed without a reflection or vice versa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, Participant};
use crate::person::Person;

/// Journal entry and mood captured when a mediation is marked as healed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealingReflection {
    pub journal: String,
    pub mood: String,
    pub mood_color: String,
}

/// The persisted record of a written or live mediation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediationRecord", into = "MediationRecord")]
pub struct MediationResult {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Code of the live session this result summarizes, if any.
    pub session_id: Option<String>,
    pub persons: Option<Vec<Person>>,
    pub participants: Option<Vec<Participant>>,
    pub relationship: String,
    pub tone: String,
    pub summaries: Option<Vec<String>>,
    pub misunderstandings: Option<Vec<String>>,
    pub shared_themes: Option<Vec<String>>,
    pub peace_plan: Option<String>,
    pub chat_messages: Option<Vec<ChatMessage>>,
    healing_reflection: Option<HealingReflection>,
}

impl MediationResult {
    /// A bare result with no generated content and no reflection.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        relationship: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            session_id: None,
            persons: None,
            participants: None,
            relationship: relationship.into(),
            tone: tone.into(),
            summaries: None,
            misunderstandings: None,
            shared_themes: None,
            peace_plan: None,
            chat_messages: None,
            healing_reflection: None,
        }
    }

    /// Attach the healing reflection, marking the mediation as healed.
    pub fn heal(&mut self, reflection: HealingReflection) {
        self.healing_reflection = Some(reflection);
    }

    /// Builder-style variant of [`heal`](Self::heal).
    pub fn healed(mut self, reflection: HealingReflection) -> Self {
        self.heal(reflection);
        self
    }

    pub fn healing_reflection(&self) -> Option<&HealingReflection> {
        self.healing_reflection.as_ref()
    }

    pub fn is_healed(&self) -> bool {
        self.healing_reflection.is_some()
    }

    /// Names of everyone involved, from either the written persons or the
    /// live participants.
    pub fn people_names(&self) -> Vec<&str> {
        let persons = self
            .persons
            .iter()
            .flatten()
            .map(|p| p.name.as_str());
        let participants = self
            .participants
            .iter()
            .flatten()
            .map(|p| p.name.as_str());
        persons.chain(participants).collect()
    }

    pub fn people_count(&self) -> usize {
        self.participants
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.persons.as_ref().map(Vec::len))
            .unwrap_or(0)
    }
}

/// Wire shape of a mediation result (camelCase, explicit `isHealed`).
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediationRecord {
    id: String,
    date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    persons: Option<Vec<Person>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    participants: Option<Vec<Participant>>,
    relationship: String,
    tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summaries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    misunderstandings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shared_themes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    peace_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chat_messages: Option<Vec<ChatMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    healing_reflection: Option<HealingReflection>,
    #[serde(default)]
    is_healed: bool,
}

impl From<MediationRecord> for MediationResult {
    fn from(record: MediationRecord) -> Self {
        // `is_healed` on the wire is ignored; the reflection is authoritative.
        Self {
            id: record.id,
            date: record.date,
            session_id: record.session_id,
            persons: record.persons,
            participants: record.participants,
            relationship: record.relationship,
            tone: record.tone,
            summaries: record.summaries,
            misunderstandings: record.misunderstandings,
            shared_themes: record.shared_themes,
            peace_plan: record.peace_plan,
            chat_messages: record.chat_messages,
            healing_reflection: record.healing_reflection,
        }
    }
}

impl From<MediationResult> for MediationRecord {
    fn from(result: MediationResult) -> Self {
        let is_healed = result.is_healed();
        Self {
            id: result.id,
            date: result.date,
            session_id: result.session_id,
            persons: result.persons,
            participants: result.participants,
            relationship: result.relationship,
            tone: result.tone,
            summaries: result.summaries,
            misunderstandings: result.misunderstandings,
            shared_themes: result.shared_themes,
            peace_plan: result.peace_plan,
            chat_messages: result.chat_messages,
            healing_reflection: result.healing_reflection,
            is_healed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reflection() -> HealingReflection {
        HealingReflection {
            journal: "I learned to listen".to_string(),
            mood: "Peaceful".to_string(),
            mood_color: "from-green-400 to-blue-400".to_string(),
        }
    }

    fn result() -> MediationResult {
        let mut r = MediationResult::new("m-1", Utc::now(), "couple", "funny");
        r.persons = Some(vec![Person::new("Ana", "busy"), Person::new("Ben", "work")]);
        r.peace_plan = Some("Plan".to_string());
        r
    }

    #[test]
    fn test_new_result_is_not_healed() {
        let r = result();
        assert!(!r.is_healed());
        assert!(r.healing_reflection().is_none());
    }

    #[test]
    fn test_heal_sets_flag() {
        let r = result().healed(reflection());
        assert!(r.is_healed());
        assert_eq!(r.healing_reflection().unwrap().mood, "Peaceful");
    }

    #[test]
    fn test_serialized_is_healed_tracks_reflection() {
        let json = serde_json::to_value(result()).unwrap();
        assert_eq!(json["isHealed"], false);
        assert!(json.get("healingReflection").is_none());

        let json = serde_json::to_value(result().healed(reflection())).unwrap();
        assert_eq!(json["isHealed"], true);
        assert_eq!(json["healingReflection"]["moodColor"], "from-green-400 to-blue-400");
    }

    #[test]
    fn test_deserialize_ignores_inconsistent_flag() {
        let value = json!({
            "id": "1700000000000",
            "date": "2024-03-01T10:00:00.000Z",
            "relationship": "friends",
            "tone": "direct",
            "isHealed": true
        });
        let r: MediationResult = serde_json::from_value(value).unwrap();
        assert!(!r.is_healed());
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let value = json!({
            "id": "1700000000000",
            "date": "2024-03-01T10:00:00.000Z",
            "persons": [{"name": "Ana", "statement": "money"}],
            "relationship": "couple",
            "tone": "formal",
            "summaries": ["Ana has outlined their position on financial priorities."],
            "misunderstandings": ["a", "b", "c"],
            "sharedThemes": ["x", "y", "z"],
            "peacePlan": "plan",
            "healingReflection": {"journal": "ok", "mood": "Hopeful", "moodColor": "c"}
        });
        let r: MediationResult = serde_json::from_value(value).unwrap();
        assert!(r.is_healed());
        assert_eq!(r.shared_themes.as_ref().unwrap().len(), 3);
        assert_eq!(r.people_names(), vec!["Ana"]);
    }

    #[test]
    fn test_serde_roundtrip_preserves_fields() {
        let original = result().healed(reflection());
        let json = serde_json::to_string(&original).unwrap();
        let parsed: MediationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_people_count_prefers_participants() {
        let mut r = result();
        assert_eq!(r.people_count(), 2);
        r.participants = Some(vec![Participant::new("p", "Cy", "c")]);
        assert_eq!(r.people_count(), 1);
        assert_eq!(r.people_names(), vec!["Ana", "Ben", "Cy"]);
    }
}
