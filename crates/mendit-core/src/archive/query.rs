//! Searching, filtering and summarizing the archive for display.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use mendit_types::mediation::MediationResult;

/// Facet filter applied to archived mediations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArchiveFilter {
    #[default]
    All,
    Healed,
    Unhealed,
    /// Only mediations with this relationship tag.
    Relationship(String),
}

impl ArchiveFilter {
    pub fn matches(&self, result: &MediationResult) -> bool {
        match self {
            ArchiveFilter::All => true,
            ArchiveFilter::Healed => result.is_healed(),
            ArchiveFilter::Unhealed => !result.is_healed(),
            ArchiveFilter::Relationship(tag) => result.relationship == *tag,
        }
    }
}

impl fmt::Display for ArchiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFilter::All => write!(f, "all"),
            ArchiveFilter::Healed => write!(f, "healed"),
            ArchiveFilter::Unhealed => write!(f, "unhealed"),
            ArchiveFilter::Relationship(tag) => write!(f, "{tag}"),
        }
    }
}

/// Parses `all`, `healed`, `unhealed`; anything else is a relationship tag.
impl FromStr for ArchiveFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "" => Err("empty archive filter".to_string()),
            "all" => Ok(ArchiveFilter::All),
            "healed" => Ok(ArchiveFilter::Healed),
            "unhealed" => Ok(ArchiveFilter::Unhealed),
            _ => Ok(ArchiveFilter::Relationship(value)),
        }
    }
}

/// Search text plus facet filter.
#[derive(Debug, Clone, Default)]
pub struct ArchiveQuery {
    pub search: String,
    pub filter: ArchiveFilter,
}

impl ArchiveQuery {
    pub fn new(search: impl Into<String>, filter: ArchiveFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }

    /// Case-insensitive match on the peace plan or anyone's name.
    /// An empty search matches everything.
    pub fn matches_search(&self, result: &MediationResult) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let in_plan = result
            .peace_plan
            .as_deref()
            .is_some_and(|plan| plan.to_lowercase().contains(&needle));

        in_plan
            || result
                .people_names()
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, result: &MediationResult) -> bool {
        self.filter.matches(result) && self.matches_search(result)
    }

    /// Matching results, newest first.
    pub fn apply<'a>(&self, archive: &'a [MediationResult]) -> Vec<&'a MediationResult> {
        let mut hits: Vec<&MediationResult> =
            archive.iter().filter(|r| self.matches(r)).collect();
        hits.sort_by(|a, b| b.date.cmp(&a.date));
        hits
    }
}

/// Counts shown in the archive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub total: usize,
    pub healed: usize,
}

impl ArchiveStats {
    pub fn from_results(archive: &[MediationResult]) -> Self {
        Self {
            total: archive.len(),
            healed: archive.iter().filter(|r| r.is_healed()).count(),
        }
    }

    pub fn unhealed(&self) -> usize {
        self.total - self.healed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mendit_types::chat::Participant;
    use mendit_types::mediation::HealingReflection;
    use mendit_types::person::Person;

    fn reflection() -> HealingReflection {
        HealingReflection {
            journal: "better now".into(),
            mood: "Hopeful".into(),
            mood_color: "from-yellow-400 to-orange-400".into(),
        }
    }

    fn archive() -> Vec<MediationResult> {
        let mut written = MediationResult::new(
            "w1",
            Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            "couple",
            "funny",
        );
        written.persons = Some(vec![Person::new("Maria", "x"), Person::new("Tom", "y")]);
        written.peace_plan = Some("🎭 The Comedy Peace Plan".into());

        let mut live = MediationResult::new(
            "l1",
            Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
            "friends",
            "compassionate",
        );
        live.participants = Some(vec![
            Participant::new("existing-user", "Alex", "c1"),
            Participant::new("u2", "Jordan", "c2"),
        ]);
        let live = live.healed(reflection());

        let mut family = MediationResult::new(
            "f1",
            Utc.with_ymd_and_hms(2024, 2, 5, 9, 0, 0).unwrap(),
            "family",
            "formal",
        );
        family.persons = Some(vec![Person::new("Grandma", "z")]);
        family.peace_plan = Some("📑 The Family Governance Structure".into());

        vec![written, live, family]
    }

    fn ids(hits: &[&MediationResult]) -> Vec<String> {
        hits.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_sorts_newest_first() {
        let archive = archive();
        let hits = ArchiveQuery::default().apply(&archive);
        assert_eq!(ids(&hits), vec!["l1", "f1", "w1"]);
    }

    #[test]
    fn test_search_person_name_case_insensitive() {
        let archive = archive();
        let hits = ArchiveQuery::new("maRIA", ArchiveFilter::All).apply(&archive);
        assert_eq!(ids(&hits), vec!["w1"]);
    }

    #[test]
    fn test_search_participant_name() {
        let archive = archive();
        let hits = ArchiveQuery::new("jordan", ArchiveFilter::All).apply(&archive);
        assert_eq!(ids(&hits), vec!["l1"]);
    }

    #[test]
    fn test_search_peace_plan_text() {
        let archive = archive();
        let hits = ArchiveQuery::new("governance", ArchiveFilter::All).apply(&archive);
        assert_eq!(ids(&hits), vec!["f1"]);
    }

    #[test]
    fn test_healed_filters() {
        let archive = archive();
        let healed = ArchiveQuery::new("", ArchiveFilter::Healed).apply(&archive);
        assert_eq!(ids(&healed), vec!["l1"]);
        let unhealed = ArchiveQuery::new("", ArchiveFilter::Unhealed).apply(&archive);
        assert_eq!(ids(&unhealed), vec!["f1", "w1"]);
    }

    #[test]
    fn test_relationship_filter_with_search() {
        let archive = archive();
        let filter: ArchiveFilter = "Couple".parse().unwrap();
        assert_eq!(filter, ArchiveFilter::Relationship("couple".into()));
        assert_eq!(ids(&ArchiveQuery::new("", filter.clone()).apply(&archive)), vec!["w1"]);
        assert!(ArchiveQuery::new("grandma", filter).apply(&archive).is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<ArchiveFilter>().unwrap(), ArchiveFilter::All);
        assert_eq!(" healed ".parse::<ArchiveFilter>().unwrap(), ArchiveFilter::Healed);
        assert!("  ".parse::<ArchiveFilter>().is_err());
    }

    #[test]
    fn test_stats() {
        let stats = ArchiveStats::from_results(&archive());
        assert_eq!(stats, ArchiveStats { total: 3, healed: 1 });
        assert_eq!(stats.unhealed(), 2);
        assert_eq!(ArchiveStats::from_results(&[]).total, 0);
    }

    #[test]
    fn test_search_finds_live_session_summary() {
        let session = crate::session::live::joined_session("ABC123", "me", "Jordan").unwrap();
        let result = crate::mediation::session_summary(&session);
        let archive = vec![result];

        let query = ArchiveQuery::new("live mediation session completed", ArchiveFilter::All);
        assert_eq!(query.apply(&archive).len(), 1);

        let query = ArchiveQuery::new("FRIENDS RELATIONSHIP", ArchiveFilter::Relationship("friends".into()));
        assert_eq!(query.apply(&archive).len(), 1);
    }
}
