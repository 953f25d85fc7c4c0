//! Written-mediation result generation and mediator replies.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use mendit_types::chat::ChatMessage;
use mendit_types::mediation::MediationResult;
use mendit_types::person::Person;

use super::templates;
use super::topic::conflict_topic;

/// Reply used before any participant has said anything.
pub const OPENING_PROMPT: &str =
    "I'm here to help facilitate this conversation. Please share your thoughts.";

/// Number of misunderstandings / shared themes kept per result.
const THEME_LIMIT: usize = 3;

/// Produces mediation content from template banks.
///
/// Generic over the random source so tests can seed it.
#[derive(Debug, Clone)]
pub struct MediationGenerator<R: Rng = StdRng> {
    rng: R,
}

impl MediationGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator with a fixed seed (reproducible output).
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MediationGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the random source (shared with session simulation).
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Conflict topic for one statement; see [`conflict_topic`].
    pub fn conflict_topic(&mut self, statement: &str) -> &'static str {
        conflict_topic(statement, &mut self.rng)
    }

    /// Build a mediation result for a written conflict description.
    ///
    /// Never fails: unknown tones and relationships fall back to the
    /// compassionate / `other` banks.
    #[tracing::instrument(name = "generate_mediation", skip(self, persons), fields(people = persons.len()))]
    pub fn generate_result(
        &mut self,
        persons: Vec<Person>,
        relationship: &str,
        tone: &str,
    ) -> MediationResult {
        let openers = templates::summary_templates(tone);
        let summaries = persons
            .iter()
            .enumerate()
            .map(|(index, person)| {
                let opener = openers[index % openers.len()];
                let topic = self.conflict_topic(&person.statement);
                format!("{} {} {}.", person.display_name(index), opener, topic)
            })
            .collect();

        let misunderstandings = take_themes(templates::misunderstandings(relationship));
        let shared_themes = take_themes(templates::shared_themes(relationship));
        let peace_plan = templates::peace_plan(tone, relationship);

        let mut result = MediationResult::new(
            Uuid::now_v7().to_string(),
            Utc::now(),
            relationship,
            tone,
        );
        result.persons = Some(persons);
        result.summaries = Some(summaries);
        result.misunderstandings = Some(misunderstandings);
        result.shared_themes = Some(shared_themes);
        result.peace_plan = Some(peace_plan.to_string());

        tracing::debug!(id = %result.id, "Mediation result generated");
        result
    }

    /// Mediator reply for a live session.
    ///
    /// Only the presence of user messages is considered; their content does
    /// not influence the reply.
    pub fn ai_response(&mut self, messages: &[ChatMessage], tone: &str) -> String {
        if !messages.iter().any(ChatMessage::is_user) {
            return OPENING_PROMPT.to_string();
        }

        templates::ai_responses(tone)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(OPENING_PROMPT)
            .to_string()
    }
}

fn take_themes(bank: &[&str]) -> Vec<String> {
    bank.iter().take(THEME_LIMIT).map(|s| s.to_string()).collect()
}
