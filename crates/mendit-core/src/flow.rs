//! Application state: the current view, the mediation being worked on and
//! the user's conflict style, wired to the archive and style stores.

use std::sync::Arc;

use mendit_types::chat::LiveSession;
use mendit_types::config::StorageKeys;
use mendit_types::mediation::{HealingReflection, MediationResult};
use mendit_types::quiz::ConflictStyle;
use mendit_types::view::View;

use crate::archive::ArchiveStore;
use crate::navigation::{NavEvent, Navigator};
use crate::quiz::StyleStore;
use crate::storage::KvStore;

/// Drives a user through mediate → heal → archive, plus the quiz.
pub struct MendFlow<S: KvStore> {
    navigator: Navigator,
    current_mediation: Option<MediationResult>,
    current_session: Option<LiveSession>,
    conflict_style: Option<ConflictStyle>,
    archive: ArchiveStore<Arc<S>>,
    styles: StyleStore<Arc<S>>,
}

impl<S: KvStore> MendFlow<S> {
    /// Build the flow over `store`, restoring any saved conflict style.
    pub async fn load(store: Arc<S>, keys: &StorageKeys) -> Self {
        let archive = ArchiveStore::with_key(Arc::clone(&store), keys.archive_key.clone());
        let styles = StyleStore::with_key(store, keys.style_key.clone());
        let conflict_style = styles.load().await;

        Self {
            navigator: Navigator::new(),
            current_mediation: None,
            current_session: None,
            conflict_style,
            archive,
            styles,
        }
    }

    pub fn view(&self) -> View {
        self.navigator.current()
    }

    pub fn navigate(&mut self, view: View) -> View {
        self.navigator.apply(NavEvent::Navigate(view))
    }

    pub fn current_mediation(&self) -> Option<&MediationResult> {
        self.current_mediation.as_ref()
    }

    /// Snapshot of the live session the current mediation came from.
    pub fn current_session(&self) -> Option<&LiveSession> {
        self.current_session.as_ref()
    }

    pub fn conflict_style(&self) -> Option<&ConflictStyle> {
        self.conflict_style.as_ref()
    }

    /// Tone to preselect for a new mediation.
    pub fn default_tone(&self) -> Option<&str> {
        self.conflict_style
            .as_ref()
            .map(|style| style.recommended_tone.as_str())
    }

    pub fn archive(&self) -> &ArchiveStore<Arc<S>> {
        &self.archive
    }

    pub fn styles(&self) -> &StyleStore<Arc<S>> {
        &self.styles
    }

    /// A mediation finished; hold on to it and move to healing.
    pub fn complete_mediation(&mut self, result: MediationResult, session: Option<LiveSession>) {
        self.current_mediation = Some(result);
        if session.is_some() {
            self.current_session = session;
        }
        self.navigator.apply(NavEvent::MediationCompleted);
    }

    /// Attach the reflection to the current mediation, archive it and move
    /// to the archive view.
    ///
    /// With no current mediation this only navigates. Returns the archived
    /// result, if any.
    pub async fn complete_healing(
        &mut self,
        reflection: HealingReflection,
    ) -> Option<MediationResult> {
        let archived = match self.current_mediation.as_mut() {
            Some(mediation) => {
                mediation.heal(reflection);
                let healed = mediation.clone();
                self.archive.append(healed.clone()).await;
                Some(healed)
            }
            None => {
                tracing::debug!("healing completed without a current mediation");
                None
            }
        };

        self.current_session = None;
        self.navigator.apply(NavEvent::HealingCompleted);
        archived
    }

    /// Remember and persist the quiz result, then return to mediation.
    pub async fn complete_quiz(&mut self, style: ConflictStyle) {
        self.styles.save(&style).await;
        self.conflict_style = Some(style);
        self.navigator.apply(NavEvent::QuizCompleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healing::reflect;
    use crate::mediation::MediationGenerator;
    use crate::quiz::style_for;
    use crate::storage::MemoryKvStore;
    use mendit_types::person::Person;
    use mendit_types::quiz::QuizAnswer;

    async fn flow() -> MendFlow<MemoryKvStore> {
        MendFlow::load(Arc::new(MemoryKvStore::new()), &StorageKeys::default()).await
    }

    fn mediation() -> MediationResult {
        MediationGenerator::seeded(1).generate_result(
            vec![Person::new("Ana", "busy"), Person::new("Ben", "job")],
            "couple",
            "funny",
        )
    }

    #[tokio::test]
    async fn test_full_mediation_path() {
        let mut flow = flow().await;
        assert_eq!(flow.view(), View::Mediate);

        let result = mediation();
        let id = result.id.clone();
        flow.complete_mediation(result, None);
        assert_eq!(flow.view(), View::Healing);

        let archived = flow
            .complete_healing(reflect("We are okay", "Relieved").unwrap())
            .await
            .unwrap();
        assert_eq!(flow.view(), View::Archive);
        assert!(archived.is_healed());
        assert!(flow.current_mediation().unwrap().is_healed());

        let stored = flow.archive().list().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert!(stored[0].is_healed());
    }

    #[tokio::test]
    async fn test_healing_without_mediation_only_navigates() {
        let mut flow = flow().await;
        let archived = flow
            .complete_healing(reflect("nothing", "Hopeful").unwrap())
            .await;
        assert!(archived.is_none());
        assert_eq!(flow.view(), View::Archive);
        assert!(flow.archive().list().await.is_empty());
    }

    #[tokio::test]
    async fn test_quiz_saves_style_and_sets_default_tone() {
        let store = Arc::new(MemoryKvStore::new());
        let mut flow = MendFlow::load(Arc::clone(&store), &StorageKeys::default()).await;
        assert!(flow.default_tone().is_none());

        flow.navigate(View::Quiz);
        flow.complete_quiz(style_for(QuizAnswer::Collaborator)).await;
        assert_eq!(flow.view(), View::Mediate);
        assert_eq!(flow.default_tone(), Some("formal"));

        // A new flow over the same store restores the style.
        let reloaded = MendFlow::load(store, &StorageKeys::default()).await;
        assert_eq!(reloaded.default_tone(), Some("formal"));
    }

    #[tokio::test]
    async fn test_session_snapshot_kept_until_healed() {
        let mut flow = flow().await;
        let session = crate::session::live::joined_session("ABC123", "me", "Jordan").unwrap();
        let summary = crate::mediation::session_summary(&session);

        flow.complete_mediation(summary, Some(session));
        assert_eq!(flow.current_session().map(|s| s.id.as_str()), Some("ABC123"));

        flow.complete_healing(reflect("good talk", "Connected").unwrap()).await;
        assert!(flow.current_session().is_none());
    }
}
