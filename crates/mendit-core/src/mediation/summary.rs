use chrono::Utc;
use uuid::Uuid;

use mendit_types::chat::LiveSession;
use mendit_types::mediation::MediationResult;

/// Turn a finished live session into an archivable mediation result.
///
/// The session paragraph is stored as the peace plan, so archive search
/// over plan text finds live sessions too.
pub fn session_summary(session: &LiveSession) -> MediationResult {
    let names = session.participant_names().join(" and ");
    let exchanges = session.user_message_count();

    let paragraph = format!(
        "Live mediation session completed between {names}. Through open dialogue and AI \
         facilitation, both parties engaged in meaningful conversation about their {} \
         relationship. The session included {exchanges} exchanges and concluded with mutual \
         understanding and commitment to moving forward positively.",
        session.relationship
    );

    let mut result = MediationResult::new(
        Uuid::now_v7().to_string(),
        Utc::now(),
        session.relationship.clone(),
        session.tone.clone(),
    );
    result.session_id = Some(session.id.clone());
    result.participants = Some(session.participants.clone());
    result.peace_plan = Some(paragraph);
    result.chat_messages = Some(session.messages.clone());

    tracing::debug!(session = %session.id, exchanges, "Live session summarized");
    result
}
