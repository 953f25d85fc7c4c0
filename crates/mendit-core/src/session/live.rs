//! Plain state transitions on a `LiveSession`. No timers, no IO.

use chrono::Utc;
use rand::Rng;

use mendit_types::chat::{ChatMessage, LiveSession, Participant, SessionStatus};
use mendit_types::error::SessionError;
use mendit_types::tags::{Relationship, Tone};

/// Colors handed to participants in join order.
pub const USER_COLORS: [&str; 6] = [
    "from-purple-400 to-pink-400",
    "from-blue-400 to-indigo-400",
    "from-green-400 to-teal-400",
    "from-orange-400 to-red-400",
    "from-pink-400 to-rose-400",
    "from-indigo-400 to-purple-400",
];

/// Questions the mediator asks once a second participant is present.
pub const CLARIFYING_QUESTIONS: [&str; 2] = [
    "Before we begin, I'd like each of you to share: What outcome are you hoping for from this conversation?",
    "And secondly: What's one thing you'd like the other person to understand about your perspective?",
];

pub const WAITING_MESSAGE: &str = "Welcome to your mediation session! I'm here to help facilitate a peaceful conversation. Waiting for other participants to join...";

/// The participant already waiting in a joined session.
pub const EXISTING_PARTICIPANT_ID: &str = "existing-user";
pub const EXISTING_PARTICIPANT_NAME: &str = "Alex";

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Six random uppercase base-36 characters.
pub fn session_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

fn color(index: usize) -> &'static str {
    USER_COLORS[index % USER_COLORS.len()]
}

fn require(value: &str, field: &'static str) -> Result<(), SessionError> {
    if value.trim().is_empty() {
        Err(SessionError::MissingField(field))
    } else {
        Ok(())
    }
}

/// A fresh session hosted by `host_id`, waiting for others to join.
pub fn hosted_session(
    code: String,
    host_id: &str,
    host_name: &str,
    relationship: &str,
    tone: &str,
) -> Result<LiveSession, SessionError> {
    require(host_name, "name")?;
    require(relationship, "relationship")?;
    require(tone, "tone")?;

    Ok(LiveSession {
        id: code,
        participants: vec![Participant::new(host_id, host_name.trim(), color(0))],
        messages: vec![ChatMessage::system(WAITING_MESSAGE)],
        relationship: relationship.trim().to_string(),
        tone: tone.trim().to_string(),
        status: SessionStatus::Waiting,
        ai_questions_asked: false,
        created_at: Utc::now(),
    })
}

/// The session seen after joining `code`.
///
/// There is no shared backend: the joined session is simulated with one
/// participant already present and fixed friends/compassionate tags.
pub fn joined_session(code: &str, user_id: &str, name: &str) -> Result<LiveSession, SessionError> {
    require(name, "name")?;
    require(code, "session code")?;

    let name = name.trim();
    Ok(LiveSession {
        id: code.trim().to_uppercase(),
        participants: vec![
            Participant::new(EXISTING_PARTICIPANT_ID, EXISTING_PARTICIPANT_NAME, color(0)),
            Participant::new(user_id, name, color(1)),
        ],
        messages: vec![ChatMessage::system(format!(
            "Welcome {name}! {EXISTING_PARTICIPANT_NAME} is already here. Let's begin our mediation session."
        ))],
        relationship: Relationship::Friends.as_str().to_string(),
        tone: Tone::Compassionate.as_str().to_string(),
        status: SessionStatus::Active,
        ai_questions_asked: false,
        created_at: Utc::now(),
    })
}

fn ensure_open(session: &LiveSession) -> Result<(), SessionError> {
    if session.status == SessionStatus::Resolved {
        Err(SessionError::AlreadyResolved(session.id.clone()))
    } else {
        Ok(())
    }
}

/// Append a participant's message. Blank text is ignored (`Ok(None)`).
///
/// Sending also clears the sender's typing flag.
pub fn post_user_message(
    session: &mut LiveSession,
    user_id: &str,
    text: &str,
) -> Result<Option<ChatMessage>, SessionError> {
    ensure_open(session)?;
    let participant = session
        .participant_mut(user_id)
        .ok_or_else(|| SessionError::UnknownParticipant(user_id.to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    participant.is_typing = false;
    let message = ChatMessage::user(participant, text);
    session.messages.push(message.clone());
    Ok(Some(message))
}

/// Append a mediator message.
pub fn post_ai_message(session: &mut LiveSession, text: &str) -> Result<ChatMessage, SessionError> {
    ensure_open(session)?;
    let message = ChatMessage::ai(text);
    session.messages.push(message.clone());
    Ok(message)
}

/// Set a participant's typing flag. Returns whether the flag changed.
pub fn set_typing(
    session: &mut LiveSession,
    user_id: &str,
    is_typing: bool,
) -> Result<bool, SessionError> {
    let participant = session
        .participant_mut(user_id)
        .ok_or_else(|| SessionError::UnknownParticipant(user_id.to_string()))?;
    let changed = participant.is_typing != is_typing;
    participant.is_typing = is_typing;
    Ok(changed)
}

/// Mark the session resolved.
pub fn close(session: &mut LiveSession) -> Result<(), SessionError> {
    ensure_open(session)?;
    session.status = SessionStatus::Resolved;
    for participant in &mut session.participants {
        participant.is_typing = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mendit_types::chat::{MessageKind, SYSTEM_USER_ID};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_session_code_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let code = session_code(&mut rng);
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_hosted_session() {
        let session = hosted_session("ABC123".into(), "host", "Ana", "couple", "direct").unwrap();
        assert_eq!(session.status, SessionStatus::Waiting);
        assert_eq!(session.participants.len(), 1);
        assert_eq!(session.participants[0].color, USER_COLORS[0]);
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].kind, MessageKind::System);
        assert_eq!(session.messages[0].user_id, SYSTEM_USER_ID);
        assert_eq!(session.messages[0].message, WAITING_MESSAGE);
        assert!(!session.ai_questions_asked);
    }

    #[test]
    fn test_hosted_session_requires_fields() {
        assert_eq!(
            hosted_session("C".into(), "h", " ", "couple", "direct").unwrap_err(),
            SessionError::MissingField("name")
        );
        assert_eq!(
            hosted_session("C".into(), "h", "Ana", "", "direct").unwrap_err(),
            SessionError::MissingField("relationship")
        );
        assert_eq!(
            hosted_session("C".into(), "h", "Ana", "couple", "").unwrap_err(),
            SessionError::MissingField("tone")
        );
    }

    #[test]
    fn test_joined_session() {
        let session = joined_session("abc123", "me", "Jordan").unwrap();
        assert_eq!(session.id, "ABC123");
        assert_eq!(session.status, SessionStatus::Active);
        assert_eq!(session.participant_names(), vec!["Alex", "Jordan"]);
        assert_eq!(session.participants[1].color, USER_COLORS[1]);
        assert_eq!(session.relationship, "friends");
        assert_eq!(session.tone, "compassionate");
        assert_eq!(
            session.messages[0].message,
            "Welcome Jordan! Alex is already here. Let's begin our mediation session."
        );
    }

    #[test]
    fn test_joined_session_requires_code_and_name() {
        assert!(joined_session("", "me", "Jordan").is_err());
        assert!(joined_session("ABC", "me", "").is_err());
    }

    #[test]
    fn test_post_user_message_trims_and_colors() {
        let mut session = joined_session("ABC123", "me", "Jordan").unwrap();
        set_typing(&mut session, "me", true).unwrap();

        let message = post_user_message(&mut session, "me", "  hello there  ").unwrap().unwrap();
        assert_eq!(message.message, "hello there");
        assert_eq!(message.user_color.as_deref(), Some(USER_COLORS[1]));
        assert_eq!(session.user_message_count(), 1);
        assert!(session.typing_names().is_empty());

        assert_eq!(post_user_message(&mut session, "me", "   ").unwrap(), None);
        assert_eq!(session.messages.len(), 2);
    }

    #[test]
    fn test_unknown_participant() {
        let mut session = joined_session("ABC123", "me", "Jordan").unwrap();
        assert_eq!(
            post_user_message(&mut session, "ghost", "hi").unwrap_err(),
            SessionError::UnknownParticipant("ghost".into())
        );
        assert!(set_typing(&mut session, "ghost", true).is_err());
    }

    #[test]
    fn test_close_blocks_new_messages() {
        let mut session = joined_session("ABC123", "me", "Jordan").unwrap();
        close(&mut session).unwrap();
        assert_eq!(session.status, SessionStatus::Resolved);
        assert!(matches!(close(&mut session), Err(SessionError::AlreadyResolved(_))));
        assert!(post_user_message(&mut session, "me", "late").is_err());
        assert!(post_ai_message(&mut session, "late").is_err());
    }

    #[test]
    fn test_set_typing_reports_change() {
        let mut session = joined_session("ABC123", "me", "Jordan").unwrap();
        assert!(set_typing(&mut session, "me", true).unwrap());
        assert!(!set_typing(&mut session, "me", true).unwrap());
        assert_eq!(session.typing_names(), vec!["Jordan"]);
    }
}
