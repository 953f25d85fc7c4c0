//! Live-session chat types for MendIt.
//!
//! A `LiveSession` is an in-memory, simulated multi-participant chat. It is
//! never persisted on its own; its message log is copied into the
//! `MediationResult` produced when the session is resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Display name used for AI and system messages.
pub const MEDIATOR_NAME: &str = "MendIt AI";

/// User id stamped on system messages.
pub const SYSTEM_USER_ID: &str = "system";

/// User id stamped on AI messages.
pub const AI_USER_ID: &str = "ai";

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Ai,
    System,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::User => write!(f, "user"),
            MessageKind::Ai => write!(f, "ai"),
            MessageKind::System => write!(f, "system"),
        }
    }
}

/// A single message in a live session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_color: Option<String>,
}

impl ChatMessage {
    /// A message typed by a participant.
    pub fn user(participant: &Participant, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: participant.id.clone(),
            user_name: participant.name.clone(),
            message: message.into(),
            timestamp: Utc::now(),
            kind: MessageKind::User,
            user_color: Some(participant.color.clone()),
        }
    }

    /// A message from the simulated mediator.
    pub fn ai(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: AI_USER_ID.to_string(),
            user_name: MEDIATOR_NAME.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            kind: MessageKind::Ai,
            user_color: None,
        }
    }

    /// A session lifecycle notice (welcome, joins).
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: SYSTEM_USER_ID.to_string(),
            user_name: MEDIATOR_NAME.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            kind: MessageKind::System,
            user_color: None,
        }
    }

    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}

/// Someone taking part in a live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub is_typing: bool,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            is_typing: false,
        }
    }
}

/// Lifecycle status of a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Active,
    Resolved,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Waiting => write!(f, "waiting"),
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(SessionStatus::Waiting),
            "active" => Ok(SessionStatus::Active),
            "resolved" => Ok(SessionStatus::Resolved),
            other => Err(format!("invalid session status: '{other}'")),
        }
    }
}

/// A simulated live mediation chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSession {
    /// Six-character uppercase session code.
    pub id: String,
    pub participants: Vec<Participant>,
    pub messages: Vec<ChatMessage>,
    pub relationship: String,
    pub tone: String,
    pub status: SessionStatus,
    /// Set once the clarifying questions have all been posted.
    pub ai_questions_asked: bool,
    pub created_at: DateTime<Utc>,
}

impl LiveSession {
    pub fn participant(&self, user_id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == user_id)
    }

    pub fn participant_mut(&mut self, user_id: &str) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == user_id)
    }

    /// Number of messages typed by participants (AI and system excluded).
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    pub fn participant_names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }

    /// Names of participants currently flagged as typing.
    pub fn typing_names(&self) -> Vec<&str> {
        self.participants
            .iter()
            .filter(|p| p.is_typing)
            .map(|p| p.name.as_str())
            .collect()
    }
}
