//! Live session host: owns one session's state and its scheduled mediator
//! activity.
//!
//! The session lives behind an `Arc<Mutex<_>>`. Scheduled tasks lock it
//! briefly to append a message and never hold the lock across an await.
//! Every task is registered with the host's [`SessionScheduler`], so
//! resolving or dropping the host cancels everything still pending.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::sync::broadcast;
use uuid::Uuid;

use mendit_types::chat::{ChatMessage, LiveSession, SessionStatus};
use mendit_types::config::SessionTimings;
use mendit_types::error::SessionError;
use mendit_types::mediation::MediationResult;

use super::events::{SessionEvent, SessionEventBus};
use super::live::{self, CLARIFYING_QUESTIONS};
use super::scheduler::SessionScheduler;
use crate::mediation::{MediationGenerator, session_summary};

/// Dependencies for a host. `Default` uses stock timings and an
/// entropy-seeded generator.
pub struct HostOptions {
    pub timings: SessionTimings,
    pub generator: MediationGenerator,
    pub events: SessionEventBus,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            timings: SessionTimings::default(),
            generator: MediationGenerator::from_entropy(),
            events: SessionEventBus::default(),
        }
    }
}

/// One simulated live mediation, seen from the local user's side.
#[derive(Debug)]
pub struct SessionHost {
    state: Arc<Mutex<LiveSession>>,
    user_id: String,
    timings: SessionTimings,
    generator: Arc<Mutex<MediationGenerator>>,
    scheduler: SessionScheduler,
    events: SessionEventBus,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn typing_key(user_id: &str) -> String {
    format!("typing:{user_id}")
}

impl SessionHost {
    fn from_session(
        session: LiveSession,
        user_id: String,
        options: HostOptions,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(session)),
            user_id,
            timings: options.timings,
            generator: Arc::new(Mutex::new(options.generator)),
            scheduler: SessionScheduler::new(),
            events: options.events,
        }
    }

    /// Start a new session hosted by `host_name`.
    pub fn create(
        host_name: &str,
        relationship: &str,
        tone: &str,
        mut options: HostOptions,
    ) -> Result<Self, SessionError> {
        let user_id = Uuid::new_v4().to_string();
        let code = live::session_code(options.generator.rng_mut());
        let session = live::hosted_session(code, &user_id, host_name, relationship, tone)?;

        tracing::info!(session = %session.id, "Live session created");
        Ok(Self::from_session(session, user_id, options))
    }

    /// Join the session `code` as `name` and schedule the clarifying
    /// questions. Must be called within a tokio runtime.
    pub fn join(code: &str, name: &str, options: HostOptions) -> Result<Self, SessionError> {
        let user_id = Uuid::new_v4().to_string();
        let session = live::joined_session(code, &user_id, name)?;

        tracing::info!(session = %session.id, "Joined live session");
        let host = Self::from_session(session, user_id, options);
        host.ask_clarifying_questions();
        Ok(host)
    }

    /// Id of the local participant.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn code(&self) -> String {
        lock(&self.state).id.clone()
    }

    /// Copy of the current session state.
    pub fn snapshot(&self) -> LiveSession {
        lock(&self.state).clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn timings(&self) -> &SessionTimings {
        &self.timings
    }

    /// Number of scheduled mediator actions still waiting.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Schedule the two clarifying questions after the join delay.
    /// Does nothing once they have been asked.
    pub fn ask_clarifying_questions(&self) {
        if lock(&self.state).ai_questions_asked {
            return;
        }

        let last = CLARIFYING_QUESTIONS.len() - 1;
        for (index, question) in CLARIFYING_QUESTIONS.into_iter().enumerate() {
            // Timings come from user config; saturate instead of overflowing.
            let delay = Duration::from_millis(
                self.timings.join_delay_ms.saturating_add(
                    (index as u64 + 1).saturating_mul(self.timings.question_interval_ms),
                ),
            );
            let state = Arc::clone(&self.state);
            let events = self.events.clone();

            self.scheduler.schedule(delay, async move {
                let mut session = lock(&state);
                match live::post_ai_message(&mut session, question) {
                    Ok(message) => {
                        if index == last {
                            session.ai_questions_asked = true;
                        }
                        events.publish(SessionEvent::MessagePosted {
                            session_id: session.id.clone(),
                            message,
                        });
                    }
                    Err(err) => tracing::debug!(error = %err, "clarifying question skipped"),
                }
            });
        }
    }

    /// Send a message as the local participant.
    pub fn send(&self, text: &str) -> Result<Option<ChatMessage>, SessionError> {
        let user_id = self.user_id.clone();
        self.send_as(&user_id, text)
    }

    /// Send a message as any participant of the session.
    ///
    /// Blank text is ignored. Once the clarifying questions are out, the
    /// mediator may reply after the configured delay.
    pub fn send_as(&self, user_id: &str, text: &str) -> Result<Option<ChatMessage>, SessionError> {
        let (message, questions_asked, session_id) = {
            let mut session = lock(&self.state);
            let Some(message) = live::post_user_message(&mut session, user_id, text)? else {
                return Ok(None);
            };
            (message, session.ai_questions_asked, session.id.clone())
        };

        self.scheduler.cancel(&typing_key(user_id));
        self.events.publish(SessionEvent::MessagePosted {
            session_id,
            message: message.clone(),
        });

        if questions_asked && self.draw_reply() {
            self.schedule_reply();
        }
        Ok(Some(message))
    }

    fn draw_reply(&self) -> bool {
        let draw: f64 = lock(&self.generator).rng_mut().r#gen();
        draw > self.timings.reply_threshold
    }

    fn schedule_reply(&self) {
        let state = Arc::clone(&self.state);
        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();

        self.scheduler.schedule(
            Duration::from_millis(self.timings.reply_delay_ms),
            async move {
                let mut session = lock(&state);
                let reply = lock(&generator).ai_response(&session.messages, &session.tone);
                match live::post_ai_message(&mut session, &reply) {
                    Ok(message) => events.publish(SessionEvent::MessagePosted {
                        session_id: session.id.clone(),
                        message,
                    }),
                    Err(err) => tracing::debug!(error = %err, "mediator reply skipped"),
                }
            },
        );
    }

    /// Record a keystroke from the local participant.
    pub fn typing(&self) -> Result<(), SessionError> {
        let user_id = self.user_id.clone();
        self.typing_as(&user_id)
    }

    /// Flag `user_id` as typing; the flag clears after the typing timeout
    /// unless another keystroke arrives first.
    pub fn typing_as(&self, user_id: &str) -> Result<(), SessionError> {
        let (changed, session_id) = {
            let mut session = lock(&self.state);
            (live::set_typing(&mut session, user_id, true)?, session.id.clone())
        };
        if changed {
            self.events.publish(SessionEvent::TypingChanged {
                session_id,
                user_id: user_id.to_string(),
                is_typing: true,
            });
        }

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let user = user_id.to_string();
        self.scheduler.schedule_keyed(
            typing_key(user_id),
            Duration::from_millis(self.timings.typing_timeout_ms),
            async move {
                let mut session = lock(&state);
                if let Ok(true) = live::set_typing(&mut session, &user, false) {
                    events.publish(SessionEvent::TypingChanged {
                        session_id: session.id.clone(),
                        user_id: user,
                        is_typing: false,
                    });
                }
            },
        );
        Ok(())
    }

    /// End the session: cancel pending mediator activity, mark it resolved
    /// and summarize it for the archive.
    pub fn resolve(&self) -> Result<MediationResult, SessionError> {
        self.scheduler.cancel_all();

        let mut session = lock(&self.state);
        live::close(&mut session)?;
        self.events.publish(SessionEvent::StatusChanged {
            session_id: session.id.clone(),
            status: SessionStatus::Resolved,
        });

        let result = session_summary(&session);
        tracing::info!(
            session = %session.id,
            messages = session.messages.len(),
            result = %result.id,
            "Live session resolved"
        );
        Ok(result)
    }
}
