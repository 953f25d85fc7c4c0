//! Simulated live mediation sessions.
//!
//! `live` holds the plain state transitions, `host` drives them with timed
//! mediator activity through a `SessionScheduler`, and updates fan out on a
//! `SessionEventBus`.

pub mod events;
pub mod host;
pub mod live;
pub mod scheduler;

pub use events::{SessionEvent, SessionEventBus};
pub use host::{HostOptions, SessionHost};
pub use scheduler::SessionScheduler;
