//! Mediation content generation.
//!
//! Deterministic template lookups plus string assembly. The only randomness
//! (topic fallback, mediator replies) flows through an injected `rand::Rng`.

pub mod generator;
pub mod summary;
pub mod templates;
pub mod topic;

pub use generator::MediationGenerator;
pub use summary::session_summary;
pub use topic::conflict_topic;
