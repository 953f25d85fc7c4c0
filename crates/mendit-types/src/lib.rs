//! Shared domain types for MendIt.
//!
//! This crate contains the domain types used across the MendIt workspace:
//! tone and relationship tags, persons, live-session chat, mediation results,
//! conflict styles, configuration and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod mediation;
pub mod person;
pub mod quiz;
pub mod tags;
pub mod view;
