//! Business logic and storage trait definitions for MendIt.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! implements, plus everything built on top of it: the mediation content
//! generator, the archive and style stores, the quiz, healing reflections,
//! simulated live sessions and the view flow. It depends only on
//! `mendit-types` -- never on `mendit-infra` or any IO crate.

pub mod archive;
pub mod flow;
pub mod healing;
pub mod mediation;
pub mod navigation;
pub mod quiz;
pub mod session;
pub mod storage;
