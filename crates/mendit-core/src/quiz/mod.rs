//! Conflict-style quiz: question bank, scoring, step-wise session and the
//! persisted result.

pub mod questions;
pub mod resolve;
pub mod session;
pub mod store;

pub use questions::{QUESTIONS, QuizOption, QuizQuestion};
pub use resolve::{resolve_style, style_for};
pub use session::{QuizSession, QuizStep};
pub use store::StyleStore;
