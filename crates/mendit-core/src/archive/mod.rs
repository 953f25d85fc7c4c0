//! The mediation archive: every completed mediation, persisted as one JSON
//! list under a single storage key.

pub mod query;
pub mod store;

pub use query::{ArchiveFilter, ArchiveQuery, ArchiveStats};
pub use store::ArchiveStore;
