//! Storage abstractions for MendIt.
//!
//! Defines the key-value store trait and the JSON blob helpers shared by the
//! archive and style stores. `MemoryKvStore` lives here for tests and
//! embedding; the file-backed store lives in mendit-infra.

pub mod blob;
pub mod kv_store;
pub mod memory;

pub use kv_store::KvStore;
pub use memory::MemoryKvStore;
