//! Infrastructure layer for MendIt.
//!
//! Implements the `KvStore` port from `mendit-core` on the local filesystem
//! and resolves the data directory and `config.toml`.

pub mod config;
pub mod filesystem;
pub mod storage;
