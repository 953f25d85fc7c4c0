//! `KvStore` implementations backed by local files.

pub mod file_kv;

pub use file_kv::FileKvStore;
