//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable storage contract used by the state store.
//! - Isolate SQLite query details from service orchestration.

pub mod storage_repo;
