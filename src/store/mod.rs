//! Store Module
//!
//! Authoritative in-process storage for news and comments. The caches in
//! front of it are kept consistent by [`crate::sync::CachedRepository`].

mod memory;

pub use memory::{MemoryRepository, Record};
