//! News Cache - news and comments service with an in-process object cache
//!
//! Each entity kind is served from an authoritative store fronted by its own
//! LRU or LFU cache, kept consistent by read-through, write-through and
//! invalidate-on-delete rules.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod sync;

pub use api::AppState;
pub use config::Config;
