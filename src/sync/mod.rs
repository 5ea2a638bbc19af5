//! Cache-Sync Module
//!
//! Keeps a cache instance consistent with the authoritative store it fronts.
//!
//! Rules applied by [`CachedRepository`]:
//! - find: read-through, the store is only consulted on a miss
//! - save / update: write-through, store first, then cache
//! - delete: store first, then invalidate
//!
//! A failing store call leaves the cache untouched and its error is returned
//! as-is.

mod cached;
mod repository;

pub use cached::CachedRepository;
pub use repository::Repository;
