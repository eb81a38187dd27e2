//! SQLite-backed repository for the portal.
//!
//! Two tables (`verticals`, `portal_items` with a JSON `data` column) behind
//! an idempotent upsert/read contract. Synchronous rusqlite core with async
//! trait implementations via `spawn_blocking`.

mod async_store;
mod error;
mod favorites;
mod migrations;
mod storage;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::{BatchFailure, StorageError};
pub use favorites::JsonFavorites;
pub use storage::Storage;
