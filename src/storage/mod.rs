//! Local persistent store for the session record and theme flag
//!
//! The store is a flat last-write-wins key/value map. [`LocalStorage`] keeps it
//! in a SQLite file through SeaORM; anything implementing [`KeyValueStore`] can
//! stand in for it.

pub mod db;

use anyhow::Result;
use async_trait::async_trait;

pub use db::LocalStorage;

/// Minimal key/value interface used by the session holder.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
