//! Local storage module for Task Master state persistence
//!
//! State is kept in named slots, one serialized JSON payload per slot:
//! - `tasks` - the task list
//! - `darkMode` - the theme flag
//!
//! [`SlotStorage`] keeps the slots in an SQLite table through SeaORM and
//! [`Persistence`] layers typed, failure-tolerant access on top.

use anyhow::Result;
use async_trait::async_trait;

pub mod db;
pub mod persistence;

pub use db::SlotStorage;
pub use persistence::Persistence;

/// Durable key-value storage for serialized state slices.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Read the payload stored under `key`, `None` if the slot was never written.
    async fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the payload stored under `key`.
    async fn write_slot(&self, key: &str, payload: &str) -> Result<()>;
}
