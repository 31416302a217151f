use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::board::Task;
use crate::constants::{TASKS_SCHEMA_VERSION, TASKS_SLOT, THEME_SLOT};
use crate::storage::SlotStore;

/// Task list payloads as they may appear in the `tasks` slot
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTaskList {
    Versioned { version: u32, tasks: Vec<Task> },
    Legacy(Vec<Task>),
}

#[derive(Serialize)]
struct TaskListRecord<'a> {
    version: u32,
    tasks: &'a [Task],
}

/// Typed access to the two persistence slots.
///
/// Loads never fail: a missing, unreadable or unparseable slot comes back as
/// `None` and the problem is logged. Saves report errors to the caller.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn SlotStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    pub async fn load_tasks(&self) -> Option<Vec<Task>> {
        let payload = self.read(TASKS_SLOT).await?;
        match serde_json::from_str::<StoredTaskList>(&payload) {
            Ok(StoredTaskList::Versioned { version, tasks }) if version <= TASKS_SCHEMA_VERSION => Some(tasks),
            Ok(StoredTaskList::Versioned { version, .. }) => {
                log::warn!(
                    "Ignoring '{}' slot written by schema version {} (supported: {})",
                    TASKS_SLOT,
                    version,
                    TASKS_SCHEMA_VERSION
                );
                None
            }
            Ok(StoredTaskList::Legacy(tasks)) => {
                log::info!("Loaded unversioned '{}' slot ({} tasks)", TASKS_SLOT, tasks.len());
                Some(tasks)
            }
            Err(e) => {
                log::warn!("Error loading tasks from storage: {}", e);
                None
            }
        }
    }

    pub async fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let record = TaskListRecord {
            version: TASKS_SCHEMA_VERSION,
            tasks,
        };
        let payload = serde_json::to_string(&record).context("Failed to serialize tasks")?;
        self.store.write_slot(TASKS_SLOT, &payload).await
    }

    pub async fn load_theme(&self) -> Option<bool> {
        let payload = self.read(THEME_SLOT).await?;
        match serde_json::from_str::<bool>(&payload) {
            Ok(dark_mode) => Some(dark_mode),
            Err(e) => {
                log::warn!("Error loading theme from storage: {}", e);
                None
            }
        }
    }

    pub async fn save_theme(&self, dark_mode: bool) -> Result<()> {
        let payload = serde_json::to_string(&dark_mode).context("Failed to serialize theme")?;
        self.store.write_slot(THEME_SLOT, &payload).await
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.read_slot(key).await {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Error reading '{}' slot: {:#}", key, e);
                None
            }
        }
    }
}
