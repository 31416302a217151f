use std::sync::Arc;

use chrono::NaiveDate;
use taskmaster::board::{Priority, Task};
use taskmaster::storage::{Persistence, SlotStorage, SlotStore};

async fn storage() -> Arc<SlotStorage> {
    Arc::new(SlotStorage::in_memory().await.unwrap())
}

#[tokio::test]
async fn test_missing_slots_load_as_none() {
    let store = storage().await;
    let persistence = Persistence::new(store);

    assert!(persistence.load_tasks().await.is_none());
    assert!(persistence.load_theme().await.is_none());
}

#[tokio::test]
async fn test_slot_write_replaces_payload() {
    let store = storage().await;

    store.write_slot("darkMode", "true").await.unwrap();
    store.write_slot("darkMode", "false").await.unwrap();

    assert_eq!(store.read_slot("darkMode").await.unwrap(), Some("false".to_string()));
    assert_eq!(store.read_slot("tasks").await.unwrap(), None);
}

#[tokio::test]
async fn test_tasks_round_trip() {
    let store = storage().await;
    let persistence = Persistence::new(store);

    let mut done = Task::new("Ship release", Priority::High, NaiveDate::from_ymd_opt(2025, 6, 1));
    done.done = true;
    let tasks = vec![done, Task::new("Write notes", Priority::Low, None)];

    persistence.save_tasks(&tasks).await.unwrap();
    assert_eq!(persistence.load_tasks().await, Some(tasks));
}

#[tokio::test]
async fn test_empty_list_is_distinct_from_absent() {
    let store = storage().await;
    let persistence = Persistence::new(store);

    persistence.save_tasks(&[]).await.unwrap();
    assert_eq!(persistence.load_tasks().await, Some(Vec::new()));
}

#[tokio::test]
async fn test_corrupt_payloads_load_as_none() {
    let store = storage().await;
    store.write_slot("tasks", "{not json").await.unwrap();
    store.write_slot("darkMode", "\"maybe\"").await.unwrap();

    let persistence = Persistence::new(store);
    assert!(persistence.load_tasks().await.is_none());
    assert!(persistence.load_theme().await.is_none());
}

#[tokio::test]
async fn test_legacy_array_payload_loads() {
    let store = storage().await;
    let legacy = r#"[
        {"text":"Old task","done":false,"priority":"High","dueDate":"","isEditing":false},
        {"text":"Dated","done":true,"priority":"Low","dueDate":"2025-02-03","isEditing":true}
    ]"#;
    store.write_slot("tasks", legacy).await.unwrap();

    let tasks = Persistence::new(store).load_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "Old task");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].due_date, None);
    assert_eq!(tasks[1].due_date, NaiveDate::from_ymd_opt(2025, 2, 3));
    assert!(tasks[1].done);
    assert!(tasks[1].is_editing);
    // Legacy entries get fresh, distinct ids
    assert_ne!(tasks[0].id, tasks[1].id);
}

#[tokio::test]
async fn test_newer_schema_version_is_ignored() {
    let store = storage().await;
    store
        .write_slot("tasks", r#"{"version":99,"tasks":[]}"#)
        .await
        .unwrap();

    assert!(Persistence::new(store).load_tasks().await.is_none());
}

#[tokio::test]
async fn test_theme_round_trip() {
    let store = storage().await;
    let persistence = Persistence::new(store.clone());

    persistence.save_theme(true).await.unwrap();
    assert_eq!(persistence.load_theme().await, Some(true));
    assert_eq!(store.read_slot("darkMode").await.unwrap(), Some("true".to_string()));
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("taskmaster.db");

    {
        let storage = SlotStorage::open(&path).await.unwrap();
        assert_eq!(storage.location(), Some(path.as_path()));
        let persistence = Persistence::new(Arc::new(storage));
        persistence
            .save_tasks(&[Task::new("On disk", Priority::Medium, None)])
            .await
            .unwrap();
    }

    let reopened = Persistence::new(Arc::new(SlotStorage::open(&path).await.unwrap()));
    let tasks = reopened.load_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "On disk");
}
