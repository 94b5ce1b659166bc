//! Persistence tests for the task store.
//!
//! Each test works against a temp directory and reopens the store from disk
//! to check what was actually written.

use std::fs;

use patodo::io::store::{StoreError, TaskStore};
use patodo::model::{Category, FilterOptions, TaskId, TaskStatus};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open(tmp: &TempDir) -> TaskStore {
    TaskStore::open(tmp.path().join("tasks.json")).unwrap()
}

#[test]
fn reopened_store_matches_memory() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);

    let a = store.add("Write report", Category::new("work")).unwrap();
    let b = store.add("Call mom", Category::new("personal")).unwrap();
    store.add("Water plants", Category::none()).unwrap();
    store.update_status(&a, TaskStatus::InProgress).unwrap();
    store.update(&b, "Call mom back", Category::new(" family ")).unwrap();

    let reopened = open(&tmp);
    assert_eq!(reopened.tasks(), store.tasks());
    assert_eq!(reopened.get(&b).unwrap().category.as_str(), "family");
}

#[test]
fn file_is_a_pretty_json_array() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);
    store.add("Buy milk", Category::new("errands")).unwrap();

    let content = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(content.starts_with("[\n"));
    assert!(content.contains("\"status\": \"pending\""));
    assert!(content.contains("\"category\": \"errands\""));

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn missing_file_opens_empty_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp);
    assert!(store.is_empty());
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn corrupt_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks.json"), "{ not json").unwrap();
    match TaskStore::open(tmp.path().join("tasks.json")) {
        Err(StoreError::CorruptData { .. }) => {}
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("corrupt file loaded"),
    }
}

#[test]
fn unknown_id_changes_nothing_on_disk() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);
    store.add("a", Category::new("work")).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let ghost = TaskId::new("01ARZ3NDEKTSV4RRFFQ69G5FAV");
    store.update_status(&ghost, TaskStatus::Done).unwrap();
    store.update_description(&ghost, "x").unwrap();
    store.update_category(&ghost, Category::new("y")).unwrap();
    store.delete(&ghost).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn filter_returns_exactly_the_matching_tasks() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);
    let rows = [
        ("a", "work", TaskStatus::Pending),
        ("b", "work", TaskStatus::Done),
        ("c", "home", TaskStatus::Done),
        ("d", "", TaskStatus::InProgress),
        ("e", "home", TaskStatus::Pending),
    ];
    for (description, category, status) in rows {
        let id = store.add(description, Category::new(category)).unwrap();
        store.update_status(&id, status).unwrap();
    }

    let statuses = [
        None,
        Some(TaskStatus::Pending),
        Some(TaskStatus::InProgress),
        Some(TaskStatus::Done),
    ];
    let categories = [None, Some("work"), Some("home"), Some("nowhere")];
    for status in statuses {
        for category in categories {
            let opts = FilterOptions {
                status,
                category: category.map(Category::new),
            };
            let got: Vec<String> = store
                .filter(&opts)
                .into_iter()
                .map(|t| t.description)
                .collect();
            let expected: Vec<&str> = rows
                .iter()
                .filter(|(_, c, s)| {
                    status.is_none_or(|want| want == *s)
                        && category.is_none_or(|want| want == *c)
                })
                .map(|(d, _, _)| *d)
                .collect();
            assert_eq!(got, expected, "status={:?} category={:?}", status, category);
        }
    }
}

#[test]
fn categories_are_distinct_sorted_and_skip_empty() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);
    for category in ["work", "personal", "work", "", "  "] {
        store.add("t", Category::new(category)).unwrap();
    }
    let labels: Vec<String> = store.categories().iter().map(|c| c.to_string()).collect();
    assert_eq!(labels, vec!["personal", "work"]);
}

#[test]
fn ids_are_unique_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let mut store = open(&tmp);
    let first = store.add("a", Category::none()).unwrap();

    let mut reopened = open(&tmp);
    let second = reopened.add("b", Category::none()).unwrap();
    assert_ne!(first, second);
    assert_eq!(reopened.len(), 2);
}
