use std::fs;

use battleship_engine::{summarize, Coordinate, ShotOutcome, StatisticsSummary, SummaryStore};
use tempfile::TempDir;

fn sample(hits: usize) -> StatisticsSummary {
    let mut log = vec![ShotOutcome::Miss(Coordinate::new(0, 0))];
    log.extend((0..hits).map(|c| ShotOutcome::Hit(Coordinate::new(1, c))));
    summarize(&log)
}

#[test]
fn test_append_creates_file_and_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let store = SummaryStore::new(dir.path().join("data").join("shoot_data.json"));
    assert_eq!(store.append(&sample(1)).unwrap(), 1);
    assert_eq!(store.append(&sample(2)).unwrap(), 2);
    assert!(store.path().exists());
    assert_eq!(store.load(), vec![sample(1), sample(2)]);
}

#[test]
fn test_file_is_a_pretty_printed_list() {
    let dir = TempDir::new().unwrap();
    let store = SummaryStore::new(dir.path().join("stats.json"));
    store.append(&sample(3)).unwrap();
    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("[\n  {\n    \""));
    assert!(text.contains("\n    \"first_hit_shot\": 2,"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["hits"], 3);
    assert_eq!(value[0]["misses"], 1);
}

#[test]
fn test_missing_store_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = SummaryStore::new(dir.path().join("absent.json"));
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_store_is_replaced_on_append() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    fs::write(&path, "{ not json").unwrap();
    let store = SummaryStore::new(&path);
    assert!(store.load().is_empty());
    assert_eq!(store.append(&sample(1)).unwrap(), 1);
    assert_eq!(store.load(), vec![sample(1)]);
}

#[test]
fn test_non_list_store_starts_over() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    fs::write(&path, r#"{"hits": 4}"#).unwrap();
    let store = SummaryStore::new(&path);
    assert_eq!(store.append(&sample(2)).unwrap(), 1);
    assert_eq!(store.load(), vec![sample(2)]);
}

#[test]
fn test_append_into_directory_path_fails() {
    let dir = TempDir::new().unwrap();
    let taken = dir.path().join("taken");
    fs::create_dir(&taken).unwrap();
    let store = SummaryStore::new(&taken);
    assert!(store.append(&sample(1)).is_err());
    assert!(!dir.path().join("taken.json.tmp").exists());
    assert!(taken.is_dir());
}

#[test]
fn test_default_location() {
    assert_eq!(
        SummaryStore::default().path(),
        std::path::Path::new("data/shoot_data.json")
    );
}
