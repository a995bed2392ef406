// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the profile page and its storage

use camera_shell::app::{Person, ProfilePage};
use camera_shell::constants::PROFILE_STORAGE_KEY;
use camera_shell::storage::{JsonFileStore, KeyValueStore};
use std::sync::Arc;

#[tokio::test]
async fn test_load_without_record_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("storage.json")));

    let mut page = ProfilePage::new(store.clone());
    assert!(page.load().await.is_err());

    // Saving a fresh record repairs it
    page.person = Person::new("Ali", "Saleh");
    page.save().await.unwrap();
    assert_eq!(*page.load().await.unwrap(), Person::new("Ali", "Saleh"));
}

#[tokio::test]
async fn test_saved_profile_is_loaded_by_a_new_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut page = ProfilePage::new(Arc::new(JsonFileStore::new(path.clone())));
    page.person = Person::new("Ali", "Saleh");
    page.save().await.unwrap();

    let mut reopened = ProfilePage::new(Arc::new(JsonFileStore::new(path)));
    assert_eq!(*reopened.load().await.unwrap(), Person::new("Ali", "Saleh"));
}

#[tokio::test]
async fn test_profile_lives_under_its_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("storage.json")));

    let mut page = ProfilePage::new(store.clone());
    page.person = Person::new("Ali", "Saleh");
    page.save().await.unwrap();

    let stored = store.get(PROFILE_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(stored["firstName"], "Ali");
    assert_eq!(stored["lastName"], "Saleh");
}

#[tokio::test]
async fn test_unreadable_record_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("storage.json")));
    store
        .set(PROFILE_STORAGE_KEY, serde_json::json!(["not", "a", "person"]))
        .await
        .unwrap();

    let mut page = ProfilePage::new(store.clone());
    assert!(page.load().await.is_err());

    // Saving a fresh record repairs it
    page.person = Person::new("Ali", "Saleh");
    page.save().await.unwrap();
    assert_eq!(*page.load().await.unwrap(), Person::new("Ali", "Saleh"));
}
