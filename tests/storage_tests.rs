//! SeaOrmStorage tests
//!
//! Exercises the `LinkStore` contract against a temporary SQLite database.

use std::sync::Arc;

use tempfile::TempDir;

use shortlink::config::DatabaseConfig;
use shortlink::errors::ShortlinkError;
use shortlink::storage::{LinkPatch, LinkStore, NewLink, SeaOrmStorage, StorageFactory};

async fn create_test_storage() -> (Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("storage.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        ..DatabaseConfig::default()
    };

    let storage = StorageFactory::create(&config)
        .await
        .expect("Failed to create storage");
    (storage, temp_dir)
}

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[tokio::test]
async fn test_insert_and_find() {
    let (storage, _dir) = create_test_storage().await;

    let inserted = storage
        .insert(new_link("abc123", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(inserted.short_code, "abc123");
    assert_eq!(inserted.id.len(), 36);

    let found = storage.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found, inserted);

    assert!(storage.find_by_code("ABC123").await.unwrap().is_none());
    assert_eq!(storage.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_insert_duplicate_code_conflicts() {
    let (storage, _dir) = create_test_storage().await;

    storage
        .insert(new_link("dup", "https://example.com"))
        .await
        .unwrap();
    let err = storage
        .insert(new_link("dup", "https://example.org"))
        .await
        .unwrap_err();

    assert!(matches!(err, ShortlinkError::Conflict(_)));
    assert_eq!(storage.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_codes_differing_only_in_case_coexist() {
    let (storage, _dir) = create_test_storage().await;

    storage
        .insert(new_link("abc", "https://example.com/lower"))
        .await
        .unwrap();
    storage
        .insert(new_link("ABC", "https://example.com/upper"))
        .await
        .unwrap();

    let lower = storage.find_by_code("abc").await.unwrap().unwrap();
    let upper = storage.find_by_code("ABC").await.unwrap().unwrap();
    assert_eq!(lower.original_url, "https://example.com/lower");
    assert_eq!(upper.original_url, "https://example.com/upper");
    assert!(storage.find_by_code("Abc").await.unwrap().is_none());
    assert_eq!(storage.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_find_all_oldest_first() {
    let (storage, _dir) = create_test_storage().await;

    for code in ["one", "two", "three"] {
        storage
            .insert(new_link(code, "https://example.com"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let links = storage.find_all().await.unwrap();
    let codes: Vec<&str> = links.iter().map(|l| l.short_code.as_str()).collect();
    assert_eq!(codes, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_update_fields() {
    let (storage, _dir) = create_test_storage().await;

    let link = storage
        .insert(new_link("before", "https://example.com"))
        .await
        .unwrap();

    let updated = storage
        .update(
            &link.id,
            LinkPatch {
                original_url: Some("https://example.org".to_string()),
                short_code: Some("after".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, link.id);
    assert_eq!(updated.short_code, "after");
    assert_eq!(updated.original_url, "https://example.org");
    assert_eq!(updated.created_at, link.created_at);
    assert!(storage.find_by_code("before").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_to_existing_code_conflicts() {
    let (storage, _dir) = create_test_storage().await;

    let a = storage
        .insert(new_link("a", "https://a.example.com"))
        .await
        .unwrap();
    storage
        .insert(new_link("b", "https://b.example.com"))
        .await
        .unwrap();

    let err = storage
        .update(
            &a.id,
            LinkPatch {
                original_url: None,
                short_code: Some("b".to_string()),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ShortlinkError::Conflict(_)));
    assert_eq!(storage.find_by_code("a").await.unwrap().unwrap(), a);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (storage, _dir) = create_test_storage().await;

    let err = storage
        .update(
            "00000000-0000-4000-8000-000000000000",
            LinkPatch {
                original_url: Some("https://example.com".to_string()),
                short_code: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ShortlinkError::NotFound(_)));
}

#[tokio::test]
async fn test_delete() {
    let (storage, _dir) = create_test_storage().await;

    storage
        .insert(new_link("bye", "https://example.com"))
        .await
        .unwrap();

    storage.delete_by_code("bye").await.unwrap();
    assert!(storage.find_by_code("bye").await.unwrap().is_none());

    let err = storage.delete_by_code("bye").await.unwrap_err();
    assert!(matches!(err, ShortlinkError::NotFound(_)));
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("persist.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        ..DatabaseConfig::default()
    };

    {
        let storage = SeaOrmStorage::new(&config, "sqlite").await.unwrap();
        storage
            .insert(new_link("kept", "https://example.com"))
            .await
            .unwrap();
        storage.close().await.unwrap();
    }

    let storage = SeaOrmStorage::new(&config, "sqlite").await.unwrap();
    let found = storage.find_by_code("kept").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_unknown_database_url_rejected() {
    let config = DatabaseConfig {
        database_url: "redis://localhost:6379".to_string(),
        ..DatabaseConfig::default()
    };

    let Err(err) = StorageFactory::create(&config).await else {
        panic!("expected unsupported database URL to be rejected");
    };
    assert!(matches!(err, ShortlinkError::DatabaseConfig(_)));
}
