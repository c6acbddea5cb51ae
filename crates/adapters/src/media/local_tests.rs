// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

#[tokio::test]
async fn upload_writes_file_and_returns_url() {
    let dir = TempDir::new().unwrap();
    let storage = LocalMediaStorage::new(dir.path().join("media"), "/media/");

    let url = storage.upload(b"\x89PNG", "image/png").await.unwrap();

    assert!(url.starts_with("/media/"));
    assert!(url.ends_with(".png"));
    let name = url.trim_start_matches("/media/");
    let stored = std::fs::read(dir.path().join("media").join(name)).unwrap();
    assert_eq!(stored, b"\x89PNG");
}

#[tokio::test]
async fn uploads_get_distinct_names() {
    let dir = TempDir::new().unwrap();
    let storage = LocalMediaStorage::file_urls(dir.path());

    let a = storage.upload(b"a", "image/jpeg").await.unwrap();
    let b = storage.upload(b"b", "image/jpeg").await.unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with("file://"));
}

#[tokio::test]
async fn rejected_upload_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("media");
    let storage = LocalMediaStorage::new(&root, "/media");

    let err = storage.upload(b"%PDF", "application/pdf").await.unwrap_err();
    assert!(matches!(err, MediaError::UnsupportedType(_)));
    assert!(!root.exists());
}
