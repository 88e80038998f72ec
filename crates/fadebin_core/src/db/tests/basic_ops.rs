//! Basic storage CRUD and defensive-validation tests.

use super::*;

#[test]
fn paste_create_get_roundtrip_starts_with_zero_views() {
    let (db, _temp) = setup_test_db();

    let paste = Paste::new(
        "Test content".to_string(),
        Some(Duration::seconds(120)),
        Some(5),
    );
    let paste_id = paste.id.clone();
    db.pastes.create(&paste).expect("create");

    let retrieved = db
        .pastes
        .get(&paste_id)
        .expect("get")
        .expect("paste should exist");
    assert_eq!(retrieved.id, paste_id);
    assert_eq!(retrieved.content, "Test content");
    assert_eq!(retrieved.created_at, paste.created_at);
    assert_eq!(retrieved.expires_at, paste.expires_at);
    assert_eq!(retrieved.max_views, Some(5));
    assert_eq!(retrieved.view_count, 0);
}

#[test]
fn get_returns_none_for_missing_id() {
    let (db, _temp) = setup_test_db();
    assert!(db.pastes.get("nonexistent-id").expect("get").is_none());
}

#[test]
fn paste_create_rejects_duplicate_id_without_overwrite() {
    let (db, _temp) = setup_test_db();

    let mut original = Paste::new("original".to_string(), None, None);
    original.id = "duplicate-create-id".to_string();
    db.pastes.create(&original).expect("create original");

    let mut conflicting = Paste::new("conflicting".to_string(), None, None);
    conflicting.id = original.id.clone();
    let err = db
        .pastes
        .create(&conflicting)
        .expect_err("duplicate id create must fail");
    assert!(
        matches!(err, AppError::StorageMessage(ref message) if message.contains("already exists")),
        "unexpected duplicate-create error: {}",
        err
    );

    let stored = db
        .pastes
        .get(&original.id)
        .expect("lookup")
        .expect("existing paste should remain");
    assert_eq!(stored.content, "original");
}

#[test]
fn create_defensively_rejects_invalid_rows() {
    let (db, _temp) = setup_test_db();
    let now = Utc::now();

    let empty_content = Paste {
        id: "defensive-empty".to_string(),
        content: String::new(),
        created_at: now,
        expires_at: None,
        max_views: None,
        view_count: 0,
    };
    let zero_views = Paste {
        id: "defensive-zero-views".to_string(),
        content: "x".to_string(),
        created_at: now,
        expires_at: None,
        max_views: Some(0),
        view_count: 0,
    };
    let non_future_expiry = Paste {
        id: "defensive-expiry".to_string(),
        content: "x".to_string(),
        created_at: now,
        expires_at: Some(now),
        max_views: None,
        view_count: 0,
    };

    for paste in [&empty_content, &zero_views, &non_future_expiry] {
        let err = db
            .pastes
            .create(paste)
            .expect_err("invalid row must be rejected");
        assert!(
            matches!(err, AppError::BadRequest(_)),
            "unexpected defensive-create error for '{}': {}",
            paste.id,
            err
        );
        assert!(db.pastes.get(&paste.id).expect("get").is_none());
    }
}

#[test]
fn record_view_returns_not_found_for_missing_id() {
    let (db, _temp) = setup_test_db();
    let err = db
        .pastes
        .record_view("nonexistent-id", Utc::now())
        .expect_err("missing id must not be viewable");
    assert!(matches!(err, AppError::NotFound));
}
