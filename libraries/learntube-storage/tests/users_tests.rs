//! Integration tests for the users vertical slice


use learntube_core::types::*;
use learntube_storage::StorageError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_lookup_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = learntube_storage::users::create(
        pool,
        CreateUser::new("Alice", "Alice@Example.com").unwrap(),
        "hash-1",
    )
    .await
    .unwrap();

    assert_eq!(user.email, "alice@example.com");

    let by_email = learntube_storage::users::get_by_email(pool, "alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email, user);

    let by_id = learntube_storage::users::get_by_id(pool, &user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id, user);

    let hash = learntube_storage::users::get_password_hash(pool, &user.id)
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some("hash-1"));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "alice").await;

    let result = learntube_storage::users::create(
        pool,
        CreateUser::new("Other Alice", "ALICE@example.com").unwrap(),
        "hash-2",
    )
    .await;

    assert!(matches!(result, Err(StorageError::Duplicate(_))));
    assert_eq!(learntube_storage::users::get_all(pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_user_lookups() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let missing = UserId::new("missing");
    assert!(learntube_storage::users::get_by_id(pool, &missing)
        .await
        .unwrap()
        .is_none());
    assert!(learntube_storage::users::get_password_hash(pool, &missing)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_get_all_sorted_by_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "carol").await;
    create_test_user(pool, "alice").await;
    create_test_user(pool, "bob").await;

    let names: Vec<_> = learntube_storage::users::get_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
}
