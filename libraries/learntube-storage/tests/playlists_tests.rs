//! Integration tests for the playlists vertical slice
//!
//! Tests playlist operations including:
//! - CRUD with user ownership
//! - Whole-document saves (roadmaps and videos round-trip)
//! - Owner scoping of every query


use learntube_core::aggregator::{add_step, set_progress};
use learntube_core::types::*;
use learntube_storage::StorageError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, "Learning Rust", &user_id).await;

    assert_eq!(playlist.title, "Learning Rust");
    assert_eq!(playlist.user_id, user_id);
    assert!(playlist.roadmaps.is_empty());

    let retrieved = learntube_storage::playlists::get_by_id(pool, &playlist.id, &user_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved, playlist);
}

#[tokio::test]
async fn test_create_rejects_invalid_title() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user_id = create_test_user(pool, "alice").await;

    let result = learntube_storage::playlists::create(
        pool,
        CreatePlaylist {
            user_id,
            title: "   ".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(StorageError::Domain(_))));
}

#[tokio::test]
async fn test_get_user_playlists_only_returns_owned() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;

    create_test_playlist(pool, "Alice A", &alice).await;
    create_test_playlist(pool, "Alice B", &alice).await;
    create_test_playlist(pool, "Bob", &bob).await;

    let playlists = learntube_storage::playlists::get_user_playlists(pool, &alice)
        .await
        .unwrap();

    assert_eq!(playlists.len(), 2);
    assert!(playlists.iter().all(|p| p.user_id == alice));
    assert_eq!(
        learntube_storage::playlists::get_user_playlists(pool, &bob)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_other_users_playlist_is_invisible() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let playlist = create_test_playlist(pool, "Private", &alice).await;

    let as_bob = learntube_storage::playlists::get_by_id(pool, &playlist.id, &bob)
        .await
        .unwrap();
    assert!(as_bob.is_none());

    let result = learntube_storage::playlists::delete(pool, &playlist.id, &bob).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));

    // Forged owner on save does not touch alice's row
    let mut forged = playlist.clone();
    forged.user_id = bob.clone();
    forged.title = "Hijacked".to_string();
    let result = learntube_storage::playlists::save(pool, &forged).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));

    let still = learntube_storage::playlists::get_by_id(pool, &playlist.id, &alice)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(still.title, "Private");
}

#[tokio::test]
async fn test_save_round_trips_subtree() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "alice").await;
    let mut playlist = create_test_playlist(pool, "Rust", &user_id).await;

    let roadmap = Roadmap::new("Ownership").unwrap();
    let roadmap = add_step(&roadmap, test_video("a")).unwrap();
    let roadmap = add_step(&roadmap, test_video("b")).unwrap();
    let roadmap = set_progress(&roadmap, &VideoId::new("b"), "In Progress").unwrap();
    playlist.roadmaps.push(roadmap);
    playlist.title = "Rust, revisited".to_string();
    playlist.touch();

    learntube_storage::playlists::save(pool, &playlist)
        .await
        .unwrap();

    let loaded = learntube_storage::playlists::get_by_id(pool, &playlist.id, &user_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded, playlist);
    assert_eq!(loaded.roadmaps[0].videos[1].progress, Progress::InProgress);
    assert_eq!(
        loaded.roadmaps[0].videos[0].video_url,
        "https://www.youtube.com/watch?v=a"
    );
}

#[tokio::test]
async fn test_delete_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, "Doomed", &user_id).await;

    learntube_storage::playlists::delete(pool, &playlist.id, &user_id)
        .await
        .unwrap();

    assert!(
        learntube_storage::playlists::get_by_id(pool, &playlist.id, &user_id)
            .await
            .unwrap()
            .is_none()
    );

    let again = learntube_storage::playlists::delete(pool, &playlist.id, &user_id).await;
    assert!(matches!(again, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_recently_updated_playlists_come_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "alice").await;
    let mut older = create_test_playlist(pool, "Older", &user_id).await;
    create_test_playlist(pool, "Newer", &user_id).await;

    older.touch();
    learntube_storage::playlists::save(pool, &older).await.unwrap();

    let playlists = learntube_storage::playlists::get_user_playlists(pool, &user_id)
        .await
        .unwrap();
    assert_eq!(playlists[0].title, "Older");
}
