//! End-to-end tests: `PlaylistService` over the `SQLite` storage context


use learntube_core::{LearnTubeError, NewVideo, PlaylistService, StorageContext, VideoId};
use test_helpers::*;

fn new_video(id: &str) -> NewVideo {
    NewVideo {
        video_id: id.to_string(),
        video_title: format!("Video {}", id),
        thumbnail_url: Some(format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id)),
    }
}

#[tokio::test]
async fn test_service_persists_every_mutation() {
    let test_db = TestDb::new().await;
    let alice = create_test_user(test_db.pool(), "alice").await;
    let ctx = test_db.db.context(alice.clone());
    let service = PlaylistService::new(&ctx);

    let playlist = service.create_playlist("Rust").await.unwrap();
    let playlist = service.create_roadmap(&playlist.id, "Basics").await.unwrap();
    let roadmap_id = playlist.roadmaps[0].id.clone();

    service
        .add_video(&playlist.id, &roadmap_id, new_video("a"))
        .await
        .unwrap();
    service
        .add_video(&playlist.id, &roadmap_id, new_video("b"))
        .await
        .unwrap();
    service
        .update_progress(&playlist.id, &roadmap_id, &VideoId::new("a"), "Completed")
        .await
        .unwrap();

    // Fresh context, same user: state comes from the database
    let reloaded = test_db
        .db
        .context(alice)
        .get_playlist(&playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.roadmaps[0].videos.len(), 2);

    let stats = service.playlist_stats(&playlist.id).await.unwrap();
    assert_eq!((stats.completed, stats.total, stats.percent), (1, 2, 50));
}

#[tokio::test]
async fn test_service_hides_foreign_playlists() {
    let test_db = TestDb::new().await;
    let alice = create_test_user(test_db.pool(), "alice").await;
    let bob = create_test_user(test_db.pool(), "bob").await;

    let alice_ctx = test_db.db.context(alice);
    let playlist = PlaylistService::new(&alice_ctx)
        .create_playlist("Mine")
        .await
        .unwrap();

    let bob_ctx = test_db.db.context(bob);
    let as_bob = PlaylistService::new(&bob_ctx);

    let err = as_bob
        .rename_playlist(&playlist.id, "Theirs")
        .await
        .unwrap_err();
    assert!(matches!(err, LearnTubeError::NotFound { .. }));

    let err = as_bob.delete_playlist(&playlist.id).await.unwrap_err();
    assert!(matches!(err, LearnTubeError::NotFound { .. }));
}

#[tokio::test]
async fn test_capacity_rejection_leaves_document_unchanged() {
    let test_db = TestDb::new().await;
    let alice = create_test_user(test_db.pool(), "alice").await;
    let ctx = test_db.db.context(alice);
    let service = PlaylistService::new(&ctx);

    let playlist = service.create_playlist("Rust").await.unwrap();
    let playlist = service.create_roadmap(&playlist.id, "Basics").await.unwrap();
    let roadmap_id = playlist.roadmaps[0].id.clone();
    for id in ["a", "b", "c"] {
        service
            .add_video(&playlist.id, &roadmap_id, new_video(id))
            .await
            .unwrap();
    }
    let before = service.get_playlist(&playlist.id).await.unwrap();

    let err = service
        .add_video(&playlist.id, &roadmap_id, new_video("d"))
        .await
        .unwrap_err();
    assert!(matches!(err, LearnTubeError::CapacityExceeded { max: 3 }));

    let after = service.get_playlist(&playlist.id).await.unwrap();
    assert_eq!(before, after);
}
