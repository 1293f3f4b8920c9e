//! Integration tests for asset CRUD against a real database:
//! - Create / find / list / update / delete for all three asset tables
//! - Bulk delete
//! - Stats aggregates

use sqlx::PgPool;

use edumedia_db::models::audio::{CreateAudioAsset, UpdateAudioAsset};
use edumedia_db::models::picbook::CreatePicbook;
use edumedia_db::models::video::CreateVideoAsset;
use edumedia_db::repositories::{AudioRepo, PicbookRepo, StatsRepo, VideoRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_audio(name: &str) -> CreateAudioAsset {
    CreateAudioAsset {
        name: name.to_string(),
        note: None,
        file_url: format!("https://store.example/audio/{name}.mp3"),
        cover_url: None,
    }
}

fn new_video(name: &str) -> CreateVideoAsset {
    CreateVideoAsset {
        name: name.to_string(),
        note: Some("classroom cut".to_string()),
        video_url: format!("https://store.example/video/{name}.mp4"),
        cover_url: None,
    }
}

fn new_picbook(name: &str) -> CreatePicbook {
    CreatePicbook {
        name: name.to_string(),
        note: None,
        folder_name: format!("{name}-pages"),
        pages: serde_json::json!(["p0.png", "p1.png", "p2.png"]),
        cover_url: Some(format!("https://store.example/cover/{name}.png")),
    }
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_audio_crud(pool: PgPool) {
    let created = AudioRepo::create(&pool, &new_audio("counting-song"))
        .await
        .unwrap();
    assert_eq!(created.name, "counting-song");
    assert_eq!(created.note, ""); // defaulted

    let found = AudioRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("audio should exist");
    assert_eq!(found.file_url, created.file_url);

    let updated = AudioRepo::update(
        &pool,
        created.id,
        &UpdateAudioAsset {
            name: Some("counting-song-v2".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should hit the row");
    assert_eq!(updated.name, "counting-song-v2");
    // Untouched fields keep their values.
    assert_eq!(updated.file_url, created.file_url);

    assert!(AudioRepo::delete(&pool, created.id).await.unwrap());
    assert!(AudioRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    // Second delete is a no-op.
    assert!(!AudioRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_audio_list_newest_first(pool: PgPool) {
    let first = AudioRepo::create(&pool, &new_audio("one")).await.unwrap();
    let second = AudioRepo::create(&pool, &new_audio("two")).await.unwrap();

    let listed = AudioRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_audio_delete_many(pool: PgPool) {
    let a = AudioRepo::create(&pool, &new_audio("a")).await.unwrap();
    let b = AudioRepo::create(&pool, &new_audio("b")).await.unwrap();
    let keep = AudioRepo::create(&pool, &new_audio("keep")).await.unwrap();

    let deleted = AudioRepo::delete_many(&pool, &[a.id, b.id, 9999])
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    let listed = AudioRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_video_create_and_exists(pool: PgPool) {
    let created = VideoRepo::create(&pool, &new_video("intro")).await.unwrap();
    assert_eq!(created.note, "classroom cut");

    assert!(VideoRepo::exists(&pool, created.id).await.unwrap());
    assert!(!VideoRepo::exists(&pool, created.id + 1).await.unwrap());
}

// ---------------------------------------------------------------------------
// Picbook
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_picbook_pages_round_trip(pool: PgPool) {
    let created = PicbookRepo::create(&pool, &new_picbook("ducks"))
        .await
        .unwrap();
    assert_eq!(created.page_count(), 3);

    let found = PicbookRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("picbook should exist");
    assert_eq!(found.pages, serde_json::json!(["p0.png", "p1.png", "p2.png"]));
    assert_eq!(found.folder_name, "ducks-pages");
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_library_stats_counts(pool: PgPool) {
    let empty = StatsRepo::library(&pool).await.unwrap();
    assert_eq!(empty.audio_total, 0);
    assert_eq!(empty.annotation_total, 0);
    assert!(empty.latest_upload.is_none());

    AudioRepo::create(&pool, &new_audio("one")).await.unwrap();
    AudioRepo::create(&pool, &new_audio("two")).await.unwrap();
    VideoRepo::create(&pool, &new_video("intro")).await.unwrap();
    PicbookRepo::create(&pool, &new_picbook("ducks"))
        .await
        .unwrap();

    let stats = StatsRepo::library(&pool).await.unwrap();
    assert_eq!(stats.audio_total, 2);
    assert_eq!(stats.video_total, 1);
    assert_eq!(stats.picbook_total, 1);
    assert_eq!(stats.hotspot_total, 0);
    assert!(stats.latest_upload.is_some());
}
