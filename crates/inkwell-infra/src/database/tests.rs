use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use inkwell_core::domain::{AuthorName, BlogPost, NewBlogPost, PostChanges};
use inkwell_core::ports::{BaseRepository, PostStore, StoreReset};

use super::entity::post;
use super::{DatabaseConfig, DatabasePool, SeaOrmPostStore, ensure_schema};

fn new_post(title: &str, days_ago: i64) -> NewBlogPost {
    NewBlogPost {
        author: AuthorName::new("Octavia", "Butler"),
        title: title.to_string(),
        content: "All that you touch you change.".to_string(),
        created: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(days_ago)),
    }
}

async fn sqlite_store() -> SeaOrmPostStore {
    // One connection, so every query sees the same in-memory database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    ensure_schema(&db).await.unwrap();
    SeaOrmPostStore::new(db)
}

#[tokio::test]
async fn test_find_post_by_id_maps_author_parts() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            author_first_name: "Ursula".to_owned(),
            author_last_name: "Le Guin".to_owned(),
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            created: now.into(),
        }]])
        .into_connection();

    let repo = SeaOrmPostStore::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.author.display_name(), "Ursula Le Guin");
    assert_eq!(post.created, now);
}

#[tokio::test]
async fn test_update_unknown_id_returns_none() {
    // Also what a row deleted between lookup and write looks like.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let repo = SeaOrmPostStore::new(db);

    let changes = PostChanges {
        title: Some("New".to_string()),
        content: None,
    };
    let result = repo.update_by_id(Uuid::new_v4(), changes).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_returns_refetched_post() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            author_first_name: "N. K.".to_owned(),
            author_last_name: "Jemisin".to_owned(),
            title: "Revised".to_owned(),
            content: "Content".to_owned(),
            created: now.into(),
        }]])
        .into_connection();
    let repo = SeaOrmPostStore::new(db);

    let changes = PostChanges {
        title: Some("Revised".to_string()),
        content: None,
    };
    let updated = repo.update_by_id(post_id, changes).await.unwrap().unwrap();

    assert_eq!(updated.id, post_id);
    assert_eq!(updated.title, "Revised");
}

#[tokio::test]
async fn test_delete_unknown_id_returns_false() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let repo = SeaOrmPostStore::new(db);

    let removed = BaseRepository::<BlogPost, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap();

    assert!(!removed);
}

#[tokio::test]
async fn test_sqlite_insert_many_and_find_all_oldest_first() {
    let store = sqlite_store().await;

    let inserted = store
        .insert_many(vec![new_post("newer", 1), new_post("older", 5)])
        .await
        .unwrap();
    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].title, "newer");

    let all = store.find_all().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["older", "newer"]);

    let count = BaseRepository::<BlogPost, Uuid>::count(&store).await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_sqlite_round_trip_preserves_fields() {
    let store = sqlite_store().await;

    let created = store.insert(new_post("round trip", 3)).await.unwrap();
    let fetched: BlogPost = store.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_sqlite_update_changes_only_title_and_content() {
    let store = sqlite_store().await;
    let original = store.insert(new_post("draft", 2)).await.unwrap();

    let updated = store
        .update_by_id(
            original.id,
            PostChanges {
                title: Some("final".to_string()),
                content: Some("Rewritten.".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "final");
    assert_eq!(updated.content, "Rewritten.");
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.author, original.author);
    assert_eq!(updated.created, original.created);
}

#[tokio::test]
async fn test_sqlite_delete_then_find_returns_none() {
    let store = sqlite_store().await;
    let post = store.insert(new_post("short lived", 1)).await.unwrap();

    assert!(BaseRepository::<BlogPost, Uuid>::delete(&store, post.id).await.unwrap());
    assert!(!BaseRepository::<BlogPost, Uuid>::delete(&store, post.id).await.unwrap());

    let found: Option<BlogPost> = store.find_by_id(post.id).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_sqlite_drop_all_empties_collection() {
    let store = sqlite_store().await;
    store
        .insert_many(vec![new_post("a", 1), new_post("b", 2), new_post("c", 3)])
        .await
        .unwrap();

    assert_eq!(store.drop_all().await.unwrap(), 3);

    let one: Option<BlogPost> = store.find_one().await.unwrap();
    assert!(one.is_none());
}

#[tokio::test]
async fn test_sqlite_insert_many_empty_is_noop() {
    let store = sqlite_store().await;
    assert!(store.insert_many(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cloned_pool_shares_connection() {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::new("sqlite::memory:")
    };
    let pool = DatabasePool::init(&config).await.unwrap();
    let other = pool.clone();

    pool.post_store().insert(new_post("shared", 1)).await.unwrap();

    let count = BaseRepository::<BlogPost, Uuid>::count(&other.post_store())
        .await
        .unwrap();
    assert_eq!(count, 1);
    other.ping().await.unwrap();
}
