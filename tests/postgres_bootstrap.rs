//! End-to-end tests against a real PostgreSQL server.
//!
//! Marked `#[ignore]`; run with `cargo test -- --ignored` and point
//! `HN_BOOTSTRAP_TEST_DATABASE_URL` at a disposable database. The test drops
//! and recreates `posts` there.

mod helpers;

use helpers::{config_for, test_database_url};
use hn_bootstrap::{connect, run_bootstrap, Post, SchemaCatalog, TableOutcome};
use sqlx::Connection;

#[tokio::test]
#[ignore = "requires a PostgreSQL server (HN_BOOTSTRAP_TEST_DATABASE_URL)"]
async fn test_bootstrap_is_idempotent_against_postgres() {
    let Some(url) = test_database_url() else {
        eprintln!("skipping: HN_BOOTSTRAP_TEST_DATABASE_URL is not set");
        return;
    };
    let config = config_for(&url);

    let mut conn = connect(&config).await.expect("connect to test database");
    sqlx::query("DROP TABLE IF EXISTS posts")
        .execute(&mut conn)
        .await
        .expect("drop posts");
    let before = conn.list_tables().await.expect("list tables");
    assert!(!before.iter().any(|t| t == "posts"));

    // Empty database: the table is created with the six columns
    let first = run_bootstrap(config.clone()).await.expect("first run");
    assert_eq!(first.outcome, TableOutcome::Created);
    assert_eq!(first.table, "posts");

    let tables = conn.list_tables().await.expect("list tables");
    assert_eq!(tables.iter().filter(|t| t.as_str() == "posts").count(), 1);
    let mut sorted = tables.clone();
    sorted.sort();
    assert_eq!(tables, sorted, "catalog query must be ordered by name");
    assert_eq!(
        conn.table_columns("posts").await.expect("columns"),
        vec!["id", "title", "url", "type", "score", "timestamp"]
    );

    // Second run: no schema change
    let second = run_bootstrap(config).await.expect("second run");
    assert_eq!(second.outcome, TableOutcome::AlreadyExists);
    let after = conn.list_tables().await.expect("list tables");
    assert_eq!(after, tables);

    // The row model matches what the DDL produced; id is generated
    sqlx::query("INSERT INTO posts (title, url, type, score, timestamp) VALUES ($1, $2, $3, $4, $5)")
        .bind("Show HN: a thing")
        .bind("https://example.com")
        .bind("story")
        .bind(42_i32)
        .bind(
            chrono::NaiveDate::from_ymd_opt(2020, 1, 2)
                .and_then(|d| d.and_hms_opt(3, 4, 5))
                .expect("valid timestamp"),
        )
        .execute(&mut conn)
        .await
        .expect("insert post");
    sqlx::query("INSERT INTO posts DEFAULT VALUES")
        .execute(&mut conn)
        .await
        .expect("all columns but id are nullable");

    let posts: Vec<Post> = sqlx::query_as("SELECT * FROM posts ORDER BY id")
        .fetch_all(&mut conn)
        .await
        .expect("read posts");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].kind.as_deref(), Some("story"));
    assert_eq!(posts[0].score, Some(42));
    assert!(posts[1].id > posts[0].id);
    assert!(posts[1].title.is_none() && posts[1].timestamp.is_none());

    sqlx::query("DROP TABLE posts")
        .execute(&mut conn)
        .await
        .expect("cleanup");
    conn.close().await.expect("close");
}
