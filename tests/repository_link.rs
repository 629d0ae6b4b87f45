mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tiny_link::AppError;
use tiny_link::domain::entities::NewShortLink;
use tiny_link::domain::repositories::LinkRepository;
use tiny_link::infrastructure::persistence::PgLinkRepository;

fn new_link(code: &str, url: &str) -> NewShortLink {
    NewShortLink {
        code: code.to_string(),
        original_url: url.to_string(),
    }
}

async fn clicks_of(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT clicks FROM short_links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test1", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.code, "test1");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.clicks, 0);
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    sqlx::query("INSERT INTO short_links (code, original_url) VALUES ($1, $2)")
        .bind("abc12")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.find_by_code("abc12").await.unwrap();

    assert_eq!(link.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("nope0").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_find_by_code_is_case_sensitive(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("AbCdE", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.find_by_code("abcde").await.unwrap().is_none());
    assert!(repo.find_by_code("AbCdE").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_create_duplicate_code_conflicts(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("dupli", "https://first.com"))
        .await
        .unwrap();

    let err = repo
        .create(new_link("dupli", "https://second.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let link = repo
        .create(new_link("click", "https://example.com"))
        .await
        .unwrap();

    for _ in 0..4 {
        repo.increment_clicks(link.id).await.unwrap();
    }

    assert_eq!(clicks_of(&pool, "click").await, 4);
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let link = repo
        .create(new_link("race1", "https://example.com"))
        .await
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_clicks(link.id).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(clicks_of(&pool, "race1").await, 20);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_create_then_redirect_end_to_end(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let state = common::create_test_state(repo, 2024, None);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let created = server
        .post("/api/links/create")
        .add_header("Host", common::HOST)
        .json(&json!({ "url": "example.com" }))
        .await;
    created.assert_status_ok();

    let body = created.json::<serde_json::Value>();
    assert_eq!(body["originalUrl"], "http://example.com");
    let code = body["code"].as_str().unwrap().to_string();

    for _ in 0..3 {
        let response = server.get(&format!("/{code}")).await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), "http://example.com");
    }

    assert_eq!(clicks_of(&pool, &code).await, 3);
}
