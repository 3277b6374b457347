//! Purchase log tests
//!
//! Logging a purchase increments stock; deleting one reverses exactly
//! that quantity.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{spawn_app, spawn_file_app};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Unit Tests
// ============================================================================

#[tokio::test]
async fn test_purchase_increments_stock() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Toilet Paper").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({
                "consumable_type_id": id,
                "quantity": 24,
                "purchase_date": "2024-03-01",
                "price": 18.99,
                "notes": "bulk pack"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(app.quantity(&cookie, "Toilet Paper").await, 24.0);
}

#[tokio::test]
async fn test_negative_purchase_rejected_without_state_change() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Diapers").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": id, "quantity": -5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "quantity");
    assert_eq!(app.quantity(&cookie, "Diapers").await, 0.0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Diapers").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": id, "quantity": 1, "price": -3 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "price");
}

#[tokio::test]
async fn test_purchase_for_unknown_consumable() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let (status, _) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": 9999, "quantity": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_reverses_exact_quantity() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Pasta").await;

    app.request(
        Method::PUT,
        &format!("/api/inventory/{}", id),
        Some(&cookie),
        Some(json!({ "current_quantity": 5 })),
    )
    .await;
    let (_, body) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": id, "quantity": 3 })),
        )
        .await;
    let purchase_id = body["id"].as_i64().unwrap();
    assert_eq!(app.quantity(&cookie, "Pasta").await, 8.0);

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/purchases/{}", purchase_id),
            Some(&cookie),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.quantity(&cookie, "Pasta").await, 5.0);

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/purchases/{}", purchase_id),
            Some(&cookie),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_may_leave_negative_stock() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Cereal").await;

    let (_, body) = app
        .request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": id, "quantity": 3 })),
        )
        .await;
    let purchase_id = body["id"].as_i64().unwrap();

    app.request(
        Method::PUT,
        &format!("/api/inventory/{}", id),
        Some(&cookie),
        Some(json!({ "current_quantity": 1 })),
    )
    .await;
    app.request(
        Method::DELETE,
        &format!("/api/purchases/{}", purchase_id),
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(app.quantity(&cookie, "Cereal").await, -2.0);
}

#[tokio::test]
async fn test_history_order_and_limit() {
    let app = spawn_app().await;
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Butter").await;

    for date in ["2024-01-05", "2024-02-10", "2024-01-20"] {
        app.request(
            Method::POST,
            "/api/purchases",
            Some(&cookie),
            Some(json!({ "consumable_type_id": id, "quantity": 1, "purchase_date": date })),
        )
        .await;
    }

    let (status, body) = app
        .request(Method::GET, "/api/purchases", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["purchase_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-02-10", "2024-01-20", "2024-01-05"]);
    assert_eq!(body[0]["consumable_name"], "Butter");
    assert_eq!(body[0]["unit"], "sticks");

    let (_, body) = app
        .request(Method::GET, "/api/purchases?limit=2", Some(&cookie), None)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_path_and_query_are_validation_errors() {
    let app = spawn_app().await;
    let cookie = app.login().await;

    let (status, body) = app
        .request(Method::GET, "/api/purchases?limit=abc", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = app
        .request(Method::DELETE, "/api/purchases/abc", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_purchases_all_succeed() {
    let app = Arc::new(spawn_file_app().await);
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Paper Towels").await;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..40 {
        let app = Arc::clone(&app);
        let cookie = cookie.clone();
        tasks.spawn(async move {
            app.request(
                Method::POST,
                "/api/purchases",
                Some(&cookie),
                Some(json!({ "consumable_type_id": id, "quantity": 1 })),
            )
            .await
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    assert_eq!(app.quantity(&cookie, "Paper Towels").await, 40.0);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 40);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_purchase_and_usage_keep_stock_consistent() {
    let app = Arc::new(spawn_file_app().await);
    let cookie = app.login().await;
    let id = app.consumable_id(&cookie, "Paper Towels").await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let app = Arc::clone(&app);
        let cookie = cookie.clone();
        tasks.spawn(async move {
            let (uri, body) = if i % 2 == 0 {
                ("/api/purchases", json!({ "consumable_type_id": id, "quantity": 3 }))
            } else {
                ("/api/usage", json!({ "consumable_type_id": id, "quantity_used": 1 }))
            };
            app.request(Method::POST, uri, Some(&cookie), Some(body)).await
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    // 10 purchases of 3, 10 uses of 1
    assert_eq!(app.quantity(&cookie, "Paper Towels").await, 20.0);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Buying then deleting any positive quantity restores the starting stock
    #[test]
    fn prop_purchase_then_delete_restores_stock(
        start in 0u32..100,
        bought in 1u32..1000,
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let app = spawn_app().await;
            let cookie = app.login().await;
            let id = app.consumable_id(&cookie, "Sponges").await;
            let start = f64::from(start);
            let bought = f64::from(bought) / 4.0;

            app.request(
                Method::PUT,
                &format!("/api/inventory/{}", id),
                Some(&cookie),
                Some(json!({ "current_quantity": start })),
            )
            .await;
            let (_, body) = app
                .request(
                    Method::POST,
                    "/api/purchases",
                    Some(&cookie),
                    Some(json!({ "consumable_type_id": id, "quantity": bought })),
                )
                .await;
            assert_eq!(app.quantity(&cookie, "Sponges").await, start + bought);

            let purchase_id = body["id"].as_i64().unwrap();
            app.request(
                Method::DELETE,
                &format!("/api/purchases/{}", purchase_id),
                Some(&cookie),
                None,
            )
            .await;
            assert_eq!(app.quantity(&cookie, "Sponges").await, start);
        });
    }
}
