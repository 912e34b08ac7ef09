//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! the full stack: JSON → HTTP request → handler → service → store → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$services` must evaluate to a `storefront::app::Services`. It is
/// re-evaluated for each test.
///
/// # Generated Tests
///
/// - health checks
/// - category CRUD walk-through, with duplicate names → 409
/// - order walk-through, status preserved across PUT
/// - 400 for malformed ids, malformed bodies and failed field rules
/// - 404 for unknown ids on GET/PUT/DELETE
#[macro_export]
macro_rules! rest_integration_tests {
    ($services:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let services = $services;
                let router = services.into_server().build().unwrap();
                TestServer::try_new(router).unwrap()
            }

            // ==============================================================
            // Health
            // ==============================================================

            #[tokio::test]
            async fn test_rest_health() {
                let server = make_server().await;

                for path in ["/health", "/healthz"] {
                    let response = server.get(path).await;
                    response.assert_status_ok();
                    let body: Value = response.json();
                    assert_eq!(body["status"], "ok");
                }
            }

            // ==============================================================
            // Categories
            // ==============================================================

            #[tokio::test]
            async fn test_rest_category_walkthrough() {
                let server = make_server().await;

                let created = server
                    .post("/api/categories")
                    .json(&json!({"name": "Electronics", "description": "Devices"}))
                    .await;
                created.assert_status(StatusCode::CREATED);
                let body: Value = created.json();
                let id = body["id"].as_i64().unwrap();
                assert_eq!(body, json!({"id": id, "name": "Electronics", "description": "Devices"}));

                let duplicate = server
                    .post("/api/categories")
                    .json(&json!({"name": "Electronics", "description": "Again"}))
                    .await;
                duplicate.assert_status(StatusCode::CONFLICT);
                let error: Value = duplicate.json();
                assert_eq!(error["code"], "VALIDATION_ERROR");
                assert!(error["message"].as_str().unwrap().contains("Electronics"));

                let list: Value = server.get("/api/categories").await.json();
                assert_eq!(list.as_array().unwrap().len(), 1);

                let updated = server
                    .put(&format!("/api/categories/{}", id))
                    .json(&json!({"name": "Electronics", "description": "Gadgets"}))
                    .await;
                updated.assert_status_ok();
                let body: Value = updated.json();
                assert_eq!(body["description"], "Gadgets");

                let fetched: Value = server.get(&format!("/api/categories/{}", id)).await.json();
                assert_eq!(fetched["description"], "Gadgets");

                server
                    .delete(&format!("/api/categories/{}", id))
                    .await
                    .assert_status(StatusCode::NO_CONTENT);

                let gone = server.get(&format!("/api/categories/{}", id)).await;
                gone.assert_status(StatusCode::NOT_FOUND);
                let error: Value = gone.json();
                assert_eq!(error["code"], "NOT_FOUND");
                assert_eq!(
                    error["message"],
                    format!("Category not found with ID: {}", id)
                );
            }

            #[tokio::test]
            async fn test_rest_category_rename_conflict() {
                let server = make_server().await;

                server
                    .post("/api/categories")
                    .json(&json!({"name": "Electronics", "description": "Devices"}))
                    .await
                    .assert_status(StatusCode::CREATED);
                let books: Value = server
                    .post("/api/categories")
                    .json(&json!({"name": "Books", "description": "Paper"}))
                    .await
                    .json();

                let response = server
                    .put(&format!("/api/categories/{}", books["id"]))
                    .json(&json!({"name": "Electronics", "description": "Paper"}))
                    .await;
                response.assert_status(StatusCode::CONFLICT);
            }

            // ==============================================================
            // Orders
            // ==============================================================

            #[tokio::test]
            async fn test_rest_order_walkthrough() {
                let server = make_server().await;

                let created = server
                    .post("/api/orders")
                    .json(&json!({
                        "orderNumber": "ORD-1",
                        "description": "First order",
                        "totalPrice": 100.0
                    }))
                    .await;
                created.assert_status(StatusCode::CREATED);
                let body: Value = created.json();
                let id = body["id"].as_i64().unwrap();
                assert_eq!(body["orderNumber"], "ORD-1");
                assert_eq!(body["totalPrice"], 100.0);
                assert_eq!(body["status"], "Pending");
                assert!(body["orderDate"].is_null());

                let updated = server
                    .put(&format!("/api/orders/{}", id))
                    .json(&json!({
                        "orderNumber": "ORD-1",
                        "description": "First order",
                        "totalPrice": 100.0,
                        "shippingDate": "2024-03-01",
                        "deliveryDate": "2024-03-04"
                    }))
                    .await;
                updated.assert_status_ok();
                let body: Value = updated.json();
                assert_eq!(body["status"], "Pending");
                assert_eq!(body["shippingDate"], "2024-03-01");
                assert_eq!(body["deliveryDate"], "2024-03-04");

                let duplicate = server
                    .post("/api/orders")
                    .json(&json!({
                        "orderNumber": "ORD-1",
                        "description": "Copy",
                        "totalPrice": 5.0
                    }))
                    .await;
                duplicate.assert_status(StatusCode::CONFLICT);

                let list: Value = server.get("/api/orders").await.json();
                assert_eq!(list.as_array().unwrap().len(), 1);
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_error_not_found() {
                let server = make_server().await;

                server
                    .get("/api/categories/999")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .put("/api/categories/999")
                    .json(&json!({"name": "Electronics", "description": "Devices"}))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .delete("/api/orders/999")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_error_invalid_id() {
                let server = make_server().await;

                let response = server.get("/api/orders/not-a-number").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let error: Value = response.json();
                assert_eq!(error["code"], "INVALID_ENTITY_ID");
            }

            #[tokio::test]
            async fn test_rest_error_field_rules() {
                let server = make_server().await;

                let response = server
                    .post("/api/orders")
                    .json(&json!({
                        "orderNumber": " ",
                        "description": "Free",
                        "totalPrice": 0.0
                    }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let error: Value = response.json();
                assert_eq!(error["code"], "INVALID_FIELDS");
                let fields: Vec<&str> = error["details"]["fields"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|f| f["field"].as_str().unwrap())
                    .collect();
                assert_eq!(fields, vec!["order_number", "total_price"]);

                let list: Value = server.get("/api/orders").await.json();
                assert!(list.as_array().unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_rest_error_malformed_body() {
                let server = make_server().await;

                let response = server
                    .post("/api/categories")
                    .json(&json!({"name": "Electronics"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let error: Value = response.json();
                assert_eq!(error["code"], "INVALID_BODY");
            }
        }
    };
}
