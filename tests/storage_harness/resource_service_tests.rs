//! Macro-generated test suite for the resource service contract.
//!
//! The `resource_service_tests!` macro wraps the given stores in
//! `StoreService` and checks the observable behavior every backend must
//! share: id assignment, uniqueness rules, missing ids, rollback and the
//! order status lifecycle.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! resource_service_tests!(
//!     categories: InMemoryStore::<Category>::new(),
//!     orders: InMemoryStore::<Order>::new()
//! );
//! ```

/// Generate a full service conformance test suite.
///
/// Both factories are re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! resource_service_tests {
    (categories: $category_store:expr, orders: $order_store:expr) => {
        mod resource_service_contract_tests {
            use super::*;
            use storefront::core::error::ErrorKind;
            use storefront::core::service::{ResourceService, StoreService};
            use storefront::entities::{Category, Order};

            async fn categories() -> StoreService<Category> {
                StoreService::new($category_store)
            }

            async fn orders() -> StoreService<Order> {
                StoreService::new($order_store)
            }

            // ==================================================================
            // Create & find
            // ==================================================================

            #[tokio::test]
            async fn test_save_then_find_by_id() {
                let service = categories().await;

                let saved = service.save(electronics()).await.unwrap();
                let id = saved.id.expect("saved category has an id");
                assert_eq!(saved.name, "Electronics");

                let found = service.find_by_id(id).await.unwrap();
                assert_eq!(found, saved);
                assert_eq!(service.find_by_id(id).await.unwrap(), found);
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let service = categories().await;
                assert!(service.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_find_all_in_id_order() {
                let service = categories().await;
                for name in ["Books", "Garden", "Audio"] {
                    service.save(category(name)).await.unwrap();
                }

                let all = service.find_all().await.unwrap();
                assert_count(&all, 3);
                let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["Books", "Garden", "Audio"]);
                assert!(all.windows(2).all(|w| w[0].id < w[1].id));
            }

            // ==================================================================
            // Uniqueness
            // ==================================================================

            #[tokio::test]
            async fn test_duplicate_name_is_rejected() {
                let service = categories().await;
                service.save(electronics()).await.unwrap();

                let err = service
                    .save(Category::new("Electronics", "Other"))
                    .await
                    .unwrap_err();

                assert_kind(&err, ErrorKind::Validation);
                assert!(err.message().contains("Electronics"));
                assert_count(&service.find_all().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_update_keeping_name_is_allowed() {
                let service = categories().await;
                let saved = service.save(electronics()).await.unwrap();
                let id = saved.id.unwrap();

                let updated = service
                    .update(Category::new("Electronics", "Gadgets"), id)
                    .await
                    .unwrap();

                assert_eq!(updated.id, Some(id));
                assert_eq!(updated.description, "Gadgets");
                assert_eq!(service.find_by_id(id).await.unwrap(), updated);
            }

            #[tokio::test]
            async fn test_update_to_taken_name_is_rejected() {
                let service = categories().await;
                service.save(electronics()).await.unwrap();
                let books = service.save(category("Books")).await.unwrap();
                let books_id = books.id.unwrap();

                let err = service
                    .update(Category::new("Electronics", "x"), books_id)
                    .await
                    .unwrap_err();

                assert_kind(&err, ErrorKind::Validation);
                assert_eq!(service.find_by_id(books_id).await.unwrap(), books);
            }

            #[tokio::test]
            async fn test_update_to_free_name() {
                let service = categories().await;
                let saved = service.save(electronics()).await.unwrap();
                let id = saved.id.unwrap();

                let renamed = service
                    .update(Category::new("Gadgets", "Devices"), id)
                    .await
                    .unwrap();
                assert_eq!(renamed.name, "Gadgets");

                // The old name is free again
                service.save(electronics()).await.unwrap();
                assert_count(&service.find_all().await.unwrap(), 2);
            }

            #[tokio::test]
            async fn test_concurrent_duplicate_saves() {
                let service = categories().await;

                let mut handles = Vec::new();
                for i in 0..5 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .save(Category::new("Electronics", format!("attempt {}", i)))
                            .await
                    }));
                }

                let mut created = 0;
                for handle in handles {
                    match handle.await.unwrap() {
                        Ok(_) => created += 1,
                        Err(err) => assert_kind(&err, ErrorKind::Validation),
                    }
                }

                assert_eq!(created, 1);
                assert_count(&service.find_all().await.unwrap(), 1);
            }

            // ==================================================================
            // Missing ids
            // ==================================================================

            #[tokio::test]
            async fn test_find_missing_id() {
                let service = categories().await;

                let err = service.find_by_id(999).await.unwrap_err();
                assert_kind(&err, ErrorKind::NotFound);
                assert_eq!(err.message(), "Category not found with ID: 999");
            }

            #[tokio::test]
            async fn test_update_missing_id() {
                let service = categories().await;

                let err = service.update(electronics(), 999).await.unwrap_err();
                assert_kind(&err, ErrorKind::NotFound);
                assert!(service.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_missing_id() {
                let service = categories().await;

                let err = service.delete_by_id(999).await.unwrap_err();
                assert_kind(&err, ErrorKind::NotFound);
            }

            #[tokio::test]
            async fn test_delete_then_find() {
                let service = categories().await;
                let saved = service.save(electronics()).await.unwrap();
                let id = saved.id.unwrap();

                service.delete_by_id(id).await.unwrap();

                let err = service.find_by_id(id).await.unwrap_err();
                assert_kind(&err, ErrorKind::NotFound);
                assert!(service.find_all().await.unwrap().is_empty());
            }

            // ==================================================================
            // Orders
            // ==================================================================

            #[tokio::test]
            async fn test_order_lifecycle_keeps_status() {
                let service = orders().await;

                let created = service.save(order("ORD-1", 100.0)).await.unwrap();
                let id = created.id.unwrap();
                assert_eq!(created.status, "Pending");
                assert!(created.order_date.is_none());

                let mut candidate = created.clone();
                candidate.shipping_date = Some(date(2024, 3, 1));
                candidate.delivery_date = Some(date(2024, 3, 4));
                candidate.status = "Delivered".to_string();

                let updated = service.update(candidate, id).await.unwrap();
                assert_eq!(updated.status, "Pending");
                assert_eq!(updated.order_value, 100.0);
                assert_eq!(updated.shipping_date, Some(date(2024, 3, 1)));
                assert_eq!(updated.delivery_date, Some(date(2024, 3, 4)));
                assert_eq!(service.find_by_id(id).await.unwrap(), updated);
            }

            #[tokio::test]
            async fn test_order_keeps_client_order_date() {
                let service = orders().await;

                let mut candidate = order("ORD-7", 12.5);
                candidate.order_date = Some(date(2024, 1, 15));
                candidate.order_detail = Some("gift wrap".to_string());

                let created = service.save(candidate).await.unwrap();
                let found = service.find_by_id(created.id.unwrap()).await.unwrap();
                assert_eq!(found.order_date, Some(date(2024, 1, 15)));
                assert_eq!(found.order_detail.as_deref(), Some("gift wrap"));
            }

            #[tokio::test]
            async fn test_duplicate_order_number() {
                let service = orders().await;
                service.save(order("ORD-1", 100.0)).await.unwrap();

                let err = service.save(order("ORD-1", 5.0)).await.unwrap_err();
                assert_kind(&err, ErrorKind::Validation);
                assert!(err.message().contains("ORD-1"));
                assert_count(&service.find_all().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_order_renumber_to_taken_number() {
                let service = orders().await;
                service.save(order("ORD-1", 100.0)).await.unwrap();
                let second = service.save(order("ORD-2", 50.0)).await.unwrap();

                let mut candidate = second.clone();
                candidate.order_number = "ORD-1".to_string();
                let err = service
                    .update(candidate, second.id.unwrap())
                    .await
                    .unwrap_err();

                assert_kind(&err, ErrorKind::Validation);
            }
        }
    };
}
