//! Shared test harness for storage backend testing
//!
//! Provides sample values and assertion helpers plus two macros:
//!
//! - `resource_service_tests!` runs the service contract against a pair of
//!   category/order stores
//! - `rest_integration_tests!` drives the same behavior over HTTP
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod resource_service_tests;
#[macro_use]
pub mod rest_tests;

use chrono::NaiveDate;
use storefront::core::error::{ErrorKind, ResourceError};
use storefront::entities::{Category, Order};

// ---------------------------------------------------------------------------
// Sample values
// ---------------------------------------------------------------------------

pub fn electronics() -> Category {
    Category::new("Electronics", "Devices")
}

pub fn category(name: &str) -> Category {
    Category::new(name, format!("{} description", name))
}

pub fn order(number: &str, value: f64) -> Order {
    Order::new(number, format!("Order {}", number), value)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Assertions helpers
// ---------------------------------------------------------------------------

/// Assert that an error carries the expected kind.
pub fn assert_kind(err: &ResourceError, expected: ErrorKind) {
    assert_eq!(
        err.kind(),
        expected,
        "Expected {} error, got {:?}",
        expected,
        err
    );
}

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
