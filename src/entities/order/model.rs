//! Order domain model

use crate::core::resource::{Resource, ResourceId};
use chrono::NaiveDate;

/// Status assigned by the store when an order is inserted without one
pub const DEFAULT_STATUS: &str = "Pending";

/// A customer order, unique by order number
///
/// `status` is an opaque label; no transition rules apply here.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: Option<ResourceId>,
    pub order_number: String,
    pub description: String,
    pub order_value: f64,
    pub order_date: Option<NaiveDate>,
    pub shipping_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub order_detail: Option<String>,
    pub status: String,
}

impl Order {
    /// Create an unsaved order with no dates, detail or status
    pub fn new(
        order_number: impl Into<String>,
        description: impl Into<String>,
        order_value: f64,
    ) -> Self {
        Self {
            id: None,
            order_number: order_number.into(),
            description: description.into(),
            order_value,
            order_date: None,
            shipping_date: None,
            delivery_date: None,
            order_detail: None,
            status: String::new(),
        }
    }
}

impl Resource for Order {
    const ENTITY_NAME: &'static str = "Order";
    const COLLECTION_NAME: &'static str = "orders";
    const UNIQUE_FIELD: &'static str = "orderNumber";

    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn set_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    fn unique_key(&self) -> &str {
        &self.order_number
    }

    /// `status` and `order_date` are never copied
    fn apply_update(&mut self, candidate: Self) {
        self.order_number = candidate.order_number;
        self.description = candidate.description;
        self.shipping_date = candidate.shipping_date;
        self.delivery_date = candidate.delivery_date;
        self.order_value = candidate.order_value;
        self.order_detail = candidate.order_detail;
    }

    fn duplicate_message(key: &str) -> String {
        format!("An order with number '{}' already exists", key)
    }

    fn apply_defaults(&mut self) {
        if self.status.trim().is_empty() {
            self.status = DEFAULT_STATUS.to_string();
        }
    }
}
