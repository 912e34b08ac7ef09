//! Order request/response shapes and their mapping to the domain model
//!
//! Over HTTP the order value is called `totalPrice`.

use super::model::Order;
use crate::core::resource::ResourceId;
use crate::core::validation::not_blank;
use crate::server::exposure::rest::ResourceMapper;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`
///
/// Dates and detail are optional; on update an omitted value keeps the
/// stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(custom(function = "not_blank", message = "Order number is required"))]
    pub order_number: String,

    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Total price must be greater than 0"))]
    pub total_price: f64,

    #[serde(default)]
    pub order_date: Option<NaiveDate>,

    #[serde(default)]
    pub shipping_date: Option<NaiveDate>,

    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,

    #[serde(default)]
    pub order_detail: Option<String>,
}

/// Order as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: ResourceId,
    pub order_number: String,
    pub description: String,
    pub total_price: f64,
    pub order_date: Option<NaiveDate>,
    pub shipping_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub order_detail: Option<String>,
    pub status: String,
}

impl ResourceMapper for Order {
    type Request = OrderRequest;
    type Response = OrderResponse;

    fn from_request(request: OrderRequest) -> Self {
        let mut order = Order::new(
            request.order_number,
            request.description,
            request.total_price,
        );
        order.order_date = request.order_date;
        order.shipping_date = request.shipping_date;
        order.delivery_date = request.delivery_date;
        order.order_detail = request.order_detail;
        order
    }

    fn merge_request(&mut self, request: OrderRequest) {
        self.order_number = request.order_number;
        self.description = request.description;
        self.order_value = request.total_price;
        if request.shipping_date.is_some() {
            self.shipping_date = request.shipping_date;
        }
        if request.delivery_date.is_some() {
            self.delivery_date = request.delivery_date;
        }
        if request.order_detail.is_some() {
            self.order_detail = request.order_detail;
        }
    }

    fn to_response(&self) -> OrderResponse {
        OrderResponse {
            id: self.id.unwrap_or_default(),
            order_number: self.order_number.clone(),
            description: self.description.clone(),
            total_price: self.order_value,
            order_date: self.order_date,
            shipping_date: self.shipping_date,
            delivery_date: self.delivery_date,
            order_detail: self.order_detail.clone(),
            status: self.status.clone(),
        }
    }
}
