//! Row types and column bindings for the postgres tables

use super::PgResource;
use crate::core::resource::ResourceId;
use crate::entities::{Category, Order};
use chrono::NaiveDate;
use sqlx::Postgres;
use sqlx::query_builder::Separated;

/// Row of the `categories` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category {
            id: Some(record.id),
            name: record.name,
            description: record.description,
        }
    }
}

impl PgResource for Category {
    const TABLE: &'static str = "categories";
    const UNIQUE_COLUMN: &'static str = "name";
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    type Record = CategoryRecord;

    fn bind_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(self.name.clone());
        values.push_bind(self.description.clone());
    }
}

/// Row of the `orders` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: ResourceId,
    pub order_number: String,
    pub description: String,
    pub order_value: f64,
    pub order_date: Option<NaiveDate>,
    pub shipping_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub order_detail: Option<String>,
    pub status: String,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            id: Some(record.id),
            order_number: record.order_number,
            description: record.description,
            order_value: record.order_value,
            order_date: record.order_date,
            shipping_date: record.shipping_date,
            delivery_date: record.delivery_date,
            order_detail: record.order_detail,
            status: record.status,
        }
    }
}

impl PgResource for Order {
    const TABLE: &'static str = "orders";
    const UNIQUE_COLUMN: &'static str = "order_number";
    const COLUMNS: &'static [&'static str] = &[
        "order_number",
        "description",
        "order_value",
        "order_date",
        "shipping_date",
        "delivery_date",
        "order_detail",
        "status",
    ];

    type Record = OrderRecord;

    fn bind_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(self.order_number.clone());
        values.push_bind(self.description.clone());
        values.push_bind(self.order_value);
        values.push_bind(self.order_date);
        values.push_bind(self.shipping_date);
        values.push_bind(self.delivery_date);
        values.push_bind(self.order_detail.clone());
        values.push_bind(self.status.clone());
    }
}
