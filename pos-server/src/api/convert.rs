//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use chrono::{DateTime, Utc};
use shared::models as api;

// ============ Helper ============

pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

// ============ Category ============

impl From<db::CategoryRow> for api::Category {
    fn from(c: db::CategoryRow) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            description: c.description,
        }
    }
}

impl From<db::CategoryRow> for api::CategoryRef {
    fn from(c: db::CategoryRow) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
        }
    }
}

// ============ Dish ============

impl From<db::DishRow> for api::Dish {
    fn from(d: db::DishRow) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name,
            description: d.description,
            price: d.price,
            category: d.category.map(Into::into),
            image: d.image,
            is_available: d.is_available,
        }
    }
}

// ============ Payment ============

impl From<db::PaymentRow> for api::Payment {
    fn from(p: db::PaymentRow) -> Self {
        Self {
            id: p.id.to_string(),
            payment_id: p.payment_id,
            order_id: p.order_id,
            amount: p.amount,
            currency: p.currency,
            status: p.status,
            method: p.method,
            email: p.email,
            contact: p.contact,
            created_at: millis_to_datetime(p.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    #[test]
    fn test_dish_row_into_api() {
        let row = db::DishRow {
            id: RecordId::from_table_key("dish", "d1"),
            name: "Paneer Tikka".into(),
            description: None,
            price: 249.5,
            category: Some(db::CategoryRow {
                id: RecordId::from_table_key("category", "c1"),
                name: "Starters".into(),
                description: Some("hot".into()),
                created_at: 0,
            }),
            image: None,
            is_available: true,
            created_at: 1,
        };
        let dish: api::Dish = row.into();
        assert_eq!(dish.id, "dish:d1");
        let category = dish.category.unwrap();
        assert_eq!(category.id, "category:c1");
        assert_eq!(category.name, "Starters");
    }

    #[test]
    fn test_millis_to_datetime() {
        let dt = millis_to_datetime(1_700_000_000_000);
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }
}
