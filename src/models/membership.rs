use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    pub id: i64,
    pub sort_order: i32,
    pub price: Decimal,
    pub vip: bool,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}
