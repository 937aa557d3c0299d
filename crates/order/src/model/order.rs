use crate::model::Restaurant;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A placed order as stored in the `orders` table.
///
/// `restaurant` is never read from or written to storage; the order service
/// fills it in after resolving `restaurant_id` against the restaurant service.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    #[sqlx(skip)]
    pub restaurant: Option<Restaurant>,
    pub total: i32,
    pub currency_code: String,
    pub placed_at: DateTime<Utc>,
}
