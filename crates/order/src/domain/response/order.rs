use crate::{domain::response::RestaurantResponse, model::Order as OrderModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outward view of an enriched order. The owning user and the raw restaurant
/// id stay internal.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: i32,
    pub restaurant: Option<RestaurantResponse>,
    pub total: i32,
    pub currency_code: String,
    pub placed_at: DateTime<Utc>,
}

// model to response
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            restaurant: value.restaurant.map(RestaurantResponse::from),
            total: value.total,
            currency_code: value.currency_code,
            placed_at: value.placed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Restaurant;
    use chrono::TimeZone;

    #[test]
    fn serializes_only_public_fields() {
        let order = OrderModel {
            id: 5,
            user_id: 5,
            restaurant_id: 9,
            restaurant: Some(Restaurant {
                id: 9,
                name: "Nando's".to_string(),
            }),
            total: 2500,
            currency_code: "GBP".to_string(),
            placed_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(OrderResponse::from(order)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "restaurant": { "name": "Nando's" },
                "total": 2500,
                "currency_code": "GBP",
                "placed_at": "2025-03-01T12:30:00Z"
            })
        );
    }
}
