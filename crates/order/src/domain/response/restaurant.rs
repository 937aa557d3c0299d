use crate::model::Restaurant as RestaurantModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct RestaurantResponse {
    pub name: String,
}

impl From<RestaurantModel> for RestaurantResponse {
    fn from(value: RestaurantModel) -> Self {
        RestaurantResponse { name: value.name }
    }
}
