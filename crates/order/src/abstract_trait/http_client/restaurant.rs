use crate::model::Restaurant;
use async_trait::async_trait;
use shared::errors::HttpClientError;
use std::sync::Arc;

pub type DynRestaurantHttpClient = Arc<dyn RestaurantHttpClientTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantHttpClientTrait {
    /// Resolves `ids` in one remote call. The result may omit ids the remote
    /// service does not know; an empty `ids` never reaches the network.
    async fn get_restaurants_by_ids(&self, ids: &[i32])
    -> Result<Vec<Restaurant>, HttpClientError>;
}
