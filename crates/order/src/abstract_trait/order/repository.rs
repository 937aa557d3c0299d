use crate::model::Order as OrderModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Orders owned by `user_id`, most recently placed first. Restaurants are not attached.
    async fn find_all_orders_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderModel>, RepositoryError>;
}
