use crate::model::Order as OrderModel;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all_orders_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderModel>, ServiceError>;
}
