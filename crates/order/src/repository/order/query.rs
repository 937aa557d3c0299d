use crate::{abstract_trait::order::OrderQueryRepositoryTrait, model::Order as OrderModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all_orders_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        info!("🔍 Fetching orders for user_id: {user_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT
                id,
                user_id,
                restaurant_id,
                total,
                currency_code,
                placed_at
            FROM orders
            WHERE user_id = $1
            ORDER BY placed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders for user_id {user_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} orders for user_id: {user_id}", orders.len());

        Ok(orders)
    }
}
