use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;

pub type ConnectionPool = Pool<Postgres>;

pub const DB_POOL_SIZE: u32 = 5;
const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(connection_string: &str) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(DB_POOL_SIZE)
            .acquire_timeout(DB_ACQUIRE_TIMEOUT)
            .connect(connection_string)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}
