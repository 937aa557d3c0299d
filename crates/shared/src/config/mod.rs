mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, DB_POOL_SIZE};
pub use self::myconfig::{Config, HttpClientConfig};
