mod restaurant;

pub use self::restaurant::RestaurantHttpClientService;

use anyhow::{Context, Result};
use reqwest::Client;
use shared::config::HttpClientConfig;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpClients {
    pub restaurant: RestaurantHttpClientService,
}

impl HttpClients {
    pub fn init(config: HttpClientConfig) -> Result<Self> {
        let restaurant_client = Self::build("restaurant-service")?;

        Ok(Self {
            restaurant: RestaurantHttpClientService::new(restaurant_client, config.restaurant),
        })
    }

    fn build(service: &str) -> Result<Client> {
        Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("order-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| format!("Failed to build HTTP client for {service}"))
    }
}
