use crate::{abstract_trait::http_client::RestaurantHttpClientTrait, model::Restaurant};
use async_trait::async_trait;
use reqwest::Client;
use shared::errors::HttpClientError;
use std::collections::HashSet;
use tracing::{error, info};

const RESTAURANTS_PATH: &str = "/v1/restaurants";

#[derive(Clone)]
pub struct RestaurantHttpClientService {
    client: Client,
    base_url: String,
}

impl RestaurantHttpClientService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn id_query(ids: &[i32]) -> String {
        let mut seen = HashSet::with_capacity(ids.len());

        ids.iter()
            .filter(|id| seen.insert(**id))
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[async_trait]
impl RestaurantHttpClientTrait for RestaurantHttpClientService {
    async fn get_restaurants_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<Restaurant>, HttpClientError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}{RESTAURANTS_PATH}", self.base_url);
        let id_query = Self::id_query(ids);

        info!("🍽️ Fetching restaurants [{id_query}] from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("id", id_query.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("❌ Restaurant service unreachable: {e}");
                HttpClientError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ Restaurant service responded with {status}");
            return Err(HttpClientError::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(|e| {
            error!("❌ Failed to read restaurant service response: {e}");
            HttpClientError::from(e)
        })?;

        let restaurants: Vec<Restaurant> = serde_json::from_slice(&body).map_err(|e| {
            error!("❌ Malformed restaurant service response: {e}");
            HttpClientError::from(e)
        })?;

        info!("✅ Restaurant service returned {} restaurants", restaurants.len());

        Ok(restaurants)
    }
}
