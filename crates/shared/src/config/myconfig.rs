use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub restaurant: String,
}

impl HttpClientConfig {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let restaurant = lookup("RESTAURANT_SERVICE_BASE_URL")
            .context("Missing environment variable: RESTAURANT_SERVICE_BASE_URL")?;

        let restaurant = restaurant.trim_end_matches('/').to_string();

        if restaurant.is_empty() {
            return Err(anyhow!("RESTAURANT_SERVICE_BASE_URL must not be empty"));
        }

        Ok(Self { restaurant })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations_str = lookup("RUN_MIGRATIONS").unwrap_or_else(|| "true".to_string());

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let otel_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|| "http://otel-collector:4317".to_string());

        Ok(Self {
            database_url,
            run_migrations,
            port,
            otel_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/orders")]))
            .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/orders");
        assert!(config.run_migrations);
        assert_eq!(config.port, 8080);
        assert_eq!(config.otel_endpoint, "http://otel-collector:4317");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn run_migrations_rejects_other_values() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/orders"),
            ("RUN_MIGRATIONS", "yes"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/orders"),
            ("PORT", "eighty"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn restaurant_base_url_drops_trailing_slash() {
        let config = HttpClientConfig::from_lookup(lookup(&[(
            "RESTAURANT_SERVICE_BASE_URL",
            "http://restaurants:8080/",
        )]))
        .unwrap();

        assert_eq!(config.restaurant, "http://restaurants:8080");
    }

    #[test]
    fn restaurant_base_url_is_required() {
        assert!(HttpClientConfig::from_lookup(lookup(&[])).is_err());
        assert!(
            HttpClientConfig::from_lookup(lookup(&[("RESTAURANT_SERVICE_BASE_URL", "/")])).is_err()
        );
    }
}
