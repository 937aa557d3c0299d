use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    http_client::HttpClients,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::{ConnectionPool, HttpClientConfig};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, http_config: HttpClientConfig) -> Result<Self> {
        let mut registry = Registry::default();

        let http_clients =
            HttpClients::init(http_config).context("Failed to initialize HTTP clients")?;

        let deps = DependenciesInjectDeps { pool, http_clients };

        let di_container = DependenciesInject::new(deps, &mut registry);

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
        })
    }
}
