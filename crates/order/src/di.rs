use crate::{
    abstract_trait::{
        http_client::DynRestaurantHttpClient,
        order::{DynOrderQueryRepository, DynOrderQueryService},
    },
    http_client::HttpClients,
    repository::order::OrderQueryRepository,
    service::order::{OrderQueryService, OrderQueryServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub http_clients: HttpClients,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { pool, http_clients } = deps;

        let order_query_repo: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool));

        let restaurant_client: DynRestaurantHttpClient = Arc::new(http_clients.restaurant);

        let order_query_deps = OrderQueryServiceDeps {
            query: order_query_repo,
            restaurant_client,
        };

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_deps, registry));

        Self { order_query }
    }
}
