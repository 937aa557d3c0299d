use crate::{
    abstract_trait::{
        http_client::DynRestaurantHttpClient,
        order::{DynOrderQueryRepository, OrderQueryServiceTrait},
    },
    model::{Order as OrderModel, Restaurant},
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::collections::{HashMap, HashSet};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    restaurant_client: DynRestaurantHttpClient,
    metrics: Metrics,
}

pub struct OrderQueryServiceDeps {
    pub query: DynOrderQueryRepository,
    pub restaurant_client: DynRestaurantHttpClient,
}

impl OrderQueryService {
    pub fn new(deps: OrderQueryServiceDeps, registry: &mut Registry) -> Self {
        let OrderQueryServiceDeps {
            query,
            restaurant_client,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "order_query_service");

        Self {
            query,
            restaurant_client,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        let span = tracing_ctx.cx.span();
        span.add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            span.set_status(SpanStatus::error(message.to_string()));
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        span.end();
    }

    /// Distinct restaurant ids in the order they are first referenced.
    fn distinct_restaurant_ids(orders: &[OrderModel]) -> Vec<i32> {
        let mut seen = HashSet::with_capacity(orders.len());

        orders
            .iter()
            .map(|order| order.restaurant_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Attaches a restaurant to every order, or fails on the first order whose
    /// restaurant is absent. The orders are consumed so a failure leaves no
    /// partially enriched list behind.
    fn attach_restaurants(
        mut orders: Vec<OrderModel>,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<OrderModel>, ServiceError> {
        let restaurants_by_id: HashMap<i32, Restaurant> = restaurants
            .into_iter()
            .map(|restaurant| (restaurant.id, restaurant))
            .collect();

        for order in orders.iter_mut() {
            let restaurant = restaurants_by_id
                .get(&order.restaurant_id)
                .ok_or(ServiceError::RestaurantNotFound(order.restaurant_id))?;

            order.restaurant = Some(restaurant.clone());
        }

        Ok(orders)
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all_orders_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderModel>, ServiceError> {
        info!("📦 Finding orders for user_id: {user_id}");

        let method = Method::Get;

        let tracing_ctx = self.start_tracing(
            "find_all_orders_by_user_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("user_id", user_id.to_string()),
            ],
        );

        let orders = match self.query.find_all_orders_by_user_id(user_id).await {
            Ok(orders) => orders,
            Err(e) => {
                let log_message = format!("Failed to fetch orders for user_id {user_id}: {e}");
                self.complete_tracing_error(&tracing_ctx, method, &log_message);
                return Err(ServiceError::Repo(e));
            }
        };

        if orders.is_empty() {
            self.complete_tracing_success(
                &tracing_ctx,
                method,
                &format!("No orders found for user_id {user_id}"),
            );
            return Ok(orders);
        }

        let restaurant_ids = Self::distinct_restaurant_ids(&orders);

        tracing_ctx.cx.span().add_event(
            "Orders loaded",
            vec![
                KeyValue::new("order_count", orders.len() as i64),
                KeyValue::new("restaurant_count", restaurant_ids.len() as i64),
            ],
        );

        let restaurants = match self
            .restaurant_client
            .get_restaurants_by_ids(&restaurant_ids)
            .await
        {
            Ok(restaurants) => restaurants,
            Err(e) => {
                let log_message = format!("Failed to fetch restaurants for user_id {user_id}: {e}");
                self.complete_tracing_error(&tracing_ctx, method, &log_message);
                return Err(ServiceError::Client(e));
            }
        };

        match Self::attach_restaurants(orders, restaurants) {
            Ok(orders) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    &format!("Found {} orders for user_id {user_id}", orders.len()),
                );
                Ok(orders)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to enrich orders for user_id {user_id}: {e}"),
                );
                Err(e)
            }
        }
    }
}
