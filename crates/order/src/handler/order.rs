use crate::{
    abstract_trait::order::DynOrderQueryService, domain::response::OrderResponse,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/users/{id}/orders",
    tag = "Order",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Orders placed by the user, most recent first", body = Vec<OrderResponse>),
        (status = 400, description = "User ID is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = id.parse::<i32>().map_err(|_| {
        warn!("Rejected non-integer user id: {id:?}");
        HttpError::BadRequest("User ID must be an integer".into())
    })?;

    let orders = service.find_all_orders_by_user_id(user_id).await?;

    let response: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

    info!("Returning {} orders for user_id {user_id}", response.len());

    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/users/{id}/orders", get(get_user_orders))
        .layer(Extension(app_state.di_container.order_query.clone()))
}

#[cfg(test)]
mod tests {
    use crate::{
        abstract_trait::order::MockOrderQueryServiceTrait,
        di::DependenciesInject,
        handler::AppRouter,
        model::{Order, Restaurant},
        state::AppState,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use prometheus_client::registry::Registry;
    use shared::errors::{RepositoryError, ServiceError};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(service: MockOrderQueryServiceTrait) -> Router {
        let state = AppState {
            di_container: DependenciesInject {
                order_query: Arc::new(service),
            },
            registry: Arc::new(Registry::default()),
        };

        AppRouter::build(Arc::new(state))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn non_integer_id_is_a_bad_request() {
        let mut service = MockOrderQueryServiceTrait::new();
        service.expect_find_all_orders_by_user_id().times(0);

        let response = get(app(service), "/users/abc/orders").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["status"], "error");
    }

    #[tokio::test]
    async fn fractional_id_is_a_bad_request() {
        let mut service = MockOrderQueryServiceTrait::new();
        service.expect_find_all_orders_by_user_id().times(0);

        let response = get(app(service), "/users/5.5/orders").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn service_error_is_an_internal_error() {
        let mut service = MockOrderQueryServiceTrait::new();
        service
            .expect_find_all_orders_by_user_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Err(ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))));

        let response = get(app(service), "/users/5/orders").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["message"], "Internal server error");
    }

    #[tokio::test]
    async fn missing_restaurant_is_an_internal_error() {
        let mut service = MockOrderQueryServiceTrait::new();
        service
            .expect_find_all_orders_by_user_id()
            .returning(|_| Err(ServiceError::RestaurantNotFound(9)));

        let response = get(app(service), "/users/5/orders").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn orders_are_serialized_without_internal_ids() {
        let mut service = MockOrderQueryServiceTrait::new();
        service
            .expect_find_all_orders_by_user_id()
            .with(eq(5))
            .times(1)
            .returning(|_| {
                Ok(vec![Order {
                    id: 5,
                    user_id: 5,
                    restaurant_id: 9,
                    restaurant: Some(Restaurant {
                        id: 9,
                        name: "Nando's".to_string(),
                    }),
                    total: 2500,
                    currency_code: "GBP".to_string(),
                    placed_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
                }])
            });

        let response = get(app(service), "/users/5/orders").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!([{
                "id": 5,
                "restaurant": { "name": "Nando's" },
                "total": 2500,
                "currency_code": "GBP",
                "placed_at": "2025-03-01T12:30:00Z"
            }])
        );
    }

    #[tokio::test]
    async fn empty_result_is_an_empty_array() {
        let mut service = MockOrderQueryServiceTrait::new();
        service
            .expect_find_all_orders_by_user_id()
            .returning(|_| Ok(vec![]));

        let response = get(app(service), "/users/5/orders").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn openapi_document_lists_the_orders_route() {
        let response = get(app(MockOrderQueryServiceTrait::new()), "/api-docs/openapi.json").await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"]["/users/{id}/orders"]["get"].is_object());
    }
}
