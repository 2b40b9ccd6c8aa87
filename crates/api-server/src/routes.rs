use crate::error::ApiError;
use application::{
    AddCreditRequest, CreateCustomerRequest, CustomerApp, CustomerResponse, UpdateCustomerRequest,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use domain::SortDirection;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const MAX_NAME_LENGTH: usize = 50;

#[derive(Clone)]
pub struct AppState {
    pub customer_app: Arc<CustomerApp>,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    sort: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/customers/:id/credit", post(add_credit))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn check_name_length(field: &str, value: Option<&str>) -> Result<(), ApiError> {
    match value {
        Some(v) if v.chars().count() > MAX_NAME_LENGTH => Err(ApiError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        ))),
        _ => Ok(()),
    }
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let request = body(payload)?;
    check_name_length("firstName", Some(request.first_name.as_str()))?;
    check_name_length("lastName", Some(request.last_name.as_str()))?;

    let customer = state.customer_app.create_customer.execute(request).await?;
    info!("✅ Created customer {}", customer.id);

    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.customer_app.get_customer.execute(&id).await?;
    Ok(Json(customer))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let request = body(payload)?;
    check_name_length("firstName", request.first_name.as_deref())?;
    check_name_length("lastName", request.last_name.as_deref())?;

    let customer = state.customer_app.update_customer.execute(&id, request).await?;
    Ok(Json(customer))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.customer_app.delete_customer.execute(&id).await?;
    info!("🗑️  Deleted customer {}", id);

    Ok(StatusCode::NO_CONTENT)
}

async fn add_credit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddCreditRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let request = body(payload)?;
    let customer = state.customer_app.add_credit.execute(&id, request).await?;

    Ok(Json(customer))
}

async fn list_customers(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let direction = query
        .sort
        .as_deref()
        .map(str::parse::<SortDirection>)
        .transpose()?;

    let customers = state
        .customer_app
        .list_customers_sorted
        .execute(direction)
        .await?;

    Ok(Json(customers))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
