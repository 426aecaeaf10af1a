use crate::middleware::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynCustomerService,
    domain::{
        requests::{CreateCustomerRequest, NameQuery, UpdateCustomerRequest},
        responses::{CustomerResponse, CustomerStatsResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Cliente",
    responses(
        (status = 200, description = "Active customers ordered by name", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_active_customers(
    Extension(service): Extension<DynCustomerService>,
) -> Result<impl IntoResponse, HttpError> {
    let customers = service.list_active().await?;
    Ok((StatusCode::OK, Json(customers)))
}

#[utoipa::path(
    get,
    path = "/api/clientes/todos",
    tag = "Cliente",
    responses(
        (status = 200, description = "Every customer, active or not", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_all_customers(
    Extension(service): Extension<DynCustomerService>,
) -> Result<impl IntoResponse, HttpError> {
    let customers = service.list_all().await?;
    Ok((StatusCode::OK, Json(customers)))
}

#[utoipa::path(
    get,
    path = "/api/clientes/buscar",
    tag = "Cliente",
    params(NameQuery),
    responses(
        (status = 200, description = "Customers matching the name fragment", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_customers(
    Extension(service): Extension<DynCustomerService>,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let customers = service.search_by_name(&query.name).await?;
    Ok((StatusCode::OK, Json(customers)))
}

#[utoipa::path(
    get,
    path = "/api/clientes/cpf/{cpf}",
    tag = "Cliente",
    params(("cpf" = String, Path, description = "Customer CPF")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "No active customer with this CPF"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customer_by_cpf(
    Extension(service): Extension<DynCustomerService>,
    Path(cpf): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = service.find_by_cpf(&cpf).await?;
    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/clientes/estatisticas",
    tag = "Cliente",
    responses(
        (status = 200, description = "Customer counters", body = CustomerStatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn customer_stats(
    Extension(service): Extension<DynCustomerService>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = service.stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Cliente",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Cliente",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "CPF or email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerService>,
    ValidatedJson(body): ValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = service.create_customer(&body).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Cliente",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "CPF or email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let customer = service.update_customer(&body).await?;
    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}/ativar",
    tag = "Cliente",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer activated", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn activate_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = service.activate(id).await?;
    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}/desativar",
    tag = "Cliente",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deactivated", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn deactivate_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = service.deactivate(id).await?;
    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Cliente",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer permanently removed"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove(id).await?;
    Ok(StatusCode::OK)
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/clientes", get(list_active_customers))
        .route("/api/clientes/todos", get(list_all_customers))
        .route("/api/clientes/buscar", get(search_customers))
        .route("/api/clientes/cpf/{cpf}", get(get_customer_by_cpf))
        .route("/api/clientes/estatisticas", get(customer_stats))
        .route("/api/clientes/{id}", get(get_customer))
        .route("/api/clientes", post(create_customer))
        .route("/api/clientes/{id}", put(update_customer))
        .route("/api/clientes/{id}/ativar", put(activate_customer))
        .route("/api/clientes/{id}/desativar", put(deactivate_customer))
        .route("/api/clientes/{id}", delete(delete_customer))
        .layer(Extension(app_state.di_container.customer_service.clone()))
}
