use crate::middleware::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynSaleService,
    domain::{
        requests::{CreateSaleRequest, PeriodQuery, UpdateSaleStatusRequest},
        responses::{SaleResponse, SaleStatsResponse},
    },
    errors::HttpError,
    model::SaleStatus,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/vendas",
    tag = "Venda",
    responses(
        (status = 200, description = "Sales, most recent first", body = Vec<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_sales(
    Extension(service): Extension<DynSaleService>,
) -> Result<impl IntoResponse, HttpError> {
    let sales = service.list_all().await?;
    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/dia",
    tag = "Venda",
    responses(
        (status = 200, description = "Today's sales", body = Vec<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_todays_sales(
    Extension(service): Extension<DynSaleService>,
) -> Result<impl IntoResponse, HttpError> {
    let sales = service.list_today().await?;
    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/periodo",
    tag = "Venda",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Sales inside the period", body = Vec<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_sales_by_period(
    Extension(service): Extension<DynSaleService>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let sales = service.find_by_period(&period).await?;
    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/status/{status}",
    tag = "Venda",
    params(("status" = SaleStatus, Path, description = "Sale status")),
    responses(
        (status = 200, description = "Sales with the given status", body = Vec<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_sales_by_status(
    Extension(service): Extension<DynSaleService>,
    Path(status): Path<SaleStatus>,
) -> Result<impl IntoResponse, HttpError> {
    let sales = service.find_by_status(status).await?;
    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/cliente/{id}",
    tag = "Venda",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Sales of the customer", body = Vec<SaleResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_sales_by_customer(
    Extension(service): Extension<DynSaleService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let sales = service.find_by_customer(id).await?;
    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/estatisticas",
    tag = "Venda",
    responses(
        (status = 200, description = "Sales counters", body = SaleStatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn sale_stats(
    Extension(service): Extension<DynSaleService>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = service.stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/vendas/{id}",
    tag = "Venda",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale with its items", body = SaleResponse),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sale(
    Extension(service): Extension<DynSaleService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let sale = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(sale)))
}

#[utoipa::path(
    post,
    path = "/api/vendas",
    tag = "Venda",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded with its items", body = SaleResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Insufficient stock for an item"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_sale(
    Extension(service): Extension<DynSaleService>,
    ValidatedJson(body): ValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let sale = service.create_sale(&body).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

#[utoipa::path(
    put,
    path = "/api/vendas/{id}/status",
    tag = "Venda",
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = UpdateSaleStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = SaleResponse),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_sale_status(
    Extension(service): Extension<DynSaleService>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateSaleStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let sale = service.update_status(id, body.status).await?;
    Ok((StatusCode::OK, Json(sale)))
}

#[utoipa::path(
    delete,
    path = "/api/vendas/{id}",
    tag = "Venda",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale and its items removed"),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_sale(
    Extension(service): Extension<DynSaleService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove(id).await?;
    Ok(StatusCode::OK)
}

pub fn sale_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/vendas", get(list_sales))
        .route("/api/vendas/dia", get(list_todays_sales))
        .route("/api/vendas/periodo", get(list_sales_by_period))
        .route("/api/vendas/status/{status}", get(list_sales_by_status))
        .route("/api/vendas/cliente/{id}", get(list_sales_by_customer))
        .route("/api/vendas/estatisticas", get(sale_stats))
        .route("/api/vendas/{id}", get(get_sale))
        .route("/api/vendas", post(create_sale))
        .route("/api/vendas/{id}/status", put(update_sale_status))
        .route("/api/vendas/{id}", delete(delete_sale))
        .layer(Extension(app_state.di_container.sale_service.clone()))
}
