use crate::middleware::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynCashEntryService,
    domain::{
        requests::{CreateCashEntryRequest, DescriptionQuery, PeriodQuery},
        responses::{CashBalanceResponse, CashEntryResponse, CashSummaryResponse},
    },
    errors::HttpError,
    model::LedgerDirection,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/caixa",
    tag = "Caixa",
    responses(
        (status = 200, description = "Ledger entries, most recent first", body = Vec<CashEntryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_entries(
    Extension(service): Extension<DynCashEntryService>,
) -> Result<impl IntoResponse, HttpError> {
    let entries = service.list_all().await?;
    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    get,
    path = "/api/caixa/tipo/{tipo}",
    tag = "Caixa",
    params(("tipo" = LedgerDirection, Path, description = "entrada or saida")),
    responses(
        (status = 200, description = "Entries of the given direction", body = Vec<CashEntryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_entries_by_direction(
    Extension(service): Extension<DynCashEntryService>,
    Path(direction): Path<LedgerDirection>,
) -> Result<impl IntoResponse, HttpError> {
    let entries = service.find_by_direction(direction).await?;
    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    get,
    path = "/api/caixa/periodo",
    tag = "Caixa",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Entries inside the period", body = Vec<CashEntryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_entries_by_period(
    Extension(service): Extension<DynCashEntryService>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let entries = service.find_by_period(&period).await?;
    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    get,
    path = "/api/caixa/buscar",
    tag = "Caixa",
    params(DescriptionQuery),
    responses(
        (status = 200, description = "Entries matching the description fragment", body = Vec<CashEntryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_entries(
    Extension(service): Extension<DynCashEntryService>,
    Query(query): Query<DescriptionQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let entries = service.search_by_description(&query.description).await?;
    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    get,
    path = "/api/caixa/saldo",
    tag = "Caixa",
    responses(
        (status = 200, description = "Running balance of the latest entry", body = CashBalanceResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn current_balance(
    Extension(service): Extension<DynCashEntryService>,
) -> Result<impl IntoResponse, HttpError> {
    let balance = service.latest_balance().await?;
    Ok((StatusCode::OK, Json(balance)))
}

#[utoipa::path(
    get,
    path = "/api/caixa/resumo",
    tag = "Caixa",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Inflow/outflow totals for the period", body = CashSummaryResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn period_summary(
    Extension(service): Extension<DynCashEntryService>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let summary = service.summary(&period).await?;
    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    post,
    path = "/api/caixa",
    tag = "Caixa",
    request_body = CreateCashEntryRequest,
    responses(
        (status = 201, description = "Ledger entry recorded", body = CashEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_entry(
    Extension(service): Extension<DynCashEntryService>,
    ValidatedJson(body): ValidatedJson<CreateCashEntryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let entry = service.create_entry(&body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub fn cash_entry_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/caixa", get(list_entries))
        .route("/api/caixa/tipo/{tipo}", get(list_entries_by_direction))
        .route("/api/caixa/periodo", get(list_entries_by_period))
        .route("/api/caixa/buscar", get(search_entries))
        .route("/api/caixa/saldo", get(current_balance))
        .route("/api/caixa/resumo", get(period_summary))
        .route("/api/caixa", post(create_entry))
        .layer(Extension(app_state.di_container.cash_entry_service.clone()))
}
