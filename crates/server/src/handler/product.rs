use crate::middleware::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynProductService,
    domain::{
        requests::{
            CreateProductRequest, NameQuery, PriceRangeQuery, StockQuery, UpdateProductRequest,
        },
        responses::{ProductResponse, ProductStatsResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produto",
    responses(
        (status = 200, description = "Active products ordered by name", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_active_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.list_active().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/todos",
    tag = "Produto",
    responses(
        (status = 200, description = "Every product, active or not", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_all_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.list_all().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/buscar",
    tag = "Produto",
    params(NameQuery),
    responses(
        (status = 200, description = "Products matching the name fragment", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_products(
    Extension(service): Extension<DynProductService>,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.search_by_name(&query.name).await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/categoria/{categoria}",
    tag = "Produto",
    params(("categoria" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Active products of the category", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products_by_category(
    Extension(service): Extension<DynProductService>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_by_category(&category).await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/marca/{marca}",
    tag = "Produto",
    params(("marca" = String, Path, description = "Brand name")),
    responses(
        (status = 200, description = "Active products of the brand", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products_by_brand(
    Extension(service): Extension<DynProductService>,
    Path(brand): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_by_brand(&brand).await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/codigo-barras/{codigo}",
    tag = "Produto",
    params(("codigo" = String, Path, description = "Barcode")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No active product with this barcode"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product_by_barcode(
    Extension(service): Extension<DynProductService>,
    Path(barcode): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.find_by_barcode(&barcode).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/preco",
    tag = "Produto",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Active products inside the price range", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products_by_price_range(
    Extension(service): Extension<DynProductService>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_by_price_range(&query.min, &query.max).await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/estoque-baixo",
    tag = "Produto",
    responses(
        (status = 200, description = "Products at or below their minimum stock", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_low_stock_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.list_low_stock().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/categorias",
    tag = "Produto",
    responses(
        (status = 200, description = "Distinct categories of active products", body = Vec<String>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_categories(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let categories = service.list_categories().await?;
    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/marcas",
    tag = "Produto",
    responses(
        (status = 200, description = "Distinct brands of active products", body = Vec<String>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_brands(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let brands = service.list_brands().await?;
    Ok((StatusCode::OK, Json(brands)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/estatisticas",
    tag = "Produto",
    responses(
        (status = 200, description = "Inventory counters", body = ProductStatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn product_stats(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = service.stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produto",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let product = service.update_product(&body).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}/estoque",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID"), StockQuery),
    responses(
        (status = 200, description = "Stock overwritten", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn set_product_stock(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, HttpError> {
    if query.quantity < 0 {
        return Err(HttpError::BadRequest(
            "Quantity must not be negative".to_string(),
        ));
    }

    let product = service.set_stock(id, query.quantity).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}/ativar",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product activated", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn activate_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.activate(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}/desativar",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deactivated", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn deactivate_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.deactivate(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "Produto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product permanently removed"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove(id).await?;
    Ok(StatusCode::OK)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/produtos", get(list_active_products))
        .route("/api/produtos/todos", get(list_all_products))
        .route("/api/produtos/buscar", get(search_products))
        .route("/api/produtos/categoria/{categoria}", get(get_products_by_category))
        .route("/api/produtos/marca/{marca}", get(get_products_by_brand))
        .route("/api/produtos/codigo-barras/{codigo}", get(get_product_by_barcode))
        .route("/api/produtos/preco", get(get_products_by_price_range))
        .route("/api/produtos/estoque-baixo", get(list_low_stock_products))
        .route("/api/produtos/categorias", get(list_categories))
        .route("/api/produtos/marcas", get(list_brands))
        .route("/api/produtos/estatisticas", get(product_stats))
        .route("/api/produtos/{id}", get(get_product))
        .route("/api/produtos", post(create_product))
        .route("/api/produtos/{id}", put(update_product))
        .route("/api/produtos/{id}/estoque", put(set_product_stock))
        .route("/api/produtos/{id}/ativar", put(activate_product))
        .route("/api/produtos/{id}/desativar", put(deactivate_product))
        .route("/api/produtos/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
