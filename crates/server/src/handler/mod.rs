mod auth;
mod cash_entry;
mod customer;
mod product;
mod sale;

use crate::middleware::track_metrics;
use anyhow::Result;
use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::state::AppState;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cash_entry::cash_entry_routes;
pub use self::customer::customer_routes;
pub use self::product::product_routes;
pub use self::sale::sale_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_handler,
        auth::register_handler,
        auth::logout_handler,
        auth::health_handler,

        customer::list_active_customers,
        customer::list_all_customers,
        customer::search_customers,
        customer::get_customer_by_cpf,
        customer::customer_stats,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::activate_customer,
        customer::deactivate_customer,
        customer::delete_customer,

        product::list_active_products,
        product::list_all_products,
        product::search_products,
        product::get_products_by_category,
        product::get_products_by_brand,
        product::get_product_by_barcode,
        product::get_products_by_price_range,
        product::list_low_stock_products,
        product::list_categories,
        product::list_brands,
        product::product_stats,
        product::get_product,
        product::create_product,
        product::update_product,
        product::set_product_stock,
        product::activate_product,
        product::deactivate_product,
        product::delete_product,

        sale::list_sales,
        sale::list_todays_sales,
        sale::list_sales_by_period,
        sale::list_sales_by_status,
        sale::list_sales_by_customer,
        sale::sale_stats,
        sale::get_sale,
        sale::create_sale,
        sale::update_sale_status,
        sale::delete_sale,

        cash_entry::list_entries,
        cash_entry::list_entries_by_direction,
        cash_entry::list_entries_by_period,
        cash_entry::search_entries,
        cash_entry::current_balance,
        cash_entry::period_summary,
        cash_entry::create_entry,
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Cliente", description = "Customer endpoints"),
        (name = "Produto", description = "Product and inventory endpoints"),
        (name = "Venda", description = "Sales endpoints"),
        (name = "Caixa", description = "Cash ledger endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(sale_routes(shared_state.clone()))
            .merge(cash_entry_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(middleware::from_fn_with_state(
                shared_state.clone(),
                track_metrics,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");
        println!("   📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
