use crate::middleware::ValidatedJson;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use shared::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::LoginResponse,
    },
    errors::{HttpError, RepositoryError, ServiceError},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Session token: account id plus a timestamp. A stand-in until a signed
/// token scheme lands; it carries no proof of anything.
fn mint_token(user_id: i32) -> String {
    format!("token_{}_{}", user_id, Utc::now().timestamp_millis())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    match service.authenticate(&body.email, &body.password).await {
        Ok(user) => {
            let token = mint_token(user.id);
            Ok((
                StatusCode::OK,
                Json(LoginResponse::success("Login successful", token, user)),
            ))
        }
        Err(ServiceError::InvalidCredentials) => Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure("Invalid email or password")),
        )),
        Err(err) => Err(HttpError::from(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/cadastro",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = LoginResponse),
        (status = 409, description = "Email already registered", body = LoginResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    match service.register(&body).await {
        Ok(user) => {
            // Token issued right away so registration doubles as login.
            let token = mint_token(user.id);
            Ok((
                StatusCode::CREATED,
                Json(LoginResponse::success("Account created successfully", token, user)),
            ))
        }
        Err(ServiceError::Repo(RepositoryError::AlreadyExists(_))) => Ok((
            StatusCode::CONFLICT,
            Json(LoginResponse::failure("Email is already registered")),
        )),
        Err(err) => Err(HttpError::from(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses((status = 200, description = "Logout successful", body = LoginResponse))
)]
pub async fn logout_handler() -> Result<impl IntoResponse, HttpError> {
    // Nothing to invalidate server-side while the token is a placeholder.
    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            message: "Logout successful".into(),
            token: None,
            user: None,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/test",
    tag = "Auth",
    responses((status = 200, description = "Auth API is up"))
)]
pub async fn health_handler() -> Result<impl IntoResponse, HttpError> {
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": "Authentication API is up"
        })),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/cadastro", post(register_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/test", get(health_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
