//! Notes service routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{middleware::auth_middleware, state::AppState};

pub mod auth;
pub mod notes;

/// Create the router for the notes service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/", get(notes::index))
        .route("/logout", get(auth::logout))
        .route("/create", get(notes::create_form).post(notes::create))
        .route("/edit/:note_id", get(notes::edit_form).post(notes::update))
        .route("/delete/:note_id", get(notes::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/register", get(auth::register_form).post(auth::register))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    if healthy {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "notes"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "service": "notes"
            })),
        )
    }
}
