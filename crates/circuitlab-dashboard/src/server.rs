//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

// Embed static files at compile time
const INDEX_HTML: &str = include_str!("../static/index.html");
const APP_JS: &str = include_str!("../static/app.js");
const STYLE_CSS: &str = include_str!("../static/style.css");

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Read-only JSON routes
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/examples", get(api::catalog::list_examples))
        .route("/gates", get(api::catalog::list_gates))
        .route("/circuit", get(api::circuit::get_circuit))
        .route("/circuit/image.png", get(api::circuit::circuit_image));

    // Editing routes the page calls directly
    let action_routes = Router::new()
        .route("/add_gate", post(api::circuit::add_gate))
        .route("/undo", post(api::circuit::undo))
        .route("/reset", get(api::circuit::reset))
        .route("/load_example", get(api::circuit::load_example))
        .route(
            "/simulate",
            get(api::simulate::simulate_query).post(api::simulate::simulate_json),
        );

    // Static file routes
    let static_routes = Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .route("/app.js", get(serve_app_js))
        .route("/style.css", get(serve_style_css));

    Router::new()
        .nest("/api", api_routes)
        .merge(action_routes)
        .merge(static_routes)
        .fallback(serve_index)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Static file handlers

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn serve_app_js() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
}

async fn serve_style_css() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
}
