// Presentation layer - HTTP handlers, routing and HTML components
pub mod app_state;
pub mod components;
pub mod handlers;
pub mod view_model;

use crate::application::dashboard_api::PayloadSection;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, index, refresh, section_payload, toggle_theme, track_scroll, view_json,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Dashboard routes. Compression is applied per response, so no CompressionLayer here.
pub fn router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/view", get(view_json))
        .route("/api/nav", post(track_scroll))
        .route("/refresh", post(refresh))
        .route("/theme", post(toggle_theme));

    let router = PayloadSection::ALL.into_iter().fold(router, |router, section| {
        router.route(
            &format!("/api{}", section.path()),
            get(move |State(state): State<Arc<AppState>>| section_payload(state, section)),
        )
    });

    router.with_state(state)
}
