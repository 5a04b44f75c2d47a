// HTTP request handlers
use crate::application::dashboard_api::PayloadSection;
use crate::application::session::RefreshOutcome;
use crate::domain::navigation::{Section, SectionBounds};
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::components::page;
use crate::presentation::view_model::DashboardView;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct NavResponse {
    pub active: Section,
}

#[derive(Debug, Serialize)]
pub struct UpstreamError {
    pub error: String,
    pub upstream_status: Option<u16>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page for the current session state
pub async fn index(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.session.snapshot().await;
    let alert = state.session.take_alert().await;
    let html = page::render(snapshot, alert).await;

    match html_response(html, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn view_json(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let snapshot = state.session.snapshot().await;
    Json(DashboardView::from_snapshot(&snapshot))
}

/// Pass one backend section through unchanged. Backend failures answer 502.
pub async fn section_payload(state: Arc<AppState>, section: PayloadSection) -> Response {
    match state.session.fetch_section(section).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => {
            let body = UpstreamError {
                error: e.to_string(),
                upstream_status: e.status(),
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

/// Trigger a backend refresh and reload. Runs on its own task so a dropped
/// connection does not abandon the refresh halfway.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.clone();

    match tokio::spawn(async move { session.refresh().await }).await {
        Ok(RefreshOutcome::AlreadyRunning) => {
            (StatusCode::CONFLICT, "Refresh already in progress").into_response()
        }
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::error!("Refresh task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Redirect {
    let theme = state.session.toggle_theme().await;
    tracing::debug!(theme = theme.as_str(), "Theme toggled");
    Redirect::to("/")
}

/// Recompute the active sidebar section from the client's section boxes
pub async fn track_scroll(
    State(state): State<Arc<AppState>>,
    Json(bounds): Json<Vec<SectionBounds>>,
) -> Json<NavResponse> {
    let active = state.session.track_scroll(&bounds).await;
    Json(NavResponse { active })
}

#[cfg(test)]
mod tests {
    use crate::application::session::tests::{FakeApi, MemoryPreferences};
    use crate::application::session::{DashboardSession, REFRESH_FAILED_MESSAGE};
    use crate::domain::theme::THEME_KEY;
    use crate::application::preference_store::PreferenceStore;
    use crate::presentation::app_state::AppState;
    use crate::presentation::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Notify;
    use tower::ServiceExt;

    fn state(api: Arc<FakeApi>, prefs: Arc<MemoryPreferences>) -> Arc<AppState> {
        Arc::new(AppState {
            session: Arc::new(DashboardSession::new(api, prefs)),
        })
    }

    async fn send(state: &Arc<AppState>, method: &str, uri: &str, body: Body) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = state(Arc::new(FakeApi::default()), Arc::new(MemoryPreferences::default()));
        let response = send(&state, "GET", "/healthz", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_index_renders_loaded_dashboard() {
        let api = Arc::new(FakeApi::serving(json!({
            "company": {"revenue": 185000000},
            "fetched_at": "2025-01-05T14:30:00"
        })));
        let state = state(api, Arc::new(MemoryPreferences::default()));
        state.session.load().await;

        let response = send(&state, "GET", "/", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());

        let html = body_text(response).await;
        assert!(html.contains("$185.0M"));
        assert!(html.contains("Data fetched: January 5, 2025 at 02:30 PM"));
    }

    #[tokio::test]
    async fn test_index_compresses_for_brotli_clients() {
        let state = state(Arc::new(FakeApi::default()), Arc::new(MemoryPreferences::default()));
        let request = Request::builder()
            .uri("/")
            .header(header::ACCEPT_ENCODING, "gzip, br")
            .body(Body::empty())
            .unwrap();

        let response = router(state).oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }

    #[tokio::test]
    async fn test_refresh_redirects_after_reload() {
        let api = Arc::new(FakeApi::serving(json!({})));
        let state = state(api.clone(), Arc::new(MemoryPreferences::default()));

        let response = send(&state, "POST", "/refresh", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(api.calls(), vec!["refresh", "data"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_alerts_on_next_page_only() {
        let api = Arc::new(FakeApi::serving(json!({})));
        *api.refresh_status.lock().unwrap() = Some(500);
        let state = state(api, Arc::new(MemoryPreferences::default()));

        let response = send(&state, "POST", "/refresh", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let first = body_text(send(&state, "GET", "/", Body::empty()).await).await;
        assert!(first.contains(REFRESH_FAILED_MESSAGE));
        let second = body_text(send(&state, "GET", "/", Body::empty()).await).await;
        assert!(!second.contains(REFRESH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_overlapping_refresh_conflicts() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(FakeApi {
            payload: StdMutex::new(Some(Default::default())),
            refresh_gate: Some(gate.clone()),
            ..Default::default()
        });
        let state = state(api, Arc::new(MemoryPreferences::default()));

        let first = {
            let state = state.clone();
            tokio::spawn(async move { send(&state, "POST", "/refresh", Body::empty()).await })
        };
        while !state.session.is_refreshing() {
            tokio::task::yield_now().await;
        }

        let second = send(&state, "POST", "/refresh", Body::empty()).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        gate.notify_one();
        assert_eq!(first.await.unwrap().status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let prefs = Arc::new(MemoryPreferences::default());
        let state = state(Arc::new(FakeApi::default()), prefs.clone());

        let response = send(&state, "POST", "/theme", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let html = body_text(send(&state, "GET", "/", Body::empty()).await).await;
        assert!(html.contains(r#"<body class="dark">"#));
    }

    #[tokio::test]
    async fn test_nav_returns_active_section() {
        let state = state(Arc::new(FakeApi::default()), Arc::new(MemoryPreferences::default()));
        let bounds = json!([
            {"id": "overview", "top": -900.0, "bottom": -100.0},
            {"id": "competitors", "top": -100.0, "bottom": 700.0},
            {"id": "growth", "top": 700.0, "bottom": 1500.0}
        ]);

        let response = send(&state, "POST", "/api/nav", Body::from(bounds.to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value, json!({"active": "competitors"}));
    }

    #[tokio::test]
    async fn test_view_reports_error_state() {
        let state = state(Arc::new(FakeApi::default()), Arc::new(MemoryPreferences::default()));
        state.session.load().await;

        let response = send(&state, "GET", "/api/view", Body::empty()).await;
        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(
            value["error"],
            "Failed to load data. Make sure the backend is running."
        );
    }

    #[tokio::test]
    async fn test_section_routes_pass_payload_through() {
        let api = Arc::new(FakeApi::serving(json!({
            "competitors": {"Ouedkniss": {"app_rating": 4.1}, "Batolis": {"app_rating": 3.9}},
            "traffic": {"visits": 1200},
            "news": [{"title": "T", "publishedAt": "2025-03-01"}]
        })));
        let state = state(api.clone(), Arc::new(MemoryPreferences::default()));

        let response = send(&state, "GET", "/api/competitors", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.find("Ouedkniss").unwrap() < text.find("Batolis").unwrap());

        let traffic: serde_json::Value =
            serde_json::from_str(&body_text(send(&state, "GET", "/api/traffic", Body::empty()).await).await)
                .unwrap();
        assert_eq!(traffic["traffic"], json!({"visits": 1200}));
        assert_eq!(traffic["news"][0]["publishedAt"], "2025-03-01");

        for path in ["/api/company", "/api/trends", "/api/news", "/api/app"] {
            let response = send(&state, "GET", path, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert_eq!(
            api.calls(),
            vec!["competitors", "traffic", "company", "trends", "news", "app"]
        );
    }

    #[tokio::test]
    async fn test_section_failure_is_bad_gateway() {
        let state = state(Arc::new(FakeApi::default()), Arc::new(MemoryPreferences::default()));

        let response = send(&state, "GET", "/api/news", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["upstream_status"], 503);
    }
}
