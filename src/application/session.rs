// Dashboard session - Owns the fetched payload, theme and UI toggles
use crate::application::dashboard_api::{ApiResult, DashboardApi, PayloadSection};
use crate::application::preference_store::PreferenceStore;
use crate::domain::navigation::{Section, SectionBounds, Sidebar};
use crate::domain::payload::DashboardPayload;
use crate::domain::theme::{ThemeMode, THEME_KEY};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Make sure the backend is running.";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh data. Check the server logs for details.";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Ready(Arc<DashboardPayload>),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    TriggerFailed,
    AlreadyRunning,
}

/// Consistent copy of the session for one render
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub theme: ThemeMode,
    pub refreshing: bool,
    pub active_section: Section,
}

pub struct DashboardSession {
    api: Arc<dyn DashboardApi>,
    preferences: Arc<dyn PreferenceStore>,
    state: RwLock<SessionState>,
    theme: RwLock<ThemeMode>,
    sidebar: RwLock<Sidebar>,
    alert: Mutex<Option<String>>,
    refreshing: AtomicBool,
}

// Clears the refreshing flag even if the refresh future is dropped.
struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl DashboardSession {
    pub fn new(api: Arc<dyn DashboardApi>, preferences: Arc<dyn PreferenceStore>) -> Self {
        let stored = match preferences.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not read theme preference: {}", e);
                None
            }
        };
        let theme = ThemeMode::from_stored(stored.as_deref());

        Self {
            api,
            preferences,
            state: RwLock::new(SessionState::Loading),
            theme: RwLock::new(theme),
            sidebar: RwLock::new(Sidebar::default()),
            alert: Mutex::new(None),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Kick off the initial fetch in the background
    pub fn start(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let session = Arc::clone(self);
        tokio::spawn(async move { session.load().await })
    }

    /// Fetch the aggregate payload, moving through `Loading` to `Ready` or `Error`
    pub async fn load(&self) {
        *self.state.write().await = SessionState::Loading;

        let next = match self.api.all_data().await {
            Ok(payload) => {
                tracing::info!(
                    fetched_at = payload.fetched_at.as_deref().unwrap_or("unknown"),
                    "Dashboard data loaded"
                );
                SessionState::Ready(Arc::new(payload))
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                SessionState::Error(LOAD_FAILED_MESSAGE.to_string())
            }
        };

        *self.state.write().await = next;
    }

    /// Trigger a backend refresh, then reload. The trigger completes before the reload starts.
    pub async fn refresh(&self) -> RefreshOutcome {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Refresh requested while another is in flight");
            return RefreshOutcome::AlreadyRunning;
        }
        let _guard = RefreshGuard(&self.refreshing);

        match self.api.refresh().await {
            Ok(report) => {
                tracing::info!(
                    status = report.status.as_deref().unwrap_or("unknown"),
                    detail = report.message.as_deref().unwrap_or(""),
                    "Backend refresh finished"
                );
                if let Some(output) = report.output.as_deref().filter(|s| !s.is_empty()) {
                    tracing::debug!("Backend refresh output: {}", output);
                }
                if let Some(stderr) = report.error.as_deref().filter(|s| !s.is_empty()) {
                    tracing::warn!("Backend refresh reported errors: {}", stderr);
                }
                self.load().await;
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                tracing::error!("Failed to refresh data: {}", e);
                *self.alert.lock().await = Some(REFRESH_FAILED_MESSAGE.to_string());
                RefreshOutcome::TriggerFailed
            }
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Flip the theme and mirror it to the preference store
    pub async fn toggle_theme(&self) -> ThemeMode {
        let next = {
            let mut theme = self.theme.write().await;
            *theme = theme.toggled();
            *theme
        };

        // The store does blocking file I/O; the theme lock is already released here.
        let preferences = Arc::clone(&self.preferences);
        let persisted =
            tokio::task::spawn_blocking(move || preferences.set(THEME_KEY, next.as_str())).await;
        match persisted {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Could not persist theme preference: {}", e),
            Err(e) => tracing::warn!("Theme preference write did not complete: {}", e),
        }
        next
    }

    /// Fetch one backend section directly, bypassing the held payload
    pub async fn fetch_section(&self, section: PayloadSection) -> ApiResult<DashboardPayload> {
        match section {
            PayloadSection::Company => self.api.company().await,
            PayloadSection::Competitors => self.api.competitors().await,
            PayloadSection::Trends => self.api.trends().await,
            PayloadSection::News => self.api.news().await,
            PayloadSection::App => self.api.app().await,
            PayloadSection::Traffic => self.api.traffic().await,
        }
    }

    pub async fn track_scroll(&self, bounds: &[SectionBounds]) -> Section {
        self.sidebar.write().await.on_scroll(bounds)
    }

    /// Pending refresh alert; cleared once taken
    pub async fn take_alert(&self) -> Option<String> {
        self.alert.lock().await.take()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.read().await.clone(),
            theme: *self.theme.read().await,
            refreshing: self.is_refreshing(),
            active_section: self.sidebar.read().await.active(),
        }
    }
}
