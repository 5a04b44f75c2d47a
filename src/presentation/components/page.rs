// Root layout: lays every component out against one session snapshot
use super::competitor_chart::CompetitorCharts;
use super::country_table::CountryTable;
use super::footer::Footer;
use super::kpi_grid::{KpiGrid, OperatingCountries};
use super::navbar::Navbar;
use super::news_list::NewsList;
use super::sidebar::Sidebar;
use super::trend_chart::TrendChart;
use super::SectionHeader;
use crate::application::session::{SessionSnapshot, SessionState};
use crate::domain::navigation::Section;
use crate::domain::payload::DashboardPayload;
use crate::domain::theme::ThemeMode;
use std::sync::Arc;
use yew::prelude::*;
use yew::ServerRenderer;

const LOADING_TEXT: &str = "Loading JUMIA Analytics...";

/// Seconds between automatic reloads while the first fetch is in flight
const LOADING_POLL_SECS: u32 = 2;

const ALERT_ID: &str = "dashboard-alert";

const STYLES: &str = r#"
:root { --bg: #f8fafc; --surface: #ffffff; --border: #e2e8f0; --text: #0f172a; --muted: #475569; --accent: #f68b1e; --radius: 12px; }
body.dark { --bg: #0f172a; --surface: #1e293b; --border: #334155; --text: #f1f5f9; --muted: #cbd5e1; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body { background: var(--bg); color: var(--text); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; line-height: 1.5; }
.app { display: flex; min-height: 100vh; }
.app__main { flex: 1; display: flex; flex-direction: column; margin-left: 220px; }
.app__content { flex: 1; padding: 24px; }
.container { max-width: 1200px; margin: 0 auto; }
.sidebar { position: fixed; top: 0; bottom: 0; left: 0; width: 220px; padding: 24px 16px; background: var(--surface); border-right: 1px solid var(--border); }
.sidebar__title { font-size: 12px; text-transform: uppercase; color: var(--muted); margin-bottom: 12px; }
.sidebar__nav { list-style: none; }
.sidebar__link { display: flex; gap: 8px; padding: 8px 12px; border-radius: 8px; color: var(--muted); text-decoration: none; }
.sidebar__link--active { background: var(--accent); color: #ffffff; }
.navbar { position: sticky; top: 0; background: var(--surface); border-bottom: 1px solid var(--border); padding: 12px 24px; z-index: 10; }
.navbar__container { display: flex; justify-content: space-between; align-items: center; }
.navbar__logo { font-weight: 800; font-size: 22px; color: var(--accent); }
.navbar__subtitle { font-size: 12px; color: var(--muted); }
.navbar__actions { display: flex; gap: 8px; }
.theme-toggle { display: flex; gap: 6px; align-items: center; padding: 8px 12px; border-radius: 8px; border: 1px solid var(--border); background: var(--bg); color: var(--text); cursor: pointer; }
.theme-toggle:disabled { opacity: 0.6; cursor: wait; }
.section { margin-bottom: 48px; }
.section__header { margin-bottom: 16px; }
.section__title { font-size: 24px; }
.section__description, .text-secondary { color: var(--muted); }
.card, .chart-container, .country-table, .news-card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 20px; margin-bottom: 16px; }
.mb-md { margin-bottom: 12px; }
.kpi-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px; margin-bottom: 16px; }
.overview-card__header { display: flex; justify-content: space-between; color: var(--muted); }
.overview-card__value { font-size: 28px; font-weight: 700; }
.overview-card__label { font-size: 12px; color: var(--muted); }
.charts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px; }
.chart-container__subtitle { color: var(--muted); font-size: 13px; margin-bottom: 12px; }
.chart-wrapper svg { width: 100%; height: auto; }
.chart-legend, .pie-chart__legend { list-style: none; display: flex; flex-wrap: wrap; gap: 12px; font-size: 12px; font-weight: 600; margin-bottom: 8px; }
.legend__swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 6px; }
.pie-chart { display: flex; align-items: center; gap: 24px; }
.pie-chart__disc { width: 200px; height: 200px; border-radius: 50%; }
.pie-chart__legend { flex-direction: column; }
.country-row { display: grid; grid-template-columns: 160px 1fr 48px; gap: 12px; align-items: center; padding: 6px 0; }
.country-row__bar { background: var(--border); border-radius: 4px; height: 8px; }
.country-row__fill { background: var(--accent); border-radius: 4px; height: 8px; }
.country-row__value { text-align: right; font-weight: 600; }
.feedly-button { display: inline-flex; gap: 8px; padding: 8px 14px; margin-bottom: 16px; border-radius: 8px; background: var(--accent); color: #ffffff; text-decoration: none; }
.news-card__meta { display: flex; gap: 8px; color: var(--muted); font-size: 13px; margin: 6px 0; }
.news-card__link { color: var(--accent); text-decoration: none; font-weight: 600; }
.footer { padding: 24px; border-top: 1px solid var(--border); color: var(--muted); font-size: 13px; }
.footer__content { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 8px; }
.loading { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 200px; gap: 16px; }
.loading__spinner { width: 40px; height: 40px; border: 4px solid var(--border); border-top-color: var(--accent); border-radius: 50%; animation: spin 1s linear infinite; }
.loading__text { color: var(--muted); }
.error { color: #ef4444; font-weight: 600; }
.alert { margin: 16px 24px 0 244px; padding: 12px 16px; border-radius: 8px; background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

// Posts section boxes on every scroll event and applies the active section the server returns.
const SCROLL_SCRIPT: &str = r#"
window.addEventListener('scroll', function () {
  var bounds = Array.prototype.map.call(document.querySelectorAll('.section'), function (el) {
    var rect = el.getBoundingClientRect();
    return { id: el.id, top: rect.top, bottom: rect.bottom };
  });
  fetch('/api/nav', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(bounds) })
    .then(function (res) { return res.ok ? res.json() : null; })
    .then(function (nav) {
      if (!nav) { return; }
      document.querySelectorAll('.sidebar__link').forEach(function (link) {
        link.classList.toggle('sidebar__link--active', link.dataset.section === nav.active);
      });
    })
    .catch(function () {});
});
"#;

const ALERT_SCRIPT: &str = r#"
var pending = document.getElementById('dashboard-alert');
if (pending) { alert(pending.textContent); }
"#;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub snapshot: SessionSnapshot,
    pub alert: Option<String>,
}

#[derive(Properties, PartialEq)]
struct ReadyLayoutProps {
    payload: Arc<DashboardPayload>,
    theme: ThemeMode,
    refreshing: bool,
    active: Section,
}

#[function_component(ReadyLayout)]
fn ready_layout(props: &ReadyLayoutProps) -> Html {
    let payload = props.payload.clone();
    let theme = props.theme;

    html! {
        <div class="app">
            <Sidebar active={props.active} />
            <div class="app__main">
                <Navbar theme={theme} refreshing={props.refreshing} />
                <main class="app__content">
                    <div class="container">
                        <section class="section" id={Section::Overview.id()}>
                            <SectionHeader title="Overview" description="Key performance indicators for 'JUMIA'" />
                            <KpiGrid payload={payload.clone()} />
                            <OperatingCountries payload={payload.clone()} />
                        </section>
                        <section class="section" id={Section::Competitors.id()}>
                            <SectionHeader title="Competitors (Algeria)" description="Algeria e-commerce market comparison" />
                            <CompetitorCharts payload={payload.clone()} theme={theme} />
                        </section>
                        <section class="section" id={Section::Growth.id()}>
                            <SectionHeader
                                title="Growth Trends"
                                description="12-month search interest for Algeria e-commerce and regional breakdown"
                            />
                            <TrendChart payload={payload.clone()} theme={theme} />
                            <CountryTable payload={payload.clone()} />
                        </section>
                        <NewsList payload={payload.clone()} />
                    </div>
                </main>
                <Footer fetched_at={payload.fetched_at.clone()} />
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let alert = match &props.alert {
        Some(message) => html! { <div id={ALERT_ID} class="alert" role="alert">{message.clone()}</div> },
        None => html! {},
    };
    let snapshot = &props.snapshot;

    let content = match &snapshot.state {
        SessionState::Loading => html! {
            <div class="loading">
                <div class="loading__spinner"></div>
                <div class="loading__text">{LOADING_TEXT}</div>
            </div>
        },
        SessionState::Error(message) => html! {
            <div class="loading">
                <div class="error">{message.clone()}</div>
            </div>
        },
        SessionState::Ready(payload) => html! {
            <ReadyLayout
                payload={payload.clone()}
                theme={snapshot.theme}
                refreshing={snapshot.refreshing}
                active={snapshot.active_section}
            />
        },
    };

    html! {
        <>
            {alert}
            {content}
        </>
    }
}

/// Full HTML document for the current session state
pub async fn render(snapshot: SessionSnapshot, alert: Option<String>) -> String {
    let theme = snapshot.theme;
    let head_extra = match snapshot.state {
        SessionState::Loading => format!(r#"<meta http-equiv="refresh" content="{LOADING_POLL_SECS}">"#),
        _ => String::new(),
    };
    let scroll_script = match snapshot.state {
        SessionState::Ready(_) => format!("<script>{SCROLL_SCRIPT}</script>"),
        _ => String::new(),
    };

    let body = ServerRenderer::<DashboardPage>::with_props(move || DashboardPageProps { snapshot, alert })
        .hydratable(false)
        .render()
        .await;

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>JUMIA Analytics Dashboard</title>{head_extra}<style>{STYLES}</style></head><body class="{}">{body}{scroll_script}<script>{ALERT_SCRIPT}</script></body></html>"#,
        theme.body_class()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::LOAD_FAILED_MESSAGE;
    use serde_json::json;

    fn snapshot(state: SessionState, theme: ThemeMode) -> SessionSnapshot {
        SessionSnapshot {
            state,
            theme,
            refreshing: false,
            active_section: Section::Overview,
        }
    }

    #[tokio::test]
    async fn test_loading_view_polls() {
        let html = render(snapshot(SessionState::Loading, ThemeMode::Light), None).await;
        assert!(html.contains(LOADING_TEXT));
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(!html.contains("/api/nav"));
    }

    #[tokio::test]
    async fn test_error_view_shows_fixed_message_only() {
        let state = SessionState::Error(LOAD_FAILED_MESSAGE.to_string());
        let html = render(snapshot(state, ThemeMode::Light), None).await;
        assert!(html.contains(LOAD_FAILED_MESSAGE));
        assert!(!html.contains(r#"class="kpi-grid""#));
        assert!(!html.contains(r#"http-equiv="refresh""#));
    }

    #[tokio::test]
    async fn test_ready_view_without_company_skips_kpis() {
        let payload: DashboardPayload = serde_json::from_value(json!({"news": []})).unwrap();
        let state = SessionState::Ready(Arc::new(payload));
        let html = render(snapshot(state, ThemeMode::Light), None).await;

        assert!(!html.contains(r#"class="kpi-grid""#));
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, section.id())));
        }
        assert!(html.contains("/api/nav"));
    }

    #[tokio::test]
    async fn test_body_class_follows_theme() {
        let dark = render(snapshot(SessionState::Loading, ThemeMode::Dark), None).await;
        assert!(dark.contains(r#"<body class="dark">"#));
        let light = render(snapshot(SessionState::Loading, ThemeMode::Light), None).await;
        assert!(light.contains(r#"<body class="">"#));
    }

    #[tokio::test]
    async fn test_alert_text_is_escaped() {
        let html = render(
            snapshot(SessionState::Loading, ThemeMode::Light),
            Some("bad </script><b>news</b>".to_string()),
        )
        .await;

        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("bad &lt;/script&gt;&lt;b&gt;news&lt;/b&gt;"));
        assert!(!html.contains("<b>news</b>"));
    }
}
