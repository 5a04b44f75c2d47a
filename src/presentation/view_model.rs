// JSON view of the dashboard, the same derived data the HTML page draws from
use crate::application::session::{SessionSnapshot, SessionState};
use crate::domain::charts::{
    country_interest, kpi_cards, market_share, rating_comparison, search_trends, BarChart,
    CountryRow, KpiCard, LineChart, PieChart,
};
use crate::domain::format::{format_article_date, format_fetched_at};
use crate::domain::navigation::Section;
use crate::domain::payload::DashboardPayload;
use crate::domain::theme::ThemeMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub published: String,
    pub summary: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub theme: ThemeMode,
    pub refreshing: bool,
    pub active_section: Section,
    pub error: Option<String>,
    pub kpis: Option<Vec<KpiCard>>,
    pub countries: Option<Vec<String>>,
    pub rating_comparison: Option<BarChart>,
    pub market_share: Option<PieChart>,
    pub search_trends: Option<LineChart>,
    pub interest_by_country: Vec<CountryRow>,
    pub news: Vec<NewsItem>,
    pub fetched_at: String,
}

impl DashboardView {
    fn empty(snapshot: &SessionSnapshot, status: ViewStatus) -> Self {
        Self {
            status,
            theme: snapshot.theme,
            refreshing: snapshot.refreshing,
            active_section: snapshot.active_section,
            error: None,
            kpis: None,
            countries: None,
            rating_comparison: None,
            market_share: None,
            search_trends: None,
            interest_by_country: Vec::new(),
            news: Vec::new(),
            fetched_at: format_fetched_at(None),
        }
    }

    fn ready(snapshot: &SessionSnapshot, payload: &DashboardPayload) -> Self {
        let news = payload
            .articles()
            .iter()
            .map(|article| NewsItem {
                title: article.title.clone().unwrap_or_default(),
                source: article.source.clone().unwrap_or_default(),
                published: format_article_date(article.published_at.as_deref()),
                summary: article.summary.clone().filter(|s| !s.is_empty()),
                url: article.url.clone(),
            })
            .collect();

        Self {
            kpis: kpi_cards(payload),
            countries: payload.countries().map(<[String]>::to_vec),
            rating_comparison: rating_comparison(payload),
            market_share: market_share(payload),
            search_trends: search_trends(payload),
            interest_by_country: country_interest(payload),
            news,
            fetched_at: format_fetched_at(payload.fetched_at.as_deref()),
            ..Self::empty(snapshot, ViewStatus::Ready)
        }
    }

    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        match &snapshot.state {
            SessionState::Loading => Self::empty(snapshot, ViewStatus::Loading),
            SessionState::Error(message) => Self {
                error: Some(message.clone()),
                ..Self::empty(snapshot, ViewStatus::Error)
            },
            SessionState::Ready(payload) => Self::ready(snapshot, payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn snapshot(state: SessionState) -> SessionSnapshot {
        SessionSnapshot {
            state,
            theme: ThemeMode::Dark,
            refreshing: false,
            active_section: Section::News,
        }
    }

    #[test]
    fn test_error_view_carries_message() {
        let view = DashboardView::from_snapshot(&snapshot(SessionState::Error("boom".into())));
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "boom");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["active_section"], "news");
        assert_eq!(value["fetched_at"], "Unknown");
    }

    #[test]
    fn test_ready_view_derives_charts() {
        let payload: DashboardPayload = serde_json::from_value(json!({
            "company": {"revenue": 185000000},
            "app": {"play_store": {"rating": 4.5}},
            "competitors": {"A": {"app_rating": 4.1}},
            "news": [{"title": "T", "publishedAt": "2025-03-01T10:00:00Z", "summary": ""}]
        }))
        .unwrap();
        let view = DashboardView::from_snapshot(&snapshot(SessionState::Ready(Arc::new(payload))));

        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(view.kpis.as_ref().map(Vec::len), Some(6));
        assert_eq!(
            view.rating_comparison.as_ref().map(|c| c.labels.clone()),
            Some(vec!["Jumia".to_string(), "A".to_string()])
        );
        assert!(view.search_trends.is_none());
        assert_eq!(view.news[0].published, "March 1, 2025");
        assert!(view.news[0].summary.is_none());
    }
}
