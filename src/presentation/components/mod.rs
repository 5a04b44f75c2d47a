// Presentation components - yew function components over payload slices, rendered server-side
pub mod competitor_chart;
pub mod country_table;
pub mod footer;
pub mod kpi_grid;
pub mod navbar;
pub mod news_list;
pub mod page;
pub mod sidebar;
pub mod trend_chart;

use crate::domain::payload::DashboardPayload;
use crate::domain::theme::ThemeMode;
use std::sync::Arc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PayloadProps {
    pub payload: Arc<DashboardPayload>,
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub payload: Arc<DashboardPayload>,
    pub theme: ThemeMode,
}

/// Tick and grid-line colours for the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisColors {
    pub ticks: &'static str,
    pub grid: &'static str,
}

pub(crate) fn axis_colors(theme: ThemeMode) -> AxisColors {
    if theme.is_dark() {
        AxisColors {
            ticks: "#cbd5e1",
            grid: "#334155",
        }
    } else {
        AxisColors {
            ticks: "#475569",
            grid: "#e2e8f0",
        }
    }
}

/// SVG coordinate, one decimal
pub(crate) fn coord(value: f64) -> String {
    format!("{value:.1}")
}

/// Card shown in place of a chart or list with nothing to draw
pub(crate) fn placeholder(message: &'static str) -> Html {
    html! {
        <div class="loading">
            <div class="loading__text">{message}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: &'static str,
    pub description: &'static str,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section__header">
            <h2 class="section__title">{props.title}</h2>
            <p class="section__description">{props.description}</p>
        </div>
    }
}

/// Render one component to an HTML fragment
#[cfg(test)]
pub(crate) async fn render_fragment<C>(props: C::Properties) -> String
where
    C: yew::html::BaseComponent,
    C::Properties: Send + 'static,
{
    yew::ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_is_escaped_by_renderer() {
        let html = render_fragment::<SectionHeader>(SectionHeaderProps {
            title: "<script>x</script>",
            description: "Tom & Jerry",
        })
        .await;

        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<script>"));
    }
}
