// KPI grid and operating-country card for the overview section
use super::PayloadProps;
use crate::domain::charts::{kpi_cards, KpiCard};
use yew::prelude::*;

fn overview_card(card: &KpiCard) -> Html {
    html! {
        <div class="card overview-card">
            <div class="overview-card__header">
                <div class="overview-card__title">{card.title}</div>
                <div class="overview-card__icon">{card.icon}</div>
            </div>
            <div class="overview-card__value">{card.value.clone()}</div>
            <div class="overview-card__label">{card.label}</div>
        </div>
    }
}

/// Empty when the payload has no company block
#[function_component(KpiGrid)]
pub fn kpi_grid(props: &PayloadProps) -> Html {
    let Some(cards) = kpi_cards(&props.payload) else {
        return html! {};
    };

    html! {
        <div class="kpi-grid">
            { for cards.iter().map(overview_card) }
        </div>
    }
}

#[function_component(OperatingCountries)]
pub fn operating_countries(props: &PayloadProps) -> Html {
    match props.payload.countries() {
        Some(countries) => html! {
            <div class="card">
                <h3 class="mb-md">{"Operating Countries"}</h3>
                <p class="text-secondary">{countries.join(", ")}</p>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::DashboardPayload;
    use crate::presentation::components::render_fragment;
    use serde_json::json;
    use std::sync::Arc;

    fn props(value: serde_json::Value) -> PayloadProps {
        PayloadProps {
            payload: Arc::new(serde_json::from_value::<DashboardPayload>(value).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_renders_nothing_without_company() {
        let value = json!({"news": [], "app": {"play_store": {"rating": 4.1}}});
        assert_eq!(render_fragment::<KpiGrid>(props(value.clone())).await, "");
        assert_eq!(render_fragment::<OperatingCountries>(props(value)).await, "");
    }

    #[tokio::test]
    async fn test_renders_six_cards() {
        let value = json!({
            "company": {"revenue": 185000000, "countries": ["Algeria", "Côte d'Ivoire"]}
        });

        let html = render_fragment::<KpiGrid>(props(value.clone())).await;
        assert_eq!(html.matches("overview-card__value").count(), 6);
        assert!(html.contains("$185.0M"));

        let countries = render_fragment::<OperatingCountries>(props(value)).await;
        assert!(countries.contains("Algeria, Côte d"));
    }
}
