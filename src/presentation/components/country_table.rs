// Search interest by country table
use super::PayloadProps;
use crate::domain::charts::{country_interest, CountryRow};
use crate::domain::format::format_localized;
use yew::prelude::*;

fn row(row: &CountryRow) -> Html {
    html! {
        <div class="country-row">
            <div class="country-row__name">{row.country.clone()}</div>
            <div class="country-row__bar">
                <div class="country-row__fill" style={format!("width: {:.1}%", row.fill_percent)}></div>
            </div>
            <div class="country-row__value">{format_localized(row.interest)}</div>
        </div>
    }
}

/// Empty when there is no breakdown to show
#[function_component(CountryTable)]
pub fn country_table(props: &PayloadProps) -> Html {
    let rows = country_interest(&props.payload);
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="country-table">
            <div class="country-table__header">
                <h3 class="country-table__title">{"Search Interest by Country"}</h3>
            </div>
            <div class="country-table__body">{ for rows.iter().map(row) }</div>
        </div>
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
    async fn test_empty_breakdown_renders_no_rows() {
        let html = render_fragment::<CountryTable>(props(json!({"trends": {"by_country": []}}))).await;
        assert_eq!(html, "");
    }

    #[tokio::test]
    async fn test_rows_in_payload_order() {
        let value = json!({
            "trends": {"by_country": [
                {"country": "Oran", "interest": 50},
                {"country": "Algiers", "interest": 100}
            ]}
        });

        let html = render_fragment::<CountryTable>(props(value)).await;
        assert!(html.find("Oran").unwrap() < html.find("Algiers").unwrap());
        assert!(html.contains("width: 50.0%"));
        assert!(html.contains("width: 100.0%"));
    }
}
