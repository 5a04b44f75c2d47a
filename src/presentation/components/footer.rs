use crate::domain::format::format_fetched_at;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub fetched_at: Option<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let fetched_at = format_fetched_at(props.fetched_at.as_deref());

    html! {
        <footer class="footer">
            <div class="footer__content">
                <p class="footer__text">{"© 2025 JUMIA Analytics Dashboard"}</p>
                <p class="footer__fetched">{format!("Data fetched: {fetched_at}")}</p>
                <p class="footer__team">{"Made by "}<strong>{"Team 1.4"}</strong></p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::components::render_fragment;

    #[tokio::test]
    async fn test_fetched_at() {
        let html = render_fragment::<Footer>(FooterProps {
            fetched_at: Some("2025-01-05T14:30:00".to_string()),
        })
        .await;
        assert!(html.contains("Data fetched: January 5, 2025 at 02:30 PM"));

        let html = render_fragment::<Footer>(FooterProps { fetched_at: None }).await;
        assert!(html.contains("Data fetched: Unknown"));
    }
}
