// Latest news section
use super::{placeholder, PayloadProps, SectionHeader};
use crate::domain::format::format_article_date;
use crate::domain::navigation::Section;
use crate::domain::payload::NewsArticle;
use reqwest::Url;
use yew::prelude::*;

const EMPTY_FEED_URL: &str = "https://blogtrottr.com/";
const FEED_URL: &str = "https://alerts.talkwalker.com/alerts/manage";
const NO_LINK: &str = "#";

/// Feed-supplied link, kept only when it is an http(s) URL
fn article_href(raw: Option<&str>) -> String {
    raw.and_then(|raw| Url::parse(raw.trim()).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
        .unwrap_or_else(|| NO_LINK.to_string())
}

fn follow_button(url: &'static str, label: &'static str) -> Html {
    html! {
        <a href={url} target="_blank" rel="noopener noreferrer" class="feedly-button">
            <span>{"🔔"}</span>
            <span>{label}</span>
        </a>
    }
}

fn article(article: &NewsArticle) -> Html {
    let summary = article.summary.clone().filter(|s| !s.is_empty());

    html! {
        <article class="news-card">
            <div class="news-card__header">
                <h3 class="news-card__title">{article.title.clone().unwrap_or_default()}</h3>
            </div>
            <div class="news-card__meta">
                <span class="news-card__source">{article.source.clone().unwrap_or_default()}</span>
                <span>{"•"}</span>
                <span>{format_article_date(article.published_at.as_deref())}</span>
            </div>
            { for summary.map(|summary| html! { <p class="news-card__summary">{summary}</p> }) }
            <a href={article_href(article.url.as_deref())} target="_blank" rel="noopener noreferrer" class="news-card__link">
                {"Read full article →"}
            </a>
        </article>
    }
}

#[function_component(NewsList)]
pub fn news_list(props: &PayloadProps) -> Html {
    let articles = props.payload.articles();

    let body = if articles.is_empty() {
        html! {
            <>
                {follow_button(EMPTY_FEED_URL, "Follow JUMIA on Blogtrottr")}
                {placeholder("No news articles available. Configure NewsAPI key and run the data fetch script.")}
            </>
        }
    } else {
        html! {
            <>
                {follow_button(FEED_URL, "Follow JUMIA on Talkwalker")}
                <div class="news-list">{ for articles.iter().map(article) }</div>
            </>
        }
    };

    html! {
        <section class="section" id={Section::News.id()}>
            <SectionHeader title="Latest News" description="Recent news articles about JUMIA" />
            {body}
        </section>
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
    async fn test_placeholder_without_articles() {
        let html = render_fragment::<NewsList>(props(json!({}))).await;
        assert!(html.contains("No news articles available"));
        assert!(html.contains(EMPTY_FEED_URL));
        assert!(html.contains(r#"id="news""#));
    }

    #[tokio::test]
    async fn test_article_card() {
        let value = json!({
            "news": [
                {
                    "title": "Jumia <Q3> results",
                    "source": "Reuters",
                    "publishedAt": "2025-03-01T10:00:00Z",
                    "url": "https://example.com/a",
                    "summary": ""
                },
                {"title": "Second", "source": "BBC", "summary": "Short summary"}
            ]
        });

        let html = render_fragment::<NewsList>(props(value)).await;
        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.contains("Jumia &lt;Q3&gt; results"));
        assert!(html.contains("March 1, 2025"));
        assert_eq!(html.matches("news-card__summary").count(), 1);
        assert!(html.contains(r#"href="https://example.com/a""#));
        assert!(html.contains(FEED_URL));
    }

    #[tokio::test]
    async fn test_non_web_links_are_dropped() {
        let value = json!({
            "news": [
                {"title": "a", "url": "javascript:alert(1)"},
                {"title": "b", "url": "data:text/html,hi"},
                {"title": "c", "url": "not a url"}
            ]
        });

        let html = render_fragment::<NewsList>(props(value)).await;
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:text"));
        assert_eq!(html.matches(r##"href="#""##).count(), 3);
    }

    #[test]
    fn test_article_href() {
        assert_eq!(article_href(Some(" https://example.com/a ")), "https://example.com/a");
        assert_eq!(article_href(Some("JavaScript:alert(1)")), NO_LINK);
        assert_eq!(article_href(None), NO_LINK);
    }
}
