//! Detail page fetching.

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use news_types::{ArticleContent, FetchOutcome};

use crate::client::send_for_text;
use crate::error::CrawlerError;
use crate::html::{element_text, selector};

/// Selectors for the headline and body of a detail page.
#[derive(Debug, Clone)]
pub struct ArticleSelectors {
    headline: Selector,
    body: Selector,
}

impl ArticleSelectors {
    pub fn new() -> Result<Self, CrawlerError> {
        Ok(Self {
            headline: selector(".media_end_head_headline")?,
            body: selector("#dic_area")?,
        })
    }
}

/// Extract headline and body from a detail page.
///
/// Both elements must be present; either one missing yields `None`.
pub fn parse_article(html: &str, selectors: &ArticleSelectors) -> Option<ArticleContent> {
    let document = Html::parse_document(html);
    let headline = document.select(&selectors.headline).next()?;
    let body = document.select(&selectors.body).next()?;

    Some(ArticleContent {
        title: element_text(headline),
        body: element_text(body),
    })
}

/// Fetches and parses article detail pages.
pub struct ArticleFetcher {
    client: Client,
    selectors: ArticleSelectors,
}

impl ArticleFetcher {
    pub fn new(client: Client) -> Result<Self, CrawlerError> {
        Ok(Self {
            client,
            selectors: ArticleSelectors::new()?,
        })
    }

    /// Fetch one detail page.
    ///
    /// Transport faults are reported, not raised.
    pub async fn fetch_content(&self, link: &Url) -> FetchOutcome<ArticleContent> {
        let html = match send_for_text(self.client.get(link.clone())).await {
            Ok(html) => html,
            Err(detail) => {
                warn!(link = %link, error = %detail, "Error fetching article");
                return FetchOutcome::TransportError(detail);
            }
        };

        match parse_article(&html, &self.selectors) {
            Some(content) => FetchOutcome::Found(content),
            None => {
                debug!(link = %link, "Headline or body missing");
                FetchOutcome::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"<html><body>
        <h2 class="media_end_head_headline"><span>반도체 수출 반등</span></h2>
        <article id="dic_area">
            반도체 수출이 석 달 만에 반등했다.
            <br><br>
            업계는 <b>하반기</b> 회복을 기대한다.
        </article>
    </body></html>"#;

    #[test]
    fn test_parse_article_both_present() {
        let content = parse_article(PAGE, &ArticleSelectors::new().unwrap()).unwrap();
        assert_eq!(content.title, "반도체 수출 반등");
        assert_eq!(
            content.body,
            "반도체 수출이 석 달 만에 반등했다. 업계는 하반기 회복을 기대한다."
        );
    }

    #[test]
    fn test_parse_article_missing_headline() {
        let html = r#"<div id="dic_area">본문만 있다</div>"#;
        assert!(parse_article(html, &ArticleSelectors::new().unwrap()).is_none());
    }

    #[test]
    fn test_parse_article_missing_body() {
        let html = r#"<h2 class="media_end_head_headline">제목만 있다</h2>"#;
        assert!(parse_article(html, &ArticleSelectors::new().unwrap()).is_none());
    }

    #[tokio::test]
    async fn test_fetch_content_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article/101/0001"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let fetcher = ArticleFetcher::new(Client::new()).unwrap();
        let link = Url::parse(&format!("{}/article/101/0001", server.uri())).unwrap();
        let outcome = fetcher.fetch_content(&link).await;

        match outcome {
            FetchOutcome::Found(content) => assert_eq!(content.title, "반도체 수출 반등"),
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_content_not_found_on_bad_markup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let fetcher = ArticleFetcher::new(Client::new()).unwrap();
        let link = Url::parse(&server.uri()).unwrap();
        assert_eq!(fetcher.fetch_content(&link).await, FetchOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_content_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = ArticleFetcher::new(Client::new()).unwrap();
        let link = Url::parse(&server.uri()).unwrap();
        assert!(matches!(
            fetcher.fetch_content(&link).await,
            FetchOutcome::TransportError(_)
        ));
    }
}
