//! End-to-end test infrastructure for the news topic pipeline.
//!
//! Provides a temp-dir harness, a mock news site served by wiremock, and
//! corpus builders for crawl-to-report scenarios.

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use news_crawler::{CrawlerConfig, JsonCorpusStore};
use news_types::Article;

/// Listing endpoint path on the mock site.
pub const LISTING_PATH: &str = "/section/template/SECTION_ARTICLE_LIST";

/// Shared test harness: a temp data directory and a corpus store over it.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    pub data_dir: PathBuf,
    pub store: JsonCorpusStore,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let store = JsonCorpusStore::new(&data_dir);
        Self {
            _temp_dir: temp_dir,
            data_dir,
            store,
        }
    }

    /// Settings rooted at this harness's data directory.
    pub fn settings(&self) -> news_cli::Settings {
        news_cli::Settings {
            data_dir: self.data_dir.to_string_lossy().to_string(),
            ..Default::default()
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A news site served from a local mock server.
pub struct MockNewsSite {
    pub server: MockServer,
}

impl MockNewsSite {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Crawler settings pointed at this site, with no pacing delay.
    pub fn crawler_config(&self) -> CrawlerConfig {
        CrawlerConfig {
            listing_url: format!("{}{}", self.uri(), LISTING_PATH),
            base_url: self.uri(),
            delay_min_ms: 0,
            delay_max_ms: 0,
            ..Default::default()
        }
    }

    /// Serve one listing page for `(sid, page, cursor)`.
    pub async fn listing_page(
        &self,
        sid: u32,
        page: u32,
        cursor: &str,
        items: &[(&str, &str)],
        next: Option<&str>,
    ) {
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(query_param("sid", sid.to_string()))
            .and(query_param("pageNo", page.to_string()))
            .and(query_param("next", cursor))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_json(items, next)))
            .mount(&self.server)
            .await;
    }

    /// Serve a failing listing page.
    pub async fn failing_listing_page(&self, sid: u32, page: u32, status: u16) {
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(query_param("sid", sid.to_string()))
            .and(query_param("pageNo", page.to_string()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve a detail page at `article_path`.
    pub async fn article(&self, article_path: &str, title: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(article_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_html(title, body)))
            .mount(&self.server)
            .await;
    }

    /// Serve an arbitrary status at `article_path`.
    pub async fn article_status(&self, article_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(article_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the site has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or_default()
    }
}

/// Listing response: JSON wrapping an HTML fragment of `(title, href)` items.
pub fn listing_json(items: &[(&str, &str)], next: Option<&str>) -> String {
    let list: String = items
        .iter()
        .map(|(title, href)| {
            format!(
                r#"<li class="sa_item"><div class="sa_text"><a href="{href}" class="sa_text_title"><strong>{title}</strong></a></div></li>"#
            )
        })
        .collect();
    let cursor = next
        .map(|c| format!(r#"<div class="section_more" data-cursor="{c}"></div>"#))
        .unwrap_or_default();
    json!({
        "renderedComponent": {
            "SECTION_ARTICLE_LIST": format!(r#"<ul class="sa_list">{list}</ul>{cursor}"#)
        }
    })
    .to_string()
}

/// Detail page with headline and body containers.
pub fn article_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
<h2 class="media_end_head_headline"><span>{title}</span></h2>
<article id="dic_area" class="go_trans _article_content">{body}</article>
</body></html>"#
    )
}

/// Finance-themed article body.
pub const FINANCE_BODY: &str = "한국은행이 기준금리를 동결했다. 은행 대출 금리와 예금 금리가 주목된다.";

/// Sports-themed article body.
pub const SPORTS_BODY: &str = "축구 대표팀 감독이 선수 명단을 발표했다. 선수들은 경기 준비에 들어갔다.";

/// Alternating finance and sports articles with pre-normalized bodies.
pub fn two_theme_corpus(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            let (title, body) = if i % 2 == 0 {
                ("금리 동결", "금리 은행 대출 금리 예금 은행 금융")
            } else {
                ("대표팀 발표", "축구 선수 경기 축구 감독 선수 대표팀")
            };
            Article {
                title: format!("{title} {i}"),
                link: format!("https://news.example.com/article/{i}"),
                raw_body: body.to_string(),
                normalized_body: body.to_string(),
            }
        })
        .collect()
}
