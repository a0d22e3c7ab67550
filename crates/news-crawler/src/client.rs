//! HTTP client shared by the listing and article fetchers.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, RequestBuilder};

use crate::config::CrawlerConfig;
use crate::error::CrawlerError;

/// Build a client carrying the origin's required headers.
pub fn build_client(config: &CrawlerConfig) -> Result<Client, CrawlerError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&config.user_agent)
            .map_err(|e| CrawlerError::InvalidConfig(format!("user_agent: {e}")))?,
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.accept_language)
            .map_err(|e| CrawlerError::InvalidConfig(format!("accept_language: {e}")))?,
    );

    let mut builder = Client::builder().default_headers(headers);
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Send a request and read the body as text.
///
/// `Err` carries a transport failure description: a network error, a
/// non-success status, or an unreadable body.
pub(crate) async fn send_for_text(request: RequestBuilder) -> Result<String, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status));
    }

    response.text().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_sends_required_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("accept-language", "ko-KR,ko;q=0.9"))
            .and(header("user-agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&server)
            .await;

        let config = CrawlerConfig {
            user_agent: "test-agent/1.0".to_string(),
            ..Default::default()
        };
        let client = build_client(&config).unwrap();
        let body = send_for_text(client.get(format!("{}/ping", server.uri())))
            .await
            .unwrap();
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_client(&CrawlerConfig::default()).unwrap();
        let err = send_for_text(client.get(server.uri())).await.unwrap_err();
        assert!(err.contains("503"));
    }

    #[test]
    fn test_invalid_header_value_rejected() {
        let config = CrawlerConfig {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            build_client(&config),
            Err(CrawlerError::InvalidConfig(_))
        ));
    }
}
