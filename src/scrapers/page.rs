//! HTTP page fetcher.
//!
//! Issues one `GET` per URL with a browser-like `User-Agent` so that sites
//! doing trivial bot filtering still serve the page. Responses with a 4xx or
//! 5xx status are errors; redirects follow the `reqwest` defaults.

use super::{FetchError, FetchPage};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches raw HTML over HTTP(S).
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    /// Build a fetcher with the given `User-Agent` and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend or client cannot be initialized.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl FetchPage for PageFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::request(e, url, self.timeout))?;

        let status = response.status();
        debug!(%status, "Received response");
        if status.is_client_error() || status.is_server_error() {
            // Name the URL that actually answered, after redirects
            return Err(FetchError::status(status, response.url().as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::request(e, url, self.timeout))?;
        info!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> PageFetcher {
        PageFetcher::new(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher()
            .fetch(&format!("{}/article", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<p>Hi</p>");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].headers.get("user-agent").unwrap().to_str().unwrap(),
            DEFAULT_USER_AGENT
        );
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { code: 404, .. }));
        assert_eq!(
            err.to_string(),
            format!("404 Client Error: Not Found for url: {url}")
        );
    }

    #[tokio::test]
    async fn test_status_error_names_url_after_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let err = fetcher()
            .fetch(&format!("{}/old", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("410 Client Error: Gone for url: {}/new", server.uri())
        );
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetcher().fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { code: 503, class: "Server", .. }));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT, Duration::from_millis(200)).unwrap();
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Port 9 (discard) is almost never listening on localhost.
        let err = fetcher().fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }), "{err}");
    }
}
