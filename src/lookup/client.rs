// Storefront lookup HTTP client.
// Builds lookup URLs, issues the GET, and converts status failures.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::config::Config;
use crate::error::{RaterError, Result};

use super::types::parse_rating_count;

/// Path and query appended to the configured lookup base.
pub const LOOKUP_PATH_TEMPLATE: &str = "/lookup?id={APPID}&country={COUNTRY}";

/// Client for the storefront lookup endpoint.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base: String,
}

impl LookupClient {
    /// Create a client for `base` that gives up on requests after `timeout`.
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("app-rater/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(RaterError::Transport)?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.lookup_base, config.request_timeout)
    }

    /// Lookup URL for an app in a storefront region.
    pub fn lookup_url(&self, app_id: &str, region: &str) -> String {
        let path = LOOKUP_PATH_TEMPLATE
            .replace("{APPID}", app_id)
            .replace("{COUNTRY}", region);
        format!("{}{}", self.base, path)
    }

    /// Fetch the current-version rating count for an app.
    pub async fn fetch_rating_count(&self, app_id: &str, region: &str) -> Result<u64> {
        let url = self.lookup_url(app_id, region);
        debug!(%url, "retrieving rating count");

        let response = self.client.get(&url).send().await?;
        let response = check_response(response)?;
        let body = response.text().await?;

        parse_rating_count(&body)
    }
}

/// Reject anything outside 2xx.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RaterError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use httpmock::prelude::*;

    #[test]
    fn test_lookup_url() {
        let client = LookupClient::new("https://itunes.apple.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.lookup_url("1234", "GB"),
            "https://itunes.apple.com/lookup?id=1234&country=GB"
        );
    }

    #[tokio::test]
    async fn test_fetch_rating_count() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lookup")
                    .query_param("id", "1234")
                    .query_param("country", "US");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"results":[{"userRatingCountForCurrentVersion":17}]}"#);
            })
            .await;

        let client = LookupClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let count = client.fetch_rating_count("1234", "US").await.unwrap();

        assert_eq!(count, 17);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lookup");
                then.status(503).body("unavailable");
            })
            .await;

        let client = LookupClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let err = client.fetch_rating_count("1234", "US").await.unwrap_err();

        assert!(matches!(err, RaterError::Status(503)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lookup");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .body(r#"{"results":[{}]}"#);
            })
            .await;

        let client = LookupClient::new(&server.base_url(), Duration::from_millis(50)).unwrap();
        let err = client.fetch_rating_count("1234", "US").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
