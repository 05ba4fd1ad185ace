//! The shared request core. Every client in this crate goes through a [`Fetcher`] for its
//! requests.

mod builder;
mod retry;

pub use builder::FetcherBuilder;
pub use retry::RetryPolicy;

use crate::error::Error;
use crate::helpers::{check_response, parses_response};
use crate::types::HttpClient;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

/// Makes GET requests with bounded retry.
///
/// A transport failure or a non-success HTTP status on an attempt is treated as transient and
/// retried on a fixed schedule; see [`RetryPolicy`]. A malformed URL fails immediately without
/// making a request, since retrying it cannot help. Each failed attempt is logged with the
/// failing URL and the error detail.
///
/// Requests are sequential and block the calling task through any retry pauses. Callers that
/// want concurrent fetches can clone the fetcher and dispatch requests themselves; the
/// underlying client is shared between clones.
#[derive(Debug, Clone)]
pub struct Fetcher {
    pub(crate) client: HttpClient,
    pub(crate) retry_policy: RetryPolicy,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Fetcher {
    /// Creates a new [`Fetcher`] with the default retry policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`FetcherBuilder`].
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// The retry policy used for requests.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Fetches the response body of `url`.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, Error> {
        let url = Url::parse(url)?;

        match self.try_get(&url).await {
            Ok(body) => Ok(body),
            Err(error) => {
                log::warn!("GET {url} failed: {error}");

                let body = retry::with_policy(
                    &url,
                    self.retry_policy,
                    || self.try_get(&url),
                ).await?;

                Ok(body)
            },
        }
    }

    /// Fetches `url` and deserializes the response body. Parse failures are terminal and
    /// propagate immediately.
    pub async fn fetch_json<D>(&self, url: &str) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let body = self.fetch(url).await?;

        parses_response(&body)
    }

    /// Fetches `url` as text. Used for community pages which embed their data in markup.
    pub async fn fetch_text(&self, url: &str) -> Result<String, Error> {
        let body = self.fetch(url).await?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn try_get(&self, url: &Url) -> Result<Bytes, Error> {
        let response = self.client.get(url.clone())
            .send()
            .await?;

        check_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn zero_delay_fetcher(max_retries: u32) -> Fetcher {
        Fetcher::builder()
            .delay(Duration::ZERO)
            .max_retries(max_retries)
            .build()
    }

    #[tokio::test]
    async fn invalid_url_fails_without_a_request() {
        let fetcher = zero_delay_fetcher(3);
        let result = fetcher.fetch("not a url").await;

        assert!(matches!(result, Err(Error::UrlParse(_))));
    }

    #[tokio::test]
    async fn fetches_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/ping")
            .with_status(200)
            .with_body(r#"{"a": 1}"#)
            .create_async()
            .await;
        let fetcher = zero_delay_fetcher(0);
        let body = fetcher.fetch(&format!("{}/ping", server.url())).await.unwrap();

        assert_eq!(&body[..], &br#"{"a": 1}"#[..]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exhausted_retries_report_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/down")
            .with_status(500)
            .expect(3)
            .create_async()
            .await;
        let fetcher = zero_delay_fetcher(2);
        let url = format!("{}/down", server.url());

        match fetcher.fetch(&url).await {
            Err(Error::Unreachable(error)) => {
                assert_eq!(error.attempts, 3);
                assert_eq!(error.url, url);
            },
            other => panic!("expected unreachable error, got {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/json")
            .with_status(200)
            .with_body(r#"{"a": 1}"#)
            .create_async()
            .await;
        let fetcher = zero_delay_fetcher(0);
        let parsed = fetcher.fetch_json::<HashMap<String, i32>>(&format!("{}/json", server.url()))
            .await
            .unwrap();

        assert_eq!(parsed.get("a"), Some(&1));
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/json")
            .with_status(200)
            .with_body(r#"{"a": 1"#)
            .create_async()
            .await;
        let fetcher = zero_delay_fetcher(0);
        let result = fetcher.fetch_json::<HashMap<String, i32>>(&format!("{}/json", server.url()))
            .await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
