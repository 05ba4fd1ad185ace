use super::Fetcher;
use super::retry::{RetryPolicy, DEFAULT_DELAY, DEFAULT_MAX_RETRIES};
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::types::HttpClient;
use std::time::Duration;

/// Builder for constructing a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetcherBuilder {
    /// Wait time between attempts. Defaults to 10 seconds.
    pub(crate) delay: Duration,
    /// The number of retries after a failed request. Defaults to 3.
    pub(crate) max_retries: u32,
    /// Client to use for requests.
    pub(crate) client: Option<HttpClient>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            max_retries: DEFAULT_MAX_RETRIES,
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
}

impl FetcherBuilder {
    /// Creates a new [`FetcherBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The wait time between attempts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The number of retries after a failed request. A value of 0 means failed requests are
    /// reported immediately.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Client to use for requests.
    pub fn client(mut self, client: HttpClient) -> Self {
        self.client = Some(client);
        self
    }

    /// User agent for requests.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Builds the [`Fetcher`].
    pub fn build(self) -> Fetcher {
        let client = self.client
            .unwrap_or_else(|| get_default_middleware(self.user_agent));

        Fetcher {
            client,
            retry_policy: RetryPolicy {
                delay: self.delay,
                max_retries: self.max_retries,
            },
        }
    }
}
