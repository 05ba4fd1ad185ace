use crate::error::{Error, UnreachableError};
use std::future::Future;
use std::time::Duration;
use async_std::task::sleep;
use url::Url;

/// Wait time between attempts when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);
/// Number of retries after a failed request when none is configured.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// The schedule for retrying failed requests.
///
/// Backoff is fixed rather than exponential. The failures this guards against are short-lived
/// (Steam throttling requests that come in a bit hot), not sustained outages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait time between attempts.
    pub delay: Duration,
    /// The maximum number of retries after the original attempt fails.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Retries `attempt` after an original attempt has already failed, pausing before each retry.
///
/// Returns the first successful value. When `max_retries` is 0, or every retry fails, the
/// request is reported as unreachable with the total attempt count (original plus retries).
pub(crate) async fn with_policy<F, Fut, T>(
    url: &Url,
    policy: RetryPolicy,
    mut attempt: F,
) -> Result<T, UnreachableError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    log::warn!("{url} is unreachable, retrying {} times", policy.max_retries);

    for retry_number in 1..=policy.max_retries {
        sleep(policy.delay).await;

        match attempt().await {
            Ok(value) => return Ok(value),
            Err(error) => log::warn!(
                "GET {url} failed (attempt {} of {}): {error}",
                retry_number + 1,
                policy.max_retries + 1,
            ),
        }
    }

    Err(UnreachableError {
        url: url.to_string(),
        attempts: policy.max_retries + 1,
    })
}
