//! Retry with exponential backoff for the basket download.
//!
//! Only transport failures (connection errors, timeouts) are retried. A
//! response with any status is returned to the caller as is.

use log::warn;
use std::future::Future;
use std::time::Duration;

/// Call `f` up to `max_retries + 1` times, doubling `base_delay` after each failure
pub(crate) async fn retry_send<F, Fut>(
    f: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = base_delay.saturating_mul(2u32.saturating_pow(attempt));
                warn!(
                    "Download attempt {}/{} failed, retrying in {delay:?}: {e}",
                    attempt + 1,
                    max_retries + 1
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
