//! HTTP source for the basket spreadsheet

use log::{debug, info};
use std::time::Duration;

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, Result};
use crate::loader::BasketSource;
use crate::loader::retry::retry_send;

/// Downloads the spreadsheet from a fixed URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl HttpSource {
    /// Create a source from the calculator configuration
    pub fn new(config: &CalculatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CalculatorError::unavailable(&config.source_url, e.to_string()))?;

        Ok(Self {
            client,
            url: config.source_url.clone(),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// URL downloaded by this source
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BasketSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        debug!("GET {}", self.url);
        let response = retry_send(
            || self.client.get(&self.url).send(),
            self.max_retries,
            self.retry_base_delay,
        )
        .await
        .map_err(|e| CalculatorError::unavailable(&self.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalculatorError::unavailable(
                &self.url,
                format!("server returned {status}"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CalculatorError::unavailable(&self.url, e.to_string()))?;
        info!("Downloaded {} bytes from {}", body.len(), self.url);

        Ok(body.to_vec())
    }
}
