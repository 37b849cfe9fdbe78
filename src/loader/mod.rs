//! Reference data loading
//!
//! A [`BasketSource`] produces the raw bytes of the basket spreadsheet;
//! [`load_reference`] decodes them and picks the latest published month.

pub mod date_utils;
pub mod http;
mod retry;
pub mod sheet;

use log::info;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::SheetLayout;
use crate::error::{CalculatorError, Result};
use crate::models::ReferencePeriod;

pub use http::HttpSource;
pub use sheet::{BasketRow, basket_rows, latest_period, latest_row, parse_workbook};

/// Anything that can produce the raw basket spreadsheet
pub trait BasketSource {
    /// URL or path, for messages
    fn describe(&self) -> String;

    /// Retrieve the raw bytes
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Reads the spreadsheet from a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a file source
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path read by this source
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BasketSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| CalculatorError::unavailable(self.describe(), e.to_string()))
    }
}

/// Fetch the spreadsheet from `source` and return the latest reference period
pub async fn load_reference<S: BasketSource>(
    source: &S,
    layout: &SheetLayout,
) -> Result<ReferencePeriod> {
    info!("Fetching basket series from {}", source.describe());
    let start = Instant::now();

    let bytes = source.fetch().await?;
    if bytes.is_empty() {
        return Err(CalculatorError::parse(format!(
            "{} returned an empty file",
            source.describe()
        )));
    }

    let period = parse_workbook(bytes, layout)?;
    info!(
        "Loaded reference period {} in {:?}",
        period.label(),
        start.elapsed()
    );
    Ok(period)
}
