//! Configuration for the reference data loader.

use std::fmt;
use std::time::Duration;

/// Published INDEC series of basic basket values
pub const DEFAULT_SOURCE_URL: &str = "https://www.indec.gob.ar/ftp/cuadros/sociedad/serie_cba_cbt.xls";

/// Layout of the basket worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Index of the worksheet to read
    pub sheet_index: usize,
    /// Banner rows above the header row
    pub skip_rows: usize,
    /// Column holding the period date
    pub date_column: usize,
    /// Column holding the CBA value for the base region
    pub cba_column: usize,
    /// Column holding the CBT value for the base region
    pub cbt_column: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_index: 0,
            skip_rows: 5,
            date_column: 0,
            cba_column: 1,
            cbt_column: 3,
        }
    }
}

/// Configuration for the calculator
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// URL of the basket spreadsheet
    pub source_url: String,
    /// Layout of the worksheet
    pub layout: SheetLayout,
    /// Timeout for a single download attempt
    pub timeout: Duration,
    /// Retries after the first failed download attempt
    pub max_retries: u32,
    /// Base delay between retries (doubled each attempt)
    pub retry_base_delay: Duration,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            layout: SheetLayout::default(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl CalculatorConfig {
    /// Set the source URL
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set the download timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base retry delay
    #[must_use]
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Set the worksheet layout
    #[must_use]
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl fmt::Display for CalculatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculator Configuration:")?;
        writeln!(f, "  Source URL: {}", self.source_url)?;
        writeln!(
            f,
            "  Sheet: {} (skip {} rows, date col {}, CBA col {}, CBT col {})",
            self.layout.sheet_index,
            self.layout.skip_rows,
            self.layout.date_column,
            self.layout.cba_column,
            self.layout.cbt_column
        )?;
        writeln!(f, "  Timeout: {:?}", self.timeout)?;
        write!(f, "  Max Retries: {}", self.max_retries)
    }
}
