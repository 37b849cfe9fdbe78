//! Basket worksheet parsing
//!
//! Reads the first worksheet of the published spreadsheet, keeps the rows
//! whose date and both basket values can be coerced, and selects the most
//! recent one.

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info, warn};
use std::io::Cursor;

use crate::config::SheetLayout;
use crate::error::{CalculatorError, Result};
use crate::loader::date_utils::{coerce_amount, coerce_date};
use crate::models::ReferencePeriod;

/// One valid month of the basket series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketRow {
    /// Period date (first day of the month in the published file)
    pub date: NaiveDate,
    /// Canasta Básica Alimentaria, base region
    pub cba: f64,
    /// Canasta Básica Total, base region
    pub cbt: f64,
}

/// Decode spreadsheet bytes and return the latest reference period
pub fn parse_workbook(bytes: Vec<u8>, layout: &SheetLayout) -> Result<ReferencePeriod> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(layout.sheet_index)
        .ok_or_else(|| {
            CalculatorError::parse(format!("workbook has no sheet at index {}", layout.sheet_index))
        })??;

    // The range starts at the first used cell, not at A1
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    debug!(
        "Sheet {} spans {:?} starting at ({first_row}, {first_col})",
        layout.sheet_index,
        range.get_size()
    );

    let rows = extract_rows(range.rows(), first_row as usize, first_col as usize, layout);
    latest_period(rows)
}

/// Valid rows of a worksheet whose first row and column are A1
pub fn basket_rows<'a>(
    rows: impl IntoIterator<Item = &'a [Data]>,
    layout: &SheetLayout,
) -> Vec<BasketRow> {
    extract_rows(rows, 0, 0, layout)
}

fn extract_rows<'a>(
    rows: impl IntoIterator<Item = &'a [Data]>,
    first_row: usize,
    first_col: usize,
    layout: &SheetLayout,
) -> Vec<BasketRow> {
    let cell = |row: &'a [Data], column: usize| -> Option<&'a Data> {
        column.checked_sub(first_col).and_then(|idx| row.get(idx))
    };

    // Banner rows plus the header row
    let data_start = layout.skip_rows + 1;
    let mut scanned = 0usize;

    let valid: Vec<BasketRow> = rows
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| first_row + idx >= data_start)
        .inspect(|_| scanned += 1)
        .filter_map(|(_, row)| {
            let date = cell(row, layout.date_column).and_then(coerce_date)?;
            let cba = cell(row, layout.cba_column).and_then(coerce_amount)?;
            let cbt = cell(row, layout.cbt_column).and_then(coerce_amount)?;
            // The food basket is a subset of the total basket
            if cba > cbt {
                warn!("Dropping row {date}: CBA {cba:.2} is above CBT {cbt:.2}");
                return None;
            }
            Some(BasketRow { date, cba, cbt })
        })
        .collect();

    debug!(
        "Kept {} of {} data rows ({} dropped)",
        valid.len(),
        scanned,
        scanned - valid.len()
    );
    valid
}

/// Most recent row by date; later rows win ties
pub fn latest_row(rows: impl IntoIterator<Item = BasketRow>) -> Result<BasketRow> {
    rows.into_iter()
        .sorted_by_key(|row| row.date)
        .last()
        .ok_or_else(|| CalculatorError::parse("no row with a valid date and basket values"))
}

/// Reference period built from the most recent row
pub fn latest_period(rows: impl IntoIterator<Item = BasketRow>) -> Result<ReferencePeriod> {
    let row = latest_row(rows)?;
    info!(
        "Latest basket row: {} (CBA {:.2}, CBT {:.2})",
        row.date, row.cba, row.cbt
    );
    ReferencePeriod::from_date(row.date, row.cba, row.cbt)
}
