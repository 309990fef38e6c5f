//! Employee CSV reader.
//!
//! Column types are inferred pandas-style: a column whose non-empty cells all
//! parse as `f64` is numeric, everything else is categorical. Empty cells are
//! missing values in either case.
use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::{Column, ColumnData, Dataset};

/// Read an employee CSV file into a typed `Dataset`.
///
/// A missing file or malformed row is a fatal error; the returned error
/// chain carries the underlying io/parse source.
pub fn read_employee_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open employee CSV: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(col_idx).unwrap_or_default().trim().to_string());
        }
    }

    let columns = headers
        .iter()
        .zip(cells)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();

    let dataset = Dataset::new(columns)?;
    Ok(dataset)
}

/// Type a raw column: numeric when every non-empty cell parses as `f64`.
///
/// An all-empty column is numeric, matching the inference of the original
/// data stack for all-missing columns.
fn infer_column(name: &str, raw: Vec<String>) -> Column {
    let mut parsed = Vec::with_capacity(raw.len());
    let mut all_numeric = true;
    for cell in &raw {
        if cell.is_empty() {
            parsed.push(None);
        } else {
            match cell.parse::<f64>() {
                Ok(x) => parsed.push(Some(x)),
                Err(_) => {
                    all_numeric = false;
                    break;
                }
            }
        }
    }

    if all_numeric {
        Column {
            name: name.to_string(),
            data: ColumnData::Numeric(parsed),
        }
    } else {
        let values = raw
            .into_iter()
            .map(|cell| if cell.is_empty() { None } else { Some(cell) })
            .collect();
        Column {
            name: name.to_string(),
            data: ColumnData::Categorical(values),
        }
    }
}
