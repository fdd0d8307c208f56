use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use thiserror::Error;
use tracing::debug;

use anx_model::schema;
use anx_model::value::parse_f64;
use anx_model::Dataset;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing columns in dataset: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

impl IngestError {
    /// The missing required column names, when this is a schema failure.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            IngestError::MissingColumns(columns) => Some(columns),
            _ => None,
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Load and validate a survey CSV from a file path.
pub fn load_dataset_from_path(path: &Path) -> Result<Dataset, IngestError> {
    let file = File::open(path)?;
    load_dataset(file)
}

/// Load and validate a survey CSV from any reader.
///
/// Headers are trimmed (and BOM-stripped) before the schema check; a missing
/// required column fails the whole load with [`IngestError::MissingColumns`].
/// Cells of the seven numeric-designated columns are coerced to `f64`;
/// coercion failures become missing values, and every row missing any required
/// value is dropped silently, counted in [`Dataset::dropped_rows`]. Extra
/// columns ride along and never gate row survival; an extra column whose
/// non-empty cells all parse as numbers is stored as a float column so it
/// participates in the correlation matrix.
pub fn load_dataset<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let missing = schema::missing_columns(&headers);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = (0..headers.len())
            .map(|idx| normalize_cell(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    let total = rows.len();
    let required_indexes: Vec<usize> = schema::REQUIRED_COLUMNS
        .iter()
        .map(|required| {
            headers
                .iter()
                .position(|h| h == required)
                .unwrap_or_default()
        })
        .collect();

    let survivors: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| row_is_complete(row, &headers, &required_indexes))
        .collect();
    let dropped = total - survivors.len();
    if dropped > 0 {
        debug!(dropped, total, "dropped rows with missing required values");
    }

    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        let cells = survivors.iter().map(|row| row[idx].as_str());
        if schema::is_numeric_column(name)
            || (!schema::is_required_column(name) && infer_numeric(cells.clone()))
        {
            let values: Vec<Option<f64>> = cells.map(parse_f64).collect();
            columns.push(Series::new(name.as_str().into(), values).into());
        } else {
            let values: Vec<String> = cells.map(ToString::to_string).collect();
            columns.push(Series::new(name.as_str().into(), values).into());
        }
    }
    let data = DataFrame::new(columns)?;
    Ok(Dataset::new(data, dropped))
}

/// True when every required cell survives coercion: numeric cells must parse
/// as `f64`, text cells must be non-empty.
fn row_is_complete(row: &[String], headers: &[String], required_indexes: &[usize]) -> bool {
    for (required, &idx) in schema::REQUIRED_COLUMNS.iter().zip(required_indexes) {
        debug_assert_eq!(&headers[idx], required);
        let cell = row[idx].as_str();
        if schema::is_numeric_column(required) {
            if parse_f64(cell).is_none() {
                return false;
            }
        } else if cell.is_empty() {
            return false;
        }
    }
    true
}

/// Read-time type inference for extra columns: numeric when at least one cell
/// is non-empty and all non-empty cells parse as numbers.
fn infer_numeric<'a>(cells: impl Iterator<Item = &'a str>) -> bool {
    let mut non_empty = 0usize;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        if parse_f64(cell).is_none() {
            return false;
        }
        non_empty += 1;
    }
    non_empty > 0
}
