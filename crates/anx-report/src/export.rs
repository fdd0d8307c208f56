use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use anx_model::{Dataset, ModelError};

/// Fixed name of the downloadable report.
pub const REPORT_FILE_NAME: &str = "Anxiety_Report.csv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv encode error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Encode the full dataset as CSV bytes: header row first, original column
/// order, UTF-8 with no byte-order mark. The export is always unfiltered,
/// independent of any search state.
pub fn export_csv(dataset: &Dataset) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(dataset.column_names())?;
    for idx in 0..dataset.height() {
        writer.write_record(dataset.display_row(idx))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| ReportError::Io(error.into_error()))?;
    Ok(bytes)
}

/// Write the export into `dir` under the fixed report file name.
pub fn write_report(dataset: &Dataset, dir: &Path) -> Result<PathBuf, ReportError> {
    let bytes = export_csv(dataset)?;
    let path = dir.join(REPORT_FILE_NAME);
    fs::write(&path, bytes)?;
    Ok(path)
}
