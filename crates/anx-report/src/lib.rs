//! The reports view: a searchable read-only slice of the dataset and a full
//! CSV export.

mod export;
mod filter;

pub use export::{REPORT_FILE_NAME, ReportError, export_csv, write_report};
pub use filter::{FilteredView, filter_rows};
