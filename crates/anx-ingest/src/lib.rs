//! Survey CSV ingestion.
//!
//! Turns raw uploaded CSV bytes into a validated [`anx_model::Dataset`] or a
//! schema failure naming the missing columns.

mod loader;

pub use loader::{IngestError, load_dataset, load_dataset_from_path};
