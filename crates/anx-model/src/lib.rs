//! Data model for the anxiety attack survey dashboard.
//!
//! This crate defines the schema contract every uploaded dataset must satisfy,
//! the validated [`Dataset`] wrapper around a Polars DataFrame, and the value
//! conversion helpers shared by the other workspace crates.

pub mod dataset;
pub mod error;
pub mod schema;
pub mod value;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use value::{any_to_f64, any_to_string, format_numeric, parse_f64, round2};
