//! The validated survey dataset.
//!
//! A [`Dataset`] wraps a Polars DataFrame that has already passed the schema
//! contract: all required columns present, numeric columns coerced to `f64`,
//! and no surviving row missing a required value. Loading a new file replaces
//! the dataset wholesale; nothing mutates it in place.

use polars::prelude::{AnyValue, DataFrame, DataType};

use crate::error::{ModelError, Result};
use crate::value::{any_to_f64, any_to_string};

/// A validated, immutable survey table plus the row-drop audit count.
#[derive(Debug, Clone)]
pub struct Dataset {
    data: DataFrame,
    dropped_rows: usize,
}

impl Dataset {
    pub fn new(data: DataFrame, dropped_rows: usize) -> Self {
        Self { data, dropped_rows }
    }

    /// Number of surviving rows. Zero is a valid dataset.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Rows dropped during load because a required value was missing or failed
    /// numeric coercion.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn frame(&self) -> &DataFrame {
        &self.data
    }

    /// Column names in original file order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Names of columns with a float dtype, in frame order. This covers the
    /// seven designated numeric columns plus any extra column the loader
    /// inferred as numeric.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.data
            .get_columns()
            .iter()
            .filter(|column| matches!(column.dtype(), DataType::Float64 | DataType::Float32))
            .map(|column| column.name().to_string())
            .collect()
    }

    /// All values of a numeric column. Null cells (possible only in inferred
    /// extra columns) come back as NaN so row alignment is preserved.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let column = self
            .data
            .column(name)
            .map_err(|_| ModelError::UnknownColumn(name.to_string()))?;
        let mut values = Vec::with_capacity(self.data.height());
        for idx in 0..self.data.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            values.push(any_to_f64(value).unwrap_or(f64::NAN));
        }
        Ok(values)
    }

    /// All values of a text column as display strings.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        let column = self
            .data
            .column(name)
            .map_err(|_| ModelError::UnknownColumn(name.to_string()))?;
        let mut values = Vec::with_capacity(self.data.height());
        for idx in 0..self.data.height() {
            values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        Ok(values)
    }

    /// Distinct non-empty values of a text column in first-seen order, e.g.
    /// the observed Gender or Occupation choices for the prediction form.
    pub fn unique_text_values(&self, name: &str) -> Result<Vec<String>> {
        let values = self.text_column(name)?;
        let mut seen = Vec::new();
        for value in values {
            if !value.is_empty() && !seen.contains(&value) {
                seen.push(value);
            }
        }
        Ok(seen)
    }

    /// One row rendered as display strings, in column order.
    pub fn display_row(&self, idx: usize) -> Vec<String> {
        self.data
            .get_columns()
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn sample() -> Dataset {
        let columns: Vec<Column> = vec![
            Series::new(
                "Gender".into(),
                vec!["Male".to_string(), "Female".to_string(), "Male".to_string()],
            )
            .into(),
            Series::new("Sleep Hours".into(), vec![7.0f64, 6.5, 8.0]).into(),
        ];
        Dataset::new(DataFrame::new(columns).unwrap(), 1)
    }

    #[test]
    fn accessors_preserve_row_order() {
        let dataset = sample();
        assert_eq!(dataset.height(), 3);
        assert_eq!(dataset.dropped_rows(), 1);
        assert_eq!(
            dataset.text_column("Gender").unwrap(),
            vec!["Male", "Female", "Male"]
        );
        assert_eq!(
            dataset.numeric_column("Sleep Hours").unwrap(),
            vec![7.0, 6.5, 8.0]
        );
    }

    #[test]
    fn unique_text_values_keep_first_seen_order() {
        let dataset = sample();
        assert_eq!(
            dataset.unique_text_values("Gender").unwrap(),
            vec!["Male", "Female"]
        );
    }

    #[test]
    fn numeric_column_names_are_float_dtypes_only() {
        let dataset = sample();
        assert_eq!(dataset.numeric_column_names(), vec!["Sleep Hours"]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let dataset = sample();
        assert!(matches!(
            dataset.numeric_column("Mood"),
            Err(ModelError::UnknownColumn(_))
        ));
    }

    #[test]
    fn display_row_formats_floats_without_trailing_zeros() {
        let dataset = sample();
        assert_eq!(dataset.display_row(0), vec!["Male", "7"]);
        assert_eq!(dataset.display_row(1), vec!["Female", "6.5"]);
    }
}
