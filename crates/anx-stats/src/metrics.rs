//! Summary metrics for the home view.

use serde::Serialize;

use anx_model::{Dataset, Result, round2, schema};

/// The five metric cards of the home view: display label and source column.
pub const SUMMARY_COLUMNS: [(&str, &str); 5] = [
    ("Avg. Stress Level", schema::STRESS_LEVEL),
    ("Avg. Heart Rate (bpm)", schema::HEART_RATE),
    ("Avg. Breathing Rate", schema::BREATHING_RATE),
    ("Avg. Caffeine Intake (mg)", schema::CAFFEINE),
    ("Avg. Alcohol Intake (drinks/week)", schema::ALCOHOL),
];

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: String,
    pub column: String,
    /// Mean rounded to two decimals; `None` when the dataset has no rows.
    pub value: Option<f64>,
}

/// Arithmetic mean, `None` for empty input so an empty dataset renders as
/// "no data" instead of dividing by zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Means of the five summary columns, rounded to two decimals.
pub fn summary_metrics(dataset: &Dataset) -> Result<Vec<Metric>> {
    SUMMARY_COLUMNS
        .iter()
        .map(|&(label, column)| {
            let values = dataset.numeric_column(column)?;
            Ok(Metric {
                label: label.to_string(),
                column: column.to_string(),
                value: mean(&values).map(round2),
            })
        })
        .collect()
}
