//! Per-category means for the grouped bar chart.

use std::collections::HashMap;

use serde::Serialize;

use anx_model::{Dataset, Result, schema};

#[derive(Debug, Clone, Serialize)]
pub struct GroupMean {
    pub category: String,
    pub mean: f64,
}

/// Mean of `value_column` per distinct value of `key_column`, categories in
/// first-seen row order. Non-finite values are skipped.
pub fn mean_by_category(
    dataset: &Dataset,
    key_column: &str,
    value_column: &str,
) -> Result<Vec<GroupMean>> {
    let keys = dataset.text_column(key_column)?;
    let values = dataset.numeric_column(value_column)?;

    let mut order: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sums: Vec<(f64, usize)> = Vec::new();
    for (key, value) in keys.into_iter().zip(values) {
        if !value.is_finite() {
            continue;
        }
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            sums.push((0.0, 0));
            sums.len() - 1
        });
        sums[slot].0 += value;
        sums[slot].1 += 1;
    }

    Ok(order
        .into_iter()
        .zip(sums)
        .map(|(category, (sum, count))| GroupMean {
            category,
            mean: sum / count as f64,
        })
        .collect())
}

/// Mean anxiety severity per gender category, the bar chart's data.
pub fn severity_by_gender(dataset: &Dataset) -> Result<Vec<GroupMean>> {
    mean_by_category(dataset, schema::GENDER, schema::SEVERITY)
}
