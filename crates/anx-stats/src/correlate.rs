//! Pairwise Pearson correlation for the heatmap.

use serde::Serialize;

use anx_model::{Dataset, Result};

/// A square correlation matrix over the dataset's numeric columns.
/// Undefined coefficients are NaN, never a panic; they serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// `values[i][j]` correlates `columns[i]` with `columns[j]`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Pearson correlation coefficient over the pairs where both values are
/// finite. NaN when fewer than two such pairs exist or either side has zero
/// variance (single row, constant column).
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        covariance / denom
    }
}

/// Pairwise Pearson matrix across all numeric columns, in frame order.
pub fn correlation_matrix(dataset: &Dataset) -> Result<CorrelationMatrix> {
    let columns = dataset.numeric_column_names();
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| dataset.numeric_column(column))
        .collect::<Result<_>>()?;
    let values = series
        .iter()
        .map(|row| series.iter().map(|col| pearson(row, col)).collect())
        .collect();
    Ok(CorrelationMatrix { columns, values })
}
