//! The four visual summaries of the visualization view, rendered to PNG.
//!
//! Chart data comes precomputed from `anx-stats`; this crate only draws.
//! Every render is terminal and side-effecting: no numeric result comes back,
//! only the written file paths.

mod bar;
mod distribution;
mod heatmap;
mod scatter;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use anx_model::{Dataset, schema};
use anx_stats::{correlation_matrix, gaussian_kde, histogram, severity_by_gender};

pub use bar::severity_by_gender_chart;
pub use distribution::{RateSeries, SERIES_COLORS, rate_distribution_chart};
pub use heatmap::correlation_heatmap;
pub use scatter::sleep_stress_scatter;

pub const SEVERITY_BY_GENDER_FILE: &str = "severity_by_gender.png";
pub const SLEEP_VS_STRESS_FILE: &str = "sleep_vs_stress.png";
pub const RATE_DISTRIBUTION_FILE: &str = "rate_distribution.png";
pub const CORRELATION_HEATMAP_FILE: &str = "correlation_heatmap.png";

const HISTOGRAM_BINS: usize = 12;
const KDE_POINTS: usize = 200;

/// Render all four charts into `out_dir`, returning the written paths.
pub fn render_all(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create chart directory {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(4);

    let groups = severity_by_gender(dataset)?;
    let path = out_dir.join(SEVERITY_BY_GENDER_FILE);
    severity_by_gender_chart(&groups, &path).context("render severity bar chart")?;
    written.push(path);

    let sleep = dataset.numeric_column(schema::SLEEP_HOURS)?;
    let stress = dataset.numeric_column(schema::STRESS_LEVEL)?;
    let points: Vec<(f64, f64)> = sleep.into_iter().zip(stress).collect();
    let path = out_dir.join(SLEEP_VS_STRESS_FILE);
    sleep_stress_scatter(&points, &path).context("render sleep/stress scatter")?;
    written.push(path);

    let heart = dataset.numeric_column(schema::HEART_RATE)?;
    let breathing = dataset.numeric_column(schema::BREATHING_RATE)?;
    let series: Vec<RateSeries> = [("Heart Rate", &heart), ("Breathing Rate", &breathing)]
        .into_iter()
        .enumerate()
        .filter_map(|(idx, (label, values))| {
            Some(RateSeries {
                label: label.to_string(),
                color: distribution::SERIES_COLORS[idx % distribution::SERIES_COLORS.len()],
                histogram: histogram(values, HISTOGRAM_BINS)?,
                density: gaussian_kde(values, KDE_POINTS),
            })
        })
        .collect();
    let path = out_dir.join(RATE_DISTRIBUTION_FILE);
    rate_distribution_chart(&series, &path).context("render rate distributions")?;
    written.push(path);

    let matrix = correlation_matrix(dataset)?;
    let path = out_dir.join(CORRELATION_HEATMAP_FILE);
    correlation_heatmap(&matrix, &path).context("render correlation heatmap")?;
    written.push(path);

    info!(charts = written.len(), dir = %out_dir.display(), "charts written");
    Ok(written)
}
