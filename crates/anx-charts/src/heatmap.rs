use std::path::Path;

use anyhow::Result;
use plotters::prelude::{
    BLACK, BitMapBackend, ChartBuilder, Color, IntoDrawingArea, IntoFont, RGBColor, Rectangle,
    Text, WHITE,
};

use anx_stats::CorrelationMatrix;

/// Annotated correlation heatmap over the dataset's numeric columns.
///
/// Cells hold the 2-decimal Pearson coefficient on a blue-white-red diverging
/// scale; undefined coefficients (NaN) stay blank so degenerate datasets
/// render instead of crashing.
pub fn correlation_heatmap(matrix: &CorrelationMatrix, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (900, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = matrix.len();
    let slots = n.max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Feature Correlation", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(0.0..slots as f64, 0.0..slots as f64)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(slots)
        .y_labels(slots)
        .x_label_formatter(&|x| label_at(matrix, x.floor() as usize))
        .y_label_formatter(&|y| {
            // Row 0 is drawn at the top.
            let idx = y.floor() as usize;
            if idx < n {
                label_at(matrix, n - 1 - idx)
            } else {
                String::new()
            }
        })
        .draw()?;

    let mut cells = Vec::new();
    let mut annotations = Vec::new();
    for (i, row) in matrix.values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            let x = j as f64;
            let y = (n - 1 - i) as f64;
            cells.push(Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                diverging_color(value).filled(),
            ));
            annotations.push(Text::new(
                format!("{value:.2}"),
                (x + 0.32, y + 0.55),
                ("sans-serif", 15).into_font().color(&BLACK),
            ));
        }
    }
    chart.draw_series(cells)?;
    chart.draw_series(annotations)?;

    root.present()?;
    Ok(())
}

fn label_at(matrix: &CorrelationMatrix, idx: usize) -> String {
    matrix
        .columns
        .get(idx)
        .map(|name| short_label(name))
        .unwrap_or_default()
}

/// Column names minus their unit suffix, e.g. "Heart Rate (bpm during
/// attack)" becomes "Heart Rate".
fn short_label(name: &str) -> String {
    match name.split_once(" (") {
        Some((head, _)) => head.to_string(),
        None => name.to_string(),
    }
}

/// Blue-white-red diverging scale over [-1, 1].
fn diverging_color(value: f64) -> RGBColor {
    let clamped = value.clamp(-1.0, 1.0);
    let lerp = |from: u8, to: u8, t: f64| (f64::from(from) + (f64::from(to) - f64::from(from)) * t) as u8;
    if clamped < 0.0 {
        let t = clamped + 1.0; // 0 at -1, 1 at 0
        RGBColor(lerp(59, 255, t), lerp(76, 255, t), lerp(192, 255, t))
    } else {
        let t = clamped; // 0 at 0, 1 at +1
        RGBColor(lerp(255, 180, t), lerp(255, 4, t), lerp(255, 38, t))
    }
}
