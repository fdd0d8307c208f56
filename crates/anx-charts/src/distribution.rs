use std::path::Path;

use anyhow::Result;
use plotters::prelude::{
    BLACK, BLUE, BitMapBackend, ChartBuilder, Color, IntoDrawingArea, LineSeries, PathElement,
    RED, RGBColor, Rectangle, WHITE,
};

use anx_stats::{DensityCurve, Histogram};

/// Default series palette: blue for heart rate, red for breathing rate.
pub const SERIES_COLORS: [RGBColor; 2] = [BLUE, RED];

/// One overlaid distribution: histogram bars plus an optional smoothed
/// density curve, both in the series color.
pub struct RateSeries {
    pub label: String,
    pub color: RGBColor,
    pub histogram: Histogram,
    pub density: Option<DensityCurve>,
}

/// Overlaid histograms with density curves, legend per series. The density is
/// scaled to counts (sample size times bin width) so curves sit on top of the
/// bars.
pub fn rate_distribution_chart(series: &[RateSeries], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = 0.0_f64;
    for entry in series {
        x_min = x_min.min(entry.histogram.start);
        x_max = x_max.max(entry.histogram.end());
        y_max = y_max.max(entry.histogram.max_count() as f64);
        if let Some(density) = &entry.density {
            let scale = count_scale(&entry.histogram);
            for (x, y) in density.xs.iter().zip(&density.ys) {
                x_min = x_min.min(*x);
                x_max = x_max.max(*x);
                y_max = y_max.max(y * scale);
            }
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
        x_min = 0.0;
        x_max = 1.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Heart Rate & Breathing Rate Distribution",
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Rate")
        .y_desc("Count")
        .draw()?;

    for entry in series {
        let color = entry.color;
        chart.draw_series((0..entry.histogram.counts.len()).map(|idx| {
            let (low, high) = entry.histogram.bin_range(idx);
            let count = entry.histogram.counts[idx] as f64;
            Rectangle::new([(low, 0.0), (high, count)], color.mix(0.35).filled())
        }))?;

        if let Some(density) = &entry.density {
            let scale = count_scale(&entry.histogram);
            chart
                .draw_series(LineSeries::new(
                    density
                        .xs
                        .iter()
                        .zip(&density.ys)
                        .map(|(x, y)| (*x, y * scale)),
                    color.stroke_width(2),
                ))?
                .label(entry.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn count_scale(histogram: &Histogram) -> f64 {
    histogram.total() as f64 * histogram.bin_width
}
