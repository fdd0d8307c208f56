use std::path::Path;

use anyhow::Result;
use plotters::prelude::{BitMapBackend, ChartBuilder, Circle, Color, GREEN, IntoDrawingArea, WHITE};

/// Scatter plot: sleep hours (x) against stress level (y), one point per row.
pub fn sleep_stress_scatter(points: &[(f64, f64)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    let (x_range, y_range) = ranges(&finite);

    let mut chart = ChartBuilder::on(&root)
        .caption("Sleep Hours vs. Stress Level", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc("Sleep Hours")
        .y_desc("Stress Level (1-10)")
        .draw()?;

    chart.draw_series(
        finite
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, GREEN.mix(0.8).filled())),
    )?;

    root.present()?;
    Ok(())
}

fn ranges(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    if points.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }
    let pad = |min: f64, max: f64| {
        let span = (max - min).max(1.0);
        (min - span * 0.05)..(max + span * 0.05)
    };
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    (pad(x_min, x_max), pad(y_min, y_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_fall_back_for_empty_and_degenerate_input() {
        let (x, y) = ranges(&[]);
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);

        let (x, y) = ranges(&[(7.0, 5.0)]);
        assert!(x.start < 7.0 && x.end > 7.0);
        assert!(y.start < 5.0 && y.end > 5.0);
    }
}
