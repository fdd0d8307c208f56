use std::path::Path;

use anyhow::Result;
use plotters::prelude::{BitMapBackend, BLUE, ChartBuilder, Color, IntoDrawingArea, Rectangle, WHITE};

use anx_stats::GroupMean;

/// Grouped bar chart: mean anxiety severity per gender category, categories
/// on the x axis in first-seen order.
pub fn severity_by_gender_chart(groups: &[GroupMean], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max = groups.iter().map(|g| g.mean).fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    let slots = groups.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Gender vs. Anxiety Severity", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..slots as f64, 0.0..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            groups
                .get(idx)
                .map(|g| g.category.clone())
                .unwrap_or_default()
        })
        .x_desc("Gender")
        .y_desc("Severity of Anxiety Attack (1-10)")
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(idx, group)| {
        Rectangle::new(
            [(idx as f64 + 0.15, 0.0), (idx as f64 + 0.85, group.mean)],
            BLUE.mix(0.7).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
