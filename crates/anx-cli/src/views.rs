//! Terminal rendering of the dashboard views with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use anx_report::FilteredView;
use anx_stats::Metric;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v:.2}")).set_alignment(CellAlignment::Right),
        None => Cell::new("no data")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
    }
}

/// The home view's labeled summary cards.
pub fn print_metric_cards(metrics: &[Metric]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    for metric in metrics {
        table.add_row(vec![Cell::new(&metric.label), value_cell(metric.value)]);
    }
    println!("{table}");
}

/// The predictions view's single result card.
pub fn print_prediction(score: f64) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Predicted Anxiety Severity (1-10)")]);
    table.add_row(vec![
        Cell::new(format!("{score:.2}")).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

/// The filtered dataset preview of the reports view.
pub fn print_filtered_table(view: &FilteredView, total_rows: usize) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(view.headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    for row in &view.rows {
        table.add_row(row.clone());
    }
    println!("{table}");
    println!("{} of {total_rows} rows match", view.len());
}
