//! Implementations of the four view subcommands. Each one receives the
//! session by reference and degrades to a warning when no dataset is loaded.

use std::fs;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::warn;

use anx_charts::render_all;
use anx_cli::session::Session;
use anx_model::schema;
use anx_report::{filter_rows, write_report};
use anx_stats::{ScenarioInput, summary_metrics};

use crate::cli::{HomeArgs, PredictArgs, ReportArgs, VisualizeArgs};
use crate::views;

pub fn run_home(session: &Session, args: &HomeArgs) -> Result<()> {
    let Some(dataset) = session.require_dataset("home") else {
        return Ok(());
    };
    let metrics = summary_metrics(dataset)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }
    println!(
        "Overview Metrics ({} rows, {} dropped on load)",
        dataset.height(),
        dataset.dropped_rows()
    );
    views::print_metric_cards(&metrics);
    Ok(())
}

pub fn run_visualize(session: &Session, args: &VisualizeArgs) -> Result<()> {
    let Some(dataset) = session.require_dataset("visualize") else {
        return Ok(());
    };
    let written = render_all(dataset, &args.out_dir)?;
    for path in &written {
        println!("Chart written: {}", path.display());
    }
    Ok(())
}

pub fn run_predict(session: &Session, args: &PredictArgs) -> Result<()> {
    let Some(dataset) = session.require_dataset("predict") else {
        return Ok(());
    };
    let genders = dataset.unique_text_values(schema::GENDER)?;
    let occupations = dataset.unique_text_values(schema::OCCUPATION)?;
    let input = ScenarioInput {
        gender: resolve_choice(args.gender.as_deref(), &genders, "gender")?,
        occupation: resolve_choice(args.occupation.as_deref(), &occupations, "occupation")?,
        stress_level: args.stress_level as f64,
        heart_rate: args.heart_rate as f64,
        breathing_rate: args.breathing_rate as f64,
        caffeine: args.caffeine as f64,
        alcohol: args.alcohol as f64,
        sleep_hours: args.sleep_hours as f64,
    };
    let score = input.severity_score();
    if args.json {
        let payload = json!({ "input": input, "severity": score });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    views::print_prediction(score);
    Ok(())
}

pub fn run_report(session: &Session, args: &ReportArgs) -> Result<()> {
    let Some(dataset) = session.require_dataset("report") else {
        return Ok(());
    };
    let view = filter_rows(dataset, &args.search)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        views::print_filtered_table(&view, dataset.height());
    }

    // The export is always the full dataset, independent of the search.
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory {}", args.out_dir.display()))?;
    let path = write_report(dataset, &args.out_dir)?;
    println!("Report written: {}", path.display());
    Ok(())
}

/// Resolve a form choice against the values observed in the dataset; the
/// first observed value is the default. A dataset with no observed values
/// (every row dropped on load) still gets an estimate: the choice falls back
/// to an empty placeholder, which the score never reads anyway.
fn resolve_choice(requested: Option<&str>, observed: &[String], what: &str) -> Result<String> {
    match requested {
        None => Ok(observed.first().cloned().unwrap_or_else(|| {
            warn!("no {what} values observed in the dataset; estimating without one");
            String::new()
        })),
        Some(value) => observed
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(value))
            .cloned()
            .with_context(|| {
                format!(
                    "{what} {value:?} not observed in dataset (choices: {})",
                    observed.join(", ")
                )
            }),
    }
}
