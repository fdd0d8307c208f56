//! Rendering smoke tests: every chart writes a non-empty PNG, including on
//! degenerate datasets.

use anx_charts::{
    CORRELATION_HEATMAP_FILE, RATE_DISTRIBUTION_FILE, SEVERITY_BY_GENDER_FILE,
    SLEEP_VS_STRESS_FILE, render_all,
};
use anx_ingest::load_dataset;
use anx_model::Dataset;

const HEADER: &str = "Gender,Occupation,Stress Level (1-10),Heart Rate (bpm during attack),\
Breathing Rate (breaths/min),Caffeine Intake (mg/day),Alcohol Consumption (drinks/week),\
Severity of Anxiety Attack (1-10),Sleep Hours";

fn dataset(rows: &[&str]) -> Dataset {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    load_dataset(csv.as_bytes()).unwrap()
}

fn assert_non_empty_png(path: &std::path::Path) {
    let metadata = std::fs::metadata(path)
        .unwrap_or_else(|_| panic!("missing chart file {}", path.display()));
    assert!(metadata.len() > 0, "empty chart file {}", path.display());
}

#[test]
fn renders_all_four_charts() {
    let dataset = dataset(&[
        "Male,Student,4,80,20,100,2,5,7",
        "Female,Doctor,8,120,30,250,0,9,5",
        "Male,Nurse,6,95,24,150,1,6,6",
        "Female,Pilot,7,110,25,0,3,8,6.5",
    ]);
    let dir = tempfile::tempdir().unwrap();
    let written = render_all(&dataset, dir.path()).unwrap();
    assert_eq!(written.len(), 4);
    for file in [
        SEVERITY_BY_GENDER_FILE,
        SLEEP_VS_STRESS_FILE,
        RATE_DISTRIBUTION_FILE,
        CORRELATION_HEATMAP_FILE,
    ] {
        assert_non_empty_png(&dir.path().join(file));
    }
}

#[test]
fn single_row_dataset_renders_blank_heatmap_without_crashing() {
    // Pearson over one row is undefined everywhere; the heatmap must still
    // come out, with blank cells.
    let dataset = dataset(&["Male,Student,4,80,20,100,2,5,7"]);
    let dir = tempfile::tempdir().unwrap();
    let written = render_all(&dataset, dir.path()).unwrap();
    assert_eq!(written.len(), 4);
    assert_non_empty_png(&dir.path().join(CORRELATION_HEATMAP_FILE));
}

#[test]
fn empty_dataset_still_renders_every_chart() {
    let dataset = dataset(&[]);
    let dir = tempfile::tempdir().unwrap();
    let written = render_all(&dataset, dir.path()).unwrap();
    assert_eq!(written.len(), 4);
    for path in written {
        assert_non_empty_png(&path);
    }
}
