//! Integration tests for the survey CSV loader.

use anx_ingest::{IngestError, load_dataset, load_dataset_from_path};
use anx_model::schema;

const HEADER: &str = "Gender,Occupation,Stress Level (1-10),Heart Rate (bpm during attack),\
Breathing Rate (breaths/min),Caffeine Intake (mg/day),Alcohol Consumption (drinks/week),\
Severity of Anxiety Attack (1-10),Sleep Hours";

fn csv_with_rows(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

#[test]
fn valid_file_loads_every_complete_row() {
    let csv = csv_with_rows(&[
        "Male,Student,4,80,20,100,2,5,7",
        "Female,Engineer,8,120,30,250,0,9,5.5",
    ]);
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.dropped_rows(), 0);
    assert_eq!(
        dataset.numeric_column(schema::STRESS_LEVEL).unwrap(),
        vec![4.0, 8.0]
    );
    assert_eq!(
        dataset.text_column(schema::OCCUPATION).unwrap(),
        vec!["Student", "Engineer"]
    );
}

#[test]
fn missing_columns_are_named_exactly_in_schema_order() {
    let csv = "Gender,Stress Level (1-10),Sleep Hours\nMale,4,7\n";
    let error = load_dataset(csv.as_bytes()).unwrap_err();
    match error {
        IngestError::MissingColumns(columns) => assert_eq!(
            columns,
            vec![
                schema::OCCUPATION,
                schema::HEART_RATE,
                schema::BREATHING_RATE,
                schema::CAFFEINE,
                schema::ALCOHOL,
                schema::SEVERITY,
            ]
        ),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn headers_are_matched_after_trimming() {
    let csv = "\u{feff} Gender , Occupation ,Stress Level (1-10) , Heart Rate (bpm during attack),\
Breathing Rate (breaths/min),Caffeine Intake (mg/day),Alcohol Consumption (drinks/week),\
Severity of Anxiety Attack (1-10), Sleep Hours \nMale,Student,4,80,20,100,2,5,7\n";
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 1);
    assert!(dataset.column_names().contains(&schema::GENDER.to_string()));
}

#[test]
fn coercion_failures_drop_the_row_silently_and_are_counted() {
    let csv = csv_with_rows(&[
        "Male,Student,4,80,20,100,2,5,7",
        "Female,Nurse,high,120,30,250,0,9,5", // stress fails coercion
        "Male,Chef,6,95,,150,1,6,6",          // breathing rate empty
        "Female,Pilot,7,110,25,0,3,8,6.5",
    ]);
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.dropped_rows(), 2);
    assert_eq!(
        dataset.text_column(schema::OCCUPATION).unwrap(),
        vec!["Student", "Pilot"]
    );
}

#[test]
fn empty_text_required_cells_drop_the_row() {
    let csv = csv_with_rows(&[
        "Male,,4,80,20,100,2,5,7",
        ",Student,4,80,20,100,2,5,7",
        "Female,Doctor,4,80,20,100,2,5,7",
    ]);
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 1);
    assert_eq!(dataset.dropped_rows(), 2);
}

#[test]
fn zero_surviving_rows_is_a_valid_dataset() {
    let csv = csv_with_rows(&["Male,Student,bad,80,20,100,2,5,7"]);
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.dropped_rows(), 1);

    let header_only = csv_with_rows(&[]);
    let dataset = load_dataset(header_only.as_bytes()).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.dropped_rows(), 0);
}

#[test]
fn extra_columns_are_retained_and_never_gate_survival() {
    let mut csv = String::from(HEADER);
    csv.push_str(",Notes,Score\n");
    csv.push_str("Male,Student,4,80,20,100,2,5,7,felt dizzy,1.5\n");
    csv.push_str("Female,Doctor,6,90,22,50,1,4,8,,\n");
    let dataset = load_dataset(csv.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.dropped_rows(), 0);
    // Notes stays text; Score is inferred numeric and joins the float columns.
    let numeric = dataset.numeric_column_names();
    assert!(numeric.contains(&"Score".to_string()));
    assert!(!numeric.contains(&"Notes".to_string()));
    assert_eq!(
        dataset.text_column("Notes").unwrap(),
        vec!["felt dizzy", ""]
    );
}

#[test]
fn reload_replaces_the_dataset_wholesale() {
    let first = csv_with_rows(&["Male,Student,4,80,20,100,2,5,7"]);
    let second = csv_with_rows(&[
        "Female,Doctor,6,90,22,50,1,4,8",
        "Female,Nurse,7,100,24,150,2,6,6",
    ]);
    let mut dataset = load_dataset(first.as_bytes()).unwrap();
    dataset = load_dataset(second.as_bytes()).unwrap();
    assert_eq!(dataset.height(), 2);
    assert_eq!(
        dataset.text_column(schema::GENDER).unwrap(),
        vec!["Female", "Female"]
    );
}

#[test]
fn load_from_path_works_and_propagates_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    std::fs::write(&path, csv_with_rows(&["Male,Student,4,80,20,100,2,5,7"])).unwrap();
    let dataset = load_dataset_from_path(&path).unwrap();
    assert_eq!(dataset.height(), 1);

    let missing = dir.path().join("absent.csv");
    assert!(matches!(
        load_dataset_from_path(&missing),
        Err(IngestError::Io(_))
    ));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn cell_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (0u32..300).prop_map(|v| v.to_string()),
            Just(String::new()),
            Just("n/a".to_string()),
            "[a-z]{1,6}",
        ]
    }

    proptest! {
        // Survivors are a subset of the input rows: the loader never invents
        // rows, and every survivor has all nine required values.
        #[test]
        fn survivors_are_complete_and_never_invented(
            rows in proptest::collection::vec(
                proptest::collection::vec(cell_strategy(), 9),
                0..30,
            )
        ) {
            let mut csv = String::from(HEADER);
            csv.push('\n');
            for row in &rows {
                csv.push_str(&row.join(","));
                csv.push('\n');
            }
            let dataset = load_dataset(csv.as_bytes()).unwrap();
            prop_assert_eq!(dataset.height() + dataset.dropped_rows(), rows.len());

            for required in schema::REQUIRED_COLUMNS {
                if schema::is_numeric_column(required) {
                    let values = dataset.numeric_column(required).unwrap();
                    prop_assert!(values.iter().all(|v| v.is_finite()));
                } else {
                    let values = dataset.text_column(required).unwrap();
                    prop_assert!(values.iter().all(|v| !v.is_empty()));
                }
            }

            // Each surviving row's Gender/Occupation pair exists in the input.
            let genders = dataset.text_column(schema::GENDER).unwrap();
            let occupations = dataset.text_column(schema::OCCUPATION).unwrap();
            for (gender, occupation) in genders.iter().zip(&occupations) {
                prop_assert!(rows.iter().any(
                    |row| &row[0] == gender && &row[1] == occupation
                ));
            }
        }
    }
}
