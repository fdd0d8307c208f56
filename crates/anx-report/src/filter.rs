use serde::Serialize;

use anx_model::{Dataset, Result, schema};

/// A derived, read-only subset of dataset rows rendered as display strings.
/// Recomputed per search; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows whose Gender or Occupation contains `search` as a case-insensitive
/// substring. An empty search matches every row.
pub fn filter_rows(dataset: &Dataset, search: &str) -> Result<FilteredView> {
    let needle = search.to_lowercase();
    let genders = dataset.text_column(schema::GENDER)?;
    let occupations = dataset.text_column(schema::OCCUPATION)?;

    let mut rows = Vec::new();
    for idx in 0..dataset.height() {
        if genders[idx].to_lowercase().contains(&needle)
            || occupations[idx].to_lowercase().contains(&needle)
        {
            rows.push(dataset.display_row(idx));
        }
    }
    Ok(FilteredView {
        headers: dataset.column_names(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anx_ingest::load_dataset;

    fn dataset() -> Dataset {
        let csv = "Gender,Occupation,Stress Level (1-10),Heart Rate (bpm during attack),\
Breathing Rate (breaths/min),Caffeine Intake (mg/day),Alcohol Consumption (drinks/week),\
Severity of Anxiety Attack (1-10),Sleep Hours\n\
Male,Student,4,80,20,100,2,5,7\nFemale,Doctor,6,90,22,50,1,4,8\nFemale,Nurse,7,100,24,150,2,6,6\n";
        load_dataset(csv.as_bytes()).unwrap()
    }

    #[test]
    fn search_matches_substring_in_either_column() {
        let dataset = dataset();
        // "male" is a substring of both "Male" and "Female".
        let view = filter_rows(&dataset, "male").unwrap();
        assert_eq!(view.len(), 3);

        let view = filter_rows(&dataset, "Female").unwrap();
        assert_eq!(view.len(), 2);

        let view = filter_rows(&dataset, "nur").unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows[0][1], "Nurse");
    }

    #[test]
    fn search_is_case_insensitive() {
        let dataset = dataset();
        let lower = filter_rows(&dataset, "doctor").unwrap();
        let upper = filter_rows(&dataset, "DOCTOR").unwrap();
        assert_eq!(lower.rows, upper.rows);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn empty_search_matches_every_row() {
        let dataset = dataset();
        let view = filter_rows(&dataset, "").unwrap();
        assert_eq!(view.len(), dataset.height());
        assert_eq!(view.headers.len(), 9);
    }

    #[test]
    fn no_match_yields_an_empty_view_not_an_error() {
        let view = filter_rows(&dataset(), "astronaut").unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn search_does_not_match_numeric_columns() {
        // "80" appears as a heart rate, but only Gender/Occupation are searched.
        let view = filter_rows(&dataset(), "80").unwrap();
        assert!(view.is_empty());
    }
}
