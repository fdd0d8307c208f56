//! Session-scoped dataset store.
//!
//! The dataset lives for one invocation and is passed by reference into every
//! view; there are no ambient globals. A schema failure leaves the session
//! with no dataset and every view degrades to a warning.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use anx_ingest::load_dataset_from_path;
use anx_model::Dataset;

#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    source: Option<PathBuf>,
    schema_failure: bool,
}

impl Session {
    /// Resolve `--data` into a session. A missing flag gives an empty session;
    /// a load failure logs the error (naming the exact missing columns for
    /// schema failures) and gives an empty session with `has_errors()` set.
    pub fn open(data: Option<&Path>) -> Self {
        let Some(path) = data else {
            return Session::default();
        };
        match load_dataset_from_path(path) {
            Ok(dataset) => {
                info!(
                    rows = dataset.height(),
                    dropped = dataset.dropped_rows(),
                    file = %path.display(),
                    "dataset loaded"
                );
                Session {
                    dataset: Some(dataset),
                    source: Some(path.to_path_buf()),
                    schema_failure: false,
                }
            }
            Err(err) => {
                error!(file = %path.display(), "{err}");
                Session {
                    dataset: None,
                    source: Some(path.to_path_buf()),
                    schema_failure: true,
                }
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// True when a `--data` file was given but did not load.
    pub fn has_errors(&self) -> bool {
        self.schema_failure
    }

    /// Emit the one-line degradation warning every view shows without a
    /// dataset, and report whether a dataset is present.
    pub fn require_dataset(&self, view: &str) -> Option<&Dataset> {
        match self.dataset() {
            Some(dataset) => Some(dataset),
            None => {
                warn!("no valid dataset loaded; pass --data <CSV> to use the {view} view");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_data_flag_gives_an_empty_session_without_errors() {
        let session = Session::open(None);
        assert!(session.dataset().is_none());
        assert!(!session.has_errors());
        assert!(session.require_dataset("home").is_none());
    }

    #[test]
    fn schema_failure_empties_the_session_and_flags_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Gender,Sleep Hours\nMale,7\n").unwrap();
        let session = Session::open(Some(&path));
        assert!(session.dataset().is_none());
        assert!(session.has_errors());
    }

    #[test]
    fn valid_file_populates_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.csv");
        std::fs::write(
            &path,
            "Gender,Occupation,Stress Level (1-10),Heart Rate (bpm during attack),\
Breathing Rate (breaths/min),Caffeine Intake (mg/day),Alcohol Consumption (drinks/week),\
Severity of Anxiety Attack (1-10),Sleep Hours\nMale,Student,4,80,20,100,2,5,7\n",
        )
        .unwrap();
        let session = Session::open(Some(&path));
        assert!(!session.has_errors());
        assert_eq!(session.dataset().unwrap().height(), 1);
        assert_eq!(session.source(), Some(path.as_path()));
    }
}
