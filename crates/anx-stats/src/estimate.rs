//! The heuristic severity estimator behind the predictions view.

use serde::Serialize;

use anx_model::round2;

/// One prediction-form submission. Created fresh per submission, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioInput {
    pub gender: String,
    pub occupation: String,
    pub stress_level: f64,
    pub heart_rate: f64,
    pub breathing_rate: f64,
    pub caffeine: f64,
    pub alcohol: f64,
    pub sleep_hours: f64,
}

impl ScenarioInput {
    /// Heuristic severity score: the mean of stress level, heart rate / 20,
    /// breathing rate / 5, caffeine / 100 and alcohol, rounded to two
    /// decimals.
    ///
    /// Gender, occupation and sleep hours are collected by the form but do
    /// not enter the formula, and the result is not clamped to the 1-10 scale
    /// its label claims. Both quirks are inherited from the source formula
    /// and kept reproducible rather than corrected.
    pub fn severity_score(&self) -> f64 {
        let terms = [
            self.stress_level,
            self.heart_rate / 20.0,
            self.breathing_rate / 5.0,
            self.caffeine / 100.0,
            self.alcohol,
        ];
        round2(terms.iter().sum::<f64>() / terms.len() as f64)
    }
}
