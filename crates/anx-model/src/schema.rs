//! The fixed schema contract for anxiety attack survey uploads.
//!
//! Every validated dataset contains all nine required columns, with the seven
//! numeric-designated ones coerced to `f64`. Column identity is an exact match
//! after trimming surrounding whitespace; there is no fuzzy matching.

pub const GENDER: &str = "Gender";
pub const OCCUPATION: &str = "Occupation";
pub const STRESS_LEVEL: &str = "Stress Level (1-10)";
pub const HEART_RATE: &str = "Heart Rate (bpm during attack)";
pub const BREATHING_RATE: &str = "Breathing Rate (breaths/min)";
pub const CAFFEINE: &str = "Caffeine Intake (mg/day)";
pub const ALCOHOL: &str = "Alcohol Consumption (drinks/week)";
pub const SEVERITY: &str = "Severity of Anxiety Attack (1-10)";
pub const SLEEP_HOURS: &str = "Sleep Hours";

/// All required columns, in schema order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    GENDER,
    OCCUPATION,
    STRESS_LEVEL,
    HEART_RATE,
    BREATHING_RATE,
    CAFFEINE,
    ALCOHOL,
    SEVERITY,
    SLEEP_HOURS,
];

/// The required columns designated numeric (coerced to `f64` on load).
pub const NUMERIC_COLUMNS: [&str; 7] = [
    STRESS_LEVEL,
    HEART_RATE,
    BREATHING_RATE,
    CAFFEINE,
    ALCOHOL,
    SEVERITY,
    SLEEP_HOURS,
];

/// Returns true if `name` is one of the numeric-designated required columns.
pub fn is_numeric_column(name: &str) -> bool {
    NUMERIC_COLUMNS.contains(&name)
}

/// Returns true if `name` is one of the required columns.
pub fn is_required_column(name: &str) -> bool {
    REQUIRED_COLUMNS.contains(&name)
}

/// Required columns absent from `headers`, in schema order.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| (*required).to_string())
        .collect()
}
