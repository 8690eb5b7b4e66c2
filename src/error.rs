//! Error types for input validation, scenario loading, and CSV export.

use std::io;

use thiserror::Error;

/// A single input that falls outside the engine's documented domain.
///
/// Produced at the input boundary; the engine itself never sees invalid values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("system voltage {value} V is not supported (expected 12.8 or 25.6)")]
    InvalidVoltage { value: f64 },

    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("stage {stage}: brightness {value}% is outside 0..=100")]
    BrightnessOutOfRange { stage: u8, value: u32 },

    #[error("stage {stage}: duration {value} h is outside 0..=12")]
    DurationOutOfRange { stage: u8, value: u32 },

    #[error("stage index {found} is invalid at position {position} (expected {expected})")]
    StageIndex {
        position: usize,
        expected: u8,
        found: u8,
    },

    #[error("dimming schedule needs exactly 4 stages, got {count}")]
    StageCount { count: usize },
}

/// Failure to obtain a runnable scenario.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read scenario \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset \"{name}\", available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("scenario failed validation ({} problem(s))", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Failure while writing or reading exported CSV data.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: cannot parse {column} value \"{value}\"")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("summary is missing metric \"{0}\"")]
    MissingMetric(&'static str),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_stage() {
        let err = ValidationError::BrightnessOutOfRange {
            stage: 3,
            value: 140,
        };
        assert_eq!(
            err.to_string(),
            "stage 3: brightness 140% is outside 0..=100"
        );
    }

    #[test]
    fn invalid_config_reports_problem_count() {
        let err = ConfigError::Invalid(vec![
            ValidationError::StageCount { count: 3 },
            ValidationError::InvalidVoltage { value: 24.0 },
        ]);
        assert!(err.to_string().contains("2 problem(s)"));
    }
}
