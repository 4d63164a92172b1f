use thiserror::Error;

/// Failures of the period record manager.
#[derive(Debug, Error)]
pub(crate) enum PeriodError {
    #[error("Period not found: {key}")]
    NotFound { key: String },

    #[error("Invalid period key: '{key}' (expected <year>_<Month>, e.g. 2024_January)")]
    InvalidPeriodKey { key: String },

    #[error("Unknown category: {label}")]
    UnknownCategory { label: String },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
