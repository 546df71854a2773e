//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested report has no underlying data (no rows loaded, no budget, unknown metric).
    #[error("No data: {0}")]
    NoData(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration (e.g. overlapping chart of accounts).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Ledger data source error.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NoData(_) | Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Configuration(_) | Self::DataSource(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoData(_) => "no_data",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::DataSource(_) => "data_source_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NoData(String::new()), 404, "no_data")]
    #[case(AppError::NotFound(String::new()), 404, "not_found")]
    #[case(AppError::Validation(String::new()), 400, "validation_error")]
    #[case(AppError::Configuration(String::new()), 500, "configuration_error")]
    #[case(AppError::DataSource(String::new()), 500, "data_source_error")]
    #[case(AppError::Internal(String::new()), 500, "internal_error")]
    fn test_error_mapping(#[case] error: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NoData("budget".into()).to_string(),
            "No data: budget"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::DataSource("msg".into()).to_string(),
            "Data source error: msg"
        );
    }
}
