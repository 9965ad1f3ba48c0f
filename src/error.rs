use chrono::NaiveDate;
use thiserror::Error;

/// Exit code for invalid arguments or configuration.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for an unknown symbol or company.
pub const EXIT_NOT_FOUND: u8 = 3;
/// Exit code for a failed lookup or derivation on loaded data.
pub const EXIT_COMPUTATION: u8 = 4;

/// Broad category of a [`MetricsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    EmptySeries,
    NoDataAvailable,
    DivisionByZero,
    NotFound,
    InvalidData,
}

/// Failures raised by series lookups, derived metrics and stock resolution.
///
/// Nothing in the crate recovers from these; they travel to the caller as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("offset {offset} is out of range for a series of {len} values")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("interval [{start_day}, {end_day}) is out of range for a series of {len} values")]
    IntervalOutOfRange {
        start_day: usize,
        end_day: usize,
        len: usize,
    },

    #[error("date range {start} to {end} cannot be resolved against the {series} series")]
    DateRangeOutOfRange {
        series: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("series has no observations")]
    EmptySeries,

    #[error("no {series} data on or after {date}")]
    NoDataAvailable {
        series: &'static str,
        date: NaiveDate,
    },

    #[error("cannot compute {quantity}: denominator is zero")]
    DivisionByZero { quantity: &'static str },

    #[error("no stock found for '{key}'")]
    NotFound { key: String },

    #[error("{quantity} is not a finite number")]
    NonFiniteResult { quantity: &'static str },

    #[error("invalid {series} series: {reason}")]
    InvalidSeries {
        series: &'static str,
        reason: String,
    },

    #[error("invalid stock identity: {reason}")]
    InvalidIdentity { reason: String },
}

impl MetricsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::OffsetOutOfRange { .. }
            | MetricsError::IntervalOutOfRange { .. }
            | MetricsError::DateRangeOutOfRange { .. } => ErrorKind::OutOfRange,
            MetricsError::EmptySeries => ErrorKind::EmptySeries,
            MetricsError::NoDataAvailable { .. } => ErrorKind::NoDataAvailable,
            MetricsError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            MetricsError::NotFound { .. } => ErrorKind::NotFound,
            MetricsError::NonFiniteResult { .. }
            | MetricsError::InvalidSeries { .. }
            | MetricsError::InvalidIdentity { .. } => ErrorKind::InvalidData,
        }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        MetricsError::NotFound { key: key.into() }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Error reported by the `stocks` binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        let exit_code = match err.kind() {
            ErrorKind::NotFound => EXIT_NOT_FOUND,
            _ => EXIT_COMPUTATION,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MetricsError::OffsetOutOfRange { offset: 0, len: 5 };
        assert_eq!(err.to_string(), "offset 0 is out of range for a series of 5 values");

        let err = MetricsError::not_found("Initech");
        assert_eq!(err.to_string(), "no stock found for 'Initech'");
    }

    #[test]
    fn kinds_group_range_errors() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let errs = [
            MetricsError::OffsetOutOfRange { offset: 9, len: 3 },
            MetricsError::IntervalOutOfRange { start_day: 1, end_day: 2, len: 3 },
            MetricsError::DateRangeOutOfRange { series: "earnings", start: date, end: date },
        ];
        for err in errs {
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
    }

    #[test]
    fn app_error_exit_codes_follow_kind() {
        let not_found: AppError = MetricsError::not_found("ZZZ").into();
        assert_eq!(not_found.exit_code(), EXIT_NOT_FOUND);
        assert_eq!(not_found.to_string(), "no stock found for 'ZZZ'");

        let div: AppError = MetricsError::DivisionByZero { quantity: "growth percentage" }.into();
        assert_eq!(div.exit_code(), EXIT_COMPUTATION);
    }
}
