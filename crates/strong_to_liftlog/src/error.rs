//! Error types for the conversion pipeline.

use thiserror::Error;

/// Conversion errors.
///
/// Malformed numeric cells are not represented here: per the import
/// policy they degrade to zero defaults instead of failing the run. Only
/// unreadable input, undecodable rows, and unusable workout timestamps
/// abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workout {workout}: unparsable start timestamp {value:?}")]
    Timestamp { workout: String, value: String },

    #[error("backup error: {0}")]
    Backup(#[from] liftlog_backup::BackupError),
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
