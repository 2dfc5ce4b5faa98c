//! LiftLog backup format: record tree message types, value encodings, and
//! the gzip container writer.
//!
//! The crate owns everything specific to the target representation (the
//! DAO message schema, the fixed-point decimal encoding for weights, the
//! identifier byte layout, and date/time decomposition) so that
//! converters only assemble record trees and hand them over.

use thiserror::Error;

pub mod container;
pub mod dao;
pub mod datetime;
pub mod decimal;
pub mod guid;

pub use container::{BackupSizes, DEFAULT_BACKUP_FILE, encode_backup, read_backup, write_backup};
pub use dao::{
    DateOnlyDao, DecimalValue, ExerciseBlueprintDaoV2, ExerciseTypeDao, ExportedDataDaoV2,
    PotentialSetDaoV2, ProgramBlueprintDaoV1, RecordedExerciseDaoV2, RecordedSetDaoV2, RestDaoV2,
    SessionBlueprintDaoV2, SessionDaoV2, TimeOnlyDao, UuidDao, WeightUnitDao,
};
pub use guid::{GuidLayout, guid_bytes};

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Result type alias for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
