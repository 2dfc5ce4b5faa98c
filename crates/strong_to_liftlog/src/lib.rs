//! Strong to LiftLog conversion pipeline.
//!
//! Three stages, each depending only on the previous one's output: the
//! tabular [`parser`] groups export rows into workouts, the [`builder`]
//! maps them into the backup record tree, and `liftlog_backup` encodes
//! the tree into the compressed container.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use liftlog_backup::{ExportedDataDaoV2, write_backup};

pub mod builder;
pub mod error;
pub mod parser;
pub mod row;

pub use builder::{ConvertOptions, build_backup};
pub use error::{ConvertError, ConvertResult};
pub use parser::{ParsedWorkout, parse_export};

/// Counts gathered while converting, for the end-of-run summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub workouts: usize,
    pub exercises: usize,
    pub sets: usize,
    pub sessions: usize,
}

/// Stats plus the byte sizes of the written container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    pub stats: ConvertStats,
    pub encoded_bytes: usize,
    pub compressed_bytes: usize,
}

fn stats_for(workouts: &[ParsedWorkout], backup: &ExportedDataDaoV2) -> ConvertStats {
    ConvertStats {
        workouts: workouts.len(),
        exercises: workouts.iter().map(|w| w.exercises.len()).sum(),
        sets: workouts
            .iter()
            .flat_map(|w| &w.exercises)
            .map(|e| e.sets.len())
            .sum(),
        sessions: backup.sessions.len(),
    }
}

/// Parse an export and build its backup tree without touching the
/// filesystem. `today` stamps the synthetic program's last-edited date.
pub fn convert_reader<R: Read>(
    input: R,
    opts: &ConvertOptions,
    today: NaiveDate,
) -> ConvertResult<(ExportedDataDaoV2, ConvertStats)> {
    let workouts = parse_export(input)?;
    let backup = build_backup(&workouts, opts, today);
    let stats = stats_for(&workouts, &backup);
    tracing::info!(
        workouts = stats.workouts,
        sessions = stats.sessions,
        sets = stats.sets,
        "conversion built"
    );
    Ok((backup, stats))
}

/// Convert `input` and write the compressed container to `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &ConvertOptions,
) -> ConvertResult<ConvertReport> {
    let file = File::open(input)?;
    let today = chrono::Local::now().date_naive();
    let (backup, stats) = convert_reader(file, opts, today)?;
    let sizes = write_backup(&backup, output)?;
    Ok(ConvertReport {
        stats,
        encoded_bytes: sizes.encoded,
        compressed_bytes: sizes.compressed,
    })
}
