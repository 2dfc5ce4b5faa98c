//! Gzip container encoding and file I/O for backup payloads.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use prost::Message;

use crate::dao::ExportedDataDaoV2;
use crate::{BackupError, BackupResult};

/// Default output filename when the caller does not supply one.
pub const DEFAULT_BACKUP_FILE: &str = "liftlog_backup.liftlogbackup.gz";

/// Byte counts reported after writing a backup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackupSizes {
    /// Encoded payload size before compression.
    pub encoded: usize,
    /// Size of the gzip container as written.
    pub compressed: usize,
}

/// Encode the record tree to its binary payload.
pub fn encode_backup(backup: &ExportedDataDaoV2) -> Vec<u8> {
    backup.encode_to_vec()
}

/// Encode, gzip, and write a backup to `path`.
pub fn write_backup(backup: &ExportedDataDaoV2, path: &Path) -> BackupResult<BackupSizes> {
    let payload = encode_backup(backup);

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&payload)?;
    let compressed = encoder.finish()?;

    fs::write(path, &compressed)?;
    tracing::debug!(
        path = %path.display(),
        encoded = payload.len(),
        compressed = compressed.len(),
        "wrote backup container"
    );

    Ok(BackupSizes {
        encoded: payload.len(),
        compressed: compressed.len(),
    })
}

/// Read a backup container back into its record tree.
pub fn read_backup(path: &Path) -> BackupResult<ExportedDataDaoV2> {
    let file = fs::File::open(path)?;
    let mut payload = Vec::new();
    GzDecoder::new(file).read_to_end(&mut payload)?;
    ExportedDataDaoV2::decode(payload.as_slice()).map_err(BackupError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{ProgramBlueprintDaoV1, SessionDaoV2};

    #[test]
    fn encode_empty_backup_is_empty_payload() {
        let backup = ExportedDataDaoV2::default();
        assert!(encode_backup(&backup).is_empty());
    }

    #[test]
    fn encode_is_deterministic_for_same_tree() {
        let mut backup = ExportedDataDaoV2::default();
        backup.sessions.push(SessionDaoV2 {
            session_name: "Push Day".into(),
            ..Default::default()
        });
        backup.active_program_id = Some("prog".into());
        backup.saved_programs.insert(
            "prog".into(),
            ProgramBlueprintDaoV1 {
                name: "Plan".into(),
                ..Default::default()
            },
        );
        assert_eq!(encode_backup(&backup), encode_backup(&backup.clone()));
    }
}
