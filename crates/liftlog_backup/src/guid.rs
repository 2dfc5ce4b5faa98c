//! Identifier generation and byte-layout handling.
//!
//! The consuming app began life on .NET, where `Guid.ToByteArray()` swaps
//! the byte order of the first three groups of the 128-bit value relative
//! to RFC 4122:
//!
//! ```text
//! standard: [0 1 2 3  4 5  6 7  8 9 10 11 12 13 14 15]
//! .NET:     [3 2 1 0  5 4  7 6  8 9 10 11 12 13 14 15]
//! ```
//!
//! Emitting the wrong layout silently corrupts every identifier from the
//! app's point of view, so the choice is explicit and configurable.

use uuid::Uuid;

use crate::dao::UuidDao;

/// Byte layout used when serializing generated identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuidLayout {
    /// `Guid.ToByteArray()` ordering: first three groups byte-swapped.
    #[default]
    DotNet,
    /// Standard RFC 4122 big-endian ordering.
    Rfc4122,
}

/// Serialize an identifier into the 16-byte wire layout.
pub fn guid_bytes(id: Uuid, layout: GuidLayout) -> [u8; 16] {
    let b = *id.as_bytes();
    match layout {
        GuidLayout::Rfc4122 => b,
        GuidLayout::DotNet => [
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12],
            b[13], b[14], b[15],
        ],
    }
}

impl UuidDao {
    /// Wrap an existing identifier in the given layout.
    pub fn from_uuid(id: Uuid, layout: GuidLayout) -> Self {
        Self {
            value: guid_bytes(id, layout).to_vec(),
        }
    }

    /// Generate a fresh random identifier in the given layout.
    pub fn random(layout: GuidLayout) -> Self {
        Self::from_uuid(Uuid::new_v4(), layout)
    }
}
