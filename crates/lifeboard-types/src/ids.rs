//! Integer identifier for stored boards.
//!
//! Identifiers are assigned once at upload time by the id allocator in
//! `lifeboard-core` and never change afterwards. They start at 1; the
//! value 0 is reserved to mean "nothing assigned yet".

use serde::{Deserialize, Serialize};

/// Identifier of a stored [`BoardState`](crate::BoardState).
///
/// Serializes as a bare JSON number, and as a string when used as a map
/// key (the file store's on-disk layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(pub u64);

impl BoardId {
    /// Create an identifier from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw integer value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` on overflow.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl core::fmt::Display for BoardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BoardId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<BoardId> for u64 {
    fn from(id: BoardId) -> Self {
        id.0
    }
}
