//! This module defines [`CommitmentRoot`], [`CommitmentPrefix`] and [`CommitmentPath`].

use std::fmt;

use ibc_client_utils::ensure;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::error::CommitmentError;

/// The root hash that membership proofs are checked against
#[serde_as]
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct CommitmentRoot(#[serde_as(as = "Hex")] Vec<u8>);

impl CommitmentRoot {
    /// Create a new root from raw hash bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Raw hash bytes of the root
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the root and return the hash bytes
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for CommitmentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentRoot({})", hex::encode(&self.0))
    }
}

/// Store-level namespace prepended to every path before verification
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct CommitmentPrefix(Vec<u8>);

impl CommitmentPrefix {
    /// Create a new prefix from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Raw prefix bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the prefix has no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentPrefix {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for CommitmentPrefix {
    fn from(prefix: &str) -> Self {
        Self(prefix.as_bytes().to_vec())
    }
}

impl fmt::Debug for CommitmentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "CommitmentPrefix({s})"),
            Err(_) => write!(f, "CommitmentPrefix(0x{})", hex::encode(&self.0)),
        }
    }
}

/// A fully prefixed store key, as a list of key segments.
///
/// ICS-23 multi-store proofs consume the segments one store at a time
/// (`[prefix, path]`). Flat key-value commitments use [`CommitmentPath::to_bytes`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CommitmentPath {
    key_path: Vec<Vec<u8>>,
}

impl CommitmentPath {
    /// The key segments, outermost store first
    #[must_use]
    pub fn key_path(&self) -> &[Vec<u8>] {
        &self.key_path
    }

    /// The key segments concatenated into a single store key
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.key_path.concat()
    }
}

impl fmt::Display for CommitmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = self
            .key_path
            .iter()
            .map(|segment| String::from_utf8_lossy(segment))
            .collect::<Vec<_>>();
        write!(f, "{}", segments.join("/"))
    }
}

/// Applies the store `prefix` to a canonical `path`.
///
/// # Errors
/// Returns an error if the prefix or the path is empty.
pub fn apply_prefix(prefix: &CommitmentPrefix, path: &str) -> Result<CommitmentPath, CommitmentError> {
    ensure!(!prefix.is_empty(), CommitmentError::EmptyPrefix);
    ensure!(!path.is_empty(), CommitmentError::EmptyPath);

    Ok(CommitmentPath {
        key_path: vec![prefix.as_bytes().to_vec(), path.as_bytes().to_vec()],
    })
}
