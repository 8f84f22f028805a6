//! This module defines the [`CommitmentProof`] capability.

use crate::{
    commitment::{CommitmentPath, CommitmentRoot},
    error::ProofError,
};

/// A proof that can establish membership or non-membership of a key under a root.
///
/// Light clients are polymorphic over the commitment scheme: anything that can
/// check a value (or its absence) at a path against a trusted root qualifies.
#[allow(clippy::module_name_repetitions)]
pub trait CommitmentProof {
    /// Whether the proof carries no data and can therefore prove nothing
    fn is_empty(&self) -> bool;

    /// Verifies that `value` is stored at `path` in the state committed to by `root`.
    /// # Errors
    /// Returns an error if the proof does not establish membership.
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
    ) -> Result<(), ProofError>;

    /// Verifies that nothing is stored at `path` in the state committed to by `root`.
    /// # Errors
    /// Returns an error if the proof does not establish non-membership.
    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
    ) -> Result<(), ProofError>;
}
