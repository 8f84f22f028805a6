#![doc = "Commitment roots, prefixed paths and (non)membership proofs for IBC light clients"]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod commitment;
pub mod error;
pub mod merkle;
pub mod proof;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use commitment::{apply_prefix, CommitmentPath, CommitmentPrefix, CommitmentRoot};
pub use error::{CommitmentError, ProofError};
pub use proof::CommitmentProof;
