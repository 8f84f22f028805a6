//! Error types for commitment paths and proof verification

use thiserror::Error;

/// Errors raised while building a prefixed commitment path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum CommitmentError {
    /// The store prefix is empty
    #[error("commitment prefix cannot be empty")]
    EmptyPrefix,

    /// The path suffix is empty
    #[error("commitment path cannot be empty")]
    EmptyPath,

    /// An identifier in the path is not a valid ICS-24 identifier
    #[error("invalid path identifier: {0}")]
    InvalidIdentifier(String),
}

/// Errors returned by a commitment scheme when a proof is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ProofError {
    /// The proof carries no data
    #[error("proof cannot be empty")]
    EmptyProof,

    /// The proof bytes could not be decoded
    #[error("unable to decode proof: {0}")]
    Decode(String),

    /// The proof commits to a different root than the one it is checked against
    #[error("proof root ({found}) does not match expected root ({expected})",
        expected = hex::encode(expected),
        found = hex::encode(found)
    )]
    RootMismatch {
        /// Root the caller trusts
        expected: Vec<u8>,
        /// Root computed from the proof
        found: Vec<u8>,
    },

    /// Membership could not be established
    #[error("membership verification failed: {reason}")]
    MembershipVerificationFailed {
        /// Reason for the failure
        reason: String,
    },

    /// Non-membership could not be established
    #[error("non-membership verification failed: {reason}")]
    NonMembershipVerificationFailed {
        /// Reason for the failure
        reason: String,
    },
}
