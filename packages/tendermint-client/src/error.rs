//! This module defines [`TendermintClientError`].

use std::time::Duration;

use ibc_commitment::{CommitmentError, ProofError};

/// Error types for Tendermint client construction and proof verification
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum TendermintClientError {
    /// Trusting period is not shorter than the unbonding period
    #[error(
        "trusting period ({trusting_period:?}) must be shorter than unbonding period ({unbonding_period:?})"
    )]
    InvalidTrustingPeriod {
        /// Requested trusting period
        trusting_period: Duration,
        /// Requested unbonding period
        unbonding_period: Duration,
    },

    /// The proof height is beyond what the client has observed
    #[error("client state ({client_id}) height < proof height ({latest_height} < {proof_height})")]
    InvalidHeight {
        /// Client identifier
        client_id: String,
        /// Latest height known to the client
        latest_height: u64,
        /// Height the proof was requested at
        proof_height: u64,
    },

    /// The client was frozen at or before the proof height
    #[error("client frozen at height {frozen_height}, cannot verify at height {proof_height}")]
    ClientFrozen {
        /// Height misbehaviour was observed at
        frozen_height: u64,
        /// Height the proof was requested at
        proof_height: u64,
    },

    /// No proof, or an empty one, was supplied
    #[error("proof cannot be empty")]
    MissingProof,

    /// No consensus state was supplied
    #[error("consensus state cannot be empty")]
    MissingConsensusState,

    /// The store prefix could not be applied to the artifact path
    #[error("invalid commitment path: {0}")]
    PathEncoding(#[from] CommitmentError),

    /// Client consensus state proof was rejected
    #[error("failed client consensus state verification: {0}")]
    FailedClientConsensusStateVerification(#[source] ProofError),

    /// Connection state proof was rejected
    #[error("failed connection state verification: {0}")]
    FailedConnectionStateVerification(#[source] ProofError),

    /// Channel state proof was rejected
    #[error("failed channel state verification: {0}")]
    FailedChannelStateVerification(#[source] ProofError),

    /// Packet commitment proof was rejected
    #[error("failed packet commitment verification: {0}")]
    FailedPacketCommitmentVerification(#[source] ProofError),

    /// Packet acknowledgement proof was rejected
    #[error("failed packet acknowledgement verification: {0}")]
    FailedPacketAckVerification(#[source] ProofError),

    /// Packet acknowledgement absence proof was rejected
    #[error("failed packet acknowledgement absence verification: {0}")]
    FailedPacketAckAbsenceVerification(#[source] ProofError),

    /// Next sequence recv proof was rejected
    #[error("failed next sequence recv verification: {0}")]
    FailedNextSeqRecvVerification(#[source] ProofError),
}
