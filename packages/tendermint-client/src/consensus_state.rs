//! This module defines the [`ConsensusState`] capability and [`TendermintConsensusState`].

use ibc_commitment::CommitmentRoot;
use ibc_proto::{
    google::protobuf::Timestamp,
    ibc::{
        core::commitment::v1::MerkleRoot,
        lightclients::tendermint::v1::ConsensusState as RawConsensusState,
    },
};
use prost::Message;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use tendermint::Time;

use crate::encoding::CanonicalEncode;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A snapshot of the counterparty chain at some height: its commitment root and time.
///
/// Verification only reads the root; the encoding is used when the consensus
/// state itself is the value being proven.
#[allow(clippy::module_name_repetitions)]
pub trait ConsensusState: CanonicalEncode {
    /// Commitment root proofs at this height are checked against
    fn root(&self) -> &CommitmentRoot;

    /// Block time at this height
    fn timestamp(&self) -> Time;
}

/// Tendermint consensus state
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TendermintConsensusState {
    /// Block time
    pub timestamp: Time,
    /// Application state root (app hash)
    pub root: CommitmentRoot,
    /// Hash of the validator set of the next block
    #[serde_as(as = "Hex")]
    pub next_validators_hash: Vec<u8>,
}

impl TendermintConsensusState {
    /// Create a new [`TendermintConsensusState`]
    #[must_use]
    pub const fn new(timestamp: Time, root: CommitmentRoot, next_validators_hash: Vec<u8>) -> Self {
        Self {
            timestamp,
            root,
            next_validators_hash,
        }
    }
}

// Seconds always fit an i64 and the nanosecond remainder an i32 for any valid `Time`.
#[allow(clippy::cast_possible_truncation)]
fn to_proto_timestamp(time: Time) -> Timestamp {
    let nanos = time.unix_timestamp_nanos();
    Timestamp {
        seconds: nanos.div_euclid(NANOS_PER_SECOND) as i64,
        nanos: nanos.rem_euclid(NANOS_PER_SECOND) as i32,
    }
}

impl From<&TendermintConsensusState> for RawConsensusState {
    fn from(cs: &TendermintConsensusState) -> Self {
        Self {
            timestamp: Some(to_proto_timestamp(cs.timestamp)),
            root: Some(MerkleRoot {
                hash: cs.root.as_bytes().to_vec(),
            }),
            next_validators_hash: cs.next_validators_hash.clone(),
        }
    }
}

impl CanonicalEncode for TendermintConsensusState {
    fn encode_canonical(&self) -> Vec<u8> {
        RawConsensusState::from(self).encode_to_vec()
    }
}

impl ConsensusState for TendermintConsensusState {
    fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    fn timestamp(&self) -> Time {
        self.timestamp
    }
}
