//! ICS-23 Merkle proofs as a [`CommitmentProof`], checked against the Cosmos SDK proof specs.

use ibc_core_commitment_types::{
    commitment::CommitmentRoot as IbcCommitmentRoot,
    merkle::{MerklePath, MerkleProof},
    proto::ics23::HostFunctionsManager,
    specs::ProofSpecs,
};
use ibc_core_host_types::path::PathBytes;
use ibc_proto::{ibc::core::commitment::v1::MerkleProof as RawMerkleProof, Protobuf};

use crate::{
    commitment::{CommitmentPath, CommitmentRoot},
    error::ProofError,
    proof::CommitmentProof,
};

/// Decodes a protobuf encoded [`MerkleProof`].
/// # Errors
/// Returns an error if the bytes are not a valid merkle proof.
pub fn decode_merkle_proof(bytes: &[u8]) -> Result<MerkleProof, ProofError> {
    <MerkleProof as Protobuf<RawMerkleProof>>::decode_vec(bytes)
        .map_err(|e| ProofError::Decode(e.to_string()))
}

fn to_merkle_path(path: &CommitmentPath) -> MerklePath {
    MerklePath::new(
        path.key_path()
            .iter()
            .map(|segment| PathBytes::from_bytes(segment.clone()))
            .collect(),
    )
}

fn to_merkle_root(root: &CommitmentRoot) -> IbcCommitmentRoot {
    IbcCommitmentRoot::from_bytes(root.as_bytes())
}

impl CommitmentProof for MerkleProof {
    fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
    ) -> Result<(), ProofError> {
        if CommitmentProof::is_empty(self) {
            return Err(ProofError::EmptyProof);
        }

        MerkleProof::verify_membership::<HostFunctionsManager>(
            self,
            &ProofSpecs::cosmos(),
            to_merkle_root(root).into(),
            to_merkle_path(path),
            value.to_vec(),
            0,
        )
        .map_err(|err| ProofError::MembershipVerificationFailed {
            reason: err.to_string(),
        })
    }

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
    ) -> Result<(), ProofError> {
        if CommitmentProof::is_empty(self) {
            return Err(ProofError::EmptyProof);
        }

        MerkleProof::verify_non_membership::<HostFunctionsManager>(
            self,
            &ProofSpecs::cosmos(),
            to_merkle_root(root).into(),
            to_merkle_path(path),
        )
        .map_err(|err| ProofError::NonMembershipVerificationFailed {
            reason: err.to_string(),
        })
    }
}
