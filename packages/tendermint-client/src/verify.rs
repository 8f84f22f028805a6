//! Checks shared by every verification: height, frozen status and presence of the inputs

use ibc_client_utils::ensure;
use ibc_commitment::CommitmentProof;

use crate::{client_state::ClientState, error::TendermintClientError};

/// Validates the arguments shared by all verification functions and returns the
/// proof and consensus state once they are known to be present.
///
/// A client frozen at height `F` rejects proofs at `F` and every later height.
/// # Errors
/// Returns an error if, in order:
/// - the client has not seen `height` yet
/// - the client is frozen at or below `height`
/// - the proof is missing or empty
/// - the consensus state is missing
pub fn validate_verification_args<'a, P, C>(
    client_state: &ClientState,
    height: u64,
    proof: Option<&'a P>,
    consensus_state: Option<&'a C>,
) -> Result<(&'a P, &'a C), TendermintClientError>
where
    P: CommitmentProof + ?Sized,
    C: ?Sized,
{
    ensure!(
        client_state.latest_height() >= height,
        TendermintClientError::InvalidHeight {
            client_id: client_state.client_id.clone(),
            latest_height: client_state.latest_height(),
            proof_height: height,
        }
    );

    ensure!(
        !(client_state.is_frozen() && client_state.frozen_height <= height),
        TendermintClientError::ClientFrozen {
            frozen_height: client_state.frozen_height,
            proof_height: height,
        }
    );

    let proof = proof
        .filter(|proof| !proof.is_empty())
        .ok_or(TendermintClientError::MissingProof)?;

    let consensus_state = consensus_state.ok_or(TendermintClientError::MissingConsensusState)?;

    Ok((proof, consensus_state))
}
