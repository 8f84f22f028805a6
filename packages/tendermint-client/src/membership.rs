//! Membership and non-membership verification of IBC artifacts against a [`ClientState`].
//!
//! Every verification goes through [`ClientState::verify_artifact`]: the path is
//! built, the shared preconditions are checked, the expected value is encoded and
//! the proof is checked against the root the artifact is committed under.

use std::fmt;

use ibc_commitment::{CommitmentPrefix, CommitmentProof, CommitmentRoot, ProofError};

use crate::{
    channel::ChannelEnd,
    client_state::ClientState,
    connection::ConnectionEnd,
    consensus_state::ConsensusState,
    encoding::{encode_next_sequence_recv, CanonicalEncode},
    error::TendermintClientError,
    path::Path,
    verify::validate_verification_args,
};

/// An artifact of the counterparty state, with its key and the value expected under it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact<'a> {
    /// The counterparty's consensus state for one of its own clients.
    /// The expected value is the consensus state passed to the verification.
    ClientConsensusState {
        /// Root of the counterparty state at the proof height
        proving_root: &'a CommitmentRoot,
        /// Client on the counterparty whose consensus state is proven
        counterparty_client_id: &'a str,
        /// Height the consensus state is stored under
        consensus_height: u64,
    },
    /// A connection end
    Connection {
        /// Connection identifier on the counterparty
        connection_id: &'a str,
        /// Expected connection end
        connection_end: &'a ConnectionEnd,
    },
    /// A channel end
    Channel {
        /// Port identifier on the counterparty
        port_id: &'a str,
        /// Channel identifier on the counterparty
        channel_id: &'a str,
        /// Expected channel end
        channel_end: &'a ChannelEnd,
    },
    /// A packet commitment
    PacketCommitment {
        /// Source port
        port_id: &'a str,
        /// Source channel
        channel_id: &'a str,
        /// Packet sequence
        sequence: u64,
        /// Commitment digest, compared as is
        commitment: &'a [u8],
    },
    /// A packet acknowledgement
    PacketAcknowledgement {
        /// Destination port
        port_id: &'a str,
        /// Destination channel
        channel_id: &'a str,
        /// Packet sequence
        sequence: u64,
        /// Acknowledgement bytes, compared as is
        acknowledgement: &'a [u8],
    },
    /// The absence of a packet acknowledgement
    PacketAcknowledgementAbsence {
        /// Destination port
        port_id: &'a str,
        /// Destination channel
        channel_id: &'a str,
        /// Packet sequence
        sequence: u64,
    },
    /// The next sequence to receive on an ordered channel
    NextSequenceRecv {
        /// Destination port
        port_id: &'a str,
        /// Destination channel
        channel_id: &'a str,
        /// Expected next sequence
        next_sequence_recv: u64,
    },
}

/// Kind of an [`Artifact`], without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// See [`Artifact::ClientConsensusState`]
    ClientConsensusState,
    /// See [`Artifact::Connection`]
    Connection,
    /// See [`Artifact::Channel`]
    Channel,
    /// See [`Artifact::PacketCommitment`]
    PacketCommitment,
    /// See [`Artifact::PacketAcknowledgement`]
    PacketAcknowledgement,
    /// See [`Artifact::PacketAcknowledgementAbsence`]
    PacketAcknowledgementAbsence,
    /// See [`Artifact::NextSequenceRecv`]
    NextSequenceRecv,
}

impl ArtifactKind {
    /// Wraps a rejected proof into the error of this kind
    #[must_use]
    pub const fn verification_failed(self, err: ProofError) -> TendermintClientError {
        match self {
            Self::ClientConsensusState => {
                TendermintClientError::FailedClientConsensusStateVerification(err)
            }
            Self::Connection => TendermintClientError::FailedConnectionStateVerification(err),
            Self::Channel => TendermintClientError::FailedChannelStateVerification(err),
            Self::PacketCommitment => TendermintClientError::FailedPacketCommitmentVerification(err),
            Self::PacketAcknowledgement => TendermintClientError::FailedPacketAckVerification(err),
            Self::PacketAcknowledgementAbsence => {
                TendermintClientError::FailedPacketAckAbsenceVerification(err)
            }
            Self::NextSequenceRecv => TendermintClientError::FailedNextSeqRecvVerification(err),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientConsensusState => write!(f, "client_consensus_state"),
            Self::Connection => write!(f, "connection"),
            Self::Channel => write!(f, "channel"),
            Self::PacketCommitment => write!(f, "packet_commitment"),
            Self::PacketAcknowledgement => write!(f, "packet_acknowledgement"),
            Self::PacketAcknowledgementAbsence => write!(f, "packet_acknowledgement_absence"),
            Self::NextSequenceRecv => write!(f, "next_sequence_recv"),
        }
    }
}

impl<'a> Artifact<'a> {
    /// Kind of the artifact
    #[must_use]
    pub const fn kind(&self) -> ArtifactKind {
        match self {
            Self::ClientConsensusState { .. } => ArtifactKind::ClientConsensusState,
            Self::Connection { .. } => ArtifactKind::Connection,
            Self::Channel { .. } => ArtifactKind::Channel,
            Self::PacketCommitment { .. } => ArtifactKind::PacketCommitment,
            Self::PacketAcknowledgement { .. } => ArtifactKind::PacketAcknowledgement,
            Self::PacketAcknowledgementAbsence { .. } => ArtifactKind::PacketAcknowledgementAbsence,
            Self::NextSequenceRecv { .. } => ArtifactKind::NextSequenceRecv,
        }
    }

    /// Unprefixed store path of the artifact.
    /// Acknowledgement presence and absence share a path.
    #[must_use]
    pub const fn path(&self) -> Path<'a> {
        match *self {
            Self::ClientConsensusState {
                counterparty_client_id,
                consensus_height,
                ..
            } => Path::ClientConsensusState(counterparty_client_id, consensus_height),
            Self::Connection { connection_id, .. } => Path::Connection(connection_id),
            Self::Channel {
                port_id,
                channel_id,
                ..
            } => Path::ChannelEnd(port_id, channel_id),
            Self::PacketCommitment {
                port_id,
                channel_id,
                sequence,
                ..
            } => Path::PacketCommitment(port_id, channel_id, sequence),
            Self::PacketAcknowledgement {
                port_id,
                channel_id,
                sequence,
                ..
            }
            | Self::PacketAcknowledgementAbsence {
                port_id,
                channel_id,
                sequence,
            } => Path::PacketAcknowledgement(port_id, channel_id, sequence),
            Self::NextSequenceRecv {
                port_id,
                channel_id,
                ..
            } => Path::NextSequenceRecv(port_id, channel_id),
        }
    }

    /// Root the artifact is proven against: the caller's proving root for a
    /// client consensus state, otherwise the root of `consensus_state`.
    #[must_use]
    pub fn root<'b, C>(&self, consensus_state: &'b C) -> &'b CommitmentRoot
    where
        'a: 'b,
        C: ConsensusState + ?Sized,
    {
        match *self {
            Self::ClientConsensusState { proving_root, .. } => proving_root,
            _ => consensus_state.root(),
        }
    }

    /// Canonical bytes expected at the path, `None` when absence is proven
    #[must_use]
    pub fn expected_value<C>(&self, consensus_state: &C) -> Option<Vec<u8>>
    where
        C: ConsensusState + ?Sized,
    {
        match self {
            Self::ClientConsensusState { .. } => Some(consensus_state.encode_canonical()),
            Self::Connection { connection_end, .. } => Some(connection_end.encode_canonical()),
            Self::Channel { channel_end, .. } => Some(channel_end.encode_canonical()),
            Self::PacketCommitment { commitment, .. } => Some(commitment.to_vec()),
            Self::PacketAcknowledgement {
                acknowledgement, ..
            } => Some(acknowledgement.to_vec()),
            Self::PacketAcknowledgementAbsence { .. } => None,
            Self::NextSequenceRecv {
                next_sequence_recv,
                ..
            } => Some(encode_next_sequence_recv(*next_sequence_recv).to_vec()),
        }
    }
}

impl ClientState {
    /// Verifies `artifact` in the counterparty state at `height`.
    ///
    /// The prefixed path is built first, then the shared preconditions of
    /// [`validate_verification_args`] are checked before the proof is consulted.
    /// # Errors
    /// Returns an error if the path cannot be built, a precondition fails or the
    /// proof is rejected. A rejected proof is wrapped in the error of the artifact kind.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(client_id = %self.client_id, proof_height = height, kind = %artifact.kind())
    )]
    pub fn verify_artifact<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        consensus_state: Option<&C>,
        artifact: &Artifact<'_>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        let path = artifact.path().apply_prefix(prefix)?;

        let (proof, consensus_state) =
            validate_verification_args(self, height, proof, consensus_state)?;

        let root = artifact.root(consensus_state);
        let res = match artifact.expected_value(consensus_state) {
            Some(value) => proof.verify_membership(root, &path, &value),
            None => proof.verify_non_membership(root, &path),
        };

        res.map_err(|err| {
            tracing::debug!(%path, error = %err, "proof rejected");
            artifact.kind().verification_failed(err)
        })
    }

    /// Verifies that the counterparty stored `consensus_state` for its client
    /// `counterparty_client_id` at `consensus_height`, proven against `proving_root`.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_client_consensus_state<P, C>(
        &self,
        proving_root: &CommitmentRoot,
        height: u64,
        counterparty_client_id: &str,
        consensus_height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::ClientConsensusState {
                proving_root,
                counterparty_client_id,
                consensus_height,
            },
        )
    }

    /// Verifies a connection end stored by the counterparty.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    pub fn verify_connection_state<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        connection_id: &str,
        connection_end: &ConnectionEnd,
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::Connection {
                connection_id,
                connection_end,
            },
        )
    }

    /// Verifies a channel end stored by the counterparty.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_channel_state<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        port_id: &str,
        channel_id: &str,
        channel_end: &ChannelEnd,
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::Channel {
                port_id,
                channel_id,
                channel_end,
            },
        )
    }

    /// Verifies a packet commitment stored by the counterparty.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_commitment<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
        commitment: &[u8],
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::PacketCommitment {
                port_id,
                channel_id,
                sequence,
                commitment,
            },
        )
    }

    /// Verifies a packet acknowledgement written by the counterparty.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_acknowledgement<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
        acknowledgement: &[u8],
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::PacketAcknowledgement {
                port_id,
                channel_id,
                sequence,
                acknowledgement,
            },
        )
    }

    /// Verifies that the counterparty has not written an acknowledgement
    /// for the packet, e.g. to time it out.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_acknowledgement_absence<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::PacketAcknowledgementAbsence {
                port_id,
                channel_id,
                sequence,
            },
        )
    }

    /// Verifies the next sequence the counterparty expects to receive.
    /// # Errors
    /// See [`ClientState::verify_artifact`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_next_sequence_recv<P, C>(
        &self,
        height: u64,
        prefix: &CommitmentPrefix,
        proof: Option<&P>,
        port_id: &str,
        channel_id: &str,
        next_sequence_recv: u64,
        consensus_state: Option<&C>,
    ) -> Result<(), TendermintClientError>
    where
        P: CommitmentProof + ?Sized,
        C: ConsensusState + ?Sized,
    {
        self.verify_artifact(
            height,
            prefix,
            proof,
            consensus_state,
            &Artifact::NextSequenceRecv {
                port_id,
                channel_id,
                next_sequence_recv,
            },
        )
    }
}
