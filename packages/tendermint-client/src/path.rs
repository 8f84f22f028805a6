//! Store paths of the IBC artifacts a client verifies (ICS-24 path space)

use std::fmt;

use ibc_commitment::{apply_prefix, CommitmentError, CommitmentPath, CommitmentPrefix};
use ibc_core_host_types::{
    error::IdentifierError,
    validate::{
        validate_client_identifier, validate_identifier_chars, validate_identifier_length,
        validate_port_identifier,
    },
};

/// Path of a provable artifact, before the store prefix is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path<'a> {
    /// Consensus state of `client_id` at `height`, as stored by the counterparty
    ClientConsensusState(&'a str, u64),
    /// Connection end by connection identifier
    Connection(&'a str),
    /// Channel end by port and channel identifier
    ChannelEnd(&'a str, &'a str),
    /// Packet commitment by port, channel and sequence
    PacketCommitment(&'a str, &'a str, u64),
    /// Packet acknowledgement by port, channel and sequence
    PacketAcknowledgement(&'a str, &'a str, u64),
    /// Next sequence to receive by port and channel
    NextSequenceRecv(&'a str, &'a str),
}

fn validate_connection_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 10, 64)
}

fn validate_channel_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 8, 64)
}

impl Path<'_> {
    /// Checks every identifier of the path against the ICS-24 character set and
    /// length bounds. The separator `/` is outside the character set, so two
    /// distinct keys cannot render to the same path.
    /// # Errors
    /// Returns [`CommitmentError::InvalidIdentifier`] naming the offending identifier.
    pub fn validate(&self) -> Result<(), CommitmentError> {
        match *self {
            Self::ClientConsensusState(client_id, _) => validate_client_identifier(client_id),
            Self::Connection(connection_id) => validate_connection_identifier(connection_id),
            Self::ChannelEnd(port_id, channel_id)
            | Self::PacketCommitment(port_id, channel_id, _)
            | Self::PacketAcknowledgement(port_id, channel_id, _)
            | Self::NextSequenceRecv(port_id, channel_id) => validate_port_identifier(port_id)
                .and_then(|()| validate_channel_identifier(channel_id)),
        }
        .map_err(|err| CommitmentError::InvalidIdentifier(err.to_string()))
    }

    /// Applies the counterparty store `prefix` to the path.
    /// # Errors
    /// Returns an error if an identifier is invalid or the prefix is empty.
    pub fn apply_prefix(&self, prefix: &CommitmentPrefix) -> Result<CommitmentPath, CommitmentError> {
        self.validate()?;
        apply_prefix(prefix, &self.to_string())
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientConsensusState(client_id, height) => {
                write!(f, "clients/{client_id}/consensusState/{height}")
            }
            Self::Connection(connection_id) => write!(f, "connections/{connection_id}"),
            Self::ChannelEnd(port_id, channel_id) => {
                write!(f, "channelEnds/ports/{port_id}/channels/{channel_id}")
            }
            Self::PacketCommitment(port_id, channel_id, sequence) => write!(
                f,
                "commitments/ports/{port_id}/channels/{channel_id}/packets/{sequence}"
            ),
            Self::PacketAcknowledgement(port_id, channel_id, sequence) => write!(
                f,
                "acks/ports/{port_id}/channels/{channel_id}/acknowledgements/{sequence}"
            ),
            Self::NextSequenceRecv(port_id, channel_id) => write!(
                f,
                "seqRecvs/ports/{port_id}/channels/{channel_id}/nextSequenceRecv"
            ),
        }
    }
}
