//! Connection ends, encoded as `ibc.core.connection.v1.ConnectionEnd`.

use ibc_commitment::CommitmentPrefix;
use ibc_proto::ibc::core::{
    commitment::v1::MerklePrefix,
    connection::v1::{
        ConnectionEnd as RawConnectionEnd, Counterparty as RawCounterparty, Version as RawVersion,
    },
};
use prost::Message;

use crate::encoding::CanonicalEncode;

/// Handshake state of a connection end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Not yet initialized
    Uninitialized = 0,
    /// `ConnOpenInit` executed
    Init = 1,
    /// `ConnOpenTry` executed
    TryOpen = 2,
    /// Handshake complete
    Open = 3,
}

/// A connection version and the features it supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Version identifier
    pub identifier: String,
    /// Supported features, e.g. channel orderings
    pub features: Vec<String>,
}

/// The other end of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    /// Client tracking this chain on the counterparty
    pub client_id: String,
    /// Connection identifier on the counterparty
    pub connection_id: String,
    /// Store prefix of the counterparty
    pub prefix: CommitmentPrefix,
}

/// A connection end as stored on chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ConnectionEnd {
    /// Handshake state
    pub state: State,
    /// Client underlying the connection
    pub client_id: String,
    /// The other end
    pub counterparty: Counterparty,
    /// Compatible versions
    pub versions: Vec<Version>,
    /// Delay period in nanoseconds
    pub delay_period: u64,
}

impl From<&ConnectionEnd> for RawConnectionEnd {
    fn from(end: &ConnectionEnd) -> Self {
        Self {
            client_id: end.client_id.clone(),
            versions: end
                .versions
                .iter()
                .map(|version| RawVersion {
                    identifier: version.identifier.clone(),
                    features: version.features.clone(),
                })
                .collect(),
            state: end.state as i32,
            counterparty: Some(RawCounterparty {
                client_id: end.counterparty.client_id.clone(),
                connection_id: end.counterparty.connection_id.clone(),
                prefix: Some(MerklePrefix {
                    key_prefix: end.counterparty.prefix.as_bytes().to_vec(),
                }),
            }),
            delay_period: end.delay_period,
        }
    }
}

impl CanonicalEncode for ConnectionEnd {
    fn encode_canonical(&self) -> Vec<u8> {
        RawConnectionEnd::from(self).encode_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection_end(state: State) -> ConnectionEnd {
        ConnectionEnd {
            state,
            client_id: "07-tendermint-0".to_string(),
            counterparty: Counterparty {
                client_id: "07-tendermint-1".to_string(),
                connection_id: "connection-1".to_string(),
                prefix: CommitmentPrefix::from("ibc"),
            },
            versions: vec![Version {
                identifier: "1".to_string(),
                features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
            }],
            delay_period: 0,
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(
            connection_end(State::Open).encode_canonical(),
            connection_end(State::Open).encode_canonical()
        );
    }

    #[test]
    fn encoding_decodes_as_protobuf() {
        let bz = connection_end(State::TryOpen).encode_canonical();
        let raw = RawConnectionEnd::decode(bz.as_slice()).unwrap();

        assert_eq!(raw.client_id, "07-tendermint-0");
        assert_eq!(raw.state, 2);
        assert_eq!(
            raw.counterparty.unwrap().prefix.unwrap().key_prefix,
            b"ibc".to_vec()
        );
    }

    #[test]
    fn state_changes_encoding() {
        assert_ne!(
            connection_end(State::Init).encode_canonical(),
            connection_end(State::Open).encode_canonical()
        );
    }
}
