//! Common test utilities and fixtures
#![allow(dead_code)]

use std::time::Duration;

use ibc_commitment::{
    test_utils::{MockProof, MockStore},
    CommitmentPrefix,
};
use ics07_tendermint_client::{
    channel::{self, ChannelEnd, Order},
    connection::{self, ConnectionEnd},
    consensus_state::TendermintConsensusState,
    encoding::{encode_next_sequence_recv, CanonicalEncode},
    header::Header,
    path::Path,
    ClientState, TendermintClientError,
};
use tendermint::Time;

pub const PORT: &str = "transfer";
pub const CHANNEL: &str = "channel-0";
pub const CONNECTION: &str = "connection-0";
pub const COUNTERPARTY_CLIENT: &str = "07-tendermint-1";
pub const SEQUENCE: u64 = 1;
pub const COMMITMENT: [u8; 32] = [0x11; 32];
pub const ACK: &[u8] = b"{\"result\":\"AQ==\"}";
pub const NEXT_SEQUENCE_RECV: u64 = 2;

/// Client, counterparty store and the consensus state committing to it
pub struct TestContext {
    pub client_state: ClientState,
    pub prefix: CommitmentPrefix,
    pub store: MockStore,
    pub consensus_state: TendermintConsensusState,
    pub counterparty_consensus_state: TendermintConsensusState,
}

pub fn t0() -> Time {
    Time::from_unix_timestamp(1_700_000_000, 0).unwrap()
}

/// Client `chain-A` trusting for 100s out of a 200s unbonding period, at height 10
pub fn client_state() -> ClientState {
    ClientState::initialize(
        "chain-A",
        Duration::from_secs(100),
        Duration::from_secs(200),
        Header::new("A", 10, t0()),
    )
    .unwrap()
}

pub fn connection_end() -> ConnectionEnd {
    ConnectionEnd {
        state: connection::State::Open,
        client_id: "07-tendermint-0".to_string(),
        counterparty: connection::Counterparty {
            client_id: COUNTERPARTY_CLIENT.to_string(),
            connection_id: "connection-1".to_string(),
            prefix: CommitmentPrefix::from("ibc"),
        },
        versions: vec![connection::Version {
            identifier: "1".to_string(),
            features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
        }],
        delay_period: 0,
    }
}

pub fn channel_end() -> ChannelEnd {
    ChannelEnd {
        state: channel::State::Open,
        ordering: Order::Ordered,
        counterparty: channel::Counterparty {
            port_id: PORT.to_string(),
            channel_id: "channel-1".to_string(),
        },
        connection_hops: vec![CONNECTION.to_string()],
        version: "ics20-1".to_string(),
    }
}

/// A counterparty store holding every artifact except the acknowledgement
pub fn setup_test_context() -> TestContext {
    let prefix = CommitmentPrefix::from("ibc");
    let key = |path: Path<'_>| path.apply_prefix(&prefix).unwrap();

    let counterparty_consensus_state = TendermintConsensusState::new(
        t0(),
        ibc_commitment::CommitmentRoot::from_bytes(&[0x42; 32]),
        vec![0x07; 32],
    );

    let mut store = MockStore::new();
    store
        .insert(
            &key(Path::ClientConsensusState(COUNTERPARTY_CLIENT, 5)),
            counterparty_consensus_state.encode_canonical(),
        )
        .insert(
            &key(Path::Connection(CONNECTION)),
            connection_end().encode_canonical(),
        )
        .insert(
            &key(Path::ChannelEnd(PORT, CHANNEL)),
            channel_end().encode_canonical(),
        )
        .insert(&key(Path::PacketCommitment(PORT, CHANNEL, SEQUENCE)), COMMITMENT)
        .insert(
            &key(Path::NextSequenceRecv(PORT, CHANNEL)),
            encode_next_sequence_recv(NEXT_SEQUENCE_RECV),
        );

    let consensus_state = TendermintConsensusState::new(t0(), store.root(), vec![0x01; 32]);

    TestContext {
        client_state: client_state(),
        prefix,
        store,
        consensus_state,
        counterparty_consensus_state,
    }
}

impl TestContext {
    pub fn proof(&self) -> MockProof {
        self.store.proof()
    }

    /// Runs every operation but acknowledgement presence at `height` with the
    /// context's proof. Acknowledgement presence is covered by [`Self::verify_ack`]
    pub fn verify_all(&self, height: u64) -> Vec<Result<(), TendermintClientError>> {
        self.verify_all_with(height, Some(&self.proof()), Some(&self.consensus_state))
    }

    /// Runs every verification operation at `height`, expecting each artifact
    /// the context's store holds
    pub fn verify_all_with(
        &self,
        height: u64,
        proof: Option<&MockProof>,
        consensus_state: Option<&TendermintConsensusState>,
    ) -> Vec<Result<(), TendermintClientError>> {
        let cs = &self.client_state;
        let prefix = &self.prefix;
        let proving_root = self.store.root();
        let counterparty_consensus_state =
            consensus_state.map(|_| &self.counterparty_consensus_state);

        vec![
            cs.verify_client_consensus_state(
                &proving_root,
                height,
                COUNTERPARTY_CLIENT,
                5,
                prefix,
                proof,
                counterparty_consensus_state,
            ),
            cs.verify_connection_state(
                height,
                prefix,
                proof,
                CONNECTION,
                &connection_end(),
                consensus_state,
            ),
            cs.verify_channel_state(
                height,
                prefix,
                proof,
                PORT,
                CHANNEL,
                &channel_end(),
                consensus_state,
            ),
            cs.verify_packet_commitment(
                height,
                prefix,
                proof,
                PORT,
                CHANNEL,
                SEQUENCE,
                &COMMITMENT,
                consensus_state,
            ),
            cs.verify_packet_acknowledgement_absence(
                height,
                prefix,
                proof,
                PORT,
                CHANNEL,
                SEQUENCE,
                consensus_state,
            ),
            cs.verify_next_sequence_recv(
                height,
                prefix,
                proof,
                PORT,
                CHANNEL,
                NEXT_SEQUENCE_RECV,
                consensus_state,
            ),
        ]
    }

    /// Acknowledgement presence, which the context's store does not hold
    pub fn verify_ack(&self, height: u64) -> Result<(), TendermintClientError> {
        self.client_state.verify_packet_acknowledgement(
            height,
            &self.prefix,
            Some(&self.proof()),
            PORT,
            CHANNEL,
            SEQUENCE,
            ACK,
            Some(&self.consensus_state),
        )
    }
}
