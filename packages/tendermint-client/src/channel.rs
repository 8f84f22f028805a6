//! Channel ends, encoded as `ibc.core.channel.v1.Channel`.

use ibc_proto::ibc::core::channel::v1::{Channel as RawChannel, Counterparty as RawCounterparty};
use prost::Message;

use crate::encoding::CanonicalEncode;

/// Handshake state of a channel end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Not yet initialized
    Uninitialized = 0,
    /// `ChanOpenInit` executed
    Init = 1,
    /// `ChanOpenTry` executed
    TryOpen = 2,
    /// Handshake complete
    Open = 3,
    /// Channel closed, no more packets
    Closed = 4,
}

/// Packet delivery ordering of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Packets may be delivered in any order
    Unordered = 1,
    /// Packets are delivered in send order
    Ordered = 2,
}

/// The other end of a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    /// Port on the counterparty
    pub port_id: String,
    /// Channel on the counterparty, empty during `ChanOpenInit`
    pub channel_id: String,
}

/// A channel end as stored on chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ChannelEnd {
    /// Handshake state
    pub state: State,
    /// Ordering
    pub ordering: Order,
    /// The other end
    pub counterparty: Counterparty,
    /// Connections the channel's packets travel over
    pub connection_hops: Vec<String>,
    /// Application version
    pub version: String,
}

impl From<&ChannelEnd> for RawChannel {
    fn from(end: &ChannelEnd) -> Self {
        Self {
            state: end.state as i32,
            ordering: end.ordering as i32,
            counterparty: Some(RawCounterparty {
                port_id: end.counterparty.port_id.clone(),
                channel_id: end.counterparty.channel_id.clone(),
            }),
            connection_hops: end.connection_hops.clone(),
            version: end.version.clone(),
            ..Default::default()
        }
    }
}

impl CanonicalEncode for ChannelEnd {
    fn encode_canonical(&self) -> Vec<u8> {
        RawChannel::from(self).encode_to_vec()
    }
}
