//! Tendermint header as tracked by the client state

use serde::{Deserialize, Serialize};
use tendermint::Time;

/// The most recently accepted header of the counterparty chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Chain ID of the counterparty
    pub chain_id: String,
    /// Block height of the header
    pub height: u64,
    /// Block time of the header
    pub time: Time,
}

impl Header {
    /// Create a new [`Header`]
    #[must_use]
    pub fn new(chain_id: impl Into<String>, height: u64, time: Time) -> Self {
        Self {
            chain_id: chain_id.into(),
            height,
            time,
        }
    }
}
