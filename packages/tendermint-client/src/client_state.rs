//! This module defines [`ClientState`] and [`Status`].

use std::{fmt, time::Duration};

use ibc_client_utils::ensure;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use tendermint::Time;

use crate::{config::ClientConfig, error::TendermintClientError, header::Header};

/// Client type identifier of the Tendermint light client
pub const TENDERMINT_CLIENT_TYPE: &str = "07-tendermint";

/// Tendermint client state: trusting parameters, the frozen height and the last accepted header
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    /// Client identifier, assigned at creation
    pub client_id: String,
    /// How long a stored header is fresh enough to verify against
    #[serde_as(as = "DurationSeconds<u64>")]
    pub trusting_period: Duration,
    /// Staking unbonding period of the counterparty chain
    #[serde_as(as = "DurationSeconds<u64>")]
    pub unbonding_period: Duration,
    /// Height misbehaviour was observed at, zero if the client is not frozen
    pub frozen_height: u64,
    /// Last header accepted by the client
    pub last_header: Header,
}

/// Status of the client as seen by a host at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Client can be used for verification
    Active,
    /// Client is frozen due to misbehaviour
    Frozen,
    /// Latest header is older than the trusting period
    Expired,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Frozen => write!(f, "Frozen"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

impl ClientState {
    /// Creates a client state after checking that the trusting period is
    /// shorter than the unbonding period.
    /// # Errors
    /// Returns [`TendermintClientError::InvalidTrustingPeriod`] otherwise.
    pub fn initialize(
        client_id: impl Into<String>,
        trusting_period: Duration,
        unbonding_period: Duration,
        header: Header,
    ) -> Result<Self, TendermintClientError> {
        ensure!(
            trusting_period < unbonding_period,
            TendermintClientError::InvalidTrustingPeriod {
                trusting_period,
                unbonding_period,
            }
        );

        Ok(Self::new(client_id, trusting_period, unbonding_period, header))
    }

    /// Creates a client state from deserialized [`ClientConfig`].
    /// # Errors
    /// Same as [`ClientState::initialize`].
    pub fn initialize_from_config(config: ClientConfig) -> Result<Self, TendermintClientError> {
        Self::initialize(
            config.client_id,
            config.trusting_period,
            config.unbonding_period,
            config.header,
        )
    }

    /// Creates an unfrozen client state without validating its parameters
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        trusting_period: Duration,
        unbonding_period: Duration,
        header: Header,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            trusting_period,
            unbonding_period,
            frozen_height: 0,
            last_header: header,
        }
    }

    /// Client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Chain ID of the last header
    #[must_use]
    pub fn chain_id(&self) -> &str {
        &self.last_header.chain_id
    }

    /// Always [`TENDERMINT_CLIENT_TYPE`]
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        TENDERMINT_CLIENT_TYPE
    }

    /// Height of the last header
    #[must_use]
    pub const fn latest_height(&self) -> u64 {
        self.last_header.height
    }

    /// Block time of the last header
    #[must_use]
    pub const fn latest_timestamp(&self) -> Time {
        self.last_header.time
    }

    /// Whether a frozen height has been set
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen_height != 0
    }

    /// Status of the client at `now`.
    ///
    /// Verification does not consult expiry; this is for hosts deciding
    /// whether the client still needs an update.
    #[must_use]
    pub fn status(&self, now: Time) -> Status {
        if self.is_frozen() {
            return Status::Frozen;
        }

        match self.latest_timestamp().checked_add(self.trusting_period) {
            Some(expires_at) if expires_at <= now => Status::Expired,
            _ => Status::Active,
        }
    }
}
