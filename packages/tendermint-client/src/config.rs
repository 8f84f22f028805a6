//! Construction parameters of a Tendermint client, as read from JSON

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

use crate::header::Header;

/// Parameters a host supplies to create a client, periods in whole seconds.
///
/// Validated by [`crate::ClientState::initialize_from_config`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ClientConfig {
    /// Identifier of the client to create
    pub client_id: String,
    /// Trusting period
    #[serde_as(as = "DurationSeconds<u64>")]
    pub trusting_period: Duration,
    /// Unbonding period of the counterparty
    #[serde_as(as = "DurationSeconds<u64>")]
    pub unbonding_period: Duration,
    /// Initial trusted header
    pub header: Header,
}

#[cfg(test)]
mod tests {
    use tendermint::Time;

    use super::*;
    use crate::{client_state::ClientState, error::TendermintClientError};

    fn config(trusting: u64, unbonding: u64) -> ClientConfig {
        ClientConfig {
            client_id: "chain-A".to_string(),
            trusting_period: Duration::from_secs(trusting),
            unbonding_period: Duration::from_secs(unbonding),
            header: Header::new("A", 10, Time::from_unix_timestamp(1_700_000_000, 0).unwrap()),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let json = serde_json::to_string(&config(100, 200)).unwrap();
        let decoded: ClientConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, config(100, 200));
    }

    #[test]
    fn reads_periods_as_seconds() {
        let mut value = serde_json::to_value(config(1, 2)).unwrap();
        value["trusting_period"] = serde_json::json!(1_209_600);
        value["unbonding_period"] = serde_json::json!(1_814_400);

        let decoded: ClientConfig = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.trusting_period, Duration::from_secs(1_209_600));
        assert_eq!(decoded.unbonding_period, Duration::from_secs(1_814_400));
    }

    #[test]
    fn initializes_client_state() {
        let cs = ClientState::initialize_from_config(config(100, 200)).unwrap();

        assert_eq!(cs.client_id(), "chain-A");
        assert_eq!(cs.latest_height(), 10);
        assert!(!cs.is_frozen());
    }

    #[test]
    fn fails_on_invalid_periods() {
        let res = ClientState::initialize_from_config(config(200, 100));
        assert!(matches!(
            res,
            Err(TendermintClientError::InvalidTrustingPeriod { .. })
        ));
    }
}
