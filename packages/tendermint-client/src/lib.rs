//! ICS-07 Tendermint client state and (non)membership verification of IBC artifacts.
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod channel;
pub mod client_state;
pub mod config;
pub mod connection;
pub mod consensus_state;
pub mod encoding;
pub mod error;
pub mod header;
pub mod membership;
pub mod path;
pub mod verify;

pub use client_state::{ClientState, Status, TENDERMINT_CLIENT_TYPE};
pub use error::TendermintClientError;
pub use membership::{Artifact, ArtifactKind};
