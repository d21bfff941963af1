use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::types::id::{BlockHeight, ChainId, ClientId, ClientType};

/// A point in a chain's history, as carried in client events and states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub secs: u64,
    pub nanos: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLevel {
    pub numerator: u64,
    pub denominator: u64,
}

/// Payload of the `CreateClient` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCreated {
    pub client_id: ClientId,
    pub client_type: ClientType,
    pub consensus_height: Height,
    pub height: BlockHeight,
}

/// Payload of the `UpdateClient` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientUpdated {
    pub client_id: ClientId,
    pub client_type: ClientType,
    pub consensus_height: Height,
    pub height: BlockHeight,
}

/// Trust parameters of a client, as returned by the client state query.
/// Observational only: the harness logs it and never interprets the
/// individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    pub allow_update_after_expiry: bool,
    pub allow_update_after_misbehaviour: bool,
    pub chain_id: ChainId,
    pub frozen_height: Height,
    pub latest_height: Height,
    pub max_clock_drift: Duration,
    pub trust_level: TrustLevel,
    pub trusting_period: Duration,
    pub unbonding_period: Duration,
    pub upgrade_path: Vec<String>,
}
