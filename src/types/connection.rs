use serde::{Deserialize, Serialize};

use crate::types::id::{ClientId, ConnectionId};

/// Payload shared by the four `Open*Connection` handshake events: the
/// only field the harness consumes is the connection identifier echoed
/// back by the relayer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStepResult {
    pub connection_id: ConnectionId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub identifier: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    pub client_id: ClientId,
    pub connection_id: ConnectionId,
    pub prefix: Vec<u8>,
}

/// One side of a connection, as returned by the connection end query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEnd {
    pub client_id: ClientId,
    pub counterparty: Counterparty,
    pub delay_period: u64,
    pub state: String,
    pub versions: Vec<Version>,
}

impl ConnectionEnd {
    pub fn is_open(&self) -> bool {
        self.state == "Open"
    }
}
