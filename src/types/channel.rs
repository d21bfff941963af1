use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::id::{BlockHeight, ChannelId, ConnectionId, PortId};

/// Payload shared by the four `Open*Channel` handshake events.
///
/// The counterparty channel id is absent in the init event, when the
/// other side has not assigned one yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStepResult {
    pub channel_id: ChannelId,
    pub connection_id: ConnectionId,
    pub counterparty_channel_id: Option<ChannelId>,
    pub counterparty_port_id: PortId,
    pub height: BlockHeight,
    pub port_id: PortId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    pub channel_id: ChannelId,
    pub port_id: PortId,
}

/// One side of a channel, as returned by the channel end query.
/// Connection hops are pass-through data and stay untyped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelEnd {
    pub connection_hops: Vec<Value>,
    pub ordering: String,
    pub remote: Remote,
    pub state: String,
    pub version: String,
}

impl ChannelEnd {
    pub fn is_open(&self) -> bool {
        self.state == "Open"
    }
}
