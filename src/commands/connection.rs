use serde_json::Value;

use crate::error::Error;
use crate::relayer::command::Command;
use crate::relayer::decode::{element, field, from_value};
use crate::types::connection::{ConnectionEnd, ConnectionStepResult};
use crate::types::id::{ChainId, ClientId, ConnectionId};

/// Placeholder the relayer CLI expects in positional slots for
/// connection identifiers that have not been assigned yet. A harness
/// convention, not a protocol requirement.
pub const DEFAULT_CONNECTION_LABEL: &str = "default-conn";

/// `tx raw conn-init <dst> <src> <dst-client> <src-client> <dst-label> <src-label>`
#[derive(Clone, Debug)]
pub struct TxConnInit {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub dst_client_id: ClientId,
    pub src_client_id: ClientId,
    pub dst_label: String,
    pub src_label: String,
}

impl TxConnInit {
    pub fn new(
        dst_chain_id: ChainId,
        src_chain_id: ChainId,
        dst_client_id: ClientId,
        src_client_id: ClientId,
    ) -> Self {
        Self {
            dst_chain_id,
            src_chain_id,
            dst_client_id,
            src_client_id,
            dst_label: DEFAULT_CONNECTION_LABEL.to_string(),
            src_label: DEFAULT_CONNECTION_LABEL.to_string(),
        }
    }
}

impl Command for TxConnInit {
    type Output = ConnectionStepResult;

    fn name(&self) -> &'static str {
        "tx raw conn-init"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.dst_client_id.to_string(),
            self.src_client_id.to_string(),
            self.dst_label.clone(),
            self.src_label.clone(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ConnectionStepResult, Error> {
        from_value(
            "OpenInitConnection",
            field(element(result, 0)?, "OpenInitConnection")?,
        )
    }
}

/// `tx raw conn-try <dst> <src> <dst-client> <src-client> <dst-label> <src-conn>`
#[derive(Clone, Debug)]
pub struct TxConnTry {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub dst_client_id: ClientId,
    pub src_client_id: ClientId,
    pub dst_label: String,
    pub src_connection_id: ConnectionId,
}

impl TxConnTry {
    pub fn new(
        dst_chain_id: ChainId,
        src_chain_id: ChainId,
        dst_client_id: ClientId,
        src_client_id: ClientId,
        src_connection_id: ConnectionId,
    ) -> Self {
        Self {
            dst_chain_id,
            src_chain_id,
            dst_client_id,
            src_client_id,
            dst_label: DEFAULT_CONNECTION_LABEL.to_string(),
            src_connection_id,
        }
    }
}

impl Command for TxConnTry {
    type Output = ConnectionStepResult;

    fn name(&self) -> &'static str {
        "tx raw conn-try"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.dst_client_id.to_string(),
            self.src_client_id.to_string(),
            self.dst_label.clone(),
            self.src_connection_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ConnectionStepResult, Error> {
        from_value(
            "OpenTryConnection",
            field(element(result, 0)?, "OpenTryConnection")?,
        )
    }
}

/// `tx raw conn-ack <dst> <src> <dst-client> <src-client> <dst-conn> <src-conn>`
#[derive(Clone, Debug)]
pub struct TxConnAck {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub dst_client_id: ClientId,
    pub src_client_id: ClientId,
    pub dst_connection_id: ConnectionId,
    pub src_connection_id: ConnectionId,
}

impl Command for TxConnAck {
    type Output = ConnectionStepResult;

    fn name(&self) -> &'static str {
        "tx raw conn-ack"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.dst_client_id.to_string(),
            self.src_client_id.to_string(),
            self.dst_connection_id.to_string(),
            self.src_connection_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ConnectionStepResult, Error> {
        from_value(
            "OpenAckConnection",
            field(element(result, 0)?, "OpenAckConnection")?,
        )
    }
}

/// `tx raw conn-confirm <dst> <src> <dst-client> <src-client> <dst-conn> <src-conn>`
#[derive(Clone, Debug)]
pub struct TxConnConfirm {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub dst_client_id: ClientId,
    pub src_client_id: ClientId,
    pub dst_connection_id: ConnectionId,
    pub src_connection_id: ConnectionId,
}

impl Command for TxConnConfirm {
    type Output = ConnectionStepResult;

    fn name(&self) -> &'static str {
        "tx raw conn-confirm"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.dst_client_id.to_string(),
            self.src_client_id.to_string(),
            self.dst_connection_id.to_string(),
            self.src_connection_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ConnectionStepResult, Error> {
        from_value(
            "OpenConfirmConnection",
            field(element(result, 0)?, "OpenConfirmConnection")?,
        )
    }
}

/// `query connection end <chain> <connection>`
#[derive(Clone, Debug)]
pub struct QueryConnectionEnd {
    pub chain_id: ChainId,
    pub connection_id: ConnectionId,
}

impl Command for QueryConnectionEnd {
    type Output = ConnectionEnd;

    fn name(&self) -> &'static str {
        "query connection end"
    }

    fn args(&self) -> Vec<String> {
        vec![self.chain_id.to_string(), self.connection_id.to_string()]
    }

    fn decode(&self, result: &Value) -> Result<ConnectionEnd, Error> {
        from_value("ConnectionEnd", element(result, 0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conn_try_fills_the_unassigned_destination_slot() {
        let cmd = TxConnTry::new(
            ChainId::new("ibc-1"),
            ChainId::new("ibc-0"),
            ClientId::new("07-tendermint-1"),
            ClientId::new("07-tendermint-0"),
            ConnectionId::new("connection-0"),
        );

        assert_eq!(
            cmd.args(),
            vec![
                "ibc-1",
                "ibc-0",
                "07-tendermint-1",
                "07-tendermint-0",
                DEFAULT_CONNECTION_LABEL,
                "connection-0",
            ]
        );
    }
}
