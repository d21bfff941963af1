use serde_json::Value;

use crate::error::Error;
use crate::relayer::command::Command;
use crate::relayer::decode::{element, field, from_value};
use crate::types::client::{ClientCreated, ClientState, ClientUpdated};
use crate::types::id::{ChainId, ClientId};

/// `tx raw create-client <dst> <src>`
#[derive(Clone, Debug)]
pub struct TxCreateClient {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
}

impl Command for TxCreateClient {
    type Output = ClientCreated;

    fn name(&self) -> &'static str {
        "tx raw create-client"
    }

    fn args(&self) -> Vec<String> {
        vec![self.dst_chain_id.to_string(), self.src_chain_id.to_string()]
    }

    fn decode(&self, result: &Value) -> Result<ClientCreated, Error> {
        from_value("ClientCreated", field(element(result, 0)?, "CreateClient")?)
    }
}

/// `tx raw update-client <dst> <src> <dst-client>`
#[derive(Clone, Debug)]
pub struct TxUpdateClient {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub dst_client_id: ClientId,
}

impl Command for TxUpdateClient {
    type Output = ClientUpdated;

    fn name(&self) -> &'static str {
        "tx raw update-client"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.dst_client_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ClientUpdated, Error> {
        from_value("ClientUpdated", field(element(result, 0)?, "UpdateClient")?)
    }
}

/// `query client state [--height H] [--proof] <chain> <client>`
#[derive(Clone, Debug)]
pub struct QueryClientState {
    pub chain_id: ChainId,
    pub client_id: ClientId,
    pub height: Option<u64>,
    pub proof: bool,
}

impl QueryClientState {
    pub fn new(chain_id: ChainId, client_id: ClientId) -> Self {
        Self {
            chain_id,
            client_id,
            height: None,
            proof: false,
        }
    }
}

impl Command for QueryClientState {
    type Output = ClientState;

    fn name(&self) -> &'static str {
        "query client state"
    }

    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(height) = self.height {
            args.push("--height".to_string());
            args.push(height.to_string());
        }

        if self.proof {
            args.push("--proof".to_string());
        }

        args.push(self.chain_id.to_string());
        args.push(self.client_id.to_string());

        args
    }

    fn decode(&self, result: &Value) -> Result<ClientState, Error> {
        from_value("ClientState", element(result, 0)?)
    }
}
