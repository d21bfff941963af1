use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{json, Map, Value};

use crate::error::Error;
use crate::relayer::command::{CommandRunner, Envelope};

/// Fake `CommandRunner` that replays a scripted queue of envelopes
/// instead of spawning the relayer, recording every command line it was
/// asked to run.
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Envelope>>,
    invocations: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(responses: Vec<Value>) -> Self {
        let responses = responses
            .into_iter()
            .map(|value| serde_json::from_value(value).expect("scripted envelope must parse"))
            .collect();

        Self {
            responses: RefCell::new(responses),
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn invoke(&self, name: &str, args: &[String]) -> Result<Envelope, Error> {
        self.invocations
            .borrow_mut()
            .push(format!("{} {}", name, args.join(" ")));

        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::empty_output(name.to_string()))
    }
}

pub fn success(result: Value) -> Value {
    json!({ "status": "success", "result": result })
}

pub fn failure(status: &str, result: Value) -> Value {
    json!({ "status": status, "result": result })
}

/// Wrap an event payload under its event-kind key.
pub fn event(kind: &str, payload: Value) -> Value {
    let mut object = Map::new();
    object.insert(kind.to_string(), payload);
    Value::Object(object)
}

pub fn client_event(kind: &str, client_id: &str) -> Value {
    Value::Array(vec![event(
        kind,
        json!({
            "client_id": client_id,
            "client_type": "Tendermint",
            "consensus_height": { "revision_number": 1, "revision_height": 18 },
            "height": "1-20",
        }),
    )])
}

pub fn client_state(chain_id: &str) -> Value {
    json!([{
        "allow_update_after_expiry": true,
        "allow_update_after_misbehaviour": false,
        "chain_id": chain_id,
        "frozen_height": { "revision_number": 0, "revision_height": 0 },
        "latest_height": { "revision_number": 1, "revision_height": 24 },
        "max_clock_drift": { "secs": 3, "nanos": 0 },
        "trust_level": { "numerator": 1, "denominator": 3 },
        "trusting_period": { "secs": 1209600, "nanos": 0 },
        "unbonding_period": { "secs": 1814400, "nanos": 0 },
        "upgrade_path": ["upgrade", "upgradedIBCState"],
    }])
}

pub fn connection_event(kind: &str, connection_id: &str) -> Value {
    Value::Array(vec![event(
        kind,
        json!({ "connection_id": connection_id }),
    )])
}

pub fn connection_end(state: &str) -> Value {
    json!([{
        "client_id": "07-tendermint-0",
        "counterparty": {
            "client_id": "07-tendermint-1",
            "connection_id": "connection-1",
            "prefix": [105, 98, 99],
        },
        "delay_period": 0,
        "state": state,
        "versions": [{
            "identifier": "1",
            "features": ["ORDER_ORDERED", "ORDER_UNORDERED"],
        }],
    }])
}

pub fn channel_event(kind: &str, channel_id: &str, counterparty_channel_id: Option<&str>) -> Value {
    Value::Array(vec![event(
        kind,
        json!({
            "channel_id": channel_id,
            "connection_id": "connection-0",
            "counterparty_channel_id": counterparty_channel_id,
            "counterparty_port_id": "transfer",
            "height": "1-30",
            "port_id": "transfer",
        }),
    )])
}

pub fn channel_end(state: &str) -> Value {
    json!([{
        "connection_hops": ["connection-0"],
        "ordering": "ORDERED",
        "remote": { "channel_id": "channel-1", "port_id": "transfer" },
        "state": state,
        "version": "ics20-1",
    }])
}

/// Packet event array, optionally preceded by the unrelated client
/// update event the relayer sometimes emits first.
pub fn packet_event(kind: &str, sequence: &str, with_update_client: bool) -> Value {
    let packet = event(kind, json!({ "packet": { "sequence": sequence } }));

    let events = if with_update_client {
        vec![
            event("UpdateClient", json!({ "client_id": "07-tendermint-0" })),
            packet,
        ]
    } else {
        vec![packet]
    };

    json!([events])
}
