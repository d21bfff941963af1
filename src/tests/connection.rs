use serde_json::Value;

use crate::error::{Error, ErrorDetail};
use crate::harness::connection::connection_handshake;
use crate::types::id::{ChainId, ClientId, ConnectionId};

use super::mock::{connection_end, connection_event, success, ScriptedRunner};

fn handshake_script(ack_id: &str, end_state: &str) -> Vec<Value> {
    vec![
        success(connection_event("OpenInitConnection", "connection-0")),
        success(connection_event("OpenTryConnection", "connection-1")),
        success(connection_event("OpenAckConnection", ack_id)),
        success(connection_event("OpenConfirmConnection", "connection-1")),
        success(connection_end(end_state)),
        success(connection_end(end_state)),
    ]
}

fn run_handshake(runner: &ScriptedRunner) -> Result<(ConnectionId, ConnectionId), Error> {
    connection_handshake(
        runner,
        &ChainId::new("ibc-0"),
        &ChainId::new("ibc-1"),
        &ClientId::new("07-tendermint-0"),
        &ClientId::new("07-tendermint-1"),
    )
}

#[test]
fn connection_handshake_returns_both_connection_ids() -> Result<(), Error> {
    let runner = ScriptedRunner::new(handshake_script("connection-0", "Open"));

    let (conn_a, conn_b) = run_handshake(&runner)?;

    assert_eq!(conn_a, ConnectionId::new("connection-0"));
    assert_eq!(conn_b, ConnectionId::new("connection-1"));
    assert_eq!(runner.remaining(), 0);

    // the try step runs on side B and carries the id init produced
    let invocations = runner.invocations();
    assert_eq!(
        invocations[1],
        "tx raw conn-try ibc-1 ibc-0 07-tendermint-1 07-tendermint-0 default-conn connection-0"
    );
    assert_eq!(invocations[4], "query connection end ibc-0 connection-0");
    assert_eq!(invocations[5], "query connection end ibc-1 connection-1");

    Ok(())
}

#[test]
fn connection_ack_echoing_a_different_id_is_fatal() {
    let runner = ScriptedRunner::new(handshake_script("connection-9", "Open"));

    match run_handshake(&runner) {
        Err(e) => match e.detail() {
            ErrorDetail::MismatchedIdentifier(detail) => {
                assert_eq!(detail.step, "conn ack");
                assert_eq!(detail.expected, "connection-0");
                assert_eq!(detail.got, "connection-9");
            }
            other => panic!("expected an identifier mismatch, got: {}", other),
        },
        Ok(ids) => panic!("expected failure, got {:?}", ids),
    }

    // the confirm step and the end queries never ran
    assert_eq!(runner.invocations().len(), 3);
}

#[test]
fn unopened_connection_end_is_fatal() {
    let runner = ScriptedRunner::new(handshake_script("connection-0", "Init"));

    match run_handshake(&runner) {
        Err(e) => match e.detail() {
            ErrorDetail::UnopenedConnection(detail) => {
                assert_eq!(detail.connection_id, ConnectionId::new("connection-0"));
                assert_eq!(detail.state, "Init");
            }
            other => panic!("expected an unopened-connection error, got: {}", other),
        },
        Ok(ids) => panic!("expected failure, got {:?}", ids),
    }
}
