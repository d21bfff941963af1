use serde_json::Value;

use crate::error::Error;
use crate::harness::run_e2e_test;
use crate::types::id::ChainId;

use super::mock::{
    channel_end, channel_event, client_event, client_state, connection_end, connection_event,
    packet_event, success, ScriptedRunner,
};

fn bootstrap_script(client_id: &str, src_chain: &str) -> Vec<Value> {
    vec![
        success(client_event("CreateClient", client_id)),
        success(client_state(src_chain)),
        success(client_event("UpdateClient", client_id)),
        success(client_state(src_chain)),
    ]
}

/// A fully scripted, well-behaved relayer: every phase completes and
/// every echoed identifier agrees with the one being tracked.
fn full_script() -> Vec<Value> {
    let mut script = Vec::new();

    script.extend(bootstrap_script("07-tendermint-0", "ibc-1"));
    script.extend(bootstrap_script("07-tendermint-1", "ibc-0"));

    script.extend(vec![
        success(connection_event("OpenInitConnection", "connection-0")),
        success(connection_event("OpenTryConnection", "connection-1")),
        success(connection_event("OpenAckConnection", "connection-0")),
        success(connection_event("OpenConfirmConnection", "connection-1")),
        success(connection_end("Open")),
        success(connection_end("Open")),
    ]);

    script.extend(vec![
        success(channel_event("OpenInitChannel", "channel-0", None)),
        success(channel_event("OpenTryChannel", "channel-1", Some("channel-0"))),
        success(channel_event("OpenAckChannel", "channel-0", Some("channel-1"))),
        success(channel_event(
            "OpenConfirmChannel",
            "channel-1",
            Some("channel-0"),
        )),
        success(channel_end("Open")),
        success(channel_end("Open")),
    ]);

    script.extend(vec![
        success(packet_event("SendPacketChannel", "1", false)),
        success(packet_event("WriteAcknowledgementChannel", "1", true)),
        success(packet_event("AcknowledgePacketChannel", "1", true)),
        success(packet_event("SendPacketChannel", "2", false)),
        success(packet_event("WriteAcknowledgementChannel", "2", false)),
        success(packet_event("AcknowledgePacketChannel", "2", false)),
    ]);

    script
}

#[test]
fn full_run_consumes_every_scripted_response() -> Result<(), Error> {
    let runner = ScriptedRunner::new(full_script());

    run_e2e_test(&runner, &ChainId::new("ibc-0"), &ChainId::new("ibc-1"))?;

    assert_eq!(runner.remaining(), 0);
    assert_eq!(runner.invocations().len(), 26);

    // the connection handshake starts on chain A, the channel
    // handshake on chain B
    let invocations = runner.invocations();
    assert!(invocations[8].starts_with("tx raw conn-init ibc-0 ibc-1"));
    assert!(invocations[14].starts_with("tx raw chan-open-init ibc-1 ibc-0"));

    Ok(())
}
