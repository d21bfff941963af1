use core::cell::Cell;

use serde_json::{json, Value};

use crate::error::{Error, ErrorDetail};
use crate::relayer::command::{Command, CommandResult, Envelope};
use crate::relayer::decode::{element, field, find_event};

#[derive(Default)]
struct Probe {
    decoded: Cell<bool>,
}

impl Command for Probe {
    type Output = ();

    fn name(&self) -> &'static str {
        "probe"
    }

    fn args(&self) -> Vec<String> {
        Vec::new()
    }

    fn decode(&self, _result: &Value) -> Result<(), Error> {
        self.decoded.set(true);
        Ok(())
    }
}

fn envelope(value: Value) -> Envelope {
    serde_json::from_value(value).expect("envelope must parse")
}

#[test]
fn decode_runs_only_on_a_success_status() {
    let probe = Probe::default();
    let res =
        CommandResult::new(&probe, envelope(json!({ "status": "error", "result": {} }))).success();

    assert!(!probe.decoded.get());
    match res {
        Err(e) => match e.detail() {
            ErrorDetail::UnexpectedStatus(detail) => assert_eq!(detail.status, "error"),
            other => panic!("expected an unexpected-status error, got: {}", other),
        },
        Ok(()) => panic!("expected failure"),
    }

    let probe = Probe::default();
    CommandResult::new(&probe, envelope(json!({ "status": "success", "result": [] })))
        .success()
        .expect("success envelope must decode");

    assert!(probe.decoded.get());
}

#[test]
fn missing_status_is_reported_as_unknown() {
    let probe = Probe::default();
    let res = CommandResult::new(&probe, envelope(json!({ "result": [] }))).success();

    assert!(!probe.decoded.get());
    match res {
        Err(e) => match e.detail() {
            ErrorDetail::UnexpectedStatus(detail) => assert_eq!(detail.status, "unknown"),
            other => panic!("expected an unexpected-status error, got: {}", other),
        },
        Ok(()) => panic!("expected failure"),
    }
}

#[test]
fn find_event_tolerates_a_preceding_update_event() -> Result<(), Error> {
    let with_update = json!([
        { "UpdateClient": { "client_id": "07-tendermint-0" } },
        { "WriteAcknowledgementChannel": { "packet": { "sequence": "3" } } },
    ]);

    let without_update = json!([
        { "WriteAcknowledgementChannel": { "packet": { "sequence": "3" } } },
    ]);

    for events in [with_update, without_update] {
        let event = find_event(&events, "WriteAcknowledgementChannel")?;
        assert_eq!(field(event, "packet")?["sequence"], json!("3"));
    }

    Ok(())
}

#[test]
fn find_event_reports_the_missing_kind() {
    let events = json!([{ "UpdateClient": {} }]);

    match find_event(&events, "WriteAcknowledgementChannel") {
        Err(e) => match e.detail() {
            ErrorDetail::MissingEvent(detail) => {
                assert_eq!(detail.kind, "WriteAcknowledgementChannel");
            }
            other => panic!("expected a missing-event error, got: {}", other),
        },
        Ok(event) => panic!("expected failure, got {}", event),
    }
}

#[test]
fn navigation_errors_name_the_missing_piece() {
    let value = json!({ "result": [] });

    match field(&value, "status") {
        Err(e) => match e.detail() {
            ErrorDetail::MissingField(detail) => assert_eq!(detail.field, "status"),
            other => panic!("expected a missing-field error, got: {}", other),
        },
        Ok(v) => panic!("expected failure, got {}", v),
    }

    let value = json!([1]);

    match element(&value, 1) {
        Err(e) => match e.detail() {
            ErrorDetail::MissingElement(detail) => assert_eq!(detail.index, 1),
            other => panic!("expected a missing-element error, got: {}", other),
        },
        Ok(v) => panic!("expected failure, got {}", v),
    }
}
