//! Error type raised by the harness.

use std::io::Error as IoError;
use std::str::Utf8Error;

use eyre::Report;
use flex_error::{define_error, TraceError};
use serde_json::Value;

use crate::types::id::{ChainId, ConnectionId};

define_error! {
    Error {
        Generic
            [ TraceError<Report> ]
            | _ | { "generic error" },

        ConfigNotFound
            { path: String }
            | e | {
                format_args!("supplied configuration file does not exist: {}",
                    e.path)
            },

        CommandNotFound
            { command: String }
            [ TraceError<IoError> ]
            | e | { format_args!("failed to execute command: {}", e.command) },

        CommandFailed
            {
                command: String,
                exit_code: Option<i32>,
                stderr: String,
            }
            | e | {
                format_args!("command '{}' exited with status {:?} and message: {}",
                    e.command, e.exit_code, e.stderr)
            },

        NonUtf8Output
            { command: String }
            [ TraceError<Utf8Error> ]
            | e | {
                format_args!("command '{}' produced non-UTF-8 output",
                    e.command)
            },

        EmptyOutput
            { command: String }
            | e | {
                format_args!("command '{}' produced no output to parse",
                    e.command)
            },

        MalformedOutput
            {
                command: String,
                line: String,
            }
            [ TraceError<serde_json::Error> ]
            | e | {
                format_args!("last output line of command '{}' is not valid JSON: {}",
                    e.command, e.line)
            },

        UnexpectedStatus
            {
                command: String,
                status: String,
                result: Value,
            }
            | e | {
                format_args!("command '{}' failed: expected status 'success', got '{}'. message: {}",
                    e.command, e.status, e.result)
            },

        MissingField
            {
                field: String,
                value: Value,
            }
            | e | {
                format_args!("missing field '{}' in response: {}",
                    e.field, e.value)
            },

        MissingElement
            {
                index: usize,
                value: Value,
            }
            | e | {
                format_args!("missing element {} in response: {}",
                    e.index, e.value)
            },

        MissingEvent
            {
                kind: String,
                value: Value,
            }
            | e | {
                format_args!("no '{}' event found in response: {}",
                    e.kind, e.value)
            },

        Deserialize
            {
                what: String,
                value: Value,
            }
            [ TraceError<serde_json::Error> ]
            | e | {
                format_args!("failed to decode {} out of: {}",
                    e.what, e.value)
            },

        MismatchedIdentifier
            {
                step: String,
                expected: String,
                got: String,
            }
            | e | {
                format_args!("incorrect identifier returned from {}: expected={} got={}",
                    e.step, e.expected, e.got)
            },

        UnopenedConnection
            {
                connection_id: ConnectionId,
                chain_id: ChainId,
                state: String,
            }
            | e | {
                format_args!("connection end {} on chain {} is not in Open state, got: {}",
                    e.connection_id, e.chain_id, e.state)
            },
    }
}

pub fn handle_generic_error(e: impl Into<Report>) -> Error {
    Error::generic(e.into())
}
