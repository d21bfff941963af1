/*!
   Typed command dispatch against the relayer's untyped output.

   Every relayer CLI operation is a type implementing [`Command`]: it
   knows its invocation name, how to serialize its parameters into
   positional and flag arguments, and how to decode the operation's
   success payload into a typed record. The generic envelope handling
   lives in [`CommandResult`], so a command's `decode` only ever sees
   the `result` payload of a `"success"`-status response.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// One relayer CLI operation.
pub trait Command {
    /// The typed record decoded out of this operation's success payload.
    type Output;

    /// Space-separated invocation tokens, e.g. `"tx raw conn-init"`.
    fn name(&self) -> &'static str;

    /// Positional and flag arguments, in the order the relayer expects.
    fn args(&self) -> Vec<String>;

    /// Decode the `result` payload of a success envelope.
    ///
    /// Only ever invoked on a `"success"`-status response; failure
    /// envelopes are turned into [`Error`] before decoding is reached.
    fn decode(&self, result: &Value) -> Result<Self::Output, Error>;

    /// Rendering of the full invocation, for diagnostics.
    fn command_string(&self) -> String {
        let args = self.args();
        if args.is_empty() {
            self.name().to_string()
        } else {
            format!("{} {}", self.name(), args.join(" "))
        }
    }
}

/// The generic `{status, result}` wrapper every invocation returns.
///
/// A missing status is reported as `"unknown"`, so that it surfaces as
/// an unexpected-status error rather than a parse failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default = "unknown_status")]
    pub status: String,

    #[serde(default)]
    pub result: Value,
}

fn unknown_status() -> String {
    "unknown".to_string()
}

/// The raw outcome of running one command, holding the command so that
/// status dispatch can reach its decoder and its diagnostics rendering.
pub struct CommandResult<'a, C: Command> {
    command: &'a C,
    envelope: Envelope,
}

impl<'a, C: Command> CommandResult<'a, C> {
    pub fn new(command: &'a C, envelope: Envelope) -> Self {
        Self { command, envelope }
    }

    /// Require a success status and decode the typed result.
    pub fn success(self) -> Result<C::Output, Error> {
        if self.envelope.status == "success" {
            self.command.decode(&self.envelope.result)
        } else {
            Err(Error::unexpected_status(
                self.command.command_string(),
                self.envelope.status,
                self.envelope.result,
            ))
        }
    }
}

/// Seam between commands and the external process. The production
/// implementation spawns the relayer binary; tests substitute a runner
/// that replays scripted envelopes.
pub trait CommandRunner {
    /// Execute one invocation and return the parsed envelope.
    fn invoke(&self, name: &str, args: &[String]) -> Result<Envelope, Error>;

    /// Run a typed command, deferring status dispatch to the caller.
    fn run<'a, C: Command>(&self, command: &'a C) -> Result<CommandResult<'a, C>, Error>
    where
        Self: Sized,
    {
        let envelope = self.invoke(command.name(), &command.args())?;
        Ok(CommandResult::new(command, envelope))
    }

    /// Pause between orchestration steps.
    ///
    /// Purely cosmetic, to keep interleaved relayer log output readable.
    /// Carries no ordering guarantee beyond what sequential execution
    /// already provides, and must never be relied on for correctness.
    fn pace(&self) {}
}
