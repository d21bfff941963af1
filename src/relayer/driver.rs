use std::path::PathBuf;
use std::process::Command as Subprocess;
use std::str;
use std::thread;
use std::time::Duration;

use eyre::eyre;
use tracing::{debug, trace};

use crate::error::Error;
use crate::relayer::command::{CommandRunner, Envelope};

/// Default entry point for the relayer, matching a development checkout.
///
/// Resolved relative to the working directory, so the harness must be
/// launched from the relayer's own workspace root unless this is
/// overridden.
pub const DEFAULT_RELAYER_COMMAND: &str = "cargo run --bin relayer --";

/// Default delay between orchestration steps.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Invokes the relayer binary, one blocking subprocess per command.
///
/// Every invocation gets the shared configuration file injected ahead
/// of the command tokens: `<entry..> -c <config> <name..> <args..>`.
/// The relayer logs freely on stdout; only the last non-blank line is
/// interpreted, as the `{status, result}` envelope.
#[derive(Clone, Debug)]
pub struct RelayerDriver {
    /// Entry point, split on whitespace into leading argv tokens.
    pub command: String,

    /// Configuration file passed to every invocation.
    pub config_path: PathBuf,

    /// Delay applied by [`CommandRunner::pace`]. Cosmetic only.
    pub pacing: Duration,
}

impl RelayerDriver {
    pub fn new(
        command: impl Into<String>,
        config_path: impl Into<PathBuf>,
        pacing: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            config_path: config_path.into(),
            pacing,
        }
    }

    fn argv(&self, name: &str, args: &[String]) -> Vec<String> {
        let mut argv: Vec<String> = self
            .command
            .split_whitespace()
            .map(ToString::to_string)
            .collect();

        argv.push("-c".to_string());
        argv.push(self.config_path.display().to_string());
        argv.extend(name.split_whitespace().map(ToString::to_string));
        argv.extend(args.iter().cloned());

        argv
    }
}

impl CommandRunner for RelayerDriver {
    fn invoke(&self, name: &str, args: &[String]) -> Result<Envelope, Error> {
        let argv = self.argv(name, args);
        let command_line = itertools::join(&argv, " ");

        let (program, rest) = argv
            .split_first()
            .ok_or_else(|| Error::generic(eyre!("relayer entry point is empty")))?;

        debug!("executing relayer command: {}", command_line);

        let output = Subprocess::new(program)
            .args(rest)
            .output()
            .map_err(|e| Error::command_not_found(command_line.clone(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(Error::command_failed(
                command_line,
                output.status.code(),
                stderr,
            ));
        }

        let stdout = str::from_utf8(&output.stdout)
            .map_err(|e| Error::non_utf8_output(command_line.clone(), e))?;

        let last_line = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| Error::empty_output(command_line.clone()))?;

        trace!("last relayer output line: {}", last_line);

        serde_json::from_str(last_line)
            .map_err(|e| Error::malformed_output(command_line, last_line.to_string(), e))
    }

    fn pace(&self) {
        thread::sleep(self.pacing);
    }
}
