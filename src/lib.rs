/*!
   End-to-end test harness for the relayer binary.

   The harness drives an external relayer process through the full
   lifecycle of the cross-chain communication protocol: client bootstrap
   on both chains, the four-phase connection and channel handshakes, and
   a bidirectional packet relay cycle. The relayer is only ever invoked
   as a subprocess; the harness issues commands, decodes the structured
   output of each invocation, and validates that identifiers echoed back
   by the relayer agree with the identifiers it was given.

   Execution is strictly sequential: no two relayer invocations are ever
   in flight at once, and every step's result is fully decoded and
   validated before the next step begins.
*/

pub mod commands;
pub mod error;
pub mod harness;
pub mod relayer;
pub mod types;

#[cfg(test)]
mod tests;
