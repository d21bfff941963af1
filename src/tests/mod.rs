/*!
   Scenario tests for the harness, driven by a scripted fake runner
   instead of a live relayer process.
*/

mod mock;

mod connection;
mod decode;
mod e2e;
