use serde::{Deserialize, Serialize};

use crate::types::id::{ChainId, Sequence};

/// Packet payload shared by the send, receive and acknowledge events:
/// the harness only correlates the sequence numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketResult {
    pub sequence: Sequence,
}

/// Which pairwise comparison of the relay cycle disagreed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    /// Received sequence differs from the sent one.
    Recv,
    /// Acknowledged sequence differs from the received one.
    Ack,
}

/// A single sequence-number disagreement observed on one direction of
/// the relay cycle. Non-fatal: relayer retries can legitimately reorder
/// what the harness observes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceMismatch {
    pub kind: MismatchKind,
    pub src_chain: ChainId,
    pub dst_chain: ChainId,
    pub expected: Sequence,
    pub got: Sequence,
}

/// Outcome of a full bidirectional relay cycle. The cycle itself always
/// runs to completion; mismatches are recorded here and logged, never
/// raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PingPongReport {
    pub mismatches: Vec<SequenceMismatch>,
}

impl PingPongReport {
    pub fn record(&mut self, mismatch: SequenceMismatch) {
        self.mismatches.push(mismatch);
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}
