use serde_json::Value;

use crate::error::Error;
use crate::relayer::command::Command;
use crate::relayer::decode::{element, field, find_event, from_value};
use crate::types::id::{ChainId, ChannelId, PortId};
use crate::types::packet::PacketResult;

/// Token amount carried by a test packet when none is supplied.
pub const DEFAULT_PACKET_AMOUNT: u64 = 9999;

/// Timeout height offset for a test packet when none is supplied.
pub const DEFAULT_TIMEOUT_OFFSET: u64 = 1000;

/// `tx raw packet-send <src> <dst> <src-port> <src-chan> <amount> <timeout-offset>`
#[derive(Clone, Debug)]
pub struct TxPacketSend {
    pub src_chain_id: ChainId,
    pub dst_chain_id: ChainId,
    pub src_port_id: PortId,
    pub src_channel_id: ChannelId,
    pub amount: u64,
    pub timeout_offset: u64,
}

impl TxPacketSend {
    pub fn new(
        src_chain_id: ChainId,
        dst_chain_id: ChainId,
        src_port_id: PortId,
        src_channel_id: ChannelId,
    ) -> Self {
        Self {
            src_chain_id,
            dst_chain_id,
            src_port_id,
            src_channel_id,
            amount: DEFAULT_PACKET_AMOUNT,
            timeout_offset: DEFAULT_TIMEOUT_OFFSET,
        }
    }
}

impl Command for TxPacketSend {
    type Output = PacketResult;

    fn name(&self) -> &'static str {
        "tx raw packet-send"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.src_chain_id.to_string(),
            self.dst_chain_id.to_string(),
            self.src_port_id.to_string(),
            self.src_channel_id.to_string(),
            self.amount.to_string(),
            self.timeout_offset.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<PacketResult, Error> {
        let event = find_event(element(result, 0)?, "SendPacketChannel")?;
        from_value("SendPacketChannel packet", field(event, "packet")?)
    }
}

/// `tx raw packet-recv <dst> <src> <src-port> <src-chan>`
#[derive(Clone, Debug)]
pub struct TxPacketRecv {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub src_port_id: PortId,
    pub src_channel_id: ChannelId,
}

impl Command for TxPacketRecv {
    type Output = PacketResult;

    fn name(&self) -> &'static str {
        "tx raw packet-recv"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.src_port_id.to_string(),
            self.src_channel_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<PacketResult, Error> {
        let event = find_event(element(result, 0)?, "WriteAcknowledgementChannel")?;
        from_value("WriteAcknowledgementChannel packet", field(event, "packet")?)
    }
}

/// `tx raw packet-ack <dst> <src> <src-port> <src-chan>`
#[derive(Clone, Debug)]
pub struct TxPacketAck {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub src_port_id: PortId,
    pub src_channel_id: ChannelId,
}

impl Command for TxPacketAck {
    type Output = PacketResult;

    fn name(&self) -> &'static str {
        "tx raw packet-ack"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.src_port_id.to_string(),
            self.src_channel_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<PacketResult, Error> {
        let event = find_event(element(result, 0)?, "AcknowledgePacketChannel")?;
        from_value("AcknowledgePacketChannel packet", field(event, "packet")?)
    }
}
