use serde_json::Value;

use crate::error::Error;
use crate::relayer::command::Command;
use crate::relayer::decode::{element, field, from_value};
use crate::types::channel::{ChannelEnd, ChannelStepResult};
use crate::types::id::{ChainId, ChannelId, ConnectionId, PortId};
use crate::types::ordering::Ordering;

/// Placeholder the relayer CLI expects in positional slots for channel
/// identifiers that have not been assigned yet. A harness convention,
/// not a protocol requirement.
pub const DEFAULT_CHANNEL_LABEL: &str = "defaultChannel";

/// `tx raw chan-open-init <dst> <src> <conn> <dst-port> <src-port> <dst-label> <src-label> [--ordering O]`
#[derive(Clone, Debug)]
pub struct TxChanOpenInit {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub dst_port_id: PortId,
    pub src_port_id: PortId,
    pub dst_label: String,
    pub src_label: String,
    pub ordering: Option<Ordering>,
}

impl TxChanOpenInit {
    pub fn new(
        dst_chain_id: ChainId,
        src_chain_id: ChainId,
        connection_id: ConnectionId,
        dst_port_id: PortId,
        src_port_id: PortId,
        ordering: Option<Ordering>,
    ) -> Self {
        Self {
            dst_chain_id,
            src_chain_id,
            connection_id,
            dst_port_id,
            src_port_id,
            dst_label: DEFAULT_CHANNEL_LABEL.to_string(),
            src_label: DEFAULT_CHANNEL_LABEL.to_string(),
            ordering,
        }
    }
}

impl Command for TxChanOpenInit {
    type Output = ChannelStepResult;

    fn name(&self) -> &'static str {
        "tx raw chan-open-init"
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.connection_id.to_string(),
            self.dst_port_id.to_string(),
            self.src_port_id.to_string(),
            self.dst_label.clone(),
            self.src_label.clone(),
        ];

        if let Some(ordering) = self.ordering {
            args.push("--ordering".to_string());
            args.push(ordering.to_string());
        }

        args
    }

    fn decode(&self, result: &Value) -> Result<ChannelStepResult, Error> {
        from_value(
            "OpenInitChannel",
            field(element(result, 0)?, "OpenInitChannel")?,
        )
    }
}

/// `tx raw chan-open-try <dst> <src> <conn> <dst-port> <src-port> <dst-label> <src-chan> [--ordering O]`
#[derive(Clone, Debug)]
pub struct TxChanOpenTry {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub dst_port_id: PortId,
    pub src_port_id: PortId,
    pub dst_label: String,
    pub src_channel_id: ChannelId,
    pub ordering: Option<Ordering>,
}

impl TxChanOpenTry {
    pub fn new(
        dst_chain_id: ChainId,
        src_chain_id: ChainId,
        connection_id: ConnectionId,
        dst_port_id: PortId,
        src_port_id: PortId,
        src_channel_id: ChannelId,
        ordering: Option<Ordering>,
    ) -> Self {
        Self {
            dst_chain_id,
            src_chain_id,
            connection_id,
            dst_port_id,
            src_port_id,
            dst_label: DEFAULT_CHANNEL_LABEL.to_string(),
            src_channel_id,
            ordering,
        }
    }
}

impl Command for TxChanOpenTry {
    type Output = ChannelStepResult;

    fn name(&self) -> &'static str {
        "tx raw chan-open-try"
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.connection_id.to_string(),
            self.dst_port_id.to_string(),
            self.src_port_id.to_string(),
            self.dst_label.clone(),
            self.src_channel_id.to_string(),
        ];

        if let Some(ordering) = self.ordering {
            args.push("--ordering".to_string());
            args.push(ordering.to_string());
        }

        args
    }

    fn decode(&self, result: &Value) -> Result<ChannelStepResult, Error> {
        from_value(
            "OpenTryChannel",
            field(element(result, 0)?, "OpenTryChannel")?,
        )
    }
}

/// `tx raw chan-open-ack <dst> <src> <conn> <dst-port> <src-port> <dst-chan> <src-chan>`
#[derive(Clone, Debug)]
pub struct TxChanOpenAck {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub dst_port_id: PortId,
    pub src_port_id: PortId,
    pub dst_channel_id: ChannelId,
    pub src_channel_id: ChannelId,
}

impl Command for TxChanOpenAck {
    type Output = ChannelStepResult;

    fn name(&self) -> &'static str {
        "tx raw chan-open-ack"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.connection_id.to_string(),
            self.dst_port_id.to_string(),
            self.src_port_id.to_string(),
            self.dst_channel_id.to_string(),
            self.src_channel_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ChannelStepResult, Error> {
        from_value(
            "OpenAckChannel",
            field(element(result, 0)?, "OpenAckChannel")?,
        )
    }
}

/// `tx raw chan-open-confirm <dst> <src> <conn> <dst-port> <src-port> <dst-chan> <src-chan>`
#[derive(Clone, Debug)]
pub struct TxChanOpenConfirm {
    pub dst_chain_id: ChainId,
    pub src_chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub dst_port_id: PortId,
    pub src_port_id: PortId,
    pub dst_channel_id: ChannelId,
    pub src_channel_id: ChannelId,
}

impl Command for TxChanOpenConfirm {
    type Output = ChannelStepResult;

    fn name(&self) -> &'static str {
        "tx raw chan-open-confirm"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.dst_chain_id.to_string(),
            self.src_chain_id.to_string(),
            self.connection_id.to_string(),
            self.dst_port_id.to_string(),
            self.src_port_id.to_string(),
            self.dst_channel_id.to_string(),
            self.src_channel_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ChannelStepResult, Error> {
        from_value(
            "OpenConfirmChannel",
            field(element(result, 0)?, "OpenConfirmChannel")?,
        )
    }
}

/// `query channel end <chain> <connection> <channel>`
#[derive(Clone, Debug)]
pub struct QueryChannelEnd {
    pub chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub channel_id: ChannelId,
}

impl Command for QueryChannelEnd {
    type Output = ChannelEnd;

    fn name(&self) -> &'static str {
        "query channel end"
    }

    fn args(&self) -> Vec<String> {
        vec![
            self.chain_id.to_string(),
            self.connection_id.to_string(),
            self.channel_id.to_string(),
        ]
    }

    fn decode(&self, result: &Value) -> Result<ChannelEnd, Error> {
        from_value("ChannelEnd", element(result, 0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chan_open_init_appends_ordering_flag_last() {
        let mut cmd = TxChanOpenInit::new(
            ChainId::new("ibc-1"),
            ChainId::new("ibc-0"),
            ConnectionId::new("connection-1"),
            PortId::transfer(),
            PortId::transfer(),
            None,
        );

        assert_eq!(
            cmd.args(),
            vec![
                "ibc-1",
                "ibc-0",
                "connection-1",
                "transfer",
                "transfer",
                DEFAULT_CHANNEL_LABEL,
                DEFAULT_CHANNEL_LABEL,
            ]
        );

        cmd.ordering = Some(Ordering::Ordered);
        assert_eq!(cmd.args().last().map(String::as_str), Some("ORDERED"));
        assert_eq!(cmd.args()[7], "--ordering");
    }
}
