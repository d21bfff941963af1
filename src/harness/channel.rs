use tracing::{debug, info, warn};

use crate::commands::channel::{
    QueryChannelEnd, TxChanOpenAck, TxChanOpenConfirm, TxChanOpenInit, TxChanOpenTry,
};
use crate::error::Error;
use crate::relayer::command::CommandRunner;
use crate::types::channel::ChannelEnd;
use crate::types::id::{ChainId, ChannelId, ConnectionId, PortId};
use crate::types::ordering::Ordering;

pub fn chan_open_init<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_connection: &ConnectionId,
    dst_port: &PortId,
    src_port: &PortId,
    ordering: Option<Ordering>,
) -> Result<ChannelId, Error> {
    let cmd = TxChanOpenInit::new(
        dst.clone(),
        src.clone(),
        dst_connection.clone(),
        dst_port.clone(),
        src_port.clone(),
        ordering,
    );

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ChanOpenInit submitted to {} and obtained channel id {}",
        dst, res.channel_id
    );

    Ok(res.channel_id)
}

pub fn chan_open_try<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_connection: &ConnectionId,
    dst_port: &PortId,
    src_port: &PortId,
    src_channel: &ChannelId,
    ordering: Option<Ordering>,
) -> Result<ChannelId, Error> {
    let cmd = TxChanOpenTry::new(
        dst.clone(),
        src.clone(),
        dst_connection.clone(),
        dst_port.clone(),
        src_port.clone(),
        src_channel.clone(),
        ordering,
    );

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ChanOpenTry submitted to {} and obtained channel id {}",
        dst, res.channel_id
    );

    Ok(res.channel_id)
}

pub fn chan_open_ack<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_connection: &ConnectionId,
    dst_port: &PortId,
    src_port: &PortId,
    dst_channel: &ChannelId,
    src_channel: &ChannelId,
) -> Result<ChannelId, Error> {
    let cmd = TxChanOpenAck {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        connection_id: dst_connection.clone(),
        dst_port_id: dst_port.clone(),
        src_port_id: src_port.clone(),
        dst_channel_id: dst_channel.clone(),
        src_channel_id: src_channel.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ChanOpenAck submitted to {} and obtained channel id {}",
        dst, res.channel_id
    );

    Ok(res.channel_id)
}

pub fn chan_open_confirm<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_connection: &ConnectionId,
    dst_port: &PortId,
    src_port: &PortId,
    dst_channel: &ChannelId,
    src_channel: &ChannelId,
) -> Result<ChannelId, Error> {
    let cmd = TxChanOpenConfirm {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        connection_id: dst_connection.clone(),
        dst_port_id: dst_port.clone(),
        src_port_id: src_port.clone(),
        dst_channel_id: dst_channel.clone(),
        src_channel_id: src_channel.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ChanOpenConfirm submitted to {} and obtained channel id {}",
        dst, res.channel_id
    );

    Ok(res.channel_id)
}

pub fn query_channel_end<Runner: CommandRunner>(
    runner: &Runner,
    chain_id: &ChainId,
    connection_id: &ConnectionId,
    channel_id: &ChannelId,
) -> Result<ChannelEnd, Error> {
    let cmd = QueryChannelEnd {
        chain_id: chain_id.clone(),
        connection_id: connection_id.clone(),
        channel_id: channel_id.clone(),
    };

    let end = runner.run(&cmd)?.success()?;
    debug!("status of channel end {}: {:?}", channel_id, end);

    Ok(end)
}

/// Run the four-phase channel handshake on top of an established
/// connection, with init and ack landing on side A and try and confirm
/// on side B.
///
/// The ack and confirm steps must echo the channel id created by the
/// init and try steps on the same side; a disagreement is fatal, as in
/// the connection handshake. The final open-state check is only a
/// warning though: channel-open confirmation can lag observably behind
/// the handshake transaction without indicating protocol failure.
pub fn channel_handshake<Runner: CommandRunner>(
    runner: &Runner,
    side_a: &ChainId,
    side_b: &ChainId,
    conn_a: &ConnectionId,
    conn_b: &ConnectionId,
    port: &PortId,
    ordering: Option<Ordering>,
) -> Result<(ChannelId, ChannelId), Error> {
    let chan_a = chan_open_init(runner, side_a, side_b, conn_a, port, port, ordering)?;
    runner.pace();

    let chan_b = chan_open_try(runner, side_b, side_a, conn_b, port, port, &chan_a, ordering)?;
    runner.pace();

    let acked = chan_open_ack(runner, side_a, side_b, conn_a, port, port, &chan_a, &chan_b)?;
    if acked != chan_a {
        return Err(Error::mismatched_identifier(
            "chan open ack".to_string(),
            chan_a.to_string(),
            acked.to_string(),
        ));
    }

    let confirmed =
        chan_open_confirm(runner, side_b, side_a, conn_b, port, port, &chan_b, &chan_a)?;
    if confirmed != chan_b {
        return Err(Error::mismatched_identifier(
            "chan open confirm".to_string(),
            chan_b.to_string(),
            confirmed.to_string(),
        ));
    }
    runner.pace();

    let end_a = query_channel_end(runner, side_a, conn_a, &chan_a)?;
    if !end_a.is_open() {
        warn!(
            "channel end {} on chain {} is not in Open state, got: {}",
            chan_a, side_a, end_a.state
        );
    }

    let end_b = query_channel_end(runner, side_b, conn_b, &chan_b)?;
    if !end_b.is_open() {
        warn!(
            "channel end {} on chain {} is not in Open state, got: {}",
            chan_b, side_b, end_b.state
        );
    }

    Ok((chan_a, chan_b))
}
