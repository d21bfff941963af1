use tracing::{error, info};

use crate::commands::packet::{TxPacketAck, TxPacketRecv, TxPacketSend};
use crate::error::Error;
use crate::relayer::command::CommandRunner;
use crate::types::id::{ChainId, ChannelId, PortId, Sequence};
use crate::types::packet::{MismatchKind, PingPongReport, SequenceMismatch};

pub fn packet_send<Runner: CommandRunner>(
    runner: &Runner,
    src: &ChainId,
    dst: &ChainId,
    src_port: &PortId,
    src_channel: &ChannelId,
) -> Result<Sequence, Error> {
    let cmd = TxPacketSend::new(
        src.clone(),
        dst.clone(),
        src_port.clone(),
        src_channel.clone(),
    );

    let res = runner.run(&cmd)?.success()?;
    info!(
        "PacketSend to {} obtained sequence number {}",
        src, res.sequence
    );

    Ok(res.sequence)
}

pub fn packet_recv<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    src_port: &PortId,
    src_channel: &ChannelId,
) -> Result<Sequence, Error> {
    let cmd = TxPacketRecv {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        src_port_id: src_port.clone(),
        src_channel_id: src_channel.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "PacketRecv to {} done for sequence number {}",
        dst, res.sequence
    );

    Ok(res.sequence)
}

pub fn packet_ack<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    src_port: &PortId,
    src_channel: &ChannelId,
) -> Result<Sequence, Error> {
    let cmd = TxPacketAck {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        src_port_id: src_port.clone(),
        src_channel_id: src_channel.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "PacketAck to {} done for sequence number {}",
        dst, res.sequence
    );

    Ok(res.sequence)
}

/// Send one packet from `src` to `dst`, observe its receipt on `dst`
/// and its acknowledgement back on `src`, comparing the sequence
/// numbers pairwise along the way.
///
/// Sequence disagreements are logged and recorded, never raised:
/// relayer retries can legitimately reorder what the harness observes.
pub fn packet_round_trip<Runner: CommandRunner>(
    runner: &Runner,
    src: &ChainId,
    dst: &ChainId,
    src_channel: &ChannelId,
    dst_channel: &ChannelId,
    port: &PortId,
    report: &mut PingPongReport,
) -> Result<(), Error> {
    let sent = packet_send(runner, src, dst, port, src_channel)?;
    runner.pace();

    let received = packet_recv(runner, dst, src, port, dst_channel)?;
    if received != sent {
        error!(
            "mismatched sequence numbers for path {} -> {}: sent={} received={}",
            src, dst, sent, received
        );
        report.record(SequenceMismatch {
            kind: MismatchKind::Recv,
            src_chain: src.clone(),
            dst_chain: dst.clone(),
            expected: sent,
            got: received.clone(),
        });
    }
    runner.pace();

    let acked = packet_ack(runner, src, dst, port, src_channel)?;
    if acked != received {
        error!(
            "mismatched sequence numbers for ack on path {} -> {}: received={} acked={}",
            src, dst, received, acked
        );
        report.record(SequenceMismatch {
            kind: MismatchKind::Ack,
            src_chain: src.clone(),
            dst_chain: dst.clone(),
            expected: received,
            got: acked,
        });
    }
    runner.pace();

    Ok(())
}

/// Run one full round trip in each direction over an established
/// channel: the minimum liveness check that every sent packet is
/// observed received and acknowledged exactly once per direction, with
/// stable sequence numbering.
pub fn packet_ping_pong<Runner: CommandRunner>(
    runner: &Runner,
    side_a: &ChainId,
    side_b: &ChainId,
    chan_a: &ChannelId,
    chan_b: &ChannelId,
    port: &PortId,
) -> Result<PingPongReport, Error> {
    let mut report = PingPongReport::default();

    packet_round_trip(runner, side_a, side_b, chan_a, chan_b, port, &mut report)?;
    packet_round_trip(runner, side_b, side_a, chan_b, chan_a, port, &mut report)?;

    Ok(report)
}
