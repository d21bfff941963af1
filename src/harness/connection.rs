use tracing::{debug, info};

use crate::commands::connection::{
    QueryConnectionEnd, TxConnAck, TxConnConfirm, TxConnInit, TxConnTry,
};
use crate::error::Error;
use crate::relayer::command::CommandRunner;
use crate::types::connection::ConnectionEnd;
use crate::types::id::{ChainId, ClientId, ConnectionId};

pub fn conn_init<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_client: &ClientId,
    src_client: &ClientId,
) -> Result<ConnectionId, Error> {
    let cmd = TxConnInit::new(
        dst.clone(),
        src.clone(),
        dst_client.clone(),
        src_client.clone(),
    );

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ConnOpenInit submitted to {} and obtained connection id {}",
        dst, res.connection_id
    );

    Ok(res.connection_id)
}

pub fn conn_try<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_client: &ClientId,
    src_client: &ClientId,
    src_connection: &ConnectionId,
) -> Result<ConnectionId, Error> {
    let cmd = TxConnTry::new(
        dst.clone(),
        src.clone(),
        dst_client.clone(),
        src_client.clone(),
        src_connection.clone(),
    );

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ConnOpenTry submitted to {} and obtained connection id {}",
        dst, res.connection_id
    );

    Ok(res.connection_id)
}

pub fn conn_ack<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_client: &ClientId,
    src_client: &ClientId,
    dst_connection: &ConnectionId,
    src_connection: &ConnectionId,
) -> Result<ConnectionId, Error> {
    let cmd = TxConnAck {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        dst_client_id: dst_client.clone(),
        src_client_id: src_client.clone(),
        dst_connection_id: dst_connection.clone(),
        src_connection_id: src_connection.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ConnOpenAck submitted to {} and obtained connection id {}",
        dst, res.connection_id
    );

    Ok(res.connection_id)
}

pub fn conn_confirm<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    dst_client: &ClientId,
    src_client: &ClientId,
    dst_connection: &ConnectionId,
    src_connection: &ConnectionId,
) -> Result<ConnectionId, Error> {
    let cmd = TxConnConfirm {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        dst_client_id: dst_client.clone(),
        src_client_id: src_client.clone(),
        dst_connection_id: dst_connection.clone(),
        src_connection_id: src_connection.clone(),
    };

    let res = runner.run(&cmd)?.success()?;
    info!(
        "ConnOpenConfirm submitted to {} and obtained connection id {}",
        dst, res.connection_id
    );

    Ok(res.connection_id)
}

pub fn query_connection_end<Runner: CommandRunner>(
    runner: &Runner,
    chain_id: &ChainId,
    connection_id: &ConnectionId,
) -> Result<ConnectionEnd, Error> {
    let cmd = QueryConnectionEnd {
        chain_id: chain_id.clone(),
        connection_id: connection_id.clone(),
    };

    let end = runner.run(&cmd)?.success()?;
    debug!("status of connection end {}: {:?}", connection_id, end);

    Ok(end)
}

/// Run the four-phase connection handshake between `side_a` and
/// `side_b`, with init and ack landing on side A and try and confirm on
/// side B.
///
/// The ack and confirm steps must echo the connection id created by the
/// init and try steps on the same side; a disagreement means the relayer
/// has confirmed a different connection than the one being tracked, and
/// is fatal. Both ends must report the `Open` state afterwards: an
/// unopened connection invalidates every later phase, so that check is
/// fatal as well.
pub fn connection_handshake<Runner: CommandRunner>(
    runner: &Runner,
    side_a: &ChainId,
    side_b: &ChainId,
    client_a: &ClientId,
    client_b: &ClientId,
) -> Result<(ConnectionId, ConnectionId), Error> {
    let conn_a = conn_init(runner, side_a, side_b, client_a, client_b)?;
    runner.pace();

    let conn_b = conn_try(runner, side_b, side_a, client_b, client_a, &conn_a)?;
    runner.pace();

    let acked = conn_ack(runner, side_a, side_b, client_a, client_b, &conn_a, &conn_b)?;
    if acked != conn_a {
        return Err(Error::mismatched_identifier(
            "conn ack".to_string(),
            conn_a.to_string(),
            acked.to_string(),
        ));
    }
    runner.pace();

    let confirmed = conn_confirm(runner, side_b, side_a, client_b, client_a, &conn_b, &conn_a)?;
    if confirmed != conn_b {
        return Err(Error::mismatched_identifier(
            "conn confirm".to_string(),
            conn_b.to_string(),
            confirmed.to_string(),
        ));
    }
    runner.pace();

    let end_a = query_connection_end(runner, side_a, &conn_a)?;
    if !end_a.is_open() {
        return Err(Error::unopened_connection(
            conn_a.clone(),
            side_a.clone(),
            end_a.state,
        ));
    }

    let end_b = query_connection_end(runner, side_b, &conn_b)?;
    if !end_b.is_open() {
        return Err(Error::unopened_connection(
            conn_b.clone(),
            side_b.clone(),
            end_b.state,
        ));
    }

    Ok((conn_a, conn_b))
}
