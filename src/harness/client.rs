use tracing::{debug, info};

use crate::commands::client::{QueryClientState, TxCreateClient, TxUpdateClient};
use crate::error::Error;
use crate::relayer::command::CommandRunner;
use crate::types::client::{ClientCreated, ClientState, ClientUpdated};
use crate::types::id::{ChainId, ClientId};

pub fn create_client<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
) -> Result<ClientCreated, Error> {
    let cmd = TxCreateClient {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
    };

    let client = runner.run(&cmd)?.success()?;
    info!("created client {} on chain {}", client.client_id, dst);

    Ok(client)
}

pub fn update_client<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
    client_id: &ClientId,
) -> Result<ClientUpdated, Error> {
    let cmd = TxUpdateClient {
        dst_chain_id: dst.clone(),
        src_chain_id: src.clone(),
        dst_client_id: client_id.clone(),
    };

    let updated = runner.run(&cmd)?.success()?;
    info!(
        "updated client {} to consensus height {}",
        client_id, updated.consensus_height
    );

    Ok(updated)
}

pub fn query_client_state<Runner: CommandRunner>(
    runner: &Runner,
    chain_id: &ChainId,
    client_id: &ClientId,
) -> Result<ClientState, Error> {
    let cmd = QueryClientState::new(chain_id.clone(), client_id.clone());

    let state = runner.run(&cmd)?.success()?;
    debug!("state of client {} on {}: {:?}", client_id, chain_id, state);

    Ok(state)
}

/// Bootstrap a client on `dst` tracking `src`: create it, then query,
/// update and query again.
///
/// The queries are observational and assert nothing about the returned
/// state, but they must decode; a decode failure here means the client
/// was not actually created in a queryable state, which is fatal.
pub fn bootstrap_client<Runner: CommandRunner>(
    runner: &Runner,
    dst: &ChainId,
    src: &ChainId,
) -> Result<ClientId, Error> {
    let client = create_client(runner, dst, src)?;
    runner.pace();

    query_client_state(runner, dst, &client.client_id)?;
    runner.pace();

    update_client(runner, dst, src, &client.client_id)?;
    runner.pace();

    query_client_state(runner, dst, &client.client_id)?;
    runner.pace();

    Ok(client.client_id)
}
