use solana_sdk::signature::Signature;

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::{get_pool_account, submit};

/// Associates the current account with pool `pool_id`, staking out of
/// the vault that matches the pool's stake asset.
pub async fn join_pool(session: &Session, pool_id: u64) -> Result<Signature> {
    let (pool, _pool_address) = get_pool_account(session, pool_id).await?;

    let join_ix = build_join_pool_ix(session.account(), pool_id, &pool.stake_asset);
    submit(session, &[join_ix]).await
}
