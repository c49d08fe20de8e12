use solana_sdk::{pubkey::Pubkey, signature::Signature};

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::{get_pool_account, submit};

/// Pays the current account's contribution for the pool's active cycle.
pub async fn pay_cycle(session: &Session, pool_id: u64) -> Result<Signature> {
    let (pool, _pool_address) = get_pool_account(session, pool_id).await?;

    let pay_ix = build_pay_cycle_ix(session.account(), pool_id, &pool.pool_asset);
    submit(session, &[pay_ix]).await
}

/// Asks the program to settle a due cycle. The payout touches every
/// member's vault, so each rides along in the instruction.
pub async fn service_pool(session: &Session, pool_id: u64) -> Result<Signature> {
    let (pool, _pool_address) = get_pool_account(session, pool_id).await?;

    let member_vaults: Vec<Pubkey> = pool
        .member_keys()
        .iter()
        .map(|member| vault_pda(*member, &pool.pool_asset).0)
        .collect();

    let service_ix = build_service_pool_ix(session.account(), pool_id, &member_vaults);
    submit(session, &[service_ix]).await
}
