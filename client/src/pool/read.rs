use solana_sdk::pubkey::Pubkey;

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::{find_pools_by_status, get_pool_account};

/// Fetches one pool record, exactly as the contract stores it.
pub async fn get_pool(session: &Session, pool_id: u64) -> Result<(Pool, Pubkey)> {
    get_pool_account(session, pool_id).await
}

/// Pool ids still open for membership, in provider order.
pub async fn get_pending_pools(session: &Session) -> Result<Vec<u64>> {
    let pools = find_pools_by_status(session, PoolStatus::Pending).await?;
    Ok(pools.into_iter().map(|(_, pool)| pool.id).collect())
}

/// Pool ids currently cycling, in provider order.
pub async fn get_running_pools(session: &Session) -> Result<Vec<u64>> {
    let pools = find_pools_by_status(session, PoolStatus::Running).await?;
    Ok(pools.into_iter().map(|(_, pool)| pool.id).collect())
}

/// Pool ids whose final cycle has paid out, in provider order.
pub async fn get_concluded_pools(session: &Session) -> Result<Vec<u64>> {
    let pools = find_pools_by_status(session, PoolStatus::Concluded).await?;
    Ok(pools.into_iter().map(|(_, pool)| pool.id).collect())
}

/// Running pools that count `account` among their members. Membership
/// sits in a position-dependent array, so the check happens after the
/// status scan rather than inside it.
pub async fn get_running_pools_for_account(
    session: &Session,
    account: &Pubkey,
) -> Result<Vec<u64>> {
    let pools = find_pools_by_status(session, PoolStatus::Running).await?;
    Ok(pools
        .into_iter()
        .filter(|(_, pool)| pool.has_member(account))
        .map(|(_, pool)| pool.id)
        .collect())
}
