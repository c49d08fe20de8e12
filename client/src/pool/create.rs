use log::debug;
use solana_sdk::signature::Signature;

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::{get_registry_account, normalize_asset, submit, to_base_units};

/// Creates a new pool and returns its assigned id with the signature.
///
/// The id comes from the registry counter the same way the program
/// assigns it, so the caller can render the new pool without waiting
/// for a second fetch.
pub async fn create_pool(
    session: &Session,
    name: &str,
    pool_asset: &str,
    asset_amount: f64,
    stake_asset: &str,
) -> Result<(u64, Signature)> {
    let pool_asset = normalize_asset(pool_asset)?;
    let stake_asset = normalize_asset(stake_asset)?;
    let amount = to_base_units(asset_amount);

    let (registry, _registry_address) = get_registry_account(session).await?;
    let pool_id = registry.pools_created;

    let create_ix = build_create_pool_ix(
        session.account(),
        pool_id,
        name,
        &pool_asset,
        amount,
        &stake_asset,
    );

    let signature = submit(session, &[create_ix]).await?;
    debug!("created pool {} ({})", pool_id, signature);

    Ok((pool_id, signature))
}
