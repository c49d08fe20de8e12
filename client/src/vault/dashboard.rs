use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use esusu_api::utils::from_asset;

use crate::error::Result;
use crate::session::Session;
use crate::utils::find_vaults_for_authority;

/// One balance row of the account dashboard, surfaced exactly as the
/// contract reports it. Amounts stay in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub asset: String,
    pub available: u64,
    pub staked: u64,
    pub contributed: u64,
}

/// Fetches the per-asset balance rows for `account`, one per vault.
pub async fn get_dashboard(session: &Session, account: &Pubkey) -> Result<Vec<AccountSummary>> {
    let vaults = find_vaults_for_authority(session, account).await?;

    Ok(vaults
        .into_iter()
        .map(|(_, vault)| AccountSummary {
            asset: from_asset(&vault.asset),
            available: vault.available,
            staked: vault.staked,
            contributed: vault.contributed,
        })
        .collect())
}
