use solana_sdk::{pubkey::Pubkey, signature::Signature};

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::submit;

/// Associates the current account with one vault per supported asset.
pub async fn connect_vaults(session: &Session) -> Result<Signature> {
    let connect_ix = build_connect_vaults_ix(session.account());
    submit(session, &[connect_ix]).await
}

/// True when `account` already has its vault records. The native vault
/// is created with the rest, so its presence stands for the whole set.
pub async fn is_account_connected(session: &Session, account: &Pubkey) -> Result<bool> {
    let (vault_address, _bump) = vault_pda(*account, &to_asset(NATIVE_ASSET));
    let vault = session.provider().get_account(&vault_address).await?;
    Ok(vault.is_some())
}
