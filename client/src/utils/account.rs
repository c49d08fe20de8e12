use solana_account_decoder::UiAccountEncoding;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;

use esusu_api::prelude::*;

use crate::error::{GatewayError, Result};
use crate::session::Session;

// Field offsets inside account data: 8-byte discriminator header, then
// the leading u64 group (see the state layouts in esusu-api).
const POOL_STATUS_OFFSET: usize = 8 + 24;
const VAULT_AUTHORITY_OFFSET: usize = 8 + 24;

pub async fn get_registry_account(session: &Session) -> Result<(Registry, Pubkey)> {
    let account = session
        .provider()
        .get_account(&REGISTRY_ADDRESS)
        .await?
        .ok_or(GatewayError::AccountNotFound(REGISTRY_ADDRESS))?;
    let registry = Registry::unpack(&account.data)
        .map_err(|_| GatewayError::MalformedAccount("registry"))
        .copied()?;
    Ok((registry, REGISTRY_ADDRESS))
}

pub async fn get_pool_account(session: &Session, pool_id: u64) -> Result<(Pool, Pubkey)> {
    let (pool_address, _bump) = pool_pda(pool_id);
    let account = session
        .provider()
        .get_account(&pool_address)
        .await?
        .ok_or(GatewayError::AccountNotFound(pool_address))?;
    let pool = Pool::unpack(&account.data)
        .map_err(|_| GatewayError::MalformedAccount("pool"))
        .copied()?;
    Ok((pool, pool_address))
}

pub async fn get_vault_account(
    session: &Session,
    authority: &Pubkey,
    asset: &[u8; MAX_ASSET_LEN],
) -> Result<(Vault, Pubkey)> {
    let (vault_address, _bump) = vault_pda(*authority, asset);
    let account = session
        .provider()
        .get_account(&vault_address)
        .await?
        .ok_or(GatewayError::AccountNotFound(vault_address))?;
    let vault = Vault::unpack(&account.data)
        .map_err(|_| GatewayError::MalformedAccount("vault"))
        .copied()?;
    Ok((vault, vault_address))
}

/// Scans for pool accounts in the given lifecycle state. The provider
/// defines the order; nothing is reordered here.
pub async fn find_pools_by_status(
    session: &Session,
    status: PoolStatus,
) -> Result<Vec<(Pubkey, Pool)>> {
    let status_bytes = u32::from(status).to_le_bytes();

    let config = RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::DataSize(Pool::get_size() as u64),
            RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                POOL_STATUS_OFFSET,
                status_bytes.to_vec(),
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            commitment: None,
            min_context_slot: None,
        },
        with_context: None,
        sort_results: None,
    };

    let accounts = session.provider().get_program_accounts(config).await?;

    let mut pools = Vec::with_capacity(accounts.len());
    for (address, account) in accounts {
        let pool = Pool::unpack(&account.data)
            .map_err(|_| GatewayError::MalformedAccount("pool"))
            .copied()?;
        pools.push((address, pool));
    }
    Ok(pools)
}

/// Scans for every vault owned by `authority`, one per held asset.
pub async fn find_vaults_for_authority(
    session: &Session,
    authority: &Pubkey,
) -> Result<Vec<(Pubkey, Vault)>> {
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::DataSize(Vault::get_size() as u64),
            RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                VAULT_AUTHORITY_OFFSET,
                authority.to_bytes().to_vec(),
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            commitment: None,
            min_context_slot: None,
        },
        with_context: None,
        sort_results: None,
    };

    let accounts = session.provider().get_program_accounts(config).await?;

    let mut vaults = Vec::with_capacity(accounts.len());
    for (address, account) in accounts {
        let vault = Vault::unpack(&account.data)
            .map_err(|_| GatewayError::MalformedAccount("vault"))
            .copied()?;
        vaults.push((address, vault));
    }
    Ok(vaults)
}
