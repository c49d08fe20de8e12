#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solana_client::rpc_config::RpcProgramAccountsConfig;
use solana_client::rpc_filter::RpcFilterType;
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use esusu_api::prelude::*;
use esusu_client::{DepositMode, GatewayError, Provider, Session, SimulationOutcome};

/// In-memory stand-in for the provider/contract pair: a contract-owned
/// account map plus a record of every submission and simulation. Program
/// account scans honor the same datasize/memcmp filters the real node
/// would, so the gateway's offsets get exercised too.
pub struct MockProvider {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    sent: Mutex<Vec<Transaction>>,
    simulated: Mutex<Vec<Transaction>>,
    reject_sends: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            simulated: Mutex::new(Vec::new()),
            reject_sends: false,
        }
    }

    /// A provider whose contract rejects every submission.
    pub fn rejecting() -> Self {
        Self {
            reject_sends: true,
            ..Self::new()
        }
    }

    pub fn insert(&self, address: Pubkey, data: Vec<u8>) {
        self.accounts.lock().unwrap().insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner: esusu_api::ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn simulated_count(&self) -> usize {
        self.simulated.lock().unwrap().len()
    }

    pub fn sent_transaction(&self, index: usize) -> Transaction {
        self.sent.lock().unwrap()[index].clone()
    }

    pub fn simulated_transaction(&self, index: usize) -> Transaction {
        self.simulated.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, GatewayError> {
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn get_program_accounts(
        &self,
        config: RpcProgramAccountsConfig,
    ) -> Result<Vec<(Pubkey, Account)>, GatewayError> {
        let filters = config.filters.unwrap_or_default();
        let accounts = self.accounts.lock().unwrap();

        Ok(accounts
            .iter()
            .filter(|(_, account)| filters.iter().all(|f| filter_matches(f, &account.data)))
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }

    async fn latest_blockhash(&self) -> Result<Hash, GatewayError> {
        Ok(Hash::default())
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, GatewayError> {
        self.sent.lock().unwrap().push(tx.clone());
        if self.reject_sends {
            return Err(GatewayError::Contract(EsusuError::InsufficientBalance));
        }
        Ok(tx.signatures[0])
    }

    async fn simulate_transaction(&self, tx: &Transaction) -> Result<SimulationOutcome, GatewayError> {
        self.simulated.lock().unwrap().push(tx.clone());
        Ok(SimulationOutcome {
            err: None,
            logs: vec!["Program log: deposit simulated".to_string()],
        })
    }
}

fn filter_matches(filter: &RpcFilterType, data: &[u8]) -> bool {
    match filter {
        RpcFilterType::DataSize(size) => data.len() as u64 == *size,
        RpcFilterType::Memcmp(memcmp) => memcmp.bytes_match(data),
        _ => false,
    }
}

/// Packs a state account the way the program lays it out: an 8-byte
/// discriminator header followed by the Pod bytes.
pub fn pack_account<T: bytemuck::Pod>(account_type: AccountType, value: &T) -> Vec<u8> {
    let mut data = vec![0u8; 8];
    data[0] = account_type.into();
    data.extend_from_slice(bytemuck::bytes_of(value));
    data
}

pub fn make_pool(id: u64, status: PoolStatus, members: &[Pubkey], max_members: u8) -> Pool {
    let mut pool: Pool = bytemuck::Zeroable::zeroed();
    pool.id = id;
    pool.status = status.into();
    pool.name = to_name(&format!("circle-{}", id));
    pool.pool_asset = to_asset("USDT");
    pool.pool_asset_amount = 50 * ONE_UNIT;
    pool.stake_asset = to_asset("SOL");
    pool.stake_asset_amount = 10 * ONE_UNIT;
    pool.max_members = max_members;
    pool.current_members = members.len() as u8;
    for (slot, member) in members.iter().enumerate() {
        pool.members[slot] = *member;
    }
    pool
}

pub fn make_vault(authority: Pubkey, asset: &str, available: u64, staked: u64, contributed: u64) -> Vault {
    let mut vault: Vault = bytemuck::Zeroable::zeroed();
    vault.authority = authority;
    vault.asset = to_asset(asset);
    vault.available = available;
    vault.staked = staked;
    vault.contributed = contributed;
    vault
}

pub fn make_registry(pools_created: u64) -> Registry {
    let mut registry: Registry = bytemuck::Zeroable::zeroed();
    registry.pools_created = pools_created;
    registry.authority = Pubkey::new_unique();
    registry
}

pub fn insert_pool(mock: &MockProvider, pool: &Pool) -> Pubkey {
    let (address, _bump) = pool_pda(pool.id);
    mock.insert(address, pack_account(AccountType::Pool, pool));
    address
}

pub fn insert_vault(mock: &MockProvider, vault: &Vault) -> Pubkey {
    let (address, _bump) = vault_pda(vault.authority, &vault.asset);
    mock.insert(address, pack_account(AccountType::Vault, vault));
    address
}

pub fn insert_registry(mock: &MockProvider, registry: &Registry) -> Pubkey {
    mock.insert(REGISTRY_ADDRESS, pack_account(AccountType::Registry, registry));
    REGISTRY_ADDRESS
}

pub fn test_session(mock: Arc<MockProvider>) -> Session {
    Session::new(mock, Keypair::new(), DepositMode::Simulate)
}

pub fn test_session_with_mode(mock: Arc<MockProvider>, mode: DepositMode) -> Session {
    Session::new(mock, Keypair::new(), mode)
}
