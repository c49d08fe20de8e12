use steel::*;

use crate::{
    consts::*,
    instruction::*,
    pda::*,
    utils,
};

pub fn build_initialize_ix(signer: Pubkey) -> Instruction {
    let (registry_pda, _registry_bump) = registry_pda();

    assert_eq!(registry_pda, REGISTRY_ADDRESS);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(registry_pda, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {}.to_bytes(),
    }
}

pub fn build_connect_vaults_ix(signer: Pubkey) -> Instruction {
    let mut accounts = vec![AccountMeta::new(signer, true)];

    for asset in SUPPORTED_ASSETS {
        let (vault_address, _bump) = vault_pda(signer, &utils::to_asset(asset));
        accounts.push(AccountMeta::new(vault_address, false));
    }
    accounts.push(AccountMeta::new_readonly(system_program::ID, false));

    Instruction {
        program_id: crate::ID,
        accounts,
        data: ConnectVaults {}.to_bytes(),
    }
}

pub fn build_deposit_asset_ix(
    signer: Pubkey,
    asset: &[u8; MAX_ASSET_LEN],
    amount: u64,
) -> Instruction {
    let (vault_address, _bump) = vault_pda(signer, asset);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(vault_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: DepositAsset {
            asset: *asset,
            amount: amount.to_le_bytes(),
        }.to_bytes(),
    }
}

pub fn build_withdraw_asset_ix(
    signer: Pubkey,
    asset: &[u8; MAX_ASSET_LEN],
    amount: u64,
    receiver: Pubkey,
) -> Instruction {
    let (vault_address, _bump) = vault_pda(signer, asset);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(vault_address, false),
            AccountMeta::new(receiver, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: WithdrawAsset {
            asset: *asset,
            amount: amount.to_le_bytes(),
            receiver,
        }.to_bytes(),
    }
}

pub fn build_create_pool_ix(
    signer: Pubkey,
    pool_id: u64,
    name: &str,
    pool_asset: &[u8; MAX_ASSET_LEN],
    asset_amount: u64,
    stake_asset: &[u8; MAX_ASSET_LEN],
) -> Instruction {
    let (pool_address, _pool_bump) = pool_pda(pool_id);
    let (stake_vault, _vault_bump) = vault_pda(signer, stake_asset);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(REGISTRY_ADDRESS, false),
            AccountMeta::new(pool_address, false),
            AccountMeta::new(stake_vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: CreatePool {
            name: utils::to_name(name),
            pool_asset: *pool_asset,
            asset_amount: asset_amount.to_le_bytes(),
            stake_asset: *stake_asset,
        }.to_bytes(),
    }
}

pub fn build_join_pool_ix(
    signer: Pubkey,
    pool_id: u64,
    stake_asset: &[u8; MAX_ASSET_LEN],
) -> Instruction {
    let (pool_address, _pool_bump) = pool_pda(pool_id);
    let (stake_vault, _vault_bump) = vault_pda(signer, stake_asset);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(pool_address, false),
            AccountMeta::new(stake_vault, false),
        ],
        data: JoinPool {
            pool_id: pool_id.to_le_bytes(),
        }.to_bytes(),
    }
}

pub fn build_pay_cycle_ix(
    signer: Pubkey,
    pool_id: u64,
    pool_asset: &[u8; MAX_ASSET_LEN],
) -> Instruction {
    let (pool_address, _pool_bump) = pool_pda(pool_id);
    let (contribution_vault, _vault_bump) = vault_pda(signer, pool_asset);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(pool_address, false),
            AccountMeta::new(contribution_vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: PayCycle {
            pool_id: pool_id.to_le_bytes(),
        }.to_bytes(),
    }
}

/// The payout walks every member vault, so they all ride along writable.
pub fn build_service_pool_ix(
    signer: Pubkey,
    pool_id: u64,
    member_vaults: &[Pubkey],
) -> Instruction {
    let (pool_address, _pool_bump) = pool_pda(pool_id);

    let mut accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new(pool_address, false),
    ];
    for vault in member_vaults {
        accounts.push(AccountMeta::new(*vault, false));
    }

    Instruction {
        program_id: crate::ID,
        accounts,
        data: ServicePool {
            pool_id: pool_id.to_le_bytes(),
        }.to_bytes(),
    }
}
