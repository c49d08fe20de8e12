use steel::*;
use crate::consts::*;

pub fn registry_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY], &crate::id())
}

pub fn pool_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL, &id.to_le_bytes()], &crate::id())
}

pub fn vault_pda(authority: Pubkey, asset: &[u8; MAX_ASSET_LEN]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, authority.as_ref(), asset.as_ref()], &crate::id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_asset;

    #[test]
    fn test_pda_against_consts() {
        let (pda, bump) = registry_pda();
        assert_eq!(bump, REGISTRY_BUMP);
        assert_eq!(pda, REGISTRY_ADDRESS);
    }

    #[test]
    fn test_pool_pdas_are_distinct() {
        let (first, _bump) = pool_pda(0);
        let (second, _bump) = pool_pda(1);
        assert_ne!(first, second);
    }

    #[test]
    fn test_vault_pdas_are_per_asset() {
        let authority = Pubkey::new_unique();
        let (native, _bump) = vault_pda(authority, &to_asset("SOL"));
        let (other, _bump) = vault_pda(authority, &to_asset("USDT"));
        assert_ne!(native, other);
    }
}
