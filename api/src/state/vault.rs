use steel::*;
use super::AccountType;
use crate::consts::*;
use crate::state;

/// Per-account, per-asset holding record. Balances are in base units;
/// readers locate `authority` at byte 24 past the account discriminator.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vault {
    pub available: u64,
    pub staked: u64,
    pub contributed: u64,

    pub authority: Pubkey,
    pub asset: [u8; MAX_ASSET_LEN],
}

state!(AccountType, Vault);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_padding_free() {
        assert_eq!(std::mem::size_of::<Vault>(), 64);
    }
}
