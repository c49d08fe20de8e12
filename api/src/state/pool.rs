use steel::*;
use super::AccountType;
use crate::consts::*;
use crate::state;

/// One savings pool. Field order keeps the layout padding-free; readers
/// locate `status` at byte 24 past the account discriminator.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Pool {
    pub id: u64,
    pub pool_asset_amount: u64,
    pub stake_asset_amount: u64,

    pub status: u32,
    pub current_cycle: u32,

    pub name: [u8; MAX_NAME_LEN],
    pub pool_asset: [u8; MAX_ASSET_LEN],
    pub stake_asset: [u8; MAX_ASSET_LEN],

    pub members: [Pubkey; MAX_POOL_MEMBERS],
    pub max_members: u8,
    pub current_members: u8,

    _padding: [u8; 6],
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum PoolStatus {
    Unknown = 0,
    Pending,
    Running,
    Concluded,
}

impl Pool {
    /// The occupied slots of the member array.
    pub fn member_keys(&self) -> &[Pubkey] {
        &self.members[..(self.current_members as usize).min(MAX_POOL_MEMBERS)]
    }

    pub fn has_member(&self, account: &Pubkey) -> bool {
        self.member_keys().contains(account)
    }

    pub fn pool_status(&self) -> PoolStatus {
        PoolStatus::try_from(self.status).unwrap_or(PoolStatus::Unknown)
    }
}

impl core::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PoolStatus::Unknown => write!(f, "unknown"),
            PoolStatus::Pending => write!(f, "pending"),
            PoolStatus::Running => write!(f, "running"),
            PoolStatus::Concluded => write!(f, "concluded"),
        }
    }
}

state!(AccountType, Pool);
