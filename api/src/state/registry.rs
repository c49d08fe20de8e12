use steel::*;
use super::AccountType;
use crate::state;

/// Singleton created at initialization. `pools_created` doubles as the
/// id the next CreatePool will be assigned.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Registry {
    pub pools_created: u64,
    pub authority: Pubkey,
}

state!(AccountType, Registry);
