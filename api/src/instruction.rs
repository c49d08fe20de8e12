use steel::*;
use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,
    Initialize,

    // Vault instructions
    ConnectVaults,
    DepositAsset,
    WithdrawAsset,

    // Pool instructions
    CreatePool,
    JoinPool,
    PayCycle,
    ServicePool,
}

instruction!(InstructionType, Initialize);

instruction!(InstructionType, ConnectVaults);
instruction!(InstructionType, DepositAsset);
instruction!(InstructionType, WithdrawAsset);

instruction!(InstructionType, CreatePool);
instruction!(InstructionType, JoinPool);
instruction!(InstructionType, PayCycle);
instruction!(InstructionType, ServicePool);

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ConnectVaults {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DepositAsset {
    pub asset: [u8; MAX_ASSET_LEN],
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct WithdrawAsset {
    pub asset: [u8; MAX_ASSET_LEN],
    pub amount: [u8; 8],
    pub receiver: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CreatePool {
    pub name: [u8; MAX_NAME_LEN],
    pub pool_asset: [u8; MAX_ASSET_LEN],
    pub asset_amount: [u8; 8],
    pub stake_asset: [u8; MAX_ASSET_LEN],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct JoinPool {
    pub pool_id: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PayCycle {
    pub pool_id: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ServicePool {
    pub pool_id: [u8; 8],
}
