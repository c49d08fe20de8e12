use steel::*;

#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
pub enum EsusuError {
    #[error("Unknown error")]
    UnknownError = 0,

    #[error("The account is not connected to its vaults")]
    NotConnected = 10,
    #[error("The asset is not supported")]
    UnknownAsset = 11,
    #[error("The vault balance is insufficient")]
    InsufficientBalance = 12,
    #[error("The requested amount exceeds the available balance")]
    WithdrawTooLarge = 13,

    #[error("The pool is not accepting members")]
    PoolNotPending = 20,
    #[error("The pool is already at its member limit")]
    PoolFull = 21,
    #[error("The account is already a member of this pool")]
    AlreadyMember = 22,
    #[error("The account is not a member of this pool")]
    NotMember = 23,
    #[error("The pool is not running")]
    PoolNotRunning = 24,

    #[error("The current cycle has already been paid")]
    CycleAlreadyPaid = 30,
    #[error("The current cycle is not due for servicing")]
    CycleNotDue = 31,
}

error!(EsusuError);
