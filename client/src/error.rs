use esusu_api::error::EsusuError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// What can go wrong between a caller's intent and the contract's answer.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway is not connected to a provider")]
    Disconnected,

    #[error("the provider exposes no authorized account")]
    NoAccount,

    #[error("account {0} does not exist on chain")]
    AccountNotFound(Pubkey),

    #[error("failed to decode {0} account data")]
    MalformedAccount(&'static str),

    #[error("asset symbol '{0}' is not representable")]
    InvalidAsset(String),

    #[error("contract rejected the call: {0}")]
    Contract(EsusuError),

    #[error("provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
