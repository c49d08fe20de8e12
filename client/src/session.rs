use log::debug;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{GatewayError, Result};
use crate::provider::{Provider, RpcProvider};

/// How the gateway settles deposits of non-native assets.
///
/// The legacy client only ever simulated them, so `Simulate` stays the
/// default; `Settle` submits a real state-changing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepositMode {
    #[default]
    Simulate,
    Settle,
}

/// Connection settings for [`connect`].
pub struct GatewayConfig {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub deposit_mode: DepositMode,
}

/// A live provider binding: transport, account identity, deposit policy.
/// Dropping it severs all three at once.
pub struct Session {
    provider: Arc<dyn Provider>,
    payer: Keypair,
    deposit_mode: DepositMode,
}

impl Session {
    pub fn new(provider: Arc<dyn Provider>, payer: Keypair, deposit_mode: DepositMode) -> Self {
        Self {
            provider,
            payer,
            deposit_mode,
        }
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    /// The one account this session signs as.
    pub fn account(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn deposit_mode(&self) -> DepositMode {
        self.deposit_mode
    }
}

/// Connection state for the contract binding. The `session` field holds
/// the state; `is_connected` is the accessor that reads it.
#[derive(Default)]
pub struct Gateway {
    session: Option<Session>,
}

impl Gateway {
    pub fn disconnected() -> Self {
        Self { session: None }
    }

    pub fn attach(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(GatewayError::Disconnected)
    }

    /// The first (and only) account the provider exposes.
    pub fn current_account(&self) -> Result<Pubkey> {
        match &self.session {
            Some(session) => Ok(session.account()),
            None => Err(GatewayError::NoAccount),
        }
    }

    /// Tears down the provider binding, account identity, and deposit
    /// policy together. Reconnecting requires another [`connect`].
    pub fn disconnect(&mut self) {
        self.session = None;
    }
}

/// Detects a usable wallet and binds the provider. Absence of a readable
/// keypair leaves the gateway disconnected without an error; calling
/// `connect` again is the only recovery path.
pub fn connect(config: GatewayConfig) -> Gateway {
    let payer = match read_keypair_file(&config.keypair_path) {
        Ok(payer) => payer,
        Err(e) => {
            debug!(
                "no wallet detected at {}: {}",
                config.keypair_path.display(),
                e
            );
            return Gateway::disconnected();
        }
    };

    let provider = Arc::new(RpcProvider::new(&config.rpc_url));
    Gateway::attach(Session::new(provider, payer, config.deposit_mode))
}

fn read_keypair_file(path: &Path) -> anyhow::Result<Keypair> {
    let data = fs::read_to_string(path)?;
    let bytes: Vec<u8> = serde_json::from_str(&data)?;
    Keypair::from_bytes(&bytes).map_err(|e| anyhow::anyhow!("invalid keypair file: {}", e))
}
