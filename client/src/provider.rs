use anyhow::anyhow;
use async_trait::async_trait;
use log::debug;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcProgramAccountsConfig,
    rpc_request::{RpcError, RpcResponseErrorData},
    rpc_response::RpcSimulateTransactionResult,
};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

use esusu_api::error::EsusuError;

use crate::error::{GatewayError, Result};

/// What a read-only simulation reported back.
#[derive(Debug, Clone, Default)]
pub struct SimulationOutcome {
    pub err: Option<String>,
    pub logs: Vec<String>,
}

impl SimulationOutcome {
    pub fn succeeded(&self) -> bool {
        self.err.is_none()
    }
}

/// The externally supplied transport: account discovery and reads,
/// transaction submission, and read-only call execution. Everything the
/// gateway does goes through one of these five entry points.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>>;

    async fn get_program_accounts(
        &self,
        config: RpcProgramAccountsConfig,
    ) -> Result<Vec<(Pubkey, Account)>>;

    async fn latest_blockhash(&self) -> Result<Hash>;

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature>;

    async fn simulate_transaction(&self, tx: &Transaction) -> Result<SimulationOutcome>;
}

/// Provider over a JSON-RPC node.
pub struct RpcProvider {
    rpc: RpcClient,
}

impl RpcProvider {
    pub fn new(url: impl ToString) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed()),
        }
    }
}

#[async_trait]
impl Provider for RpcProvider {
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await
            .map_err(|e| anyhow!("failed to fetch account {}: {}", address, e))?;
        Ok(response.value)
    }

    async fn get_program_accounts(
        &self,
        config: RpcProgramAccountsConfig,
    ) -> Result<Vec<(Pubkey, Account)>> {
        self.rpc
            .get_program_accounts_with_config(&esusu_api::ID, config)
            .await
            .map_err(|e| GatewayError::Provider(anyhow!("failed to scan program accounts: {}", e)))
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| GatewayError::Provider(anyhow!("failed to fetch blockhash: {}", e)))
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        self.rpc
            .send_and_confirm_transaction(tx)
            .await
            .map_err(decode_send_error)
    }

    async fn simulate_transaction(&self, tx: &Transaction) -> Result<SimulationOutcome> {
        let result = self
            .rpc
            .simulate_transaction(tx)
            .await
            .map_err(|e| anyhow!("simulation request failed: {}", e))?
            .value;

        Ok(SimulationOutcome {
            err: result.err.map(|e| e.to_string()),
            logs: result.logs.unwrap_or_default(),
        })
    }
}

/// Turns a failed submission into a structured error. Preflight logs go to
/// the debug log, where the original client's console output went.
fn decode_send_error(err: ClientError) -> GatewayError {
    if let ClientErrorKind::RpcError(RpcError::RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                logs: Some(logs),
                ..
            }),
        ..
    }) = err.kind()
    {
        for line in logs {
            debug!("preflight: {}", line);
        }
    }

    if let Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) =
        err.get_transaction_error()
    {
        return GatewayError::Contract(
            EsusuError::try_from(code).unwrap_or(EsusuError::UnknownError),
        );
    }

    GatewayError::Provider(anyhow!("transaction failed: {}", err))
}
