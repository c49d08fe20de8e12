use solana_sdk::signature::Signature;

use esusu_api::prelude::*;

use crate::error::Result;
use crate::provider::SimulationOutcome;
use crate::session::{DepositMode, Session};
use crate::utils::{is_native, normalize_asset, preflight, submit, to_base_units};

/// What a deposit request actually did.
#[derive(Debug)]
pub enum DepositReceipt {
    /// A state-changing transaction was submitted and confirmed.
    Settled(Signature),
    /// The call was only simulated; no state changed.
    Simulated(SimulationOutcome),
}

/// Moves `ui_amount` of `asset` into the caller's vault.
///
/// Native deposits carry value and always settle on chain. Non-native
/// deposits follow the session's [`DepositMode`]; the compatibility
/// default is a read-only simulation.
pub async fn deposit_asset(
    session: &Session,
    asset: &str,
    ui_amount: f64,
) -> Result<DepositReceipt> {
    let asset = normalize_asset(asset)?;
    let amount = to_base_units(ui_amount);

    let deposit_ix = build_deposit_asset_ix(session.account(), &asset, amount);

    if is_native(&asset) || session.deposit_mode() == DepositMode::Settle {
        let signature = submit(session, &[deposit_ix]).await?;
        return Ok(DepositReceipt::Settled(signature));
    }

    let outcome = preflight(session, &[deposit_ix]).await?;
    Ok(DepositReceipt::Simulated(outcome))
}
