use solana_sdk::{pubkey::Pubkey, signature::Signature};

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::{normalize_asset, submit, to_base_units};

/// Withdraws from the caller's vault to `receiver`, or back to the
/// caller when no receiver is named.
pub async fn withdraw_asset(
    session: &Session,
    asset: &str,
    ui_amount: f64,
    receiver: Option<Pubkey>,
) -> Result<Signature> {
    let asset = normalize_asset(asset)?;
    let amount = to_base_units(ui_amount);
    let receiver = receiver.unwrap_or_else(|| session.account());

    let withdraw_ix = build_withdraw_asset_ix(session.account(), &asset, amount, receiver);
    submit(session, &[withdraw_ix]).await
}
