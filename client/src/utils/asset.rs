use esusu_api::prelude::*;

use crate::error::{GatewayError, Result};

/// Upper-cases an asset symbol and packs it into its fixed on-chain
/// form. Case folding is the only normalization applied to user input;
/// whether the symbol names a real asset is the contract's call.
pub fn normalize_asset(symbol: &str) -> Result<[u8; MAX_ASSET_LEN]> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() || symbol.len() > MAX_ASSET_LEN {
        return Err(GatewayError::InvalidAsset(symbol));
    }
    Ok(to_asset(&symbol))
}

/// True when `asset` is the chain's native asset (already normalized).
pub fn is_native(asset: &[u8; MAX_ASSET_LEN]) -> bool {
    from_asset(asset) == NATIVE_ASSET
}

/// Converts a user-facing amount to contract base units.
pub fn to_base_units(ui_amount: f64) -> u64 {
    spl_token::ui_amount_to_amount(ui_amount, ASSET_DECIMALS)
}

/// Converts contract base units back to a user-facing amount.
pub fn to_ui_amount(amount: u64) -> f64 {
    spl_token::amount_to_ui_amount(amount, ASSET_DECIMALS)
}
