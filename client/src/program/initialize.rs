use solana_sdk::signature::Signature;

use esusu_api::prelude::*;

use crate::error::Result;
use crate::session::Session;
use crate::utils::submit;

/// One-time program bootstrap: creates the registry singleton with the
/// signer as its authority.
pub async fn initialize(session: &Session) -> Result<Signature> {
    let initialize_ix = build_initialize_ix(session.account());
    submit(session, &[initialize_ix]).await
}
