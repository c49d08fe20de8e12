use solana_sdk::{instruction::Instruction, signature::Signature, transaction::Transaction};

use crate::error::Result;
use crate::provider::SimulationOutcome;
use crate::session::Session;

/// Signs and submits exactly one transaction carrying `instructions`.
/// No retry: a rejection comes straight back to the caller.
pub async fn submit(session: &Session, instructions: &[Instruction]) -> Result<Signature> {
    let recent_blockhash = session.provider().latest_blockhash().await?;

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&session.account()),
        &[session.payer()],
        recent_blockhash,
    );

    session.provider().send_transaction(&tx).await
}

/// Signs and simulates the same transaction [`submit`] would send,
/// without submitting it.
pub async fn preflight(session: &Session, instructions: &[Instruction]) -> Result<SimulationOutcome> {
    let recent_blockhash = session.provider().latest_blockhash().await?;

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&session.account()),
        &[session.payer()],
        recent_blockhash,
    );

    session.provider().simulate_transaction(&tx).await
}
