use anyhow::Result;
use std::path::Path;

use esusu_client as esusu;
use esusu_client::Session;
use solana_sdk::signature::Signer;

use crate::cli::{Cli, Commands};
use crate::keypair;
use crate::log;

pub async fn handle_misc_commands(cli: Cli, session: &Session) -> Result<()> {
    match cli.command {
        Commands::GetRegistry {} => {
            let (registry, address) = esusu::get_registry_account(session).await?;
            let account = session.account();
            let connected = esusu::is_account_connected(session, &account).await?;

            log::print_section_header("Registry");
            log::print_message(&format!("Address: {}", address));
            log::print_message(&format!("Owner: {}", registry.authority));
            log::print_message(&format!("Pools created: {}", registry.pools_created));
            log::print_message(&format!(
                "Your vaults: {}",
                if connected { "connected" } else { "not connected" }
            ));
            log::print_divider();
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_keygen(path: &Path) -> Result<()> {
    if path.exists() {
        log::print_error(&format!("A wallet already exists at {}.", path.display()));
        return Ok(());
    }

    let keypair = keypair::create_keypair(path)?;
    log::print_message(&format!("Wallet created at {}", path.display()));
    log::print_message(&format!("Account: {}", keypair.pubkey()));
    Ok(())
}
