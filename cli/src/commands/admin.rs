use anyhow::Result;

use esusu_client as esusu;
use esusu_client::Session;

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_admin_commands(cli: Cli, session: &Session) -> Result<()> {
    match cli.command {
        Commands::Initialize {} => {
            match esusu::initialize(session).await {
                Ok(signature) => {
                    log::print_message(&format!("Registry initialized: {}", signature));
                }
                Err(e) => log::print_error(&format!("Initialize failed: {}", e)),
            }
        }
        _ => {}
    }
    Ok(())
}
