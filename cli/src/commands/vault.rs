use anyhow::Result;
use dialoguer::Confirm;
use solana_sdk::pubkey::Pubkey;

use esusu_api::NATIVE_ASSET;
use esusu_client as esusu;
use esusu_client::{DepositReceipt, Session};

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_vault_commands(cli: Cli, session: &Session) -> Result<()> {
    match cli.command {
        Commands::Dashboard {} => {
            let account = session.account();
            let summary = esusu::get_dashboard(session, &account).await?;

            log::print_section_header("Dashboard");
            if summary.is_empty() {
                log::print_message("No vaults yet. Run `esusu connect` first.");
            }
            for row in summary {
                log::print_message(&format!(
                    "{}: available {} | staked {} | contributed {}",
                    row.asset,
                    format_amount(row.available, &row.asset),
                    format_amount(row.staked, &row.asset),
                    format_amount(row.contributed, &row.asset),
                ));
            }
            log::print_divider();
        }

        Commands::Connect {} => {
            match esusu::connect_vaults(session).await {
                Ok(signature) => {
                    log::print_message(&format!("Vaults connected: {}", signature));
                }
                Err(e) => log::print_error(&format!("Connect failed: {}", e)),
            }
        }

        Commands::Deposit { asset, amount, settle } => {
            if settle && asset.to_uppercase() != NATIVE_ASSET {
                let proceed = Confirm::new()
                    .with_prompt(format!(
                        "Settle {} {} on chain instead of simulating?",
                        amount,
                        asset.to_uppercase()
                    ))
                    .default(false)
                    .interact()?;
                if !proceed {
                    log::print_message("Deposit cancelled.");
                    return Ok(());
                }
            }

            match esusu::deposit_asset(session, &asset, amount).await {
                Ok(DepositReceipt::Settled(signature)) => {
                    log::print_message(&format!("Deposit settled: {}", signature));
                }
                Ok(DepositReceipt::Simulated(outcome)) => {
                    log::print_message("Non-native deposit simulated; no state changed.");
                    match outcome.err {
                        Some(err) => log::print_error(&format!("Simulation failed: {}", err)),
                        None => log::print_message("Simulation succeeded; re-run with --settle to submit."),
                    }
                }
                Err(e) => log::print_error(&format!("Deposit failed: {}", e)),
            }
        }

        Commands::Withdraw { asset, amount, receiver } => {
            let receiver = match receiver {
                Some(address) => Some(address.parse::<Pubkey>()?),
                None => None,
            };

            match esusu::withdraw_asset(session, &asset, amount, receiver).await {
                Ok(signature) => {
                    log::print_message(&format!("Withdraw submitted: {}", signature));
                }
                Err(e) => log::print_error(&format!("Withdraw failed: {}", e)),
            }
        }

        _ => {}
    }
    Ok(())
}

fn format_amount(amount: u64, asset: &str) -> String {
    format!("{} {}", esusu::to_ui_amount(amount), asset)
}
