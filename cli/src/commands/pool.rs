use anyhow::Result;

use esusu_api::prelude::*;
use esusu_client as esusu;
use esusu_client::Session;

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_pool_commands(cli: Cli, session: &Session) -> Result<()> {
    match cli.command {
        Commands::CreatePool { asset, amount, stake_asset, name } => {
            let name = name.unwrap_or_else(|| {
                chrono::Local::now().format("circle-%Y%m%d-%H%M%S").to_string()
            });

            match esusu::create_pool(session, &name, &asset, amount, &stake_asset).await {
                Ok((pool_id, signature)) => {
                    log::print_message(&format!("Pool {} created: {}", pool_id, name));
                    log::print_message(&format!("Signature: {}", signature));
                }
                Err(e) => log::print_error(&format!("Create failed: {}", e)),
            }
        }

        Commands::JoinPool { id } => {
            match esusu::join_pool(session, id).await {
                Ok(signature) => {
                    log::print_message(&format!("Joined pool {}: {}", id, signature));
                }
                Err(e) => log::print_error(&format!("Join failed: {}", e)),
            }
        }

        Commands::Pending {} => {
            let pool_ids = esusu::get_pending_pools(session).await?;
            log::print_count(&format!("{} pending pools", pool_ids.len()));
            render_pools(session, &pool_ids).await?;
        }

        Commands::Running { mine } => {
            let pool_ids = if mine {
                let account = session.account();
                esusu::get_running_pools_for_account(session, &account).await?
            } else {
                esusu::get_running_pools(session).await?
            };
            log::print_count(&format!("{} running pools", pool_ids.len()));
            render_pools(session, &pool_ids).await?;
        }

        Commands::Concluded {} => {
            let pool_ids = esusu::get_concluded_pools(session).await?;
            log::print_count(&format!("{} concluded pools", pool_ids.len()));
            render_pools(session, &pool_ids).await?;
        }

        Commands::GetPool { id } => {
            let (pool, address) = esusu::get_pool(session, id).await?;
            print_pool_card(&pool);
            log::print_message(&format!("Address: {}", address));
            log::print_divider();
        }

        Commands::PayCycle { id } => {
            match esusu::pay_cycle(session, id).await {
                Ok(signature) => {
                    log::print_message(&format!("Cycle payment submitted: {}", signature));
                }
                Err(e) => log::print_error(&format!("Cycle payment failed: {}", e)),
            }
        }

        Commands::ServicePool { id } => {
            match esusu::service_pool(session, id).await {
                Ok(signature) => {
                    log::print_message(&format!("Pool serviced: {}", signature));
                }
                Err(e) => log::print_error(&format!("Service failed: {}", e)),
            }
        }

        _ => {}
    }
    Ok(())
}

/// Fetches and prints one card per id, in the order the ids arrived.
async fn render_pools(session: &Session, pool_ids: &[u64]) -> Result<()> {
    for id in pool_ids {
        let (pool, _address) = esusu::get_pool(session, *id).await?;
        print_pool_card(&pool);
    }
    log::print_divider();
    Ok(())
}

fn print_pool_card(pool: &Pool) {
    log::print_section_header(&from_name(&pool.name));
    log::print_message(&format!("Id: {}", pool.id));
    log::print_message(&format!("Status: {}", pool.pool_status()));
    log::print_message(&format!(
        "Contributing: {} {}",
        esusu::to_ui_amount(pool.pool_asset_amount),
        from_asset(&pool.pool_asset)
    ));
    log::print_message(&format!(
        "Staking: {} {}",
        esusu::to_ui_amount(pool.stake_asset_amount),
        from_asset(&pool.stake_asset)
    ));
    log::print_message(&format!("Cycle: {}", pool.current_cycle));
    log::print_message(&format!(
        "Members: {}/{}",
        pool.current_members, pool.max_members
    ));
}
