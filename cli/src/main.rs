mod cli;
mod commands;
mod keypair;
mod log;

use anyhow::Result;
use clap::Parser;

use esusu_client::{connect, DepositMode, GatewayConfig};

use cli::{Cli, Commands};
use commands::{admin, misc, pool, vault};
use keypair::get_keypair_path;

#[tokio::main]
async fn main() -> Result<()> {
    log::print_title("◉ ESUSU");

    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let rpc_url = cli.cluster.rpc_url();
    let keypair_path = get_keypair_path(cli.keypair_path.clone());

    // Wallet creation must work without a connection.
    if let Commands::Keygen {} = cli.command {
        return misc::handle_keygen(&keypair_path);
    }

    let deposit_mode = match cli.command {
        Commands::Deposit { settle: true, .. } => DepositMode::Settle,
        _ => DepositMode::Simulate,
    };

    let gateway = connect(GatewayConfig {
        rpc_url: rpc_url.clone(),
        keypair_path: keypair_path.clone(),
        deposit_mode,
    });

    if !gateway.is_connected() {
        log::print_error(&format!("No wallet detected at {}.", keypair_path.display()));
        log::print_message("Run `esusu keygen` to create one, then try again.");
        return Ok(());
    }

    // Echo the signing identity when the command is mutating state
    match cli.command {
        Commands::Initialize { .. } |
        Commands::Connect { .. } |
        Commands::Deposit { .. } |
        Commands::Withdraw { .. } |
        Commands::CreatePool { .. } |
        Commands::JoinPool { .. } |
        Commands::PayCycle { .. } |
        Commands::ServicePool { .. }
        => {
            log::print_message(&format!(
                "Using account: {} from {}",
                gateway.current_account()?,
                keypair_path.display()
            ));
        }
        _ => {}
    }

    log::print_message(&format!("Connected to: {}", rpc_url));

    let session = gateway.session()?;

    match cli.command {
        // Vault Commands

        Commands::Dashboard { .. } |
        Commands::Connect { .. } |
        Commands::Deposit { .. } |
        Commands::Withdraw { .. } => {
            vault::handle_vault_commands(cli, session).await?;
        }

        // Pool Commands

        Commands::CreatePool { .. } |
        Commands::JoinPool { .. } |
        Commands::Pending { .. } |
        Commands::Running { .. } |
        Commands::Concluded { .. } |
        Commands::GetPool { .. } |
        Commands::PayCycle { .. } |
        Commands::ServicePool { .. } => {
            pool::handle_pool_commands(cli, session).await?;
        }

        // Admin Commands

        Commands::Initialize { .. } => {
            admin::handle_admin_commands(cli, session).await?;
        }

        // Miscellaneous Commands

        _ => {
            misc::handle_misc_commands(cli, session).await?;
        }
    }

    Ok(())
}
