use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "esusu",
    about = "Pooled savings on chain — create a circle, stake in, rotate the payout.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'k', long = "keypair", global = true)]
    pub keypair_path: Option<PathBuf>,

    #[arg(
        short = 'u',
        long = "cluster",
        default_value = "l",
        global = true,
        help = "Cluster to use: l (localnet), m (mainnet), d (devnet), t (testnet),\n or a custom RPC URL"
    )]
    pub cluster: Cluster,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {

    // Vault Commands

    Dashboard {},

    Connect {},

    Deposit {
        #[arg(help = "Asset symbol, e.g. SOL or USDT")]
        asset: String,

        #[arg(help = "Amount in whole units")]
        amount: f64,

        #[arg(long = "settle", help = "Submit non-native deposits instead of simulating them")]
        settle: bool,
    },

    Withdraw {
        #[arg(help = "Asset symbol, e.g. SOL or USDT")]
        asset: String,

        #[arg(help = "Amount in whole units")]
        amount: f64,

        #[arg(help = "Receiving account, defaults to your own")]
        receiver: Option<String>,
    },

    // Pool Commands

    CreatePool {
        #[arg(help = "Asset the pool pays out")]
        asset: String,

        #[arg(help = "Contribution amount per cycle, in whole units")]
        amount: f64,

        #[arg(help = "Asset members stake to join")]
        stake_asset: String,

        #[arg(short = 'n', long = "name", help = "Pool name (defaults to a timestamp)")]
        name: Option<String>,
    },

    JoinPool {
        #[arg(help = "Pool id to join")]
        id: u64,
    },

    Pending {},

    Running {
        #[arg(short = 'm', long = "mine", help = "Only pools you are a member of")]
        mine: bool,
    },

    Concluded {},

    GetPool {
        #[arg(help = "Pool id")]
        id: u64,
    },

    PayCycle {
        #[arg(help = "Pool id")]
        id: u64,
    },

    ServicePool {
        #[arg(help = "Pool id")]
        id: u64,
    },

    // Misc Commands

    GetRegistry {},

    Keygen {},

    // Admin Commands

    #[command(hide = true)]
    Initialize {},
}

#[derive(Debug, Clone)]
pub enum Cluster {
    Localnet,
    Mainnet,
    Devnet,
    Testnet,
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899".to_string(),
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Localnet),
            "m" => Ok(Cluster::Mainnet),
            "d" => Ok(Cluster::Devnet),
            "t" => Ok(Cluster::Testnet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Cluster::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid cluster value: '{}'. Use l, m, d, t, or a valid RPC URL (http:// or https://)",
                s
            )),
        }
    }
}
