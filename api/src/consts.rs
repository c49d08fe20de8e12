use const_crypto::ed25519;
use solana_program::pubkey::Pubkey;

pub const REGISTRY: &[u8]                  = b"registry";
pub const POOL: &[u8]                      = b"pool";
pub const VAULT: &[u8]                     = b"vault";

pub const MAX_NAME_LEN: usize              = 32;  // Bytes
pub const MAX_ASSET_LEN: usize             = 8;   // Bytes, e.g. "SOL", "USDT"

// Hard cap on the member array; a pool's own max_members may be lower.
pub const MAX_POOL_MEMBERS: usize          = 16;

pub const ASSET_DECIMALS: u8               = 9;
pub const ONE_UNIT: u64                    = 10u64.pow(ASSET_DECIMALS as u32);

// The asset whose deposits carry value on the wire.
pub const NATIVE_ASSET: &str               = "SOL";

// Assets the program keeps a vault for; ConnectVaults creates one of each.
pub const SUPPORTED_ASSETS: &[&str]        = &["SOL", "USDT", "USDC"];

// -- Const Addresses --
// (There isn't a better way to do this yet; maybe a build.rs + include)

pub const PROGRAM_ID: [u8; 32] =
    unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

pub const REGISTRY_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[REGISTRY], &PROGRAM_ID).0);

pub const REGISTRY_BUMP: u8 =
    ed25519::derive_program_address(&[REGISTRY], &PROGRAM_ID).1;
