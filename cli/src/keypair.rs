use anyhow::{anyhow, Result};
use log::debug;
use solana_sdk::signature::Keypair;
use std::fs;
use std::path::{Path, PathBuf};

pub fn create_keypair(path: &Path) -> Result<Keypair> {
    let keypair = Keypair::new();
    debug!("generating new wallet keypair at {}", path.display());
    let bytes = keypair.to_bytes().to_vec();
    let json = serde_json::to_string(&bytes)
        .map_err(|e| anyhow!("Failed to serialize keypair to JSON: {}", e))?;
    fs::write(path, json)
        .map_err(|e| anyhow!("Failed to write keypair file {}: {}", path.display(), e))?;
    Ok(keypair)
}

/// Resolves the keypair path, falling back to the default wallet location.
pub fn get_keypair_path(keypair_path: Option<PathBuf>) -> PathBuf {
    keypair_path.unwrap_or_else(|| {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".config/solana/id.json")
    })
}
