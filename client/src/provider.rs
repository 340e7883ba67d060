//! Binds a provider, an RPC connection plus the wallet that pays for and signs transactions, from
//! CLI flags or the `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET` environment variables.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use dirs_next::home_dir;
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    bs58,
    signature::Keypair,
    signer::Signer,
};

use crate::transactions::{
    CustomRpcClient,
    SendTransactionConfig,
    DEFAULT_RPC_URL,
};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub url: String,
    pub wallet: PathBuf,
    pub commitment: Commitment,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.into(),
            wallet: expand_tilde(DEFAULT_WALLET_PATH),
            commitment: Commitment::default(),
        }
    }
}

impl ProviderConfig {
    /// Reads the config from the process environment, falling back to the local validator and the
    /// default Solana CLI wallet.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: var(PROVIDER_URL_ENV).unwrap_or(defaults.url),
            wallet: var(WALLET_ENV)
                .map(|path| expand_tilde(&path))
                .unwrap_or(defaults.wallet),
            commitment: defaults.commitment,
        }
    }
}

/// The connection context every remote call goes through.
pub struct Provider {
    pub rpc: CustomRpcClient,
    pub payer: Keypair,
}

impl Provider {
    /// Loads the wallet and creates the RPC client. No request is made until the provider is used,
    /// so an unreachable cluster surfaces on the first remote call.
    pub fn new(config: &ProviderConfig, send_config: SendTransactionConfig) -> anyhow::Result<Self> {
        let payer = read_keypair_file(&config.wallet)?;
        let rpc = CustomRpcClient::new_from_url(&config.url, config.commitment.into(), send_config);

        Ok(Self { rpc, payer })
    }

    /// Binds a provider from `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`.
    pub fn env() -> anyhow::Result<Self> {
        Self::new(&ProviderConfig::from_env(), SendTransactionConfig::default())
    }

    pub fn payer_address(&self) -> Address {
        self.payer.pubkey()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if path == "~" {
        return home();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home().join(rest);
    }
    PathBuf::from(path)
}

/// Parses a keypair from a JSON byte array, like the files written by `solana-keygen`, or from a
/// base58 string.
pub fn parse_keypair(encoded: &str) -> anyhow::Result<Keypair> {
    let encoded = encoded.trim();
    let byte_vec: Vec<u8> = if encoded.starts_with('[') {
        serde_json::from_str(encoded).context("Invalid JSON keypair")?
    } else {
        bs58::decode(encoded)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}

pub fn read_keypair_file(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read the wallet at {}", path.display()))?;
    parse_keypair(&contents).with_context(|| format!("Couldn't load the wallet at {}", path.display()))
}
