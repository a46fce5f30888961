//! # minter-config
//!
//! Resolves the addresses, secrets and network settings used by the `minter` commands.
//!
//! Values are layered, lowest precedence first:
//! 1. built-in defaults, see the `DEFAULT_*` constants
//! 2. `minter.toml`
//! 3. `MINTER_`-prefixed environment variables
//! 4. the plain variables listed in [`ENV_KEYS`], e.g. `DEPLOYER_PRIVATE_KEY`

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, B256, address, b256};
use alloy_signer_local::PrivateKeySigner;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use url::Url;

mod calls;
pub use calls::CallsFile;

mod de;

mod error;
pub use error::ConfigError;

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "minter.toml";

pub const DEFAULT_ADMIN_ACCOUNT: Address = address!("0xdEADBEeF00000000000000000000000000000000");
pub const DEFAULT_TOKEN_ADDRESS: Address = address!("0x99E12239CBf8112fBB3f7Fd473d0558031abcbb5");
pub const DEFAULT_TARGET_ADDRESS: Address = address!("0x99E12239CBf8112fBB3f7Fd473d0558031abcbb5");
pub const DEFAULT_MERKLE_ROOT: B256 =
    b256!("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef");
pub const DEFAULT_IPFS_HASH: B256 =
    b256!("0xabcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890");
pub const DEFAULT_MINT_AMOUNT: &str = "1000";
pub const DEFAULT_RPC_URL: &str = "http://localhost:3050";
pub const DEFAULT_CONTRACT_NAME: &str = "ZkMinterModTriggerV1";

/// Unprefixed environment variables read into [`MinterConfig`].
pub const ENV_KEYS: [&str; 10] = [
    "DEPLOYER_PRIVATE_KEY",
    "ADMIN_ACCOUNT",
    "TOKEN_ADDRESS",
    "TARGET_ADDRESS",
    "MERKLE_ROOT",
    "IPFS_HASH",
    "MINT_AMOUNT",
    "ETH_RPC_URL",
    "TRANSACTION_TIMEOUT",
    "CONFIRMATIONS",
];

/// Signature of the call the trigger performs on its target by default.
pub const ADD_MERKLE_TREE_SIG: &str =
    "addMerkleTree(bytes32 merkleRoot, bytes32 ipfsHash, address token, uint256 amount)";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinterConfig {
    /// Never serialized, never printed.
    #[serde(skip_serializing, deserialize_with = "de::opt_string")]
    pub deployer_private_key: Option<String>,
    /// Account granted the admin role of the trigger.
    pub admin_account: Address,
    /// Token minted by the trigger.
    pub token_address: Address,
    /// Contract called after minting.
    pub target_address: Address,
    pub merkle_root: B256,
    pub ipfs_hash: B256,
    /// Accepts plain integers and unit suffixes such as `1.5 ether`.
    #[serde(deserialize_with = "de::string")]
    pub mint_amount: String,
    pub eth_rpc_url: String,
    /// Seconds to wait for a transaction receipt.
    pub transaction_timeout: u64,
    pub confirmations: u64,
    /// Root of the hardhat-zksync artifacts directory.
    pub artifacts: PathBuf,
    pub contract_name: String,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            deployer_private_key: None,
            admin_account: DEFAULT_ADMIN_ACCOUNT,
            token_address: DEFAULT_TOKEN_ADDRESS,
            target_address: DEFAULT_TARGET_ADDRESS,
            merkle_root: DEFAULT_MERKLE_ROOT,
            ipfs_hash: DEFAULT_IPFS_HASH,
            mint_amount: DEFAULT_MINT_AMOUNT.to_string(),
            eth_rpc_url: DEFAULT_RPC_URL.to_string(),
            transaction_timeout: 120,
            confirmations: 1,
            artifacts: PathBuf::from("artifacts-zk"),
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
        }
    }
}

impl fmt::Debug for MinterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinterConfig")
            .field("deployer_private_key", &self.deployer_private_key.as_ref().map(|_| "<redacted>"))
            .field("admin_account", &self.admin_account)
            .field("token_address", &self.token_address)
            .field("target_address", &self.target_address)
            .field("merkle_root", &self.merkle_root)
            .field("ipfs_hash", &self.ipfs_hash)
            .field("mint_amount", &self.mint_amount)
            .field("eth_rpc_url", &self.eth_rpc_url)
            .field("transaction_timeout", &self.transaction_timeout)
            .field("confirmations", &self.confirmations)
            .field("artifacts", &self.artifacts)
            .field("contract_name", &self.contract_name)
            .finish()
    }
}

impl MinterConfig {
    /// Loads the configuration from `minter.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), reading the given file instead of `minter.toml`.
    pub fn load_with(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(config_path).extract()?;
        trace!(target: "config", ?config, "loaded config");
        Ok(config)
    }

    /// Returns the provider stack the config is extracted from.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let file = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("MINTER_"))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    /// Returns the deployer key, failing if it is unset or blank.
    pub fn private_key(&self) -> Result<&str, ConfigError> {
        match self.deployer_private_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingPrivateKey),
        }
    }

    /// Builds the local signer from the deployer key.
    pub fn signer(&self) -> Result<PrivateKeySigner, ConfigError> {
        let key = self.private_key()?;
        PrivateKeySigner::from_str(key).map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))
    }

    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.eth_rpc_url).map_err(|source| ConfigError::InvalidRpcUrl {
            url: self.eth_rpc_url.clone(),
            source,
        })
    }

    /// Path of the artifact of [`contract_name`](Self::contract_name), following the
    /// hardhat-zksync layout: `<artifacts>/contracts/<Name>.sol/<Name>.json`.
    pub fn artifact_path(&self) -> PathBuf {
        let name = &self.contract_name;
        self.artifacts.join("contracts").join(format!("{name}.sol")).join(format!("{name}.json"))
    }

    /// Positional arguments for [`ADD_MERKLE_TREE_SIG`].
    pub fn merkle_tree_args(&self) -> Vec<String> {
        vec![
            self.merkle_root.to_string(),
            self.ipfs_hash.to_string(),
            self.token_address.to_string(),
            self.mint_amount.clone(),
        ]
    }
}

/// Loads `.env` from the current directory or its parents, if there is one.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(target: "config", path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(target: "config", %err, "failed to load .env"),
    }
}
