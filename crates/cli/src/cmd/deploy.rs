use crate::opts::GlobalArgs;
use alloy_network::ReceiptResponse;
use clap::{Parser, ValueHint};
use eyre::{Context, Result};
use minter_common::shell;
use minter_config::{ADD_MERKLE_TREE_SIG, CallsFile, MinterConfig};
use minter_deploy::{
    BATCH_CALL_CONSTRUCTOR, SINGLE_CALL_CONSTRUCTOR, TriggerArgs, TriggerCall, ZkArtifact,
    ZkDeploymentFactory, get_signing_provider_zksync, parse_constructor,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use url::Url;

/// CLI arguments for `minter deploy`.
#[derive(Clone, Debug, Parser)]
pub struct DeployArgs {
    /// Signature of the call the trigger makes on the target after minting.
    ///
    /// Defaults to `addMerkleTree(bytes32,bytes32,address,uint256)` with arguments taken from the
    /// configuration.
    #[arg(conflicts_with = "calls")]
    pub sig: Option<String>,

    /// The arguments of the call.
    #[arg(allow_negative_numbers = true, requires = "sig")]
    pub args: Vec<String>,

    /// TOML file listing the calls the trigger makes, for triggers taking several calls.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub calls: Option<PathBuf>,

    /// Path of the compiled contract artifact.
    ///
    /// Defaults to `<artifacts>/contracts/<Name>.sol/<Name>.json`.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub artifact: Option<PathBuf>,

    /// The RPC endpoint.
    ///
    /// Defaults to `eth_rpc_url` from the configuration, or `ETH_RPC_URL`.
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Only print the encoded constructor arguments.
    #[arg(long)]
    pub dry_run: bool,
}

impl DeployArgs {
    pub async fn run(self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;

        // The key is resolved before any file or network access.
        let signer = if self.dry_run { None } else { Some(config.signer()?) };

        let trigger = TriggerArgs::new(
            config.admin_account,
            config.token_address,
            self.trigger_calls(&config)?,
        );

        let artifact_path = self.artifact.clone().unwrap_or_else(|| config.artifact_path());
        let artifact = if self.dry_run && !artifact_path.exists() {
            debug!(path = %artifact_path.display(), "artifact not found, using built-in constructor");
            None
        } else {
            Some(ZkArtifact::load(&artifact_path)?)
        };

        let constructor = match artifact.as_ref() {
            Some(artifact) => artifact
                .abi
                .constructor
                .clone()
                .ok_or_else(|| eyre::eyre!("{} has no constructor", artifact.contract_name))?,
            None if trigger.calls.len() > 1 => parse_constructor(BATCH_CALL_CONSTRUCTOR)?,
            None => parse_constructor(SINGLE_CALL_CONSTRUCTOR)?,
        };
        let name = artifact
            .as_ref()
            .map_or_else(|| config.contract_name.clone(), |a| a.contract_name.clone());

        let constructor_args =
            trigger.encode_deploy(&constructor).wrap_err("failed to encode constructor args")?;
        if !shell::is_json() {
            sh_println!("Deploying {name}...")?;
            sh_println!("constructor args: {constructor_args}")?;
        }

        let (Some(signer), Some(artifact)) = (signer, artifact) else {
            if shell::is_json() {
                let output = json!({ "contract": name, "constructorArgs": constructor_args });
                sh_println!("{}", serde_json::to_string_pretty(&output)?)?;
            }
            return Ok(());
        };

        let root = artifacts_root(&artifact, &artifact_path, &config);
        let factory_deps = artifact.factory_deps(&root)?;
        let rpc_url = self.rpc_url(&config)?;
        let deployer_address = signer.address();
        debug!(%rpc_url, %deployer_address, factory_deps = factory_deps.len(), "deploying");

        let provider = get_signing_provider_zksync(rpc_url, signer);
        let factory = ZkDeploymentFactory::new(
            artifact.abi,
            artifact.bytecode,
            provider,
            config.transaction_timeout,
        );
        let (address, receipt) = factory
            .deploy_encoded(constructor_args, factory_deps)?
            .confirmations(config.confirmations)
            .prepare(deployer_address)
            .await?
            .send_with_receipt()
            .await
            .wrap_err_with(|| format!("failed to deploy {name}"))?;
        let tx_hash = receipt.transaction_hash();

        if shell::is_json() {
            let output = json!({
                "deployer": deployer_address.to_string(),
                "deployedTo": address.to_string(),
                "transactionHash": tx_hash
            });
            sh_println!("{output}")?;
        } else {
            sh_println!("{name} was deployed to {address}")?;
            sh_println!("Transaction hash: {tx_hash}")?;
        }
        Ok(())
    }

    /// The calls made by the trigger, in order.
    fn trigger_calls(&self, config: &MinterConfig) -> Result<Vec<TriggerCall>> {
        let target = config.target_address;
        if let Some(path) = &self.calls {
            let file = CallsFile::load(path)?;
            return file
                .calls
                .iter()
                .map(|spec| {
                    TriggerCall::new(spec.target.unwrap_or(target), &spec.signature, &spec.args)
                })
                .collect::<Result<_, _>>()
                .wrap_err_with(|| format!("failed to encode calls from {}", path.display()));
        }

        let call = match &self.sig {
            Some(sig) => TriggerCall::new(target, sig, &self.args),
            None => TriggerCall::new(target, ADD_MERKLE_TREE_SIG, config.merkle_tree_args()),
        };
        Ok(vec![call?])
    }

    fn rpc_url(&self, config: &MinterConfig) -> Result<Url> {
        match &self.rpc_url {
            Some(url) => Url::parse(url).wrap_err_with(|| format!("invalid RPC URL `{url}`")),
            None => Ok(config.rpc_url()?),
        }
    }
}

/// Directory the factory dependencies of `artifact` are looked up in: the build tree the
/// artifact was loaded from, else the configured one.
fn artifacts_root(artifact: &ZkArtifact, path: &Path, config: &MinterConfig) -> PathBuf {
    artifact.artifacts_root(path).unwrap_or_else(|| config.artifacts.clone())
}
