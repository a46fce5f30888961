//! Deployment of contracts on ZKsync through EIP-712 transactions.

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_network::{Network, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, Bytes, address};
use alloy_provider::{PendingTransactionError, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use alloy_transport::TransportError;
use alloy_zksync::{
    network::{Zksync, transaction_request::TransactionRequest},
    provider::ZksyncProvider,
    wallet::ZksyncWallet,
};
use std::time::Duration;
use url::Url;

/// System contract every ZKsync deployment is routed through.
pub const CONTRACT_DEPLOYER_ADDRESS: Address =
    address!("0x0000000000000000000000000000000000008006");

#[derive(Debug, thiserror::Error)]
pub enum ContractDeploymentError {
    #[error("constructor is not defined")]
    ConstructorError,
    #[error("could not encode constructor arguments: {0}")]
    DetokenizationError(#[from] alloy_dyn_abi::Error),
    #[error("contract was not deployed")]
    ContractNotDeployed,
    #[error("failed to build the deployment transaction")]
    TransactionBuildError,
    #[error(transparent)]
    RpcError(#[from] TransportError),
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
}

/// Creates a provider for `url` that signs transactions with `signer`.
pub fn get_signing_provider_zksync(
    url: Url,
    signer: PrivateKeySigner,
) -> impl Provider<Zksync> + Clone {
    ProviderBuilder::<_, _, Zksync>::default().wallet(ZksyncWallet::new(signer)).connect_http(url)
}

/// Builds deployment transactions for a contract with the given ABI and bytecode.
#[derive(Clone, Debug)]
pub struct ZkDeploymentFactory<P> {
    client: P,
    abi: JsonAbi,
    bytecode: Bytes,
    timeout: u64,
}

impl<P> ZkDeploymentFactory<P>
where
    P: Provider<Zksync> + Clone,
{
    /// `timeout` is the number of seconds to wait for the receipt.
    pub fn new(abi: JsonAbi, bytecode: Bytes, client: P, timeout: u64) -> Self {
        Self { client, abi, bytecode, timeout }
    }

    /// Create a deployment tx using the provided values as constructor arguments.
    pub fn deploy_values(
        self,
        params: Vec<DynSolValue>,
        factory_deps: Vec<Vec<u8>>,
    ) -> Result<ZkDeployer<P>, ContractDeploymentError> {
        let constructor_args = match self.abi.constructor() {
            None if !params.is_empty() => return Err(ContractDeploymentError::ConstructorError),
            None => Bytes::new(),
            Some(constructor) => constructor.abi_encode_input(&params)?.into(),
        };
        self.deploy_encoded(constructor_args, factory_deps)
    }

    /// Create a deployment tx from already encoded constructor arguments.
    pub fn deploy_encoded(
        self,
        constructor_args: Bytes,
        factory_deps: Vec<Vec<u8>>,
    ) -> Result<ZkDeployer<P>, ContractDeploymentError> {
        debug!(
            target: "deploy",
            bytecode_len = self.bytecode.len(),
            args_len = constructor_args.len(),
            factory_deps = factory_deps.len(),
            "building deployment transaction"
        );

        let tx = TransactionRequest::default()
            .with_to(CONTRACT_DEPLOYER_ADDRESS)
            .with_create_params(self.bytecode.to_vec(), constructor_args.to_vec(), factory_deps)
            .map_err(|_| ContractDeploymentError::TransactionBuildError)?;

        Ok(ZkDeployer { tx, client: self.client, confs: 1, timeout: self.timeout })
    }
}

/// Helper which manages the deployment transaction of a smart contract
#[derive(Clone, Debug)]
#[must_use = "Deployer does nothing unless you `send` it"]
pub struct ZkDeployer<P> {
    /// The deployer's transaction, exposed for overriding the defaults
    pub tx: TransactionRequest,
    client: P,
    confs: u64,
    timeout: u64,
}

impl<P> ZkDeployer<P>
where
    P: Provider<Zksync> + Clone,
{
    /// Sets the number of confirmations to wait for.
    pub fn confirmations(mut self, confs: u64) -> Self {
        self.confs = confs;
        self
    }

    /// Fills sender, chain id, nonce, gas price and the ZKsync fee of the transaction.
    pub async fn prepare(mut self, from: Address) -> Result<Self, ContractDeploymentError> {
        let provider = &self.client;

        self.tx.set_from(from);
        self.tx.set_chain_id(provider.get_chain_id().await?);
        self.tx.set_nonce(provider.get_transaction_count(from).await?);
        self.tx.set_gas_price(provider.get_gas_price().await?);

        let fee = ZksyncProvider::estimate_fee(provider, self.tx.clone()).await?;
        debug!(target: "deploy", gas_limit = fee.gas_limit, max_fee_per_gas = fee.max_fee_per_gas, "estimated fee");
        self.tx.set_max_fee_per_gas(fee.max_fee_per_gas);
        self.tx.set_max_priority_fee_per_gas(fee.max_priority_fee_per_gas);
        self.tx.set_gas_limit(fee.gas_limit);

        Ok(self)
    }

    /// Broadcasts the contract deployment transaction and after waiting for it to
    /// be sufficiently confirmed (default: 1), it returns the deployed contract's address
    /// and the corresponding receipt.
    pub async fn send_with_receipt(
        self,
    ) -> Result<(Address, <Zksync as Network>::ReceiptResponse), ContractDeploymentError> {
        let receipt = self
            .client
            .send_transaction(self.tx)
            .await?
            .with_required_confirmations(self.confs)
            .with_timeout(Some(Duration::from_secs(self.timeout)))
            .get_receipt()
            .await?;
        debug!(target: "deploy", tx_hash = ?receipt.transaction_hash(), "deployment mined");

        let address =
            receipt.contract_address().ok_or(ContractDeploymentError::ContractNotDeployed)?;

        Ok((address, receipt))
    }
}
