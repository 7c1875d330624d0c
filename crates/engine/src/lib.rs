//! The seam between deployment logic and the chain.
//!
//! Components describing *what* to deploy go through the [`Engine`] trait so
//! they can be tested against a mocked engine; [`EthereumEngine`] is the
//! implementation that actually submits transactions to a node.

pub mod artifacts;

use {
    crate::artifacts::Artifacts,
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{Address, Bytes},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::types::{TransactionReceipt, TransactionRequest},
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result, ensure},
    async_trait::async_trait,
    url::Url,
};

/// Chain operations a deployment needs. Kept narrow so deployment flows can
/// be tested with mocked versions of these behaviours.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait Engine: Send + Sync {
    /// Deploys `contract`, appending the ABI encoded `constructor_args` to
    /// its creation code, and returns the address of the new instance.
    async fn deploy(&self, contract: &str, constructor_args: Bytes) -> Result<Address>;

    /// Submits a transaction invoking `calldata` on `to` and waits for it to
    /// be mined. A revert is an error.
    async fn call(&self, to: Address, calldata: Bytes) -> Result<()>;

    /// The account deployments and calls are sent from.
    fn deployer(&self) -> Address;
}

/// [`Engine`] backed by an Ethereum node.
pub struct EthereumEngine {
    provider: DynProvider,
    deployer: Address,
    artifacts: Artifacts,
}

impl EthereumEngine {
    /// Connects to the node at `node_url` with `signer` owning and paying
    /// for every transaction.
    pub fn new(node_url: &Url, signer: PrivateKeySigner, artifacts: Artifacts) -> Self {
        let deployer = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect_http(node_url.clone())
            .erased();
        Self {
            provider,
            deployer,
            artifacts,
        }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    async fn execute(&self, tx: TransactionRequest) -> Result<TransactionReceipt> {
        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to submit transaction")?
            .get_receipt()
            .await
            .context("failed to fetch transaction receipt")?;
        ensure!(
            receipt.status(),
            "transaction {:?} reverted",
            receipt.transaction_hash
        );
        Ok(receipt)
    }
}

#[async_trait]
impl Engine for EthereumEngine {
    async fn deploy(&self, contract: &str, constructor_args: Bytes) -> Result<Address> {
        let mut code = self.artifacts.bytecode(contract)?.to_vec();
        code.extend_from_slice(&constructor_args);

        tracing::debug!(contract, "submitting deployment");
        let receipt = self
            .execute(
                TransactionRequest::default()
                    .with_from(self.deployer)
                    .with_deploy_code(code),
            )
            .await
            .with_context(|| format!("deployment of {contract} failed"))?;
        receipt
            .contract_address
            .with_context(|| format!("deployment receipt for {contract} carries no address"))
    }

    async fn call(&self, to: Address, calldata: Bytes) -> Result<()> {
        tracing::debug!(?to, "submitting call");
        self.execute(
            TransactionRequest::default()
                .with_from(self.deployer)
                .with_to(to)
                .with_input(calldata),
        )
        .await
        .with_context(|| format!("call to {to:?} failed"))?;
        Ok(())
    }

    fn deployer(&self) -> Address {
        self.deployer
    }
}
