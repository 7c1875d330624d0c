pub mod arguments;
pub mod deploy;
pub mod observe;
pub mod units;

use {
    crate::{arguments::Arguments, deploy::Contracts},
    anyhow::{Context, Result},
    engine::{EthereumEngine, artifacts::Artifacts},
};

/// Runs the full FarmDao deployment against the node given in `args`.
pub async fn run(args: Arguments) -> Result<()> {
    let artifacts = Artifacts::load(&args.artifacts)
        .with_context(|| format!("failed to load artifacts from {:?}", args.artifacts))?;
    let engine = EthereumEngine::new(&args.node_url, args.private_key, artifacts);

    let contracts = Contracts::deploy(&engine).await?;
    tracing::info!(
        fusd = ?contracts.fusd.address(),
        fdao = ?contracts.fdao.address(),
        receipt_nft = ?contracts.receipt_nft.address(),
        insurance = ?contracts.insurance.address(),
        dispute_manager = ?contracts.dispute_manager.address(),
        governance_dao = ?contracts.governance_dao.address(),
        "FarmDao deployment complete",
    );
    Ok(())
}
