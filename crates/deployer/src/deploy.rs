//! The FarmDao deployment sequence.

use {
    crate::units::FusdUnit,
    anyhow::Result,
    contracts::{DisputeManager, Fdao, Fusd, GovernanceDao, InsuranceContract, ReceiptNft},
    engine::Engine,
};

/// FUSD minted to the deployer before the protocol is funded.
const INITIAL_MINT: u64 = 1_000_000;
/// FUSD moved to the FDAO contract to back token redemptions.
const REDEMPTION_RESERVE: u64 = 100_000;
/// FUSD the insurance pool is funded with.
const INSURANCE_FUND: u64 = 100_000;

/// Handles to every deployed FarmDao contract.
#[derive(Debug)]
pub struct Contracts {
    pub fusd: Fusd,
    pub fdao: Fdao,
    pub receipt_nft: ReceiptNft,
    pub insurance: InsuranceContract,
    pub dispute_manager: DisputeManager,
    pub governance_dao: GovernanceDao,
}

impl Contracts {
    /// Deploys the protocol contracts in dependency order, wires them
    /// together and performs the initial funding.
    ///
    /// Steps run strictly one after another. The first failing step aborts
    /// the remainder and its error is returned as is; contracts deployed up
    /// to that point stay behind unconfigured.
    pub async fn deploy(engine: &dyn Engine) -> Result<Self> {
        let fusd = Fusd::deploy(engine).await?;
        tracing::info!(address = ?fusd.address(), "deployed FUSD");

        let fdao = Fdao::deploy(engine, fusd).await?;
        tracing::info!(address = ?fdao.address(), "deployed FDAO");

        let receipt_nft = ReceiptNft::deploy(engine).await?;
        tracing::info!(address = ?receipt_nft.address(), "deployed ReceiptNFT");

        let insurance = InsuranceContract::deploy(engine, fusd, receipt_nft).await?;
        tracing::info!(address = ?insurance.address(), "deployed InsuranceContract");

        let dispute_manager = DisputeManager::deploy(engine, insurance).await?;
        tracing::info!(address = ?dispute_manager.address(), "deployed DisputeManager");

        let governance_dao = GovernanceDao::deploy(engine, fdao).await?;
        tracing::info!(address = ?governance_dao.address(), "deployed GovernanceDao");

        dispute_manager.set_governance_dao(engine, governance_dao).await?;
        governance_dao.set_dispute_manager(engine, dispute_manager).await?;
        insurance.set_dispute_manager(engine, dispute_manager).await?;
        // The insurance pool mints policy receipts, so it has to own the NFT.
        receipt_nft.transfer_ownership(engine, insurance.address()).await?;
        tracing::info!("wired contract connections");

        fusd.mint(engine, engine.deployer(), INITIAL_MINT.fusd()).await?;
        fusd.transfer(engine, fdao.address(), REDEMPTION_RESERVE.fusd()).await?;
        fusd.approve(engine, insurance.address(), INSURANCE_FUND.fusd()).await?;
        insurance.fund_contract(engine, INSURANCE_FUND.fusd()).await?;
        tracing::info!("initial funding complete");

        Ok(Self {
            fusd,
            fdao,
            receipt_nft,
            insurance,
            dispute_manager,
            governance_dao,
        })
    }
}
