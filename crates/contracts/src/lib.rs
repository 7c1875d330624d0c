//! Typed surfaces of the FarmDao protocol contracts.
//!
//! The Solidity sources live in the protocol repository and reach this crate
//! only as compiled artifacts; declared here is the deployed surface the
//! deployment flow touches. Every on-chain method corresponds to one Rust
//! method on a typed handle, so contract wiring is checked at compile time
//! instead of dispatching on method names.

use {
    alloy::{
        primitives::{Address, Bytes, U256},
        sol_types::{SolCall, SolConstructor},
    },
    anyhow::Result,
    engine::Engine,
};

pub mod abi {
    alloy::sol! {
        #[allow(missing_docs)]
        contract FUSD {
            function mint(address to, uint256 amount) external;
            function transfer(address to, uint256 amount) external returns (bool);
            function approve(address spender, uint256 amount) external returns (bool);
            function balanceOf(address owner) external view returns (uint256);
        }

        #[allow(missing_docs)]
        contract FDAO {
            constructor(address fusd);
        }

        #[allow(missing_docs)]
        contract ReceiptNFT {
            function transferOwnership(address newOwner) external;
            function owner() external view returns (address);
        }

        #[allow(missing_docs)]
        contract InsuranceContract {
            constructor(address fusd, address receiptNft);
            function setDisputeManager(address disputeManager) external;
            function fundContract(uint256 amount) external;
        }

        #[allow(missing_docs)]
        contract DisputeManager {
            constructor(address insuranceContract);
            function setGovernanceDao(address governanceDao) external;
        }

        #[allow(missing_docs)]
        contract GovernanceDao {
            constructor(address fdao);
            function setDisputeManager(address disputeManager) external;
        }
    }
}

macro_rules! handle {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $name(Address);

        impl $name {
            /// Wraps an already deployed instance.
            pub fn at(address: Address) -> Self {
                Self(address)
            }

            pub fn address(&self) -> Address {
                self.0
            }
        }
    };
}

handle! {
    /// The protocol stablecoin, a mintable 18 decimal ERC-20.
    Fusd
}

impl Fusd {
    pub async fn deploy(engine: &dyn Engine) -> Result<Self> {
        Ok(Self(engine.deploy("FUSD", Bytes::new()).await?))
    }

    pub async fn mint(&self, engine: &dyn Engine, to: Address, amount: U256) -> Result<()> {
        engine
            .call(self.0, call_data(abi::FUSD::mintCall { to, amount }))
            .await
    }

    pub async fn transfer(&self, engine: &dyn Engine, to: Address, amount: U256) -> Result<()> {
        engine
            .call(self.0, call_data(abi::FUSD::transferCall { to, amount }))
            .await
    }

    pub async fn approve(&self, engine: &dyn Engine, spender: Address, amount: U256) -> Result<()> {
        engine
            .call(self.0, call_data(abi::FUSD::approveCall { spender, amount }))
            .await
    }
}

handle! {
    /// The DAO token, redeemable against FUSD held by its contract.
    Fdao
}

impl Fdao {
    pub async fn deploy(engine: &dyn Engine, fusd: Fusd) -> Result<Self> {
        let args = constructor_data(abi::FDAO::constructorCall { fusd: fusd.0 });
        Ok(Self(engine.deploy("FDAO", args).await?))
    }
}

handle! {
    /// Insurance policy receipts, minted by the insurance pool.
    ReceiptNft
}

impl ReceiptNft {
    pub async fn deploy(engine: &dyn Engine) -> Result<Self> {
        Ok(Self(engine.deploy("ReceiptNFT", Bytes::new()).await?))
    }

    pub async fn transfer_ownership(&self, engine: &dyn Engine, new_owner: Address) -> Result<()> {
        let data = call_data(abi::ReceiptNFT::transferOwnershipCall { newOwner: new_owner });
        engine.call(self.0, data).await
    }
}

handle! {
    /// The insurance pool holding the FUSD all policies are paid from.
    InsuranceContract
}

impl InsuranceContract {
    pub async fn deploy(engine: &dyn Engine, fusd: Fusd, receipt_nft: ReceiptNft) -> Result<Self> {
        let args = constructor_data(abi::InsuranceContract::constructorCall {
            fusd: fusd.0,
            receiptNft: receipt_nft.0,
        });
        Ok(Self(engine.deploy("InsuranceContract", args).await?))
    }

    pub async fn set_dispute_manager(
        &self,
        engine: &dyn Engine,
        dispute_manager: DisputeManager,
    ) -> Result<()> {
        let data = call_data(abi::InsuranceContract::setDisputeManagerCall {
            disputeManager: dispute_manager.0,
        });
        engine.call(self.0, data).await
    }

    /// Pulls `amount` FUSD from the caller's allowance into the pool.
    pub async fn fund_contract(&self, engine: &dyn Engine, amount: U256) -> Result<()> {
        engine
            .call(
                self.0,
                call_data(abi::InsuranceContract::fundContractCall { amount }),
            )
            .await
    }
}

handle! {
    /// Resolution of disputed insurance claims.
    DisputeManager
}

impl DisputeManager {
    pub async fn deploy(engine: &dyn Engine, insurance: InsuranceContract) -> Result<Self> {
        let args = constructor_data(abi::DisputeManager::constructorCall {
            insuranceContract: insurance.0,
        });
        Ok(Self(engine.deploy("DisputeManager", args).await?))
    }

    pub async fn set_governance_dao(
        &self,
        engine: &dyn Engine,
        governance_dao: GovernanceDao,
    ) -> Result<()> {
        let data = call_data(abi::DisputeManager::setGovernanceDaoCall {
            governanceDao: governance_dao.0,
        });
        engine.call(self.0, data).await
    }
}

handle! {
    /// FDAO weighted governance over dispute outcomes.
    GovernanceDao
}

impl GovernanceDao {
    pub async fn deploy(engine: &dyn Engine, fdao: Fdao) -> Result<Self> {
        let args = constructor_data(abi::GovernanceDao::constructorCall { fdao: fdao.0 });
        Ok(Self(engine.deploy("GovernanceDao", args).await?))
    }

    pub async fn set_dispute_manager(
        &self,
        engine: &dyn Engine,
        dispute_manager: DisputeManager,
    ) -> Result<()> {
        let data = call_data(abi::GovernanceDao::setDisputeManagerCall {
            disputeManager: dispute_manager.0,
        });
        engine.call(self.0, data).await
    }
}

fn call_data(call: impl SolCall) -> Bytes {
    call.abi_encode().into()
}

fn constructor_data(constructor: impl SolConstructor) -> Bytes {
    constructor.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    // The token and ownership methods have to match the standard OpenZeppelin
    // surfaces the contracts inherit, selector for selector.
    #[test]
    fn standard_selectors() {
        assert_eq!(abi::FUSD::mintCall::SELECTOR, hex!("40c10f19"));
        assert_eq!(abi::FUSD::transferCall::SELECTOR, hex!("a9059cbb"));
        assert_eq!(abi::FUSD::approveCall::SELECTOR, hex!("095ea7b3"));
        assert_eq!(abi::FUSD::balanceOfCall::SELECTOR, hex!("70a08231"));
        assert_eq!(
            abi::ReceiptNFT::transferOwnershipCall::SELECTOR,
            hex!("f2fde38b")
        );
        assert_eq!(abi::ReceiptNFT::ownerCall::SELECTOR, hex!("8da5cb5b"));
    }

    #[test]
    fn constructor_arguments_are_plain_abi_words() {
        let fusd = Fusd::at(Address::with_last_byte(1));
        let args = constructor_data(abi::FDAO::constructorCall { fusd: fusd.address() });
        assert_eq!(args.len(), 32);
        assert_eq!(args[31], 1);
    }
}
