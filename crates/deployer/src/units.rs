use alloy::primitives::{U256, utils::Unit};

/// Conversion of whole token amounts into base units.
pub trait FusdUnit: Sized {
    /// Returns the current amount as FUSD base units. FUSD uses the common
    /// 18 decimals.
    fn fusd(self) -> U256;
}

impl FusdUnit for u64 {
    fn fusd(self) -> U256 {
        U256::from(self) * Unit::ETHER.wei()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_base_units() {
        assert_eq!(1.fusd(), U256::from(10).pow(U256::from(18)));
        assert_eq!(
            1_000_000.fusd(),
            U256::from(10).pow(U256::from(24))
        );
        assert_eq!(0.fusd(), U256::ZERO);
    }
}
