use crate::error::MathError;
use alloy_primitives::U256;

/// Fee denominator: fee rates are expressed in parts per 100000.
pub const FEE_UNITS: u32 = 100_000;
pub const TWO_FEE_UNITS: u32 = 2 * FEE_UNITS;

pub(crate) const U256_FEE_UNITS: U256 = U256::from_limbs([FEE_UNITS as u64, 0, 0, 0]);
pub(crate) const U256_TWO_FEE_UNITS: U256 = U256::from_limbs([TWO_FEE_UNITS as u64, 0, 0, 0]);

/// Fee tiers offered by proMM pools, in fee units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeeAmount {
    /// 0.008%
    Stable = 8,
    /// 0.01%
    Lowest = 10,
    /// 0.04%
    Low = 40,
    /// 0.3%
    Medium = 300,
    /// 1%
    High = 1000,
}

impl FeeAmount {
    #[inline]
    pub const fn units(self) -> u32 {
        self as u32
    }

    /// Default tick spacing a pool of this tier is created with.
    pub const fn tick_spacing(self) -> i32 {
        match self {
            FeeAmount::Stable | FeeAmount::Lowest => 1,
            FeeAmount::Low => 8,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200,
        }
    }
}

impl From<FeeAmount> for u32 {
    fn from(fee: FeeAmount) -> Self {
        fee.units()
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = MathError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        match units {
            8 => Ok(FeeAmount::Stable),
            10 => Ok(FeeAmount::Lowest),
            40 => Ok(FeeAmount::Low),
            300 => Ok(FeeAmount::Medium),
            1000 => Ok(FeeAmount::High),
            _ => Err(MathError::InvalidInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_units_constants() {
        assert_eq!(U256_FEE_UNITS, U256::from(100_000u32));
        assert_eq!(U256_TWO_FEE_UNITS, U256::from(200_000u32));
    }

    #[test]
    fn fee_amount_round_trips_through_units() {
        for fee in [
            FeeAmount::Stable,
            FeeAmount::Lowest,
            FeeAmount::Low,
            FeeAmount::Medium,
            FeeAmount::High,
        ] {
            assert_eq!(FeeAmount::try_from(u32::from(fee)).unwrap(), fee);
        }
    }

    #[test]
    fn unknown_fee_units_are_rejected() {
        assert!(matches!(
            FeeAmount::try_from(3000),
            Err(MathError::InvalidInput)
        ));
    }

    #[test]
    fn tick_spacing_per_tier() {
        assert_eq!(FeeAmount::Stable.tick_spacing(), 1);
        assert_eq!(FeeAmount::Low.tick_spacing(), 8);
        assert_eq!(FeeAmount::Medium.tick_spacing(), 60);
        assert_eq!(FeeAmount::High.tick_spacing(), 200);
    }
}
