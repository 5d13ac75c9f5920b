use crate::error::MathError;
use alloy_primitives::{I256, U256};

/// Applies a signed liquidity delta: `x - |y|` for negative `y`, else `x + y`.
///
/// Liquidity can never go negative, so a delta that would take it below
/// zero surfaces as `MathError::Underflow` rather than wrapping.
pub fn add_delta(x: U256, y: I256) -> Result<U256, MathError> {
    if y.is_negative() {
        x.checked_sub(y.unsigned_abs()).ok_or(MathError::Underflow)
    } else {
        x.checked_add(y.into_raw()).ok_or(MathError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(x: i128) -> I256 {
        I256::try_from(x).unwrap()
    }

    #[test]
    fn add_delta_adds_positive_delta() {
        // 100 + 20 = 120
        let res = add_delta(U256::from(100u8), signed(20)).unwrap();
        assert_eq!(res, U256::from(120u8));
    }

    #[test]
    fn add_delta_subtracts_negative_delta() {
        // 100 + (-20) = 80
        let res = add_delta(U256::from(100u8), signed(-20)).unwrap();
        assert_eq!(res, U256::from(80u8));
    }

    #[test]
    fn add_delta_zero_delta_returns_same() {
        let x = U256::from(123_456_789u64);
        assert_eq!(add_delta(x, I256::ZERO).unwrap(), x);
    }

    #[test]
    fn add_delta_positive_overflow() {
        let res = add_delta(U256::MAX, I256::ONE);
        assert!(matches!(res, Err(MathError::Overflow)));
    }

    #[test]
    fn add_delta_negative_no_underflow_at_boundary() {
        // x + (-x) = 0
        let res = add_delta(U256::from(1_000u32), signed(-1_000)).unwrap();
        assert_eq!(res, U256::ZERO);
    }

    #[test]
    fn add_delta_negative_underflow() {
        // 100 + (-200) would leave negative liquidity
        let res = add_delta(U256::from(100u8), signed(-200));
        assert!(matches!(res, Err(MathError::Underflow)));
    }

    #[test]
    fn add_delta_handles_most_negative_delta() {
        // |I256::MIN| = 2^255 is representable as an unsigned magnitude
        let x = U256::ONE << 255;
        assert_eq!(add_delta(x, I256::MIN).unwrap(), U256::ZERO);
    }
}
