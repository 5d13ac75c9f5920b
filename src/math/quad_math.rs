use crate::error::MathError;
use crate::math::full_math::{narrow, widen};
use alloy_primitives::{U256, U512};

/// Floor of the square root of `x`, by Newton iteration.
pub fn sqrt(x: U512) -> U512 {
    if x < U512::from(2u8) {
        return x;
    }

    let mut z = x;
    let mut y = (x >> 1) + U512::ONE;
    while y < z {
        z = y;
        y = (x / y + y) >> 1;
    }
    z
}

/// Returns the smaller root of `a·x² − 2b·x + c = 0`, i.e.
/// `(b − sqrt(b² − a·c)) / a`, rounded down.
///
/// `b²` and `a·c` are formed at 512 bits. A negative discriminant means the
/// caller's coefficients are inconsistent and is reported as
/// `MathError::InvariantViolation`.
pub fn get_smaller_root_of_quad_eqn(a: U256, b: U256, c: U256) -> Result<U256, MathError> {
    get_smaller_root_of_quad_eqn_wide(a, b, widen(c))
}

/// Same as [`get_smaller_root_of_quad_eqn`] with `c` allowed past 256 bits.
/// Any consistent `c` is at most `b² / a`, so an `a·c` that leaves 512 bits
/// is a negative discriminant.
pub(crate) fn get_smaller_root_of_quad_eqn_wide(
    a: U256,
    b: U256,
    c: U512,
) -> Result<U256, MathError> {
    if a.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let b_wide = widen(b);
    let b_squared = b_wide * b_wide;
    let discriminant = widen(a)
        .checked_mul(c)
        .and_then(|ac| b_squared.checked_sub(ac))
        .ok_or(MathError::InvariantViolation)?;

    // sqrt(b² − ac) <= b, so this cannot underflow
    let root = narrow(sqrt(discriminant))?;
    Ok((b - root) / a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sqrt_small_values() {
        assert_eq!(sqrt(U512::ZERO), U512::ZERO);
        assert_eq!(sqrt(U512::ONE), U512::ONE);
        assert_eq!(sqrt(U512::from(3u8)), U512::ONE);
        assert_eq!(sqrt(U512::from(4u8)), U512::from(2u8));
        assert_eq!(sqrt(U512::from(99u8)), U512::from(9u8));
    }

    #[test]
    fn sqrt_of_max_is_max_u256() {
        let root = sqrt(U512::MAX);
        assert_eq!(narrow(root).unwrap(), U256::MAX);
    }

    #[test]
    fn smaller_root_of_simple_equation() {
        // x² − 10x + 9 = 0 has roots 1 and 9
        let root = get_smaller_root_of_quad_eqn(U256::ONE, U256::from(5u8), U256::from(9u8));
        assert_eq!(root.unwrap(), U256::ONE);
    }

    #[test]
    fn smaller_root_rounds_down() {
        // 3x² − 20x + 3 = 0: smaller root is (10 − sqrt(91)) / 3 ≈ 0.153
        let root = get_smaller_root_of_quad_eqn(U256::from(3u8), U256::from(10u8), U256::from(3u8));
        assert_eq!(root.unwrap(), U256::ZERO);
    }

    #[test]
    fn smaller_root_of_fee_sized_coefficients() {
        // fee = 300, liquidity = 1e18, output = 1e18
        let a = U256::from(300u32);
        let b = U256::from(99_700u128 * 10u128.pow(18));
        let c = U256::from(300u64) * U256::from(10u128.pow(36));
        let root = get_smaller_root_of_quad_eqn(a, b, c).unwrap();
        assert_eq!(root, U256::from(1_504_516_946_195_448u64));
    }

    #[test]
    fn smaller_root_with_b_squared_past_256_bits() {
        // b ≈ 2^145, so b² needs ~290 bits
        let a = U256::from(300u32);
        let b = U256::from(99_700u32) << 128;
        let c = (U256::from(300u32) << 128) * U256::from(10u64.pow(18));
        let root = get_smaller_root_of_quad_eqn(a, b, c).unwrap();
        assert_eq!(root, U256::from(1_504_513_540_621_865u64));
    }

    #[test]
    fn zero_leading_coefficient_is_division_by_zero() {
        let res = get_smaller_root_of_quad_eqn(U256::ZERO, U256::ONE, U256::ONE);
        assert!(matches!(res, Err(MathError::DivisionByZero)));
    }

    #[test]
    fn negative_discriminant_is_invariant_violation() {
        // b² = 1 < a·c = 4
        let res = get_smaller_root_of_quad_eqn(U256::from(2u8), U256::ONE, U256::from(2u8));
        assert!(matches!(res, Err(MathError::InvariantViolation)));
    }

    #[test]
    fn wide_constant_term_past_256_bits() {
        // c = 2^300 with b = 2^160, a = 1: b² − c = 2^320 − 2^300
        let b = U256::ONE << 160usize;
        let c = U512::ONE << 300usize;
        let root = get_smaller_root_of_quad_eqn_wide(U256::ONE, b, c).unwrap();
        let expected = b - narrow(sqrt((U512::ONE << 320usize) - c)).unwrap();
        assert_eq!(root, expected);
        assert!(root > U256::ZERO);
    }

    #[test]
    fn wide_constant_term_beyond_512_bit_product_is_invariant_violation() {
        let res = get_smaller_root_of_quad_eqn_wide(U256::MAX, U256::ONE, U512::MAX);
        assert!(matches!(res, Err(MathError::InvariantViolation)));
    }

    proptest! {
        #[test]
        fn sqrt_is_floor_root(x in any::<u128>()) {
            let x = U512::from(x);
            let r = sqrt(x);
            prop_assert!(r * r <= x);
            prop_assert!((r + U512::ONE) * (r + U512::ONE) > x);
        }
    }
}
