use crate::error::MathError;
use alloy_primitives::{I256, U256, U512};

/// Zero-extends a `U256` into the low half of a `U512`.
#[inline(always)]
pub(crate) fn widen(x: U256) -> U512 {
    let limbs = x.as_limbs();
    U512::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

/// Narrows a `U512` back to 256 bits, failing if any high limb is set.
#[inline(always)]
pub(crate) fn narrow(x: U512) -> Result<U256, MathError> {
    let limbs = x.as_limbs();
    if limbs[4] | limbs[5] | limbs[6] | limbs[7] != 0 {
        return Err(MathError::Overflow);
    }
    Ok(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Computes `floor(a * b / denominator)` with the product held at 512 bits,
/// returning a `MathError` on overflow or division by zero.
///
/// This mirrors the Solidity `FullMath.mulDiv` behavior and underpins
/// every price, amount and fee calculation in the crate.
#[inline(always)]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    if let Some(product) = a.checked_mul(b) {
        return Ok(product / denominator);
    }

    narrow((widen(a) * widen(b)) / widen(denominator))
}

/// Alias of [`mul_div`]; spelled out at call sites where the rounding
/// direction matters to the reader.
#[inline(always)]
pub fn mul_div_rounding_down(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    mul_div(a, b, denominator)
}

/// Like [`mul_div`], but rounds the result up when there is a
/// non‑zero remainder, returning an overflow error if the result
/// would exceed `U256::MAX`.
#[inline(always)]
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (quotient, remainder) = (widen(a) * widen(b)).div_rem(widen(denominator));
    if remainder.is_zero() {
        narrow(quotient)
    } else {
        narrow(quotient + U512::from(1u8))
    }
}

/// Divides `a` by `b`, rounding the result up to the next integer
/// when there is a non‑zero remainder.
#[inline(always)]
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::ONE)
    }
}

/// Reinterprets a non-negative `U256` as `I256`, failing if it would land
/// in the negative half.
#[inline(always)]
pub(crate) fn to_signed(value: U256) -> Result<I256, MathError> {
    if value.bit(255) {
        return Err(MathError::Overflow);
    }
    Ok(I256::from_raw(value))
}
