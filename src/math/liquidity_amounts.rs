use crate::error::MathError;
use crate::math::full_math::{mul_div, narrow, widen};
use crate::{Q96, RESOLUTION};
use alloy_primitives::{U256, U512};

#[inline(always)]
fn sorted(a: U256, b: U256) -> Result<(U256, U256), MathError> {
    let (lower, upper) = if a > b { (b, a) } else { (a, b) };
    if lower == upper {
        return Err(MathError::DivisionByZero);
    }
    Ok((lower, upper))
}

fn amount0_imprecise_wide(a: U256, b: U256, amount0: U256) -> Result<U512, MathError> {
    let (lower, upper) = sorted(a, b)?;
    let intermediate = mul_div(lower, upper, Q96)?;
    Ok(widen(amount0) * widen(intermediate) / widen(upper - lower))
}

fn amount0_precise_wide(a: U256, b: U256, amount0: U256) -> Result<U512, MathError> {
    let (lower, upper) = sorted(a, b)?;
    // amount0·lower·upper / (2^96·(upper − lower)), split so no product
    // leaves 512 bits
    let numerator = widen(amount0) * widen(lower);
    let denominator = widen(upper - lower) << (RESOLUTION as usize);
    let (quotient, remainder) = numerator.div_rem(denominator);
    let upper = widen(upper);
    Ok(quotient * upper + remainder * upper / denominator)
}

fn amount1_wide(a: U256, b: U256, amount1: U256) -> Result<U512, MathError> {
    let (lower, upper) = sorted(a, b)?;
    Ok((widen(amount1) << (RESOLUTION as usize)) / widen(upper - lower))
}

/// Liquidity received for `amount0` of token0 over the range, using the
/// truncating `lower·upper / 2^96` intermediate.
pub fn max_liquidity_for_amount0_imprecise(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> Result<U256, MathError> {
    narrow(amount0_imprecise_wide(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)?)
}

/// Liquidity received for `amount0` of token0 over the range, exact.
pub fn max_liquidity_for_amount0_precise(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> Result<U256, MathError> {
    narrow(amount0_precise_wide(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)?)
}

/// Liquidity received for `amount1` of token1 over the range.
pub fn max_liquidity_for_amount1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: U256,
) -> Result<U256, MathError> {
    narrow(amount1_wide(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)?)
}

/// Maximum liquidity mintable over `[sqrt_ratio_a_x96, sqrt_ratio_b_x96]`
/// at `sqrt_ratio_current_x96` without spending more than `amount0` or
/// `amount1`.
///
/// Below the range only token0 counts, above it only token1, inside it the
/// smaller of the two. `use_full_precision` selects the exact token0 formula
/// over the cheaper truncating one.
pub fn max_liquidity_for_amounts(
    sqrt_ratio_current_x96: U256,
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    amount0: U256,
    amount1: U256,
    use_full_precision: bool,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    let for_amount0 = if use_full_precision {
        amount0_precise_wide
    } else {
        amount0_imprecise_wide
    };

    let liquidity = if sqrt_ratio_current_x96 <= sqrt_ratio_a_x96 {
        for_amount0(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)?
    } else if sqrt_ratio_current_x96 < sqrt_ratio_b_x96 {
        let liquidity0 = for_amount0(sqrt_ratio_current_x96, sqrt_ratio_b_x96, amount0)?;
        let liquidity1 = amount1_wide(sqrt_ratio_a_x96, sqrt_ratio_current_x96, amount1)?;
        liquidity0.min(liquidity1)
    } else {
        amount1_wide(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)?
    };

    narrow(liquidity)
}
