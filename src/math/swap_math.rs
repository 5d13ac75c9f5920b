use crate::constants::{FEE_UNITS, U256_FEE_UNITS, U256_TWO_FEE_UNITS};
use crate::error::{Error, MathError};
use crate::math::full_math::{mul_div, mul_div_rounding_up, to_signed, widen};
use crate::math::quad_math::get_smaller_root_of_quad_eqn_wide;
use crate::{Q96, RESOLUTION};
use alloy_primitives::{I256, U256};
use tracing::trace;

/// Outcome of a single swap step inside one price range.
///
/// Amounts keep the sign convention of `amount_remaining`: for an exact
/// input swap `used_amount` is the (positive) input consumed and
/// `returned_amount` the (negative) output produced; for an exact output
/// swap it is the other way round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapStep {
    /// Price after the step; never past the target.
    pub sqrt_ratio_next_x96: U256,
    pub used_amount: I256,
    pub returned_amount: I256,
    /// Liquidity credited to the pool as the fee for this step.
    pub delta_l: U256,
}

#[inline(always)]
fn mul_small(x: U256, y: U256) -> Result<U256, MathError> {
    x.checked_mul(y).ok_or(MathError::Overflow)
}

#[inline(always)]
fn sub(x: U256, y: U256) -> Result<U256, MathError> {
    x.checked_sub(y).ok_or(MathError::InvariantViolation)
}

#[inline(always)]
fn add(x: U256, y: U256) -> Result<U256, MathError> {
    x.checked_add(y).ok_or(MathError::Overflow)
}

/// Computes one swap step of a proMM pool, where the fee is collected as
/// extra liquidity (`delta_l`) instead of being skimmed off the input.
///
/// `amount_remaining` is positive for exact input and negative for exact
/// output. `is_token0` tells whether the specified amount is denominated in
/// token0. The step either consumes the whole remaining amount before the
/// price reaches `target_sqrt_p` (amount-limited) or stops exactly at the
/// target (target-limited).
pub fn compute_swap_step(
    current_sqrt_p: U256,
    target_sqrt_p: U256,
    liquidity: U256,
    amount_remaining: I256,
    fee_in_units: u32,
    exact_in: bool,
    is_token0: bool,
) -> Result<SwapStep, Error> {
    if current_sqrt_p == target_sqrt_p {
        return Ok(SwapStep {
            sqrt_ratio_next_x96: current_sqrt_p,
            used_amount: I256::ZERO,
            returned_amount: I256::ZERO,
            delta_l: U256::ZERO,
        });
    }
    if fee_in_units >= FEE_UNITS {
        return Err(MathError::InvalidInput.into());
    }
    let fee = U256::from(fee_in_units);

    let reach_amount = calc_reach_amount(
        current_sqrt_p,
        target_sqrt_p,
        liquidity,
        fee,
        exact_in,
        is_token0,
    )?;

    let amount_limited = if exact_in {
        reach_amount >= amount_remaining
    } else {
        reach_amount <= amount_remaining
    };
    trace!(
        %reach_amount,
        %amount_remaining,
        amount_limited,
        exact_in,
        is_token0,
        "swap step"
    );

    let (used_amount, sqrt_ratio_next_x96, delta_l) = if amount_limited {
        let abs_delta = amount_remaining.unsigned_abs();
        let delta_l = estimate_incremental_liquidity(
            abs_delta,
            liquidity,
            current_sqrt_p,
            fee,
            exact_in,
            is_token0,
        )?;
        let next = calc_final_price(
            abs_delta,
            liquidity,
            delta_l,
            current_sqrt_p,
            exact_in,
            is_token0,
        )?;
        (amount_remaining, next, delta_l)
    } else {
        let delta_l = calc_incremental_liquidity(
            current_sqrt_p,
            target_sqrt_p,
            liquidity,
            reach_amount.unsigned_abs(),
            exact_in,
            is_token0,
        )?;
        (reach_amount, target_sqrt_p, delta_l)
    };

    let returned_amount = calc_returned_amount(
        current_sqrt_p,
        sqrt_ratio_next_x96,
        liquidity,
        delta_l,
        exact_in,
        is_token0,
    )?;

    Ok(SwapStep {
        sqrt_ratio_next_x96,
        used_amount,
        returned_amount,
        delta_l,
    })
}

/// Signed amount needed to move the price from `current_sqrt_p` all the way
/// to `target_sqrt_p`, fee included.
fn calc_reach_amount(
    current_sqrt_p: U256,
    target_sqrt_p: U256,
    liquidity: U256,
    fee: U256,
    exact_in: bool,
    is_token0: bool,
) -> Result<I256, MathError> {
    let abs_price_diff = current_sqrt_p.abs_diff(target_sqrt_p);

    if exact_in {
        let numerator = mul_small(U256_TWO_FEE_UNITS, abs_price_diff)?;
        if is_token0 {
            // L·2F·diff / (2F·target − fee·current), then scaled by 2^96 / current
            let denominator = sub(
                mul_small(U256_TWO_FEE_UNITS, target_sqrt_p)?,
                mul_small(fee, current_sqrt_p)?,
            )?;
            let reach = mul_div(liquidity, numerator, denominator)?;
            to_signed(mul_div(reach, Q96, current_sqrt_p)?)
        } else {
            let denominator = sub(
                mul_small(U256_TWO_FEE_UNITS, current_sqrt_p)?,
                mul_small(fee, target_sqrt_p)?,
            )?;
            let reach = mul_div(liquidity, numerator, denominator)?;
            to_signed(mul_div(reach, current_sqrt_p, Q96)?)
        }
    } else if is_token0 {
        let denominator = sub(
            mul_small(U256_TWO_FEE_UNITS, current_sqrt_p)?,
            mul_small(fee, target_sqrt_p)?,
        )?;
        let numerator = sub(denominator, mul_small(fee, current_sqrt_p)?)?;
        let scaled_liquidity = liquidity
            .checked_shl(RESOLUTION as usize)
            .ok_or(MathError::Overflow)?;
        let reach = mul_div(scaled_liquidity, numerator, denominator)?;
        let reach = mul_div(reach, abs_price_diff, current_sqrt_p)?
            .checked_div(target_sqrt_p)
            .ok_or(MathError::DivisionByZero)?;
        Ok(-to_signed(reach)?)
    } else {
        let denominator = sub(
            mul_small(U256_TWO_FEE_UNITS, target_sqrt_p)?,
            mul_small(fee, current_sqrt_p)?,
        )?;
        let numerator = sub(denominator, mul_small(fee, target_sqrt_p)?)?;
        let reach = mul_div(liquidity, numerator, denominator)?;
        Ok(-to_signed(mul_div(reach, abs_price_diff, Q96)?)?)
    }
}

/// Fee liquidity when the whole remaining amount is used and the final
/// price is not yet known.
///
/// Exact input is linear in the amount. Exact output couples the fee with the
/// price move and is solved as the smaller root of
/// `fee·x² − 2·b·x + c = 0`.
fn estimate_incremental_liquidity(
    abs_delta: U256,
    liquidity: U256,
    current_sqrt_p: U256,
    fee: U256,
    exact_in: bool,
    is_token0: bool,
) -> Result<U256, MathError> {
    if exact_in {
        let fee_amount = mul_small(abs_delta, fee)?;
        if is_token0 {
            let denominator = U256_TWO_FEE_UNITS << RESOLUTION;
            return mul_div(current_sqrt_p, fee_amount, denominator);
        }
        let denominator = mul_small(U256_TWO_FEE_UNITS, current_sqrt_p)?;
        return mul_div(Q96, fee_amount, denominator);
    }

    if fee.is_zero() {
        return Ok(U256::ZERO);
    }

    let b = mul_small(U256_FEE_UNITS - fee, liquidity)?;
    let scaled_delta = mul_small(U256_FEE_UNITS, abs_delta)?;
    // (numerator, denominator) of the price factor applied to b's amount term and to c
    let (price_num, price_den) = if is_token0 {
        (current_sqrt_p, Q96)
    } else {
        (Q96, current_sqrt_p)
    };
    let b = sub(b, mul_div(scaled_delta, price_num, price_den)?)?;

    // c = fee·L·|amount|·price_num / price_den, kept at 512 bits for the solver
    let c = (widen(mul_small(fee, liquidity)?) * widen(abs_delta))
        .checked_mul(widen(price_num))
        .ok_or(MathError::Overflow)?
        .checked_div(widen(price_den))
        .ok_or(MathError::DivisionByZero)?;

    get_smaller_root_of_quad_eqn_wide(fee, b, c)
}

/// Fee liquidity for a step that ends exactly on the target price, clamped
/// at zero.
fn calc_incremental_liquidity(
    current_sqrt_p: U256,
    target_sqrt_p: U256,
    liquidity: U256,
    abs_delta: U256,
    exact_in: bool,
    is_token0: bool,
) -> Result<U256, MathError> {
    let shift = |x: U256| {
        if exact_in {
            add(x, abs_delta)
        } else {
            sub(x, abs_delta)
        }
    };

    let new_liquidity = if is_token0 {
        let reserve = shift(mul_div(liquidity, Q96, current_sqrt_p)?)?;
        mul_div(target_sqrt_p, reserve, Q96)?
    } else {
        let reserve = shift(mul_div(liquidity, current_sqrt_p, Q96)?)?;
        mul_div(reserve, Q96, target_sqrt_p)?
    };

    Ok(new_liquidity.saturating_sub(liquidity))
}

/// Price reached after spending the whole remaining amount with `delta_l`
/// added to the pool.
fn calc_final_price(
    abs_delta: U256,
    liquidity: U256,
    delta_l: U256,
    current_sqrt_p: U256,
    exact_in: bool,
    is_token0: bool,
) -> Result<U256, MathError> {
    let liquidity_with_fee = add(liquidity, delta_l)?;

    let price = if is_token0 {
        let tmp = mul_div(abs_delta, current_sqrt_p, Q96)?;
        if exact_in {
            mul_div_rounding_up(liquidity_with_fee, current_sqrt_p, add(liquidity, tmp)?)?
        } else {
            mul_div(liquidity_with_fee, current_sqrt_p, sub(liquidity, tmp)?)?
        }
    } else {
        let tmp = mul_div(abs_delta, Q96, current_sqrt_p)?;
        if exact_in {
            mul_div(add(liquidity, tmp)?, current_sqrt_p, liquidity_with_fee)?
        } else {
            mul_div_rounding_up(sub(liquidity, tmp)?, current_sqrt_p, liquidity_with_fee)?
        }
    };

    if exact_in && price == U256::ONE {
        return Ok(U256::ZERO);
    }
    Ok(price)
}

/// Counter-asset amount implied by moving from `current_sqrt_p` to
/// `next_sqrt_p` with `delta_l` of fee liquidity.
fn calc_returned_amount(
    current_sqrt_p: U256,
    next_sqrt_p: U256,
    liquidity: U256,
    delta_l: U256,
    exact_in: bool,
    is_token0: bool,
) -> Result<I256, MathError> {
    let returned = if is_token0 {
        let fee_part = to_signed(mul_div_rounding_up(delta_l, next_sqrt_p, Q96)?)?;
        if exact_in {
            let moved = to_signed(mul_div(
                liquidity,
                sub(current_sqrt_p, next_sqrt_p)?,
                Q96,
            )?)?;
            fee_part.checked_sub(moved)
        } else {
            let moved = to_signed(mul_div_rounding_up(
                liquidity,
                sub(next_sqrt_p, current_sqrt_p)?,
                Q96,
            )?)?;
            fee_part.checked_add(moved)
        }
    } else {
        if next_sqrt_p.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let after = to_signed(mul_div_rounding_up(add(liquidity, delta_l)?, Q96, next_sqrt_p)?)?;
        let before = to_signed(mul_div_rounding_up(liquidity, Q96, current_sqrt_p)?)?;
        after.checked_sub(before)
    }
    .ok_or(MathError::Overflow)?;

    if exact_in && returned == I256::ONE {
        return Ok(I256::ZERO);
    }
    Ok(returned)
}
