use crate::math::full_math::{div_rounding_up, mul_div, mul_div_rounding_up, to_signed};
use crate::{
    Q96, RESOLUTION, U160_MAX,
    error::{Error, MathError, StateError},
};
use alloy_primitives::{I256, U256};

#[inline(always)]
fn to_uint160(value: U256) -> Result<U256, Error> {
    if value <= U160_MAX {
        Ok(value)
    } else {
        Err(MathError::Overflow.into())
    }
}

/// Computes the next sqrt price after swapping token0, rounding the
/// resulting price up, given current price, liquidity, amount, and
/// whether the amount is added or removed.
///
/// `amount * sqrt_p_x96` is evaluated with 256-bit wraparound and checked
/// by dividing back out; only an unwrapped product takes the single
/// `mul_div` path.
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_p_x96: U256,
    liquidity: U256,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if amount.is_zero() {
        return Ok(sqrt_p_x96);
    }

    let numerator1 = liquidity
        .checked_shl(RESOLUTION as usize)
        .ok_or(MathError::Overflow)?;
    let product = amount.wrapping_mul(sqrt_p_x96);

    if add {
        if product / amount == sqrt_p_x96 {
            let denominator = numerator1.wrapping_add(product);
            if denominator >= numerator1 {
                return Ok(mul_div_rounding_up(numerator1, sqrt_p_x96, denominator)?);
            }
        }
        let denominator = numerator1
            .checked_div(sqrt_p_x96)
            .ok_or(MathError::DivisionByZero)?
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        Ok(div_rounding_up(numerator1, denominator)?)
    } else {
        if product / amount != sqrt_p_x96 || numerator1 <= product {
            return Err(MathError::InvariantViolation.into());
        }
        let denominator = numerator1 - product;
        Ok(mul_div_rounding_up(numerator1, sqrt_p_x96, denominator)?)
    }
}

/// Computes the next sqrt price after swapping token1, rounding the
/// resulting price down, given current price, liquidity, amount, and
/// direction (add/remove).
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_p_x96: U256,
    liquidity: U256,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if add {
        let quotient = if amount <= U160_MAX {
            (amount << RESOLUTION)
                .checked_div(liquidity)
                .ok_or(MathError::DivisionByZero)?
        } else {
            mul_div(amount, Q96, liquidity)?
        };

        let result = sqrt_p_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)?;
        to_uint160(result)
    } else {
        let quotient = if amount <= U160_MAX {
            div_rounding_up(amount << RESOLUTION, liquidity)?
        } else {
            mul_div_rounding_up(amount, Q96, liquidity)?
        };

        if sqrt_p_x96 <= quotient {
            return Err(MathError::InvariantViolation.into());
        }
        to_uint160(sqrt_p_x96 - quotient)
    }
}

/// Token0 amount between two sqrt prices for a given liquidity:
/// `liquidity · 2^96 · (upper − lower) / (upper · lower)`.
///
/// The prices may be passed in either order.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: U256,
    round_up: bool,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::PriceNotPositive.into());
    }

    let numerator1 = liquidity
        .checked_shl(RESOLUTION as usize)
        .ok_or(MathError::Overflow)?;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        Ok(div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?,
            sqrt_ratio_a_x96,
        )?)
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
    }
}

/// Token1 amount between two sqrt prices for a given liquidity:
/// `liquidity · (upper − lower) / 2^96`.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: U256,
    round_up: bool,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    if round_up {
        mul_div_rounding_up(liquidity, sqrt_ratio_b_x96 - sqrt_ratio_a_x96, Q96)
    } else {
        mul_div(liquidity, sqrt_ratio_b_x96 - sqrt_ratio_a_x96, Q96)
    }
}

/// Signed token0 delta for a signed liquidity change: rounded up when
/// liquidity is added, rounded down and negated when it is removed.
pub fn get_amount_0_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: I256,
) -> Result<I256, Error> {
    if liquidity.is_negative() {
        let amount = get_amount_0_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            false,
        )?;
        Ok(-to_signed(amount)?)
    } else {
        let amount = get_amount_0_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.into_raw(),
            true,
        )?;
        Ok(to_signed(amount)?)
    }
}

/// Signed token1 delta for a signed liquidity change.
pub fn get_amount_1_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: I256,
) -> Result<I256, MathError> {
    if liquidity.is_negative() {
        let amount = get_amount_1_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            false,
        )?;
        Ok(-to_signed(amount)?)
    } else {
        let amount = get_amount_1_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.into_raw(),
            true,
        )?;
        to_signed(amount)
    }
}

/// Computes the next sqrt price when swapping *into* the pool
/// (`amount_in`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
pub fn get_next_sqrt_price_from_input(
    sqrt_p_x96: U256,
    liquidity: U256,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::PriceNotPositive.into());
    }
    if liquidity.is_zero() {
        return Err(StateError::LiquidityNotPositive.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_in, true)
    }
}

/// Computes the next sqrt price when swapping *out of* the pool
/// (`amount_out`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
pub fn get_next_sqrt_price_from_output(
    sqrt_p_x96: U256,
    liquidity: U256,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::PriceNotPositive.into());
    }
    if liquidity.is_zero() {
        return Err(StateError::LiquidityNotPositive.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_out, false)
    }
}
