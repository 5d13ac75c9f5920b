use crate::error::MathError;
use crate::math::full_math::{narrow, widen};
use crate::math::quad_math::sqrt;
use alloy_primitives::U256;

/// Returns the Q64.96 sqrt price for a `amount1 / amount0` ratio:
/// `floor(sqrt((amount1 << 192) / amount0))`.
pub fn encode_sqrt_ratio_x96(amount1: U256, amount0: U256) -> Result<U256, MathError> {
    if amount0.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let ratio_x192 = (widen(amount1) << 192) / widen(amount0);
    narrow(sqrt(ratio_x192))
}
