use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - underflow")]
    Underflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("Math error - invalid input")]
    InvalidInput,
    #[error("Math error - invariant violation")]
    InvariantViolation,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("State error - invalid tick")]
    InvalidTick,
    #[error("State error - invalid sqrt ratio")]
    InvalidSqrtRatio,
    #[error("State error - sqrt price is not positive")]
    PriceNotPositive,
    #[error("State error - liquidity is not positive")]
    LiquidityNotPositive,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),
}
