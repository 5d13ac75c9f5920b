//! Bit-exact off-chain math for proMM (Kyber Elastic style) concentrated
//! liquidity pools.
//!
//! This crate exposes:
//! - Fixed-point primitives (`math::*`): 512-bit `mul_div`, tick ↔ sqrt price
//!   conversion, price movement under token deltas and liquidity sizing.
//! - The proMM swap step, which charges the fee as added liquidity.
//! - Optional `periphery` encoders for router payment calls.
//!
//! Every function is pure and returns a [`error::Error`] or one of its
//! component enums instead of panicking on bad input.
//!
//! # Examples
//!
//! ## Tick math
//! ```
//! use promm_math::{math::tick_math, Q96, RESOLUTION};
//!
//! let sqrt_price = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
//! assert_eq!(sqrt_price, Q96);
//! assert_eq!(tick_math::get_tick_at_sqrt_ratio(sqrt_price).unwrap(), 0);
//! assert_eq!(RESOLUTION, 96);
//! ```
//!
//! ## One swap step
//! ```
//! use promm_math::{
//!     constants::FeeAmount,
//!     math::{swap_math::compute_swap_step, tick_math::get_sqrt_ratio_at_tick},
//!     I256, Q96, U256,
//! };
//!
//! let target = get_sqrt_ratio_at_tick(-100).unwrap();
//! let liquidity = U256::from(1_000_000_000_000_000_000u128); // 1e18
//! let amount_in = I256::try_from(1_000_000_000_000_000i64).unwrap(); // 1e15 token0
//!
//! let step = compute_swap_step(
//!     Q96,
//!     target,
//!     liquidity,
//!     amount_in,
//!     FeeAmount::Medium.units(),
//!     true, // exact input
//!     true, // amount is token0
//! )
//! .unwrap();
//! assert!(step.sqrt_ratio_next_x96 < Q96 && step.sqrt_ratio_next_x96 > target);
//! assert!(step.returned_amount.is_negative());
//! ```

pub use alloy_primitives::{Address, I256, U256, U512};

pub mod constants;
pub mod entities;
pub mod error;
pub mod math;
#[cfg(feature = "periphery")]
pub mod periphery;

/// `2^160 - 1`, the largest value a sqrt price may take.
pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0]);

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
