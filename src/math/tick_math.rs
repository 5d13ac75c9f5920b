use crate::error::{Error, StateError};
use crate::math::bit_math::most_significant_bit;
use alloy_primitives::{I256, U256};
use tracing::trace;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Q128 value of `1 / sqrt(1.0001)`, the starting ratio for odd `|tick|`.
const ODD_TICK_RATIO: U256 =
    U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0]);
/// Q128 value of `1`, the starting ratio for even `|tick|`.
const EVEN_TICK_RATIO: U256 = U256::from_limbs([0, 0, 1, 0]);

/// `(bit of |tick|, Q128 value of 1 / sqrt(1.0001)^bit)`, applied in order.
const TICK_RATIO_MULTIPLIERS: [(u32, U256); 19] = [
    (0x2, U256::from_limbs([6459403834229662010, 18444899583751176498, 0, 0])),
    (0x4, U256::from_limbs([17226890335427755468, 18443055278223354162, 0, 0])),
    (0x8, U256::from_limbs([2032852871939366096, 18439367220385604838, 0, 0])),
    (0x10, U256::from_limbs([14545316742740207172, 18431993317065449817, 0, 0])),
    (0x20, U256::from_limbs([5129152022828963008, 18417254355718160513, 0, 0])),
    (0x40, U256::from_limbs([4894419605888772193, 18387811781193591352, 0, 0])),
    (0x80, U256::from_limbs([1280255884321894483, 18329067761203520168, 0, 0])),
    (0x100, U256::from_limbs([15924666964335305636, 18212142134806087854, 0, 0])),
    (0x200, U256::from_limbs([8010504389359918676, 17980523815641551639, 0, 0])),
    (0x400, U256::from_limbs([10668036004952895731, 17526086738831147013, 0, 0])),
    (0x800, U256::from_limbs([4878133418470705625, 16651378430235024244, 0, 0])),
    (0x1000, U256::from_limbs([9537173718739605541, 15030750278693429944, 0, 0])),
    (0x2000, U256::from_limbs([9972618978014552549, 12247334978882834399, 0, 0])),
    (0x4000, U256::from_limbs([10428997489610666743, 8131365268884726200, 0, 0])),
    (0x8000, U256::from_limbs([9305304367709015974, 3584323654723342297, 0, 0])),
    (0x10000, U256::from_limbs([14301143598189091785, 696457651847595233, 0, 0])),
    (0x20000, U256::from_limbs([7393154844743099908, 26294789957452057, 0, 0])),
    (0x40000, U256::from_limbs([2209338891292245656, 37481735321082, 0, 0])),
    (0x80000, U256::from_limbs([10518117631919034274, 76158723, 0, 0])),
];

/// `log_sqrt(1.0001)(2)` in Q64 fixed point (255738958999603826347141).
pub const SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));
/// Rounding offset for the low tick candidate (3402992956809132418596140100660247210).
pub const TICK_LOW: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
/// Rounding offset for the high tick candidate (291339464771989622907027621153398088495).
pub const TICK_HIGH: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

const LOG2_FRACTION_BITS: usize = 14;
const SHIFT_128: usize = 128;
const LOW_32_BITS_MASK: u64 = 0xFFFF_FFFF;

/// Returns the sqrt price (Q64.96 fixed‑point) at a given tick index,
/// or `StateError::InvalidTick` if the tick is outside
/// `[MIN_TICK, MAX_TICK]`.
///
/// The ratio is built in Q128 by multiplying in one precomputed factor per
/// set bit of `|tick|`, inverted for positive ticks, then rounded up into Q96
/// so the result never under-estimates the true price.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, StateError> {
    let abs_tick = tick.unsigned_abs();

    if abs_tick > MAX_TICK as u32 {
        return Err(StateError::InvalidTick);
    }

    let mut ratio = if abs_tick & 0x1 != 0 {
        ODD_TICK_RATIO
    } else {
        EVEN_TICK_RATIO
    };

    for (bit, multiplier) in TICK_RATIO_MULTIPLIERS {
        if abs_tick & bit != 0 {
            // both factors are below 2^129, so the product fits in 256 bits
            ratio = ratio.wrapping_mul(multiplier) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    let round_up = ratio.as_limbs()[0] & LOW_32_BITS_MASK != 0;
    Ok((ratio >> 32) + U256::from(round_up as u8))
}

/// Computes the greatest tick whose sqrt price is at or below the given
/// sqrt price (Q64.96), failing with `StateError::InvalidSqrtRatio`
/// outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> Result<i32, Error> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(StateError::InvalidSqrtRatio.into());
    }

    let ratio = sqrt_price_x96 << 32;
    let msb = most_significant_bit(ratio)? as usize;

    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: I256 =
        (I256::from_raw(U256::from(msb)) - I256::from_raw(U256::from(128u8))) << 64;

    for i in 0..LOG2_FRACTION_BITS {
        // r < 2^129, so r² fits in 256 bits
        r = r.wrapping_mul(r) >> 127;
        let f = r >> SHIFT_128;
        log_2 |= I256::from_raw(f << (63 - i));
        r >>= f.as_limbs()[0] as usize;
    }

    let log_sqrt10001 = log_2.wrapping_mul(SQRT_10001);
    let tick_low = ((log_sqrt10001 - TICK_LOW) >> SHIFT_128).low_i32();
    let tick_high = ((log_sqrt10001 + TICK_HIGH) >> SHIFT_128).low_i32();

    if tick_low == tick_high {
        return Ok(tick_low);
    }

    let sqrt_ratio_at_high = get_sqrt_ratio_at_tick(tick_high)?;
    trace!(
        tick_low,
        tick_high,
        %sqrt_ratio_at_high,
        %sqrt_price_x96,
        "disambiguating tick candidates"
    );

    Ok(if sqrt_ratio_at_high <= sqrt_price_x96 {
        tick_high
    } else {
        tick_low
    })
}
