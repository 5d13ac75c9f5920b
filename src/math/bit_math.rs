use crate::error::MathError;
use alloy_primitives::U256;

/// Bit widths probed from coarse to fine while searching for the top bit.
const POWERS: [usize; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Returns the index (0–255) of the most significant set bit in a `U256`,
/// or `MathError::InvalidInput` if the input is zero.
///
/// Binary search over the bit widths in [`POWERS`]: whenever `x` is at least
/// `2^power` it is shifted right by `power` and `power` is added to the index,
/// so eight comparisons always suffice.
pub fn most_significant_bit(mut x: U256) -> Result<u8, MathError> {
    if x.is_zero() {
        return Err(MathError::InvalidInput);
    }

    let mut msb: usize = 0;
    for power in POWERS {
        if x >= U256::ONE << power {
            x >>= power;
            msb += power;
        }
    }
    Ok(msb as u8)
}
