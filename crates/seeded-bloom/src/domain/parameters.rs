//! Bloom filter sizing and false positive estimation
//!
//! Formulas:
//! - k = ceil(9m / 13n)       -- hash count used by the filter
//! - FPR = (1 - e^(-kn/m))^k  -- assumes independent hash positions
//!
//! 9/13 = 0.6923 approximates ln(2) = 0.6931 with integer arithmetic only.
//! Existing filters are sized against this exact ratio, so it must not be
//! replaced by `LN_2`.

use crate::error::FilterError;

const LN2_NUMERATOR: u128 = 9;
const LN2_DENOMINATOR: u128 = 13;

/// Number of hash positions per element: `ceil(9 * bit_capacity / (13 * expected_elements))`
///
/// Computed in 128-bit integers so it is exact for every `usize` input.
/// The result is always at least 1 and never exceeds `bit_capacity`.
pub fn hash_count(bit_capacity: usize, expected_elements: usize) -> Result<usize, FilterError> {
    if bit_capacity == 0 {
        return Err(FilterError::InvalidParameters(
            "bit_capacity must be greater than 0".to_string(),
        ));
    }
    if expected_elements == 0 {
        return Err(FilterError::InvalidParameters(
            "expected_elements must be greater than 0".to_string(),
        ));
    }

    let numerator = LN2_NUMERATOR * bit_capacity as u128;
    let denominator = LN2_DENOMINATOR * expected_elements as u128;
    let k = numerator.div_ceil(denominator);

    usize::try_from(k).map_err(|_| {
        FilterError::InvalidParameters(format!("hash count {} does not fit in usize", k))
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
///
/// k above `i32::MAX` is clamped; the result stays in `[0, 1]`.
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(i32::try_from(k).unwrap_or(i32::MAX))
}
