use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, util::position::Position};

/// Converts an `i64` to the nearest `f64`.
///
/// Magnitudes above `2^53` round to the closest representable float, which is
/// the usual behaviour of mixed integer and float arithmetic.
///
/// ## Example
/// ```
/// use erlite::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a length or count into an interpreter integer.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit an `i64`, which
/// cannot happen for collections that fit in memory on 64-bit targets.
///
/// ## Example
/// ```
/// use erlite::util::{num::usize_to_i64_checked, position::Position};
///
/// assert_eq!(usize_to_i64_checked(3, Position::default()).unwrap(), 3);
/// ```
pub fn usize_to_i64_checked(value: usize, position: Position) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}
