//! Random test-array generation.
//!
//! Arrays are filled with bounded non-negative values and exactly one
//! planted negative value at a random position, so every generated array
//! has a minimum that is guaranteed to be negative.

use rand::Rng;
use thiserror::Error;

/// The requested array size was zero.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("array size must be positive")]
pub struct ZeroSizeError;

/// Exclusive upper bound for the non-negative fill values.
pub const FILL_BOUND: i32 = 1000;

/// Inclusive bounds of the planted negative value.
pub const PLANT_MIN: i32 = -99;
pub const PLANT_MAX: i32 = -1;

/// Generates `size` values using the thread-local RNG.
///
/// See [`generate_with`].
pub fn generate(size: usize) -> Result<Vec<i32>, ZeroSizeError> {
    generate_with(&mut rand::thread_rng(), size)
}

/// Generates `size` values drawn uniformly from `[0, FILL_BOUND)`, then
/// overwrites one uniformly chosen slot with a uniform value in
/// `[PLANT_MIN, PLANT_MAX]`.
///
/// Rejects `size == 0`. Deterministic given a seeded `rng`.
pub fn generate_with<R: Rng>(rng: &mut R, size: usize) -> Result<Vec<i32>, ZeroSizeError> {
    if size == 0 {
        return Err(ZeroSizeError);
    }

    let mut values: Vec<i32> = (0..size).map(|_| rng.gen_range(0..FILL_BOUND)).collect();
    let planted = rng.gen_range(0..size);
    values[planted] = -rng.gen_range(1..=-PLANT_MIN);
    Ok(values)
}
