//! Generates random symmetric instances used to benchmark solvers.

#[cfg(test)]
#[path = "../tests/unit/generator_test.rs"]
mod generator_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use tsp_core::models::DistanceMatrix;
use tsp_core::utils::{Float, TspError};

/// Minimal generated weight.
pub const MIN_WEIGHT: i32 = 1;

/// Maximal generated weight.
pub const MAX_WEIGHT: i32 = 100;

/// Generates a symmetric matrix with zero diagonal and integer weights distributed uniformly
/// on `[MIN_WEIGHT, MAX_WEIGHT]`. Generated instances are not guaranteed to be metric.
pub fn generate_matrix<R: Rng>(size: usize, rng: &mut R) -> Result<DistanceMatrix, TspError> {
    let mut values = vec![0.; size * size];

    for i in 0..size {
        for j in i + 1..size {
            let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT) as Float;
            values[i * size + j] = weight;
            values[j * size + i] = weight;
        }
    }

    DistanceMatrix::new(values)
}

/// Generates a matrix using a random generator seeded with the given value,
/// so the same seed always gives the same instance.
pub fn generate_matrix_with_seed(size: usize, seed: u64) -> Result<DistanceMatrix, TspError> {
    generate_matrix(size, &mut SmallRng::seed_from_u64(seed))
}

/// Generates a matrix using a random generator seeded from the system entropy.
pub fn generate_random_matrix(size: usize) -> Result<DistanceMatrix, TspError> {
    generate_matrix(size, &mut SmallRng::from_entropy())
}
