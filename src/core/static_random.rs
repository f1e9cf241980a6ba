// src/core/static_random.rs

use num::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::ring_context::RingContext;
use crate::polynomial::monomial::ExponentVector;
use crate::polynomial::polynomial::Polynomial;

/// Random source for test and benchmark inputs.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    /// Reproducible stream for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        StaticRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_max(&mut self, max_value: u64) -> u64 {
        self.rng.random_range(0..max_value)
    }

    pub fn next_range(&mut self, min_value: u64, max_value: u64) -> u64 {
        self.rng.random_range(min_value..max_value)
    }

    /// Exponent vector with every coordinate in 0..=max_exponent.
    pub fn next_exponent_vector(&mut self, variables: usize, max_exponent: u32) -> ExponentVector {
        ExponentVector::new((0..variables).map(|_| self.rng.random_range(0..=max_exponent)).collect())
    }

    /// Polynomial with up to `max_terms` terms (fewer if terms collide or cancel).
    pub fn next_polynomial(&mut self, ring: RingContext, max_terms: usize, max_exponent: u32) -> Polynomial {
        let count = self.rng.random_range(0..=max_terms);
        let mut result = Polynomial::zero(ring);
        for _ in 0..count {
            let coefficient = BigInt::from(self.next_max(ring.modulus()));
            let alpha = self.next_exponent_vector(ring.variables(), max_exponent);
            result.add_term(coefficient, alpha);
        }
        result
    }
}
