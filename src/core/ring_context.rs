// src/core/ring_context.rs

use num::BigInt;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// The polynomial ring Z/m[x1, ..., xn] every algorithm in this crate runs against.
///
/// Read-only for the duration of a call; it is `Copy` so polynomials and ideals carry
/// their own copy instead of borrowing a shared context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RingContext {
    modulus: u64,
    variables: usize,
}

impl RingContext {
    pub fn new(modulus: u64, variables: usize) -> Self {
        if modulus < 2 {
            panic!("The ring characteristic must be at least 2, but you have supplied: {}", modulus);
        }
        if variables < 1 {
            panic!("The ring needs at least one variable.");
        }
        RingContext { modulus, variables }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn modulus_bigint(&self) -> BigInt {
        BigInt::from(self.modulus)
    }

    pub fn variables(&self) -> usize {
        self.variables
    }
}

impl Display for RingContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let names: Vec<String> = (1..=self.variables).map(|i| format!("x{}", i)).collect();
        write!(f, "Z/{}[{}]", self.modulus, names.join(", "))
    }
}
