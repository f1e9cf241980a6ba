// src/polynomial/monomial.rs

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, IndexMut};

/// Exponent vector alpha of a monomial x1^alpha_1 * ... * xn^alpha_n.
///
/// Ordered graded-lexicographically: total degree first, then the exponents compared from
/// the first variable on. Every componentwise smaller vector is therefore strictly smaller,
/// which is what the normal-form reduction relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ExponentVector(Vec<u32>);

impl ExponentVector {
    pub fn new(exponents: Vec<u32>) -> Self {
        ExponentVector(exponents)
    }

    pub fn zero(variables: usize) -> Self {
        ExponentVector(vec![0; variables])
    }

    /// The exponent vector of x_index^exponent.
    pub fn unit(variables: usize, index: usize, exponent: u32) -> Self {
        let mut result = Self::zero(variables);
        result.0[index] = exponent;
        result
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    pub fn total_degree(&self) -> u64 {
        self.0.iter().map(|&e| e as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Componentwise sum, the exponent vector of the product of the two monomials.
    ///
    /// Panics if a coordinate overflows u32.
    pub fn add_exponents(&self, other: &ExponentVector) -> ExponentVector {
        let sums = self.0.iter().zip(other.0.iter()).map(|(&a, &b)| match a.checked_add(b) {
            Some(sum) => sum,
            None => panic!("Exponent {} + {} does not fit in u32.", a, b),
        });
        ExponentVector(sums.collect())
    }
}

impl Index<usize> for ExponentVector {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for ExponentVector {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.0[index]
    }
}

impl PartialOrd for ExponentVector {
    fn partial_cmp(&self, other: &ExponentVector) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExponentVector {
    fn cmp(&self, other: &ExponentVector) -> Ordering {
        self.total_degree()
            .cmp(&other.total_degree())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl Display for ExponentVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
