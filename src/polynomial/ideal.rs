// src/polynomial/ideal.rs

use std::fmt::{Display, Formatter, Result};

use crate::core::ring_context::RingContext;
use crate::polynomial::polynomial::Polynomial;

/// An ordered list of generators. Zero generators and exact duplicates are never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ideal {
    ring: RingContext,
    generators: Vec<Polynomial>,
}

impl Ideal {
    pub fn new(ring: RingContext) -> Self {
        Ideal { ring, generators: Vec::new() }
    }

    pub fn ring(&self) -> RingContext {
        self.ring
    }

    /// Appends `generator` unless it is zero or already present. Returns whether it was added.
    pub fn insert_with_tests(&mut self, generator: Polynomial) -> bool {
        assert_eq!(generator.ring(), self.ring, "generator belongs to a different ring");
        if generator.is_zero() || self.contains(&generator) {
            return false;
        }
        self.generators.push(generator);
        true
    }

    pub fn contains(&self, generator: &Polynomial) -> bool {
        self.generators.iter().any(|g| g == generator)
    }

    pub fn generators(&self) -> &[Polynomial] {
        &self.generators
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Same generators, in any order.
    pub fn same_generators(&self, other: &Ideal) -> bool {
        self.ring == other.ring
            && self.len() == other.len()
            && self.generators.iter().all(|g| other.contains(g))
    }
}

impl Display for Ideal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, generator) in self.generators.iter().enumerate() {
            writeln!(f, "_[{}] = {}", i + 1, generator)?;
        }
        Ok(())
    }
}
