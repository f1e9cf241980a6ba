// src/algorithms/zero_function.rs
//
// Kalla's algorithm: a polynomial over Z/m is the zero function iff it vanishes on
// {0, ..., s - 1}^n with s = smarandache(m). Values are substituted one variable at a time
// and the search stops at the first point where something nonzero is left.

use log::debug;

use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::polynomial::Polynomial;

/// Entry reported for every coordinate by `first_nonzero_tuple` when there is no witness.
pub const NO_WITNESS: i64 = -1;

pub struct ZeroFunctionTester {
    ring: RingContext,
    bound: u64,
}

impl ZeroFunctionTester {
    pub fn new(ring: RingContext) -> Self {
        let bound = FactoredNumber::new(ring.modulus()).smarandache();
        ZeroFunctionTester { ring, bound }
    }

    /// Values 0..bound are tried for every variable.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn is_zero_function(&self, f: &Polynomial, counter: &mut OperationCounter) -> bool {
        self.find_nonzero_tuple(f, counter).is_none()
    }

    /// The first point, in the order the search visits them, where `f` does not vanish.
    pub fn find_nonzero_tuple(&self, f: &Polynomial, counter: &mut OperationCounter) -> Option<Vec<u64>> {
        assert_eq!(f.ring(), self.ring, "polynomial belongs to a different ring");
        counter.record_many(Operation::Multiply, self.bound as usize);
        counter.record_many(Operation::Divides, self.bound as usize);

        let mut witness = vec![0u64; self.ring.variables()];
        let vanishes = self.search(f, 0, &mut witness, counter);
        debug!(
            "zero test over {} with bound {}: {}",
            self.ring,
            self.bound,
            if vanishes { "zero function".to_string() } else { format!("nonzero at {:?}", witness) }
        );
        if vanishes {
            None
        } else {
            Some(witness)
        }
    }

    /// Witness as a sequence of integers, all `NO_WITNESS` if `f` is the zero function.
    pub fn first_nonzero_tuple(&self, f: &Polynomial, counter: &mut OperationCounter) -> Vec<i64> {
        match self.find_nonzero_tuple(f, counter) {
            Some(tuple) => tuple.into_iter().map(|value| value as i64).collect(),
            None => vec![NO_WITNESS; self.ring.variables()],
        }
    }

    /// True iff `f`, whose variables before `var` are already substituted, vanishes for every
    /// choice of the remaining ones. On false, witness[var..] holds the values that exposed it.
    fn search(&self, f: &Polynomial, var: usize, witness: &mut [u64], counter: &mut OperationCounter) -> bool {
        if f.is_zero() {
            return true;
        }
        if var == self.ring.variables() {
            return false;
        }

        for value in 0..self.bound {
            let substituted = f.substitute(var, value);
            counter.record_many(Operation::PolyAdd, f.len());
            witness[var] = value;
            if !self.search(&substituted, var + 1, witness, counter) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    fn tester(m: u64, n: usize) -> (RingContext, ZeroFunctionTester) {
        let ring = RingContext::new(m, n);
        (ring, ZeroFunctionTester::new(ring))
    }

    #[test]
    fn test_vanishing_polynomials() {
        let (ring, tester) = tester(4, 1);
        let mut counter = OperationCounter::disabled();
        assert!(tester.is_zero_function(&Polynomial::parse(ring, "x1^4 - x1^2").unwrap(), &mut counter));
        assert!(tester.is_zero_function(&Polynomial::parse(ring, "2*x1^2 + 2*x1").unwrap(), &mut counter));
        assert!(tester.is_zero_function(&Polynomial::zero(ring), &mut counter));
        assert!(!tester.is_zero_function(&Polynomial::parse(ring, "x1^2 + x1").unwrap(), &mut counter));
    }

    #[test]
    fn test_witness() {
        let (ring, tester) = tester(6, 2);
        let mut counter = OperationCounter::disabled();
        let f = Polynomial::parse(ring, "x1*x2 - x2").unwrap();
        let tuple = tester.find_nonzero_tuple(&f, &mut counter).unwrap();
        assert_ne!(f.evaluate(&tuple), BigInt::from(0));
        assert_eq!(tuple, vec![0, 1]);
    }

    #[test]
    fn test_sentinel_for_zero_function() {
        let (ring, tester) = tester(6, 3);
        let mut counter = OperationCounter::disabled();
        let f = Polynomial::parse(ring, "x2^3 - x2").unwrap();
        assert_eq!(tester.first_nonzero_tuple(&f, &mut counter), vec![NO_WITNESS; 3]);
        let g = Polynomial::constant(ring, BigInt::from(5));
        assert_eq!(tester.first_nonzero_tuple(&g, &mut counter), vec![0, 0, 0]);
    }

    #[test]
    fn test_bound() {
        assert_eq!(tester(8, 1).1.bound(), 4);
        assert_eq!(tester(7, 2).1.bound(), 7);
    }
}
