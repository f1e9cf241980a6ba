// src/algorithms/direct_basis.rs
//
// Direct construction of the strong Groebner basis of the vanishing ideal of Z/m[x1..xn].
//
// Every exponent vector alpha with coordinates up to s = smarandache(m) is visited depth
// first. For each one, a = m / gcd(m, alpha_1! * ... * alpha_n!) is the least scalar with
// p(alpha, a) vanishing on all of (Z/m)^n. The generator is kept when no coordinate can be
// lowered without a growing.

use log::{debug, trace};

use crate::algorithms::generator::{exponent_from, is_minimal};
use crate::algorithms::vanishing_monomial::VanishingMonomial;
use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::ideal::Ideal;
use crate::polynomial::monomial::ExponentVector;

pub struct DirectBasisBuilder {
    ring: RingContext,
    modulus: FactoredNumber,
    bound: u32,
}

impl DirectBasisBuilder {
    pub fn new(ring: RingContext) -> Self {
        let modulus = FactoredNumber::new(ring.modulus());
        let bound = exponent_from(modulus.smarandache());
        DirectBasisBuilder { ring, modulus, bound }
    }

    /// The per-coordinate exponent bound, smarandache(m).
    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn build(&self, counter: &mut OperationCounter) -> Ideal {
        counter.record_many(Operation::Multiply, self.bound as usize);
        counter.record_many(Operation::Divides, self.bound as usize);

        let mut ideal = Ideal::new(self.ring);
        let mut alpha = ExponentVector::zero(self.ring.variables());
        self.visit(0, &mut alpha, &mut ideal, counter);

        debug!(
            "direct basis over {}: smarandache bound {}, {} generators",
            self.ring, self.bound, ideal.len()
        );
        ideal
    }

    /// Walks alpha[var] = 0, 1, ..., bound, descending into the next coordinate at each step.
    ///
    /// Expects alpha[var..] to be all zero on entry and leaves them all zero on return, so the
    /// shared buffer is restored on every exit path including the early break.
    fn visit(&self, var: usize, alpha: &mut ExponentVector, ideal: &mut Ideal, counter: &mut OperationCounter) {
        let mut fac = FactoredNumber::factorial_product(alpha);
        counter.record_many(Operation::Multiply, alpha.iter().filter(|&&e| e >= 2).map(|&e| (e - 1) as usize).sum());
        let mut previous = self.modulus.clone();

        while alpha[var] <= self.bound {
            let a = self.modulus.cancel(&fac);
            counter.record(Operation::Cancel);

            // alpha[var] = 0 repeats the node the caller just examined
            let repeated = var > 0 && alpha[var] == 0;
            if !repeated && a != self.modulus && a != previous {
                counter.record(Operation::CheckedInsert);
                if is_minimal(&self.modulus, alpha, &a, &fac, counter) {
                    let generator = VanishingMonomial::build_instrumented(self.ring, alpha, a.value(), counter);
                    if ideal.insert_with_tests(generator) {
                        trace!("inserted p({}, {})", alpha, a);
                    }
                }
            }

            if a.is_one() {
                break;
            }
            if var + 1 < self.ring.variables() {
                self.visit(var + 1, alpha, ideal, counter);
            }

            previous = a;
            alpha[var] += 1;
            fac = &fac * &FactoredNumber::new(alpha[var] as u64);
            counter.record(Operation::Multiply);
        }

        alpha[var] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::polynomial::Polynomial;
    use num::BigInt;

    fn build(m: u64, n: usize) -> Ideal {
        DirectBasisBuilder::new(RingContext::new(m, n)).build(&mut OperationCounter::disabled())
    }

    fn generator(ring: RingContext, alpha: Vec<u32>, a: i64) -> Polynomial {
        VanishingMonomial::build(ring, &ExponentVector::new(alpha), &BigInt::from(a))
    }

    #[test]
    fn test_modulus_four_univariate() {
        let ring = RingContext::new(4, 1);
        let ideal = build(4, 1);
        assert_eq!(ideal.len(), 2);
        assert!(ideal.contains(&generator(ring, vec![2], 2)));
        assert!(ideal.contains(&generator(ring, vec![4], 1)));
    }

    #[test]
    fn test_prime_modulus() {
        let ring = RingContext::new(5, 2);
        let ideal = build(5, 2);
        assert_eq!(ideal.len(), 2);
        assert!(ideal.contains(&generator(ring, vec![5, 0], 1)));
        assert!(ideal.contains(&generator(ring, vec![0, 5], 1)));
    }

    #[test]
    fn test_modulus_six_bivariate() {
        let ring = RingContext::new(6, 2);
        let ideal = build(6, 2);
        let expected = [
            generator(ring, vec![2, 0], 3),
            generator(ring, vec![0, 2], 3),
            generator(ring, vec![3, 0], 1),
            generator(ring, vec![0, 3], 1),
        ];
        assert_eq!(ideal.len(), expected.len());
        for g in &expected {
            assert!(ideal.contains(g), "missing {}", g);
        }
    }

    #[test]
    fn test_mixed_generator_for_twelve() {
        // 2! * 2! = 4 already kills the factor 4 of 12, leaving scalar 3
        let ring = RingContext::new(12, 2);
        let ideal = build(12, 2);
        assert!(ideal.contains(&generator(ring, vec![2, 2], 3)));
        assert!(ideal.contains(&generator(ring, vec![2, 0], 6)));
        assert!(ideal.contains(&generator(ring, vec![3, 0], 2)));
        assert!(ideal.contains(&generator(ring, vec![4, 0], 1)));
        assert!(!ideal.contains(&generator(ring, vec![3, 1], 2)));
    }

    #[test]
    fn test_bound_is_smarandache() {
        assert_eq!(DirectBasisBuilder::new(RingContext::new(8, 1)).bound(), 4);
        assert_eq!(DirectBasisBuilder::new(RingContext::new(9, 3)).bound(), 6);
    }

    #[test]
    fn test_counter_sees_work() {
        let mut counter = OperationCounter::new();
        DirectBasisBuilder::new(RingContext::new(12, 2)).build(&mut counter);
        assert!(counter.count(Operation::Cancel) > 0);
        assert!(counter.count(Operation::VanishingMonomial) > 0);
    }
}
