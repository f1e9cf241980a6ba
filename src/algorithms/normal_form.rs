// src/algorithms/normal_form.rs

use num::{BigInt, Integer, Zero};
use log::{debug, trace};

use crate::algorithms::vanishing_monomial::VanishingMonomial;
use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::polynomial::Polynomial;

/// Reduces polynomials modulo the vanishing ideal without building its basis.
///
/// The leading term a*x^alpha is replaced by r*x^alpha with r = a mod c, where
/// c = m / gcd(alpha!, m) is the least scalar for which p(alpha, c) vanishes; the difference
/// (a - r) x^alpha is traded for the lower terms of p(alpha, a - r). Terms are taken in
/// decreasing graded-lex order, so each step removes the current leading monomial for good.
pub struct NormalFormReducer {
    ring: RingContext,
    modulus: FactoredNumber,
}

impl NormalFormReducer {
    pub fn new(ring: RingContext) -> Self {
        NormalFormReducer { ring, modulus: FactoredNumber::new(ring.modulus()) }
    }

    /// The least scalar c with p(alpha, c) in the vanishing ideal, for the given factorial product.
    pub fn term_modulus(&self, fac: &FactoredNumber) -> BigInt {
        self.modulus.cancel(&fac.gcd(&self.modulus)).to_bigint()
    }

    pub fn reduce(&self, f: &Polynomial, counter: &mut OperationCounter) -> Polynomial {
        assert_eq!(f.ring(), self.ring, "polynomial belongs to a different ring");

        let mut working = f.clone();
        let mut remainder = Polynomial::zero(self.ring);

        while let Some((alpha, a)) = working.leading_term().map(|(alpha, a)| (alpha.clone(), a.clone())) {
            let fac = FactoredNumber::factorial_product(&alpha);
            counter.record_many(Operation::Multiply, alpha.iter().filter(|&&e| e >= 2).map(|&e| (e - 1) as usize).sum());
            let c = self.term_modulus(&fac);
            counter.record(Operation::Gcd);
            counter.record(Operation::Cancel);

            let r = a.mod_floor(&c);
            working -= &VanishingMonomial::build_instrumented(self.ring, &alpha, &(&a - &r), counter);
            counter.record(Operation::PolyAdd);

            if !r.is_zero() {
                trace!("keeping {}*x^{} (term modulus {})", r, alpha, c);
                let kept = Polynomial::monomial(self.ring, r, alpha);
                remainder += &kept;
                working -= &kept;
                counter.record_many(Operation::PolyAdd, 2);
            }
        }

        debug!("normal form of {} terms has {} terms", f.len(), remainder.len());
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(ring: RingContext, input: &str) -> Polynomial {
        let f = Polynomial::parse(ring, input).unwrap();
        NormalFormReducer::new(ring).reduce(&f, &mut OperationCounter::disabled())
    }

    #[test]
    fn test_fourth_power_mod_four() {
        // x^4 agrees with x^2 on Z/4
        let ring = RingContext::new(4, 1);
        assert_eq!(reduce(ring, "x1^4"), Polynomial::parse(ring, "x1^2").unwrap());
    }

    #[test]
    fn test_term_modulus() {
        let ring = RingContext::new(4, 1);
        let reducer = NormalFormReducer::new(ring);
        assert_eq!(reducer.term_modulus(&FactoredNumber::factorial(4)), BigInt::from(1));
        assert_eq!(reducer.term_modulus(&FactoredNumber::factorial(3)), BigInt::from(2));
        assert_eq!(reducer.term_modulus(&FactoredNumber::factorial(1)), BigInt::from(4));
    }

    #[test]
    fn test_fermat_over_prime() {
        let ring = RingContext::new(5, 2);
        assert!(reduce(ring, "x1^5 - x1").is_zero());
        assert_eq!(reduce(ring, "x1^6*x2^5"), Polynomial::parse(ring, "x1^2*x2").unwrap());
    }

    #[test]
    fn test_reduced_polynomials_are_fixed() {
        let ring = RingContext::new(6, 2);
        let h = Polynomial::parse(ring, "2*x1^2 + x1*x2 + 5*x2 + 3").unwrap();
        assert_eq!(reduce(ring, &h.to_string()), h);
    }

    #[test]
    fn test_zero_reduces_to_zero() {
        let ring = RingContext::new(9, 1);
        assert!(reduce(ring, "0").is_zero());
    }
}
