// src/algorithms/vanishing_monomial.rs

use num::BigInt;

use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::polynomial::monomial::ExponentVector;
use crate::polynomial::polynomial::Polynomial;

/// Builder for the falling-factorial generators p(alpha, a).
pub struct VanishingMonomial;

impl VanishingMonomial {
    /// p(alpha, a) = a * prod_i (x_i - 1)(x_i - 2)...(x_i - alpha_i).
    ///
    /// The factor x_i itself (j = 0) is never included; a zero exponent contributes nothing,
    /// so the all-zero vector yields the constant a.
    pub fn build(ring: RingContext, alpha: &ExponentVector, a: &BigInt) -> Polynomial {
        Self::build_instrumented(ring, alpha, a, &mut OperationCounter::disabled())
    }

    pub fn build_instrumented(
        ring: RingContext,
        alpha: &ExponentVector,
        a: &BigInt,
        counter: &mut OperationCounter,
    ) -> Polynomial {
        counter.record(Operation::VanishingMonomial);
        let mut result = Polynomial::constant(ring, a.clone());
        for (i, &exponent) in alpha.iter().enumerate() {
            let x_i = Polynomial::variable(ring, i);
            for j in 1..=exponent {
                let shifted = &x_i - &Polynomial::constant(ring, BigInt::from(j));
                result = &result * &shifted;
                counter.record(Operation::PolyMult);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exponent_gives_constant() {
        let ring = RingContext::new(9, 3);
        let p = VanishingMonomial::build(ring, &ExponentVector::zero(3), &BigInt::from(5));
        assert_eq!(p, Polynomial::constant(ring, BigInt::from(5)));
    }

    #[test]
    fn test_falling_factorial_shape() {
        let ring = RingContext::new(7, 1);
        let p = VanishingMonomial::build(ring, &ExponentVector::new(vec![2]), &BigInt::from(1));
        // (x - 1)(x - 2) = x^2 - 3x + 2
        assert_eq!(p, Polynomial::parse(ring, "x1^2 - 3*x1 + 2").unwrap());
        assert_eq!(p.evaluate(&[0]), BigInt::from(2));
    }

    #[test]
    fn test_multivariate_product_and_scalar() {
        let ring = RingContext::new(8, 2);
        let alpha = ExponentVector::new(vec![1, 2]);
        let p = VanishingMonomial::build(ring, &alpha, &BigInt::from(4));
        let expected = &Polynomial::parse(ring, "4*x1 - 4").unwrap() * &Polynomial::parse(ring, "x2^2 - 3*x2 + 2").unwrap();
        assert_eq!(p, expected);
        let (leading, coefficient) = p.leading_term().unwrap();
        assert_eq!(leading, &alpha);
        assert_eq!(coefficient, &BigInt::from(4));
    }

    #[test]
    fn test_scalar_multiple_of_modulus_vanishes() {
        let ring = RingContext::new(6, 2);
        let p = VanishingMonomial::build(ring, &ExponentVector::new(vec![3, 1]), &BigInt::from(6));
        assert!(p.is_zero());
    }
}
