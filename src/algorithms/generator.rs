// src/algorithms/generator.rs
//
// Compact (scalar, exponent vector) form of a generator p(alpha, a) and the minimality
// check both basis builders apply before inserting one.

use log::trace;

use crate::algorithms::vanishing_monomial::VanishingMonomial;
use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::monomial::ExponentVector;
use crate::polynomial::polynomial::Polynomial;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorTerm {
    pub scalar: FactoredNumber,
    pub alpha: ExponentVector,
}

impl GeneratorTerm {
    pub fn new(scalar: FactoredNumber, alpha: ExponentVector) -> Self {
        GeneratorTerm { scalar, alpha }
    }

    /// The generator polynomial p(alpha, scalar).
    pub fn expand(&self, ring: RingContext, counter: &mut OperationCounter) -> Polynomial {
        VanishingMonomial::build_instrumented(ring, &self.alpha, self.scalar.value(), counter)
    }
}

/// True iff no coordinate of `alpha` can be lowered by one while `modulus` still forces the
/// same annihilating scalar `a`.
///
/// `fac` must be the factorial product of `alpha`. Lowering alpha_i by one divides `fac` by
/// alpha_i, which is `fac.cancel(alpha_i)` because alpha_i divides alpha_i!.
pub fn is_minimal(
    modulus: &FactoredNumber,
    alpha: &ExponentVector,
    a: &FactoredNumber,
    fac: &FactoredNumber,
    counter: &mut OperationCounter,
) -> bool {
    for (i, &exponent) in alpha.iter().enumerate() {
        if exponent == 0 {
            continue;
        }
        let lowered = fac.cancel(&FactoredNumber::new(exponent as u64));
        counter.record_many(Operation::Cancel, 2);
        if &modulus.cancel(&lowered) == a {
            trace!("({}, {}) is not minimal in coordinate {}", a, alpha, i + 1);
            return false;
        }
    }
    true
}

/// Converts an exponent bound into an exponent, panicking if the ring is too large for the
/// combinatorial algorithms to make sense.
pub fn exponent_from(value: u64) -> u32 {
    match u32::try_from(value) {
        Ok(exponent) => exponent,
        Err(_) => panic!("Exponent bound {} exceeds the supported exponent range.", value),
    }
}
