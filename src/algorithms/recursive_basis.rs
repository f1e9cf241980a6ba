// src/algorithms/recursive_basis.rs
//
// Recursive construction of the same basis along the prime factorization of m.
//
// With q the largest prime factor of m, the basis for m is derived from the basis for m / q:
// a generator (a, alpha) that already vanishes modulo m survives; otherwise it is scaled by q
// and, per coordinate, alpha is pushed up to the next exponent at which the factorial product
// picks up another factor q. Peeling off the largest prime means primes enter in increasing
// order as the recursion unwinds, which is what keeps the result complete when m has several
// distinct prime factors.
//
// Generators travel as (scalar, alpha) pairs and are expanded to polynomials only once, after
// the top-level call has collected them all.

use log::{debug, trace};

use crate::algorithms::generator::{exponent_from, is_minimal, GeneratorTerm};
use crate::core::operation_counter::{Operation, OperationCounter};
use crate::core::ring_context::RingContext;
use crate::integer_math::factored_number::FactoredNumber;
use crate::polynomial::ideal::Ideal;
use crate::polynomial::monomial::ExponentVector;

pub struct RecursiveBasisBuilder {
    ring: RingContext,
}

impl RecursiveBasisBuilder {
    pub fn new(ring: RingContext) -> Self {
        RecursiveBasisBuilder { ring }
    }

    pub fn build(&self, counter: &mut OperationCounter) -> Ideal {
        let modulus = FactoredNumber::new(self.ring.modulus());
        let terms = self.build_terms(&modulus, counter);

        let mut ideal = Ideal::new(self.ring);
        for term in &terms {
            ideal.insert_with_tests(term.expand(self.ring, counter));
        }

        debug!("recursive basis over {}: {} generators", self.ring, ideal.len());
        ideal
    }

    /// The generators for modulus `m` in compact form.
    pub fn build_terms(&self, m: &FactoredNumber, counter: &mut OperationCounter) -> Vec<GeneratorTerm> {
        let n = self.ring.variables();
        let q = m.largest_prime_factor();
        let mut terms = Vec::new();

        if m.to_u64() == Some(q) {
            // x_i^q for every variable is already a minimal basis over a prime
            let exponent = exponent_from(q);
            for i in 0..n {
                terms.push(GeneratorTerm::new(FactoredNumber::one(), ExponentVector::unit(n, i, exponent)));
            }
            trace!("base case m = {}: {} generators", q, n);
            return terms;
        }

        let prime = FactoredNumber::new(q);
        let reduced = m.cancel(&prime);
        counter.record(Operation::Cancel);
        let smaller = self.build_terms(&reduced, counter);

        for term in smaller {
            let fac = FactoredNumber::factorial_product(&term.alpha);
            let product = &term.scalar * &fac;
            counter.record_many(
                Operation::Multiply,
                1 + term.alpha.iter().filter(|&&e| e >= 2).map(|&e| (e - 1) as usize).sum::<usize>(),
            );
            counter.record(Operation::Divides);

            if m.divides(&product) {
                Self::checked_insert(&mut terms, m, term, &fac, counter);
                continue;
            }

            let scaled = GeneratorTerm::new(&term.scalar * &prime, term.alpha.clone());
            Self::checked_insert(&mut terms, m, scaled, &fac, counter);

            let mut alpha = term.alpha.clone();
            for i in 0..n {
                let original = alpha[i];
                let mut raised = fac.clone();
                let exponent = raised.exponent_of(q);
                while raised.exponent_of(q) == exponent {
                    alpha[i] += 1;
                    raised = &raised * &FactoredNumber::new(alpha[i] as u64);
                    counter.record(Operation::Multiply);
                }
                let b = m.cancel(&raised);
                counter.record(Operation::Cancel);
                Self::checked_insert(&mut terms, m, GeneratorTerm::new(b, alpha.clone()), &raised, counter);
                alpha[i] = original;
            }
        }

        trace!(
            "m = {} = {}: {} generators",
            m,
            m.factorization().format_string_as_factorization(),
            terms.len()
        );
        terms
    }

    fn checked_insert(
        terms: &mut Vec<GeneratorTerm>,
        m: &FactoredNumber,
        term: GeneratorTerm,
        fac: &FactoredNumber,
        counter: &mut OperationCounter,
    ) {
        counter.record(Operation::CheckedInsert);
        if is_minimal(m, &term.alpha, &term.scalar, fac, counter) && !terms.contains(&term) {
            terms.push(term);
        }
    }
}
