// src/integer_math/factored_number.rs
//
// Exact positive integers carried together with their prime factorization.
//
// The vanishing-ideal algorithms multiply factorials of exponent vectors together and then
// only ever ask gcd / divisibility / "cancel" questions about the result. Keeping the
// factorization next to the big-integer value answers those questions by comparing exponent
// maps, so the products of factorials never have to be factored or reduced by hand.

use num::{BigInt, Integer, One, ToPrimitive};
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};
use std::ops::Mul;

use crate::core::count_dictionary::CountDictionary;
use crate::integer_math::legendre::Legendre;
use crate::integer_math::trial_division::factorize;
use crate::polynomial::monomial::ExponentVector;

/// A positive integer with a lazily computed prime factorization.
///
/// Numbers built from a machine integer are factored on first use; every number produced by
/// combining two others gets its factorization from theirs and is never factored again.
/// Two instances are equal iff they denote the same integer.
#[derive(Clone, Debug)]
pub struct FactoredNumber {
    value: BigInt,
    factors: OnceCell<CountDictionary>,
}

impl FactoredNumber {
    /// Panics on 0; every quantity handled by the algorithms is positive.
    pub fn new(n: u64) -> Self {
        if n == 0 {
            panic!("FactoredNumber only represents positive integers.");
        }
        FactoredNumber { value: BigInt::from(n), factors: OnceCell::new() }
    }

    pub fn one() -> Self {
        Self::from_factors(CountDictionary::new())
    }

    pub fn from_factors(factors: CountDictionary) -> Self {
        let value = factors.product();
        FactoredNumber { value, factors: OnceCell::from(factors) }
    }

    /// k!, assembled from the factorizations of 2..=k.
    pub fn factorial(k: u32) -> Self {
        let mut factors = CountDictionary::new();
        for j in 2..=k as u64 {
            factors.combine(&factorize(j));
        }
        Self::from_factors(factors)
    }

    /// The product of the factorials of the exponents, alpha_1! * ... * alpha_n!.
    pub fn factorial_product(alpha: &ExponentVector) -> Self {
        let mut factors = CountDictionary::new();
        for &exponent in alpha.iter() {
            for j in 2..=exponent as u64 {
                factors.combine(&factorize(j));
            }
        }
        Self::from_factors(factors)
    }

    pub fn factorization(&self) -> &CountDictionary {
        self.factors.get_or_init(|| match self.value.to_u64() {
            Some(n) => factorize(n),
            None => panic!("The factorization of {} was not recorded when it was built.", self.value),
        })
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn to_bigint(&self) -> BigInt {
        self.value.clone()
    }

    /// Exact conversion; `None` when the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    pub fn multiply(&self, other: &FactoredNumber) -> FactoredNumber {
        let mut factors = self.factorization().clone();
        factors.combine(other.factorization());
        FactoredNumber { value: &self.value * &other.value, factors: OnceCell::from(factors) }
    }

    pub fn gcd(&self, other: &FactoredNumber) -> FactoredNumber {
        let factors = self.factorization().intersect(other.factorization());
        FactoredNumber { value: self.value.gcd(&other.value), factors: OnceCell::from(factors) }
    }

    /// `self / gcd(self, other)`: removes from `self` every prime power it shares with `other`.
    pub fn cancel(&self, other: &FactoredNumber) -> FactoredNumber {
        let factors = self.factorization().remove(other.factorization());
        let divisor = self.value.gcd(&other.value);
        FactoredNumber { value: &self.value / divisor, factors: OnceCell::from(factors) }
    }

    /// True iff `self` divides `other`.
    pub fn divides(&self, other: &FactoredNumber) -> bool {
        self.factorization().is_contained_in(other.factorization())
    }

    /// Largest k such that prime^k divides `self`.
    pub fn exponent_of(&self, prime: u64) -> u32 {
        self.factorization().get(prime)
    }

    /// 1 has no prime factors and reports 1.
    pub fn smallest_prime_factor(&self) -> u64 {
        self.factorization().keys().next().unwrap_or(1)
    }

    /// 1 has no prime factors and reports 1.
    pub fn largest_prime_factor(&self) -> u64 {
        self.factorization().keys().last().unwrap_or(1)
    }

    /// The Smarandache function: least s such that `self` divides s!.
    ///
    /// For each prime power p^k of the factorization the least s_p with p^k | s_p! is found
    /// through Legendre's formula; the answer is the largest of these.
    pub fn smarandache(&self) -> u64 {
        self.factorization()
            .iter()
            .map(|(prime, exponent)| Legendre::least_factorial_multiple(prime, exponent as u64))
            .max()
            .unwrap_or(1)
    }
}

impl From<u64> for FactoredNumber {
    fn from(n: u64) -> Self {
        FactoredNumber::new(n)
    }
}

impl Mul<&FactoredNumber> for &FactoredNumber {
    type Output = FactoredNumber;

    fn mul(self, other: &FactoredNumber) -> FactoredNumber {
        self.multiply(other)
    }
}

impl Mul for FactoredNumber {
    type Output = FactoredNumber;

    fn mul(self, other: FactoredNumber) -> FactoredNumber {
        self.multiply(&other)
    }
}

impl PartialEq for FactoredNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FactoredNumber {}

impl PartialOrd for FactoredNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FactoredNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for FactoredNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Display for FactoredNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}
