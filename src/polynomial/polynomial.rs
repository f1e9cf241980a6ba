// src/polynomial/polynomial.rs

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num::{BigInt, Integer, One, Zero};
use log::trace;

use crate::core::ring_context::RingContext;
use crate::integer_math::modular::binary_power_mod;
use crate::polynomial::monomial::ExponentVector;

/// A polynomial in Z/m[x1, ..., xn].
///
/// Coefficients are kept reduced into [0, m) and zero terms are never stored, so the zero
/// polynomial is the one with no terms and structural equality is equality in the ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    ring: RingContext,
    terms: BTreeMap<ExponentVector, BigInt>,
}

impl Polynomial {
    pub fn zero(ring: RingContext) -> Self {
        Polynomial { ring, terms: BTreeMap::new() }
    }

    pub fn constant(ring: RingContext, value: BigInt) -> Self {
        Self::monomial(ring, value, ExponentVector::zero(ring.variables()))
    }

    pub fn monomial(ring: RingContext, coefficient: BigInt, alpha: ExponentVector) -> Self {
        let mut result = Self::zero(ring);
        result.add_term(coefficient, alpha);
        result
    }

    /// The variable x_(index + 1); indices are 0-based.
    pub fn variable(ring: RingContext, index: usize) -> Self {
        Self::monomial(ring, BigInt::one(), ExponentVector::unit(ring.variables(), index, 1))
    }

    pub fn from_terms(ring: RingContext, terms: Vec<(BigInt, ExponentVector)>) -> Self {
        let mut result = Self::zero(ring);
        for (coefficient, alpha) in terms {
            result.add_term(coefficient, alpha);
        }
        result
    }

    pub fn ring(&self) -> RingContext {
        self.ring
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in increasing monomial order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&ExponentVector, &BigInt)> {
        self.terms.iter()
    }

    /// The term with the largest exponent vector in graded-lex order.
    pub fn leading_term(&self) -> Option<(&ExponentVector, &BigInt)> {
        self.terms.last_key_value()
    }

    pub fn coefficient(&self, alpha: &ExponentVector) -> BigInt {
        self.terms.get(alpha).cloned().unwrap_or_else(BigInt::zero)
    }

    pub fn total_degree(&self) -> u64 {
        self.terms.keys().map(|alpha| alpha.total_degree()).max().unwrap_or(0)
    }

    /// Adds `coefficient * x^alpha`, reducing modulo m and dropping the term if it cancels.
    pub fn add_term(&mut self, coefficient: BigInt, alpha: ExponentVector) {
        assert_eq!(alpha.len(), self.ring.variables(), "exponent vector length does not match the ring");
        let modulus = self.ring.modulus_bigint();
        let current = self.terms.remove(&alpha).unwrap_or_else(BigInt::zero);
        let updated = (current + coefficient).mod_floor(&modulus);
        if !updated.is_zero() {
            self.terms.insert(alpha, updated);
        }
    }

    pub fn scale(&self, factor: &BigInt) -> Polynomial {
        let mut result = Polynomial::zero(self.ring);
        for (alpha, coefficient) in &self.terms {
            result.add_term(coefficient * factor, alpha.clone());
        }
        result
    }

    /// Value of the polynomial at `point`, reduced into [0, m).
    pub fn evaluate(&self, point: &[u64]) -> BigInt {
        assert_eq!(point.len(), self.ring.variables(), "point has the wrong number of coordinates");
        let modulus = self.ring.modulus();
        let mut result = BigInt::zero();
        for (alpha, coefficient) in &self.terms {
            let mut value = coefficient.clone();
            for (&x, &e) in point.iter().zip(alpha.iter()) {
                value *= BigInt::from(binary_power_mod(x, e, modulus));
            }
            result += value;
        }
        result.mod_floor(&self.ring.modulus_bigint())
    }

    /// Substitutes `value` for the variable with 0-based index `index`.
    ///
    /// The result lives in the same ring but no longer involves that variable.
    pub fn substitute(&self, index: usize, value: u64) -> Polynomial {
        let modulus = self.ring.modulus();
        let mut result = Polynomial::zero(self.ring);
        for (alpha, coefficient) in &self.terms {
            let power = binary_power_mod(value, alpha[index], modulus);
            if power == 0 {
                continue;
            }
            let mut reduced = alpha.clone();
            reduced[index] = 0;
            result.add_term(coefficient * BigInt::from(power), reduced);
        }
        trace!("substituted x{} = {}: {} terms -> {} terms", index + 1, value, self.len(), result.len());
        result
    }

    /// Parses input such as `3*x1^2*x2 - x2 + 5`. Variables are named x1..xn; a bare `x`
    /// is accepted for x1 in a univariate ring.
    pub fn parse(ring: RingContext, input: &str) -> std::result::Result<Polynomial, String> {
        let cleaned = input.replace(' ', "").replace('−', "-");
        if cleaned.is_empty() {
            return Err("Cannot parse an empty polynomial.".to_string());
        }

        let mut result = Polynomial::zero(ring);
        let normalized = cleaned.replace('-', "+-");
        for term in normalized.split('+').filter(|s| !s.is_empty()) {
            let (coefficient, alpha) = Self::parse_term(ring, term)?;
            result.add_term(coefficient, alpha);
        }
        Ok(result)
    }

    fn parse_term(ring: RingContext, input: &str) -> std::result::Result<(BigInt, ExponentVector), String> {
        let mut coefficient = BigInt::one();
        let mut alpha = ExponentVector::zero(ring.variables());

        for factor in input.split('*') {
            let mut factor = factor;
            while let Some(rest) = factor.strip_prefix('-') {
                coefficient = -coefficient;
                factor = rest;
            }
            if factor.is_empty() {
                return Err(format!("Invalid term '{}'.", input));
            }

            if let Some(variable) = factor.strip_prefix('x') {
                let (name, exponent) = match variable.split_once('^') {
                    Some((name, exponent)) => {
                        let exponent = exponent
                            .parse::<u32>()
                            .map_err(|_| format!("Invalid exponent '{}' in '{}'.", exponent, input))?;
                        (name, exponent)
                    }
                    None => (variable, 1),
                };
                let index = if name.is_empty() && ring.variables() == 1 {
                    0
                } else {
                    let number = name
                        .parse::<usize>()
                        .map_err(|_| format!("Unknown variable 'x{}' in '{}'.", name, input))?;
                    if number < 1 || number > ring.variables() {
                        return Err(format!("Variable 'x{}' is not in {}.", number, ring));
                    }
                    number - 1
                };
                alpha[index] = alpha[index]
                    .checked_add(exponent)
                    .ok_or_else(|| format!("Exponent of x{} in '{}' is too large.", index + 1, input))?;
            } else {
                let value = factor
                    .parse::<BigInt>()
                    .map_err(|_| format!("Invalid coefficient '{}' in '{}'.", factor, input))?;
                coefficient *= value;
            }
        }

        Ok((coefficient, alpha))
    }

    fn format_term(coefficient: &BigInt, alpha: &ExponentVector) -> String {
        let mut factors = Vec::new();
        if !coefficient.is_one() || alpha.is_constant() {
            factors.push(coefficient.to_string());
        }
        for (i, &e) in alpha.iter().enumerate() {
            match e {
                0 => {}
                1 => factors.push(format!("x{}", i + 1)),
                _ => factors.push(format!("x{}^{}", i + 1, e)),
            }
        }
        factors.join("*")
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        result += other;
        result
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, other: Polynomial) -> Polynomial {
        self += &other;
        self
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &Polynomial) {
        assert_eq!(self.ring, other.ring, "cannot combine polynomials from different rings");
        for (alpha, coefficient) in &other.terms {
            self.add_term(coefficient.clone(), alpha.clone());
        }
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &Polynomial) {
        assert_eq!(self.ring, other.ring, "cannot combine polynomials from different rings");
        for (alpha, coefficient) in &other.terms {
            self.add_term(-coefficient.clone(), alpha.clone());
        }
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        result -= other;
        result
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, other: Polynomial) -> Polynomial {
        self -= &other;
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(&-BigInt::one())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        assert_eq!(self.ring, other.ring, "cannot combine polynomials from different rings");
        let mut result = Polynomial::zero(self.ring);
        for (alpha, a) in &self.terms {
            for (beta, b) in &other.terms {
                result.add_term(a * b, alpha.add_exponents(beta));
            }
        }
        result
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        &self * &other
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self
            .terms
            .iter()
            .rev()
            .map(|(alpha, coefficient)| Self::format_term(coefficient, alpha))
            .collect();
        write!(f, "{}", parts.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(m: u64, n: usize) -> RingContext {
        RingContext::new(m, n)
    }

    #[test]
    fn test_coefficients_are_reduced() {
        let r = ring(6, 1);
        let p = Polynomial::from_terms(r, vec![(BigInt::from(-1), ExponentVector::new(vec![2])), (BigInt::from(12), ExponentVector::new(vec![1]))]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.coefficient(&ExponentVector::new(vec![2])), BigInt::from(5));
        assert_eq!(p.to_string(), "5*x1^2");
    }

    #[test]
    fn test_parse_and_display() {
        let r = ring(7, 2);
        let p = Polynomial::parse(r, "3*x1^2*x2 - x2 + 5").unwrap();
        assert_eq!(p.to_string(), "3*x1^2*x2 + 6*x2 + 5");
        assert_eq!(Polynomial::parse(r, &p.to_string()).unwrap(), p);
        assert!(Polynomial::parse(r, "0").unwrap().is_zero());
        assert!(Polynomial::parse(r, "x3").is_err());
        assert!(Polynomial::parse(r, "x1^a").is_err());
        assert!(Polynomial::parse(r, "").is_err());
        assert_eq!(Polynomial::parse(ring(5, 1), "x^2").unwrap().to_string(), "x1^2");
    }

    #[test]
    fn test_parse_rejects_exponent_overflow() {
        let r = ring(4, 2);
        assert!(Polynomial::parse(r, "x1^4294967295*x1").is_err());
        assert!(Polynomial::parse(r, "x2^4294967296").is_err());
        let p = Polynomial::parse(r, "x1^4294967294*x1").unwrap();
        assert_eq!(p.leading_term().unwrap().0.as_slice(), &[u32::MAX, 0]);
    }

    #[test]
    fn test_arithmetic() {
        let r = ring(4, 1);
        let x = Polynomial::variable(r, 0);
        let one = Polynomial::constant(r, BigInt::one());
        let square = &(&x + &one) * &(&x + &one);
        assert_eq!(square.to_string(), "x1^2 + 2*x1 + 1");
        let doubled = square.scale(&BigInt::from(2));
        assert_eq!(doubled.to_string(), "2*x1^2 + 2");
        assert!((&doubled - &doubled).is_zero());
        assert_eq!(-x.clone() + x, Polynomial::zero(r));
    }

    #[test]
    fn test_leading_term_is_graded() {
        let r = ring(5, 2);
        let p = Polynomial::parse(r, "x1^3 + x1*x2^3 + 2").unwrap();
        let (alpha, coefficient) = p.leading_term().unwrap();
        assert_eq!(alpha.as_slice(), &[1, 3]);
        assert_eq!(coefficient, &BigInt::one());
        assert_eq!(p.total_degree(), 4);
    }

    #[test]
    fn test_evaluate_and_substitute() {
        let r = ring(6, 2);
        let p = Polynomial::parse(r, "x1^2*x2 + 3*x2 + 1").unwrap();
        assert_eq!(p.evaluate(&[2, 1]), BigInt::from((4 + 3 + 1) % 6));
        let q = p.substitute(0, 2);
        assert_eq!(q.to_string(), "x2 + 1");
        assert_eq!(q.evaluate(&[5, 1]), p.evaluate(&[2, 1]));
        let z = q.substitute(1, 5);
        assert!(z.is_zero());
    }
}
