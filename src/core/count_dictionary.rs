// src/core/count_dictionary.rs

use num::{BigInt, One};
use serde::Serialize;
use std::cmp::min;
use std::collections::BTreeMap;

/// Multiset of primes: prime -> exponent. Entries with exponent 0 are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CountDictionary(BTreeMap<u64, u32>);

impl CountDictionary {
    pub fn new() -> Self {
        CountDictionary(BTreeMap::new())
    }

    pub fn add(&mut self, key: u64) {
        self.add_count(key, 1);
    }

    pub fn add_count(&mut self, key: u64, count: u32) {
        if count == 0 {
            return;
        }
        *self.0.entry(key).or_insert(0) += count;
    }

    pub fn get(&self, key: u64) -> u32 {
        self.0.get(&key).copied().unwrap_or(0)
    }

    pub fn combine(&mut self, other: &CountDictionary) {
        for (&key, &value) in &other.0 {
            self.add_count(key, value);
        }
    }

    /// Pointwise minimum of the exponents.
    pub fn intersect(&self, other: &CountDictionary) -> CountDictionary {
        let mut result = CountDictionary::new();
        for (&key, &value) in &self.0 {
            result.add_count(key, min(value, other.get(key)));
        }
        result
    }

    /// Exponents of `self` minus those of `other`, saturating at zero.
    pub fn remove(&self, other: &CountDictionary) -> CountDictionary {
        let mut result = CountDictionary::new();
        for (&key, &value) in &self.0 {
            result.add_count(key, value.saturating_sub(other.get(key)));
        }
        result
    }

    /// True iff every exponent of `self` is at most the one in `other`.
    pub fn is_contained_in(&self, other: &CountDictionary) -> bool {
        self.0.iter().all(|(&key, &value)| value <= other.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&key, &value)| (key, value))
    }

    pub fn product(&self) -> BigInt {
        self.0
            .iter()
            .fold(BigInt::one(), |acc, (&prime, &exponent)| acc * BigInt::from(prime).pow(exponent))
    }

    pub fn format_string_as_factorization(&self) -> String {
        if self.0.is_empty() {
            return "1".to_string();
        }
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| if *value == 1 { key.to_string() } else { format!("{}^{}", key, value) })
            .collect();
        factors.join(" * ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(entries: &[(u64, u32)]) -> CountDictionary {
        let mut result = CountDictionary::new();
        for &(key, count) in entries {
            result.add_count(key, count);
        }
        result
    }

    #[test]
    fn test_intersect_and_remove() {
        let a = dictionary(&[(2, 3), (3, 1), (7, 2)]);
        let b = dictionary(&[(2, 1), (7, 5), (11, 1)]);
        assert_eq!(a.intersect(&b), dictionary(&[(2, 1), (7, 2)]));
        assert_eq!(a.remove(&b), dictionary(&[(2, 2), (3, 1)]));
    }

    #[test]
    fn test_zero_counts_are_not_stored() {
        let mut a = CountDictionary::new();
        a.add_count(5, 0);
        assert!(a.is_empty());
        assert_eq!(a.product(), BigInt::one());
    }

    #[test]
    fn test_containment_and_product() {
        let a = dictionary(&[(2, 2), (3, 1)]);
        let b = dictionary(&[(2, 3), (3, 1), (5, 1)]);
        assert!(a.is_contained_in(&b));
        assert!(!b.is_contained_in(&a));
        assert_eq!(b.product(), BigInt::from(120));
        assert_eq!(b.format_string_as_factorization(), "2^3 * 3 * 5");
    }
}
