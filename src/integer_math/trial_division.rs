// src/integer_math/trial_division.rs
//
// Trial division over machine integers. Good enough for the moduli and factorial factors
// this crate handles: factorial products are never factored directly, only their small
// building blocks 1..=s are.

use crate::core::count_dictionary::CountDictionary;

/// Complete factorization of `n` as prime -> exponent.
///
/// `factorize(1)` is the empty dictionary. Panics on 0, which has no factorization.
pub fn factorize(n: u64) -> CountDictionary {
    if n == 0 {
        panic!("Parameter 'n' must be positive to be factored.");
    }

    let mut factors = CountDictionary::new();
    let mut remaining = n;

    while remaining % 2 == 0 {
        factors.add(2);
        remaining /= 2;
    }

    let mut divisor = 3u64;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.add(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    // Whatever is left has no divisor up to its square root
    if remaining > 1 {
        factors.add(remaining);
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize() {
        let factors = factorize(360);
        assert_eq!(factors.get(2), 3);
        assert_eq!(factors.get(3), 2);
        assert_eq!(factors.get(5), 1);
        assert_eq!(factors.get(7), 0);
        assert!(factorize(1).is_empty());
        assert_eq!(factorize(9_999_991).get(9_999_991), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_has_no_factorization() {
        factorize(0);
    }
}
