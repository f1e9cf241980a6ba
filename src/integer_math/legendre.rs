// src/integer_math/legendre.rs

pub struct Legendre;

impl Legendre {
    /// Legendre's formula: the exponent of the prime `p` in `n!`, i.e. sum of floor(n / p^i).
    pub fn factorial_exponent(n: u64, p: u64) -> u64 {
        if p < 2 {
            panic!("Parameter 'p' must not be < 2, but you have supplied: {}", p);
        }

        let mut result = 0;
        let mut quotient = n / p;
        while quotient > 0 {
            result += quotient;
            quotient /= p;
        }
        result
    }

    /// Least s such that p^k divides s!.
    ///
    /// The answer is always a multiple of p, so only multiples are visited, each contributing
    /// its own p-adic valuation.
    pub fn least_factorial_multiple(p: u64, k: u64) -> u64 {
        if p < 2 {
            panic!("Parameter 'p' must not be < 2, but you have supplied: {}", p);
        }
        if k == 0 {
            return 1;
        }

        let mut s = 0u64;
        let mut collected = 0u64;
        while collected < k {
            s += p;
            let mut multiple = s;
            while multiple % p == 0 {
                collected += 1;
                multiple /= p;
            }
        }
        s
    }
}
