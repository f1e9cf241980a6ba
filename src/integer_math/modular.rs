// src/integer_math/modular.rs

/// Computes `base^exponent mod modulus` by walking the binary representation of the
/// exponent (a^7 = a^4 * a^2 * a^1).
pub fn binary_power_mod(base: u64, exponent: u32, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }

    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut factor = base as u128 % m;
    let mut remaining = exponent;
    while remaining != 0 {
        if remaining % 2 != 0 {
            result = result * factor % m;
        }
        remaining /= 2;
        factor = factor * factor % m;
    }
    result as u64
}
