//! Exact primality testing.
//!
//! The scanner promises no false positives or negatives, so this module
//! routes every candidate below 2⁶⁴ through a fully deterministic test.
//! Larger candidates fall back to the strictest arbitrary-precision
//! configuration the `num-prime` crate offers (Baillie-PSW plus additional
//! Miller-Rabin rounds), which has no known counterexample at any size.

use num_bigint::BigUint;
use num_prime::nt_funcs;
use num_prime::PrimalityTestConfig;
use num_traits::ToPrimitive;

/// Tests whether `n` is prime.
///
/// Values that fit in a `u64` are decided exactly; anything wider is
/// checked with [`PrimalityTestConfig::strict`].
pub fn is_prime(n: &BigUint) -> bool {
    match n.to_u64() {
        Some(small) => nt_funcs::is_prime64(small),
        None => nt_funcs::is_prime(n, Some(PrimalityTestConfig::strict())).probably(),
    }
}

#[cfg(test)]
mod tests {
    use super::is_prime;
    use num_bigint::BigUint;
    use num_traits::One;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_known_primes() {
        for n in [2u64, 3, 5, 7, 11, 97, 257, 641, 100_000_123] {
            assert!(is_prime(&big(n)), "{n} should be prime");
        }
        // 41-bit NTT-friendly prime, q = k * 2^14 + 1.
        assert!(is_prime(&big(1_099_511_922_689)));
    }

    #[test]
    fn test_known_composites() {
        for n in [0u64, 1, 4, 6, 9, 15, 255, 1001] {
            assert!(!is_prime(&big(n)), "{n} should be composite");
        }
        // Carmichael numbers defeat plain Fermat tests.
        assert!(!is_prime(&big(561)));
        assert!(!is_prime(&big(41_041)));
    }

    #[test]
    fn test_wide_candidates() {
        // 2^89 - 1 is a Mersenne prime, well past the u64 fast path.
        let m89 = (BigUint::one() << 89u32) - BigUint::one();
        assert!(is_prime(&m89));
        // 2^101 - 1 is composite (7432339208719 divides it).
        let m101 = (BigUint::one() << 101u32) - BigUint::one();
        assert!(!is_prime(&m101));
    }
}
