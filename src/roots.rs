//! Subgroup generators in ℤ_p^×.
//!
//! The scanner finds primes whose multiplicative group contains a subgroup
//! of order `m`; this module produces an explicit generator of that
//! subgroup, i.e. a primitive `m`-th root of unity in ℤ_p.  Candidates are
//! drawn at random and projected into the subgroup via `x^((p-1)/m)`, then
//! kept only if their order is exactly `m`.

use num_bigint::{BigUint, RandBigInt};
use num_prime::nt_funcs::factorize;
use num_traits::{One, Zero};
use rand::thread_rng;

/// Random candidates sampled before giving up.  A fraction φ(m)/m of the
/// subgroup generates it, so failure after this many draws is vanishingly
/// unlikely for any prime the scanner can emit.
const SAMPLE_ATTEMPTS: usize = 128;

/// Tests whether `g` has multiplicative order exactly `m` modulo the
/// prime `p`.
///
/// The order is exactly `m` when `g^m == 1` and `g^(m/q) != 1` for every
/// prime factor `q` of `m`.
pub fn has_order(p: &BigUint, g: &BigUint, m: &BigUint) -> bool {
    let one = BigUint::one();
    if m.is_zero() {
        return false;
    }
    if m.is_one() {
        return g % p == one;
    }
    if g.modpow(m, p) != one {
        return false;
    }
    factorize(m.clone())
        .keys()
        .all(|q| g.modpow(&(m / q), p) != one)
}

/// Searches for a generator of the order-`m` subgroup of ℤ_p^×, i.e. a
/// primitive `m`-th root of unity modulo `p`.
///
/// Expects `p` prime; returns `None` when `m` does not divide `p - 1` (no
/// such subgroup exists) or when 128 random draws fail to produce a
/// generator.
pub fn subgroup_generator(p: &BigUint, m: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    if m.is_zero() || p < &BigUint::from(2u32) {
        return None;
    }
    if m.is_one() {
        return Some(one);
    }
    let group_order = p - &one;
    if &group_order % m != BigUint::zero() {
        return None;
    }
    let exponent = &group_order / m;
    let mut rng = thread_rng();
    let low = BigUint::from(2u32);
    for _ in 0..SAMPLE_ATTEMPTS {
        let x = rng.gen_biguint_range(&low, p);
        let g = x.modpow(&exponent, p);
        if has_order(p, &g, m) {
            return Some(g);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_generator_for_scanned_primes() {
        // 257 and 641 are the m = 128 scanner hits below 700.
        for p in [257u64, 641] {
            let p = big(p);
            let m = big(128);
            let g = subgroup_generator(&p, &m).expect("subgroup must exist");
            assert!(has_order(&p, &g, &m));
        }
    }

    #[test]
    fn test_generator_for_composite_order() {
        // 96 = 2^5 * 3 divides 97 - 1, exercising the multi-factor check.
        let p = big(97);
        for m in [8u64, 12, 24, 96] {
            let m = big(m);
            let g = subgroup_generator(&p, &m).expect("subgroup must exist");
            assert!(has_order(&p, &g, &m));
        }
    }

    #[test]
    fn test_trivial_order() {
        let g = subgroup_generator(&big(257), &big(1)).unwrap();
        assert_eq!(g, BigUint::one());
        assert!(has_order(&big(257), &BigUint::one(), &big(1)));
    }

    #[test]
    fn test_no_subgroup_when_order_does_not_divide() {
        // 7 does not divide 256, so no order-7 subgroup exists mod 257.
        assert_eq!(subgroup_generator(&big(257), &big(7)), None);
        assert_eq!(subgroup_generator(&big(2), &big(128)), None);
    }

    #[test]
    fn test_has_order_rejects_low_order_elements() {
        // 16 has order 4 mod 257, so it sits inside the order-128 subgroup
        // without generating it.
        assert!(!has_order(&big(257), &big(16), &big(128)));
        assert!(!has_order(&big(257), &BigUint::one(), &big(128)));
    }
}
