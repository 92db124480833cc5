//! The moduli scanner.
//!
//! A scan enumerates the half-open interval `[min, max)` in ascending order
//! and emits every prime `p` with `(p - 1) % m == 0`.  Because the
//! divisibility condition is equivalent to `p ≡ 1 (mod m)`, the iterator
//! walks only that residue class instead of testing every integer; for
//! `m == 1` the class covers the whole interval.  The walk is an exact
//! refinement of the naive loop, not a sieve: every integer in the class is
//! still subjected to the full primality test.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::ScanError;
use crate::primality::is_prime;

/// Validated inputs for a moduli scan.
///
/// Construction is the only place an argument error can surface; a built
/// `ScanParams` always scans to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanParams {
    m: BigUint,
    min: BigUint,
    max: BigUint,
}

impl ScanParams {
    /// Builds scan parameters for the interval `[min, max)` and subgroup
    /// order `m`.
    ///
    /// Fails with [`ScanError::NonPositiveOrder`] when `m` is zero.  An
    /// interval with `min >= max` is accepted and simply yields nothing.
    pub fn new(m: BigUint, min: BigUint, max: BigUint) -> Result<Self, ScanError> {
        if m.is_zero() {
            return Err(ScanError::NonPositiveOrder);
        }
        Ok(Self { m, min, max })
    }

    /// Builds scan parameters from signed values.
    ///
    /// `m <= 0` is rejected; negative interval bounds are clamped to zero,
    /// which cannot drop a match since primes start at 2.
    pub fn from_signed(m: &BigInt, min: &BigInt, max: &BigInt) -> Result<Self, ScanError> {
        let m = m
            .to_biguint()
            .filter(|v| !v.is_zero())
            .ok_or(ScanError::NonPositiveOrder)?;
        Ok(Self {
            m,
            min: clamp_to_zero(min),
            max: clamp_to_zero(max),
        })
    }

    /// Returns the subgroup order `m`.
    pub fn order(&self) -> &BigUint {
        &self.m
    }

    /// Returns the inclusive lower bound of the interval.
    pub fn min(&self) -> &BigUint {
        &self.min
    }

    /// Returns the exclusive upper bound of the interval.
    pub fn max(&self) -> &BigUint {
        &self.max
    }
}

fn clamp_to_zero(v: &BigInt) -> BigUint {
    v.to_biguint().unwrap_or_else(BigUint::zero)
}

/// A qualifying prime together with its cofactor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The prime `p` with `p ≡ 1 (mod m)`.
    pub p: BigUint,
    /// The cofactor `k = (p - 1) / m`.
    pub k: BigUint,
}

/// Lazy iterator over qualifying primes, produced by [`scan`].
///
/// The iterator is a pure function of its [`ScanParams`]: re-running
/// [`scan`] with the same parameters yields an identical sequence.
#[derive(Debug, Clone)]
pub struct ModuliScan {
    m: BigUint,
    next: BigUint,
    end: BigUint,
}

/// Starts a scan over `[min, max)` for primes `p ≡ 1 (mod m)`.
pub fn scan(params: &ScanParams) -> ModuliScan {
    let m = params.m.clone();
    // Smallest value >= min in the residue class 1 mod m.  The target
    // residue is 1 % m so that m == 1 starts at min itself.
    let target = BigUint::one() % &m;
    let rem = &params.min % &m;
    let offset = (&target + &m - &rem) % &m;
    ModuliScan {
        next: &params.min + offset,
        end: params.max.clone(),
        m,
    }
}

impl Iterator for ModuliScan {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.next < self.end {
            let p = self.next.clone();
            self.next += &self.m;
            if is_prime(&p) {
                let k = (&p - 1u32) / &self.m;
                return Some(Candidate { p, k });
            }
        }
        None
    }
}

/// Scans `[min, max)` split into `chunks` disjoint sub-ranges on the rayon
/// pool, returning all matches in ascending order.
///
/// Output is identical to `scan(params).collect()`; the decomposition is an
/// optimization for wide intervals, with no shared state between workers.
///
/// # Panics
///
/// Panics if `chunks` is zero.
#[cfg(not(target_arch = "wasm32"))]
pub fn par_scan(params: &ScanParams, chunks: usize) -> Vec<Candidate> {
    use rayon::prelude::*;

    assert!(chunks >= 1, "chunks must be at least 1");
    if params.min >= params.max {
        return Vec::new();
    }
    let span = &params.max - &params.min;
    let step = &span / BigUint::from(chunks);
    let bounds: Vec<(BigUint, BigUint)> = (0..chunks)
        .map(|i| {
            let lo = &params.min + &step * BigUint::from(i);
            let hi = if i + 1 == chunks {
                params.max.clone()
            } else {
                &params.min + &step * BigUint::from(i + 1)
            };
            (lo, hi)
        })
        .collect();
    let parts: Vec<Vec<Candidate>> = bounds
        .into_par_iter()
        .map(|(lo, hi)| {
            let sub = ScanParams {
                m: params.m.clone(),
                min: lo,
                max: hi,
            };
            scan(&sub).collect()
        })
        .collect();
    parts.into_iter().flatten().collect()
}
