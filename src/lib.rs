#![deny(missing_docs)]

//! # moduli_scan
//!
//! **moduli_scan** searches integer ranges for primes `p` such that
//! `(p - 1)` is divisible by a caller-supplied subgroup order `m`:
//!
//! ```text
//! (p - 1) % m == 0
//! ```
//!
//! These primes guarantee a multiplicative subgroup of order `m` in
//! ℤ_p^×, which makes them usable as plaintext moduli for
//! homomorphic-encryption schemes (BFV, BGV, CKKS) that batch via CRT
//! packing, and as coefficient moduli for length-`m` number-theoretic
//! transforms.
//!
//! ## Features
//!
//! * **Lazy scanning**: [`scan`] returns a restartable iterator that walks
//!   the residue class `p ≡ 1 (mod m)` and emits each qualifying prime
//!   together with its cofactor `k = (p - 1) / m`.
//! * **Exact primality**: [`is_prime`] is deterministic for every value
//!   below 2⁶⁴ and uses the strictest arbitrary-precision test available
//!   above that.
//! * **Subgroup generators**: [`subgroup_generator`] turns a found prime
//!   into a generator of the order-`m` subgroup, i.e. a primitive `m`-th
//!   root of unity in ℤ_p.
//! * **Disjoint-range parallelism**: [`par_scan`] splits a wide interval
//!   across the rayon pool and merges results in ascending order.
//!
//! ## Usage
//!
//! ```rust
//! use moduli_scan::{scan, ScanParams};
//! use num_bigint::BigUint;
//!
//! let params = ScanParams::new(
//!     BigUint::from(128u32),
//!     BigUint::from(2u32),
//!     BigUint::from(700u32),
//! )
//! .unwrap();
//! let primes: Vec<String> = scan(&params).map(|c| c.p.to_string()).collect();
//! assert_eq!(primes, vec!["257", "641"]);
//! ```

mod error;
mod primality;
mod roots;
mod scan;

pub use error::ScanError;
pub use primality::is_prime;
pub use roots::{has_order, subgroup_generator};
#[cfg(not(target_arch = "wasm32"))]
pub use scan::par_scan;
pub use scan::{scan, Candidate, ModuliScan, ScanParams};
