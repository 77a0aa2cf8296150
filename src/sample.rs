//! Uniform sampling of big integers.
//!
//! The random source is always provided by the caller; there is no
//! process-wide generator. Using a seeded deterministic generator makes
//! vector generation reproducible.

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::RngCore;

/// Samples an integer uniformly in `[lb, ub)`.
///
/// An error is returned if the range is empty.
pub fn random_range<T: RngCore + ?Sized>(rng: &mut T,
    lb: &BigUint, ub: &BigUint) -> Result<BigUint>
{
    if lb >= ub {
        return Err(Error::EmptyRange);
    }
    Ok(rng.gen_biguint_range(lb, ub))
}

/// Samples an integer uniformly in `[0, ub)`; if `ub` is zero, then
/// zero is returned.
pub(crate) fn random_below<T: RngCore + ?Sized>(rng: &mut T,
    ub: &BigUint) -> BigUint
{
    if ub.is_zero() {
        return BigUint::zero();
    }
    rng.gen_biguint_below(ub)
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::{random_range, random_below};
    use num_bigint::BigUint;
    use num_traits::One;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn range_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let lb = BigUint::one() << 200u32;
        let ub = &lb + 1000u32;
        for _ in 0..100 {
            let x = random_range(&mut rng, &lb, &ub).unwrap();
            assert!(x >= lb && x < ub);
        }

        // Single-value range.
        let ub = &lb + 1u32;
        assert!(random_range(&mut rng, &lb, &ub).unwrap() == lb);
    }

    #[test]
    fn empty_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let lb = BigUint::from(10u32);
        assert!(random_range(&mut rng, &lb, &lb).is_err());
        let ub = BigUint::from(9u32);
        assert!(random_range(&mut rng, &lb, &ub).is_err());
        assert!(random_below(&mut rng, &BigUint::from(0u32)) == BigUint::from(0u32));
    }

    #[test]
    fn reproducible() {
        let ub = BigUint::one() << 255u32;
        let mut r1 = ChaCha20Rng::seed_from_u64(42);
        let mut r2 = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..10 {
            assert!(random_below(&mut r1, &ub) == random_below(&mut r2, &ub));
        }
    }

    #[test]
    fn covers_small_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let lb = BigUint::from(5u32);
        let ub = BigUint::from(9u32);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let x = random_range(&mut rng, &lb, &ub).unwrap() - 5u32;
            seen[x.to_u32_digits().first().copied().unwrap_or(0) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
