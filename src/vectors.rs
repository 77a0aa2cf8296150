//! Test vectors for delta multiplication.
//!
//! A test vector applies a delta `d` to a private key `sk0` (with
//! public key `pk0`), yielding the private key `sk1` (the result of
//! `GroupParameters::delta_multiply()`) and its public key `pk1`. On
//! the public side, the same delta is applied with the curve function:
//! `delta_pk = X(d, pk0)`. Vectors come in three kinds:
//!
//!  - `Positive`: the product `dC*skC mod n` had bit `b` set and was
//!    used as is;
//!  - `Negative`: the product was replaced with its negation;
//!  - `Failure`: the resulting scalar is invalid, and must be rejected
//!    by a key-validation routine (the delta was built with
//!    `GroupParameters::bad_delta()`).
//!
//! For the first two kinds, `pk1 == delta_pk`. Printing the vectors is
//! left to the caller; all values are provided both as integers and,
//! for points, as fixed-length encodings.

use log::debug;
use num_bigint::BigUint;

use crate::curve::{CurveFamily, InvalidRange};
use crate::delta::MultiplicationTrace;
use crate::error::{Error, Result};
use crate::group::GroupParameters;
use crate::RngCore;

/// Maximum number of random deltas tried when looking for a positive
/// or negative vector. Each try succeeds with probability about 1/2.
const MAX_ATTEMPTS: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Positive,
    Negative,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    pub curve: CurveFamily,
    pub kind: VectorKind,
    pub sk0: BigUint,
    pub pk0: Vec<u8>,
    pub delta: BigUint,
    pub trace: MultiplicationTrace,
    pub sk1: BigUint,
    pub pk1: Vec<u8>,
    pub delta_pk: Vec<u8>,
}

impl TestVector {

    /// Computes the vector for private key `sk0` and delta `delta`.
    /// The kind is inferred from the result.
    pub fn new(curve: CurveFamily, sk0: &BigUint, delta: &BigUint)
        -> Result<Self>
    {
        let g = curve.group();
        let (sk1, trace) = g.delta_multiply(delta, sk0);
        let kind = if g.is_invalid(&sk1) {
            VectorKind::Failure
        } else if trace.product_bit {
            VectorKind::Positive
        } else {
            VectorKind::Negative
        };

        let pk0 = curve.base_mul(&curve.encode_scalar(sk0)?)?;
        let pk1 = curve.base_mul(&curve.encode_scalar(&sk1)?)?;
        let delta_pk = curve.mul(&curve.encode_scalar(delta)?, &pk0)?;

        Ok(Self {
            curve,
            kind,
            sk0: sk0.clone(),
            pk0,
            delta: delta.clone(),
            trace,
            sk1,
            pk1,
            delta_pk,
        })
    }

    /// Returns `true` if the private and public computations agree.
    pub fn is_homomorphic(&self) -> bool {
        self.pk1 == self.delta_pk
    }

    /// Encodes a scalar from this vector (e.g. `sk0`, `delta`, or a
    /// trace value) with the curve encoding length.
    pub fn encode(&self, x: &BigUint) -> Result<Vec<u8>> {
        self.curve.encode_scalar(x)
    }
}

/// Generates a test vector of the requested kind for private key
/// `sk0`.
///
/// Positive and negative vectors use random deltas (up to a fixed
/// number of tries); failure vectors use a delta from `bad_delta()`
/// targeting the last designed invalid range of the curve. Errors from
/// `bad_delta()` are returned as is; the caller may retry with another
/// private key.
pub fn generate<T: RngCore + ?Sized>(curve: CurveFamily, rng: &mut T,
    kind: VectorKind, sk0: &BigUint) -> Result<TestVector>
{
    let g = curve.group();
    let delta = match kind {
        VectorKind::Failure => {
            let ranges = curve.invalid_ranges();
            let r = ranges.last().ok_or(Error::NoAlignedTarget)?;
            g.bad_delta(sk0, &r.lower, &r.upper)?
        }
        VectorKind::Positive | VectorKind::Negative => {
            let want = kind == VectorKind::Positive;
            let mut found = None;
            for i in 0..MAX_ATTEMPTS {
                let d = g.random_scalar(rng);
                let (_, tr) = g.delta_multiply(&d, sk0);
                if tr.product_bit == want {
                    debug!("{} {:?} vector: delta found after {} tries",
                        curve, kind, i + 1);
                    found = Some(d);
                    break;
                }
            }
            found.ok_or(Error::ConstructionExhausted)?
        }
    };
    TestVector::new(curve, sk0, &delta)
}

/// Checks the homomorphism on random inputs: for random `a` and `d`
/// in `[0, n)`, the public key of `delta_multiply(d, a)` must be equal
/// to the public key of `a` multiplied by `d`.
pub fn check_homomorphism<T: RngCore + ?Sized>(curve: CurveFamily,
    rng: &mut T) -> Result<bool>
{
    let g = curve.group();
    let a = g.random_scalar(rng);
    let d = g.random_scalar(rng);
    let (da, _) = g.delta_multiply(&d, &a);

    let ag = curve.base_mul(&curve.encode_scalar(&a)?)?;
    let da_g = curve.base_mul(&curve.encode_scalar(&da)?)?;
    let d_ag = curve.mul(&curve.encode_scalar(&d)?, &ag)?;
    Ok(da_g == d_ag)
}

/// Evaluates `is_invalid()` on the four boundary points of an invalid
/// range: `lower - h`, `lower`, `upper`, `upper + h`. The first entry
/// is `None` if `lower < h`.
pub fn probe_range(g: &GroupParameters, r: &InvalidRange) -> [Option<bool>; 4] {
    let h = g.cofactor();
    let below = if r.lower >= *h {
        Some(g.is_invalid(&(&r.lower - h)))
    } else {
        None
    };
    [
        below,
        Some(g.is_invalid(&r.lower)),
        Some(g.is_invalid(&r.upper)),
        Some(g.is_invalid(&(&r.upper + h))),
    ]
}

// ========================================================================

#[cfg(all(test, feature = "x25519", feature = "x448"))]
mod tests {

    use super::{check_homomorphism, generate, probe_range, TestVector, VectorKind};
    use crate::curve::CurveFamily;
    use num_bigint::BigUint;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn homomorphism() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        for &c in CurveFamily::ALL.iter() {
            for _ in 0..5 {
                assert!(check_homomorphism(c, &mut rng).unwrap());
            }
        }
    }

    #[test]
    fn boundaries() {
        let c = CurveFamily::Curve25519;
        let g = c.group();
        let r = c.invalid_ranges();
        assert!(r.len() == 2);
        assert!(probe_range(&g, &r[0]) == [None, Some(true), Some(true), Some(false)]);
        assert!(probe_range(&g, &r[1]) == [Some(false), Some(true), Some(true), Some(true)]);
        assert!(g.is_invalid(&BigUint::from(0u32)));

        let c = CurveFamily::Curve448;
        let g = c.group();
        let r = c.invalid_ranges();
        assert!(r.len() == 1);
        assert!(probe_range(&g, &r[0]) == [Some(false), Some(true), Some(true), Some(false)]);
    }

    #[test]
    fn end_to_end_25519() {
        let c = CurveFamily::Curve25519;
        let mut a = hex::decode("c8a9d5a91091ad851c668b0736c1c9a02936c0d3ad62670858088047ba057475").unwrap();
        a.reverse();
        let mut d = hex::decode("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb").unwrap();
        d.reverse();
        let a = BigUint::from_bytes_be(&a);
        let d = BigUint::from_bytes_be(&d);
        let tv = TestVector::new(c, &a, &d).unwrap();
        assert!(tv.kind != VectorKind::Failure);
        assert!(tv.is_homomorphic());
        assert!(tv.pk1 == c.mul(&tv.encode(&d).unwrap(), &tv.pk0).unwrap());
        assert!(tv.encode(&tv.sk1).unwrap().len() == 32);
    }

    #[test]
    fn generated_kinds() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for &c in CurveFamily::ALL.iter() {
            let g = c.group();
            let sk0 = g.random_scalar(&mut rng);

            let tv = generate(c, &mut rng, VectorKind::Positive, &sk0).unwrap();
            assert!(tv.kind == VectorKind::Positive);
            assert!(tv.trace.product_bit);
            assert!(tv.sk1 == tv.trace.product);
            assert!(tv.is_homomorphic());

            let tv = generate(c, &mut rng, VectorKind::Negative, &sk0).unwrap();
            assert!(tv.kind == VectorKind::Negative);
            assert!(!tv.trace.product_bit);
            assert!(tv.sk1 == tv.trace.complement);
            assert!(tv.is_homomorphic());

            let tv = generate(c, &mut rng, VectorKind::Failure, &sk0).unwrap();
            assert!(tv.kind == VectorKind::Failure);
            assert!(g.is_clamped(&tv.delta));
            assert!(g.is_invalid(&tv.sk1));
        }
    }
}
