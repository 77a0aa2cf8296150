//! Clamped scalar groups.
//!
//! A Montgomery curve such as Curve25519 or Curve448 has a composite
//! group order `n = p*h`, with `p` a large prime (order of the subgroup
//! generated by the conventional base point) and `h` a small cofactor.
//! Private keys for the X25519 and X448 functions are "clamped": all
//! bits above index `b` are cleared, bit `b` is set, and the value is
//! rounded down to a multiple of the cofactor. The `GroupParameters`
//! type captures these constants and implements clamping, along with
//! the validity test that a key-agreement implementation is expected to
//! apply to a delta-adjusted private key.
//!
//! Since the Montgomery ladder only computes the u coordinate of a
//! point, a scalar `x` and its negation `n - x` yield the same public
//! key. A scalar is thus deemed invalid only if neither `x` nor `n - x`
//! is clamped (`is_invalid()`).
//!
//! Nothing in this module is constant-time; it is meant for offline
//! computations (e.g. test vector generation) only.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::RngCore;

/// Constants of a clamped scalar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParameters {
    p: BigUint,   // prime subgroup order
    b: u64,       // index of clamped bit
    h: BigUint,   // cofactor
    h2: BigUint,  // cofactor squared
    n: BigUint,   // group order (p*h)
    m: BigUint,   // clamping mask
}

impl GroupParameters {

    /// Builds the parameters from the prime subgroup order `p`, the
    /// index `b` of the bit forced to 1 by clamping, and the cofactor
    /// `h`.
    ///
    /// The clamping mask is the largest value below `2^b` which is a
    /// multiple of `h`. The cofactor must be a power of two, so that
    /// masking yields multiples of `h`. An error is returned if any of
    /// the parameters is zero, if the cofactor is not a power of two,
    /// or if it is too large for the mask to be non-zero.
    pub fn new(p: BigUint, b: u64, h: u32) -> Result<Self> {
        if p.is_zero() {
            return Err(Error::InvalidParameters("zero subgroup order"));
        }
        if b == 0 {
            return Err(Error::InvalidParameters("zero clamped bit index"));
        }
        if h == 0 {
            return Err(Error::InvalidParameters("zero cofactor"));
        }
        if h & (h - 1) != 0 {
            return Err(Error::InvalidParameters("cofactor is not a power of two"));
        }
        if u64::from(h.trailing_zeros()) >= b {
            return Err(Error::InvalidParameters("cofactor exceeds clamping range"));
        }
        Ok(Self::from_constants(p, b, h))
    }

    /// Builds the parameters from known-good constants (no validation).
    pub(crate) fn from_constants(p: BigUint, b: u64, h: u32) -> Self {
        debug_assert!(h.is_power_of_two() && u64::from(h.trailing_zeros()) < b);
        let h = BigUint::from(h);
        let h2 = &h * &h;
        let n = &p * &h;

        let mut m = (BigUint::one() << b) - 1u32;
        let r = &m % &h;
        m -= r;

        Self { p, b, h, h2, n, m }
    }

    /// Prime subgroup order (`p`).
    pub fn subgroup_order(&self) -> &BigUint {
        &self.p
    }

    /// Index of the clamped bit (`b`).
    pub fn clamp_bit(&self) -> u64 {
        self.b
    }

    /// Cofactor (`h`).
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Squared cofactor (`h^2`).
    pub fn cofactor_squared(&self) -> &BigUint {
        &self.h2
    }

    /// Composite group order (`n = p*h`).
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Clamping mask.
    pub fn clamp_mask(&self) -> &BigUint {
        &self.m
    }

    /// Clamps a scalar: bits not in the mask are cleared, then bit `b`
    /// is set. Any non-negative integer is accepted, including values
    /// beyond the group order; only bits `0` to `b` are used.
    pub fn clamp(&self, x: &BigUint) -> BigUint {
        let mut y = x & &self.m;
        y.set_bit(self.b, true);
        y
    }

    /// Returns `true` if the provided value is clamped, i.e. it is a
    /// fixed point of `clamp()`.
    pub fn is_clamped(&self, x: &BigUint) -> bool {
        *x == self.clamp(x)
    }

    /// Returns `true` if neither `x` nor its negation `n - x` is
    /// clamped. If `x > n` then the negation is not a valid
    /// representative and only `x` itself is tested.
    pub fn is_invalid(&self, x: &BigUint) -> bool {
        if self.is_clamped(x) {
            return false;
        }
        match self.complement(x) {
            Some(nx) => !self.is_clamped(&nx),
            None => true,
        }
    }

    /// Returns `n - x`, or `None` if `x > n`.
    pub fn complement(&self, x: &BigUint) -> Option<BigUint> {
        if *x > self.n {
            None
        } else {
            Some(&self.n - x)
        }
    }

    /// Converts a signed integer into a scalar, rejecting negative
    /// values.
    pub fn scalar_from_signed(x: &BigInt) -> Result<BigUint> {
        match x.sign() {
            Sign::Minus => Err(Error::NegativeScalar),
            _ => Ok(x.magnitude().clone()),
        }
    }

    /// Samples a scalar uniformly in `[0, n)`.
    pub fn random_scalar<T: RngCore + ?Sized>(&self, rng: &mut T) -> BigUint {
        crate::sample::random_below(rng, &self.n)
    }
}

// ========================================================================
