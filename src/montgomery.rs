//! Variable-time Montgomery ladder over big integers.
//!
//! This is a plain implementation of the algorithm from [RFC 7748]
//! (section 5), with field elements represented as `BigUint` values
//! modulo the field prime. It is generic over the curve (field
//! modulus, `a24` constant, and number of scalar bits), and used by the
//! `x25519` and `x448` modules. It is NOT constant-time, and fairly
//! slow; it is meant for verifying test vectors.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Montgomery curve description, for the ladder.
#[derive(Clone, Debug)]
pub(crate) struct Curve {
    /// Field modulus.
    pub(crate) p: BigUint,
    /// Ladder constant `(A - 2)/4` (RFC 7748 uses this value as `a24`).
    pub(crate) a24: u32,
    /// Number of scalar bits processed by the ladder.
    pub(crate) bits: usize,
}

impl Curve {

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((a + &self.p) - b) % &self.p
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    // Inversion through Fermat's little theorem; 0 maps to 0.
    fn invert(&self, a: &BigUint) -> BigUint {
        let e = &self.p - 2u32;
        a.modpow(&e, &self.p)
    }

    /// Multiplies the point with u coordinate `u` by the scalar `s`
    /// (little-endian bytes, already clamped by the caller), and
    /// returns the u coordinate of the result (reduced).
    ///
    /// The `u` value is reduced modulo `p`; non-canonical inputs are
    /// thus accepted. At most `8*s.len()` scalar bits are used; missing
    /// high bits are taken as zero.
    pub(crate) fn ladder_vartime(&self, s: &[u8], u: &BigUint) -> BigUint {
        let x1 = u % &self.p;
        let mut x2 = BigUint::one();
        let mut z2 = BigUint::zero();
        let mut x3 = x1.clone();
        let mut z3 = BigUint::one();
        let mut swap = false;

        let bits = core::cmp::min(self.bits, s.len() << 3);
        for t in (0..bits).rev() {
            let kt = (s[t >> 3] >> (t & 7)) & 1 != 0;
            if swap != kt {
                core::mem::swap(&mut x2, &mut x3);
                core::mem::swap(&mut z2, &mut z3);
            }
            swap = kt;

            let A = self.add(&x2, &z2);
            let B = self.sub(&x2, &z2);
            let AA = self.square(&A);
            let BB = self.square(&B);
            let C = self.add(&x3, &z3);
            let D = self.sub(&x3, &z3);
            let E = self.sub(&AA, &BB);
            let DA = self.mul(&D, &A);
            let CB = self.mul(&C, &B);
            x3 = self.square(&self.add(&DA, &CB));
            z3 = self.mul(&x1, &self.square(&self.sub(&DA, &CB)));
            z2 = self.mul(&E, &self.add(&AA, &(&E * self.a24)));
            x2 = self.mul(&AA, &BB);
        }
        if swap {
            core::mem::swap(&mut x2, &mut x3);
            core::mem::swap(&mut z2, &mut z3);
        }

        self.mul(&x2, &self.invert(&z2))
    }
}

// ========================================================================
