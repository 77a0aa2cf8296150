//! Delta multiplication of clamped scalars.
//!
//! Given a private scalar `sk` and a delta `d`, both clamped, the
//! product `dC*skC mod n` is a private scalar whose public key is the
//! public key of `sk` multiplied by `d` (the u coordinate is the same
//! for a scalar and its negation modulo `n`). Of the two
//! representatives `skP` and `n - skP`, the one with bit `b` set is
//! selected as the result; it is not necessarily clamped.
//!
//! `bad_delta()` constructs a clamped delta such that the delta
//! multiplication result is invalid (neither representative is
//! clamped); this is used to produce negative test vectors for
//! key-validation routines.
//!
//! These functions are NOT constant-time.

use log::{debug, trace};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

use crate::error::{Error, Result};
use crate::group::GroupParameters;

/// Intermediate values of a delta multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplicationTrace {
    /// Clamped delta (`dC`).
    pub delta_clamped: BigUint,
    /// Clamped base scalar (`skC`).
    pub base_clamped: BigUint,
    /// Product `dC*skC mod n` (`skP`).
    pub product: BigUint,
    /// Complement `n - skP` (`skN`).
    pub complement: BigUint,
    /// Bit `b` of the product (`cP`).
    pub product_bit: bool,
}

impl MultiplicationTrace {

    /// Returns the selected representative: the product if its bit `b`
    /// is set, the complement otherwise.
    pub fn result(&self) -> &BigUint {
        if self.product_bit {
            &self.product
        } else {
            &self.complement
        }
    }
}

impl GroupParameters {

    /// Multiplies scalar `sk` by delta `d` (both are clamped first),
    /// modulo the group order. The returned value is the representative
    /// with bit `b` set (if either has it); the trace contains all
    /// intermediate values.
    pub fn delta_multiply(&self, d: &BigUint, sk: &BigUint)
        -> (BigUint, MultiplicationTrace)
    {
        let n = self.order();
        let dc = self.clamp(d);
        let skc = self.clamp(sk);
        let skp = (&dc * &skc) % n;
        let skn = n - &skp;
        let cp = skp.bit(self.clamp_bit());

        trace!("delta multiply: dC={:x} skC={:x} skP={:x} skN={:x} cP={}",
            dc, skc, skp, skn, cp as u8);

        let tr = MultiplicationTrace {
            delta_clamped: dc,
            base_clamped: skc,
            product: skp,
            complement: skn,
            product_bit: cp,
        };
        (tr.result().clone(), tr)
    }

    /// Same as `delta_multiply()`, for signed inputs; negative values
    /// are rejected with `NegativeScalar`.
    pub fn delta_multiply_signed(&self, d: &BigInt, sk: &BigInt)
        -> Result<(BigUint, MultiplicationTrace)>
    {
        let d = Self::scalar_from_signed(d)?;
        let sk = Self::scalar_from_signed(sk)?;
        Ok(self.delta_multiply(&d, &sk))
    }

    /// Computes the inverse of the clamped scalar `skc` relative to the
    /// cofactor: returns `ski` in `[0, n)` such that
    /// `ski*skc = h mod n`. This requires `gcd(skc, n) = h`, which
    /// holds unless `skc/h` is a multiple of `p`.
    fn cofactor_inverse(&self, skc: &BigUint) -> Result<BigUint> {
        let n = BigInt::from_biguint(Sign::Plus, self.order().clone());
        let a = BigInt::from_biguint(Sign::Plus, skc.clone());
        let eg = a.extended_gcd(&n);
        if eg.gcd.sign() != Sign::Plus || eg.gcd.magnitude() != self.cofactor() {
            return Err(Error::UnexpectedGcd { gcd: eg.gcd.magnitude().clone() });
        }
        let ski = eg.x.mod_floor(&n);
        Ok(ski.magnitude().clone())
    }

    /// Builds a clamped delta such that `delta_multiply(delta, sk)`
    /// yields an invalid scalar.
    ///
    /// The target product `t` is the first multiple of `h^2` above
    /// `lb` (computed as `lb + h^2 - (lb mod h^2)`, thus strictly
    /// above `lb`), and it must lie below `ub`. The delta `d` is then
    /// chosen with `d*clamp(sk) = t mod n`; either `d` or `n - d` is
    /// returned, whichever is clamped. For the product to be invalid,
    /// `[lb, ub)` must be a range of invalid scalars (see
    /// `CurveFamily::invalid_ranges()`).
    ///
    /// Errors:
    ///
    ///  - `EmptyRange` if `lb >= ub`;
    ///  - `RangeExceedsOrder` if `ub > n`;
    ///  - `UnexpectedGcd` if the clamped scalar is not invertible
    ///    relative to the cofactor;
    ///  - `NoAlignedTarget` if there is no usable target below `ub`;
    ///  - `ConstructionExhausted` if neither `d` nor `n - d` is
    ///    clamped. The caller may retry with another range or scalar.
    pub fn bad_delta(&self, sk: &BigUint, lb: &BigUint, ub: &BigUint)
        -> Result<BigUint>
    {
        if lb >= ub {
            return Err(Error::EmptyRange);
        }
        let n = self.order();
        if ub > n {
            return Err(Error::RangeExceedsOrder);
        }

        let skc = self.clamp(sk);
        let ski = self.cofactor_inverse(&skc)?;

        // Target is the first multiple of the squared cofactor above
        // the lower bound.
        let h2 = self.cofactor_squared();
        let t = (lb + h2) - (lb % h2);
        if t >= *ub {
            return Err(Error::NoAlignedTarget);
        }

        //          ski * skC = h     (mod n)
        // => (c * ski) * skC = c * h (mod n)
        //                    = t     (mod n)
        let c = &t / self.cofactor();
        let d = (&c * &ski) % n;
        let e = n - &d;
        debug!("bad delta: t={:x} d={:x} e={:x}", t, d, e);

        if self.is_clamped(&d) {
            Ok(d)
        } else if self.is_clamped(&e) {
            Ok(e)
        } else {
            debug!("bad delta: no clamped candidate for t={:x}", t);
            Err(Error::ConstructionExhausted)
        }
    }
}

// ========================================================================
