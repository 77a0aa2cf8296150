//! X448 key-exchange function (variable-time).
//!
//! This module implements the X448 primitive, as defined by [RFC 7748],
//! on top of the generic big-integer Montgomery ladder. The primitive
//! takes as input two 56-byte values, the first being the
//! representation of a point on Curve448 or on its quadratic twist, and
//! the second being a scalar. The scalar is internally "clamped" (bits
//! 0 and 1 are cleared, bit 447 is set), then the point is multiplied by
//! the scalar, and the u coordinate of the output point is encoded into
//! 56 bytes. Non-canonical point encodings are accepted.
//!
//! The implementation is NOT constant-time.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

use num_bigint::BigUint;
use num_traits::One;

use crate::montgomery::Curve;

/// Conventional generator (u coordinate).
pub const BASE_U: u32 = 5;

fn curve() -> Curve {
    Curve {
        p: (BigUint::one() << 448u32) - (BigUint::one() << 224u32) - 1u32,
        a24: 39081,
        bits: 448,
    }
}

fn encode(x: &BigUint) -> [u8; 56] {
    let v = x.to_bytes_le();
    let mut d = [0u8; 56];
    d[..v.len()].copy_from_slice(&v);
    d
}

/// X448 function (from RFC 7748), general case.
///
/// `point` is the little-endian encoding of the u coordinate of the
/// source point, `scalar` the little-endian encoding of the scalar
/// (which is clamped).
pub fn x448_vartime(point: &[u8; 56], scalar: &[u8; 56]) -> [u8; 56] {
    // Make clamped scalar.
    let mut s = *scalar;
    s[0] &= 252;
    s[55] |= 128;

    let u = BigUint::from_bytes_le(point);
    encode(&curve().ladder_vartime(&s, &u))
}

/// X448 function applied to the conventional generator point (u = 5).
pub fn x448_base_vartime(scalar: &[u8; 56]) -> [u8; 56] {
    let mut b = [0u8; 56];
    b[0] = BASE_U as u8;
    x448_vartime(&b, scalar)
}

// ========================================================================
