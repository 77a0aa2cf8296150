//! X25519 key-exchange function (variable-time).
//!
//! This module implements the X25519 primitive, as defined by [RFC
//! 7748], on top of the generic big-integer Montgomery ladder. The
//! primitive takes as input two 32-byte values, the first being the
//! representation of a point on Curve25519 or on its quadratic twist,
//! and the second being a scalar. The scalar is internally "clamped"
//! (bits 0, 1, 2 and 255 are cleared, bit 254 is set), then the point is
//! multiplied by the scalar, and the u coordinate of the output point
//! is encoded into 32 bytes.
//!
//! As per RFC 7748 requirements, the top point bit (most significant
//! bit of the last byte) is ignored, and non-canonical values are
//! accepted. No input is filtered out.
//!
//! The implementation is NOT constant-time: it is used to check the
//! public keys of test vectors, not to handle actual secrets.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

use num_bigint::BigUint;
use num_traits::One;

use crate::montgomery::Curve;

/// Conventional generator (u coordinate).
pub const BASE_U: u32 = 9;

fn curve() -> Curve {
    Curve {
        p: (BigUint::one() << 255u32) - 19u32,
        a24: 121665,
        bits: 255,
    }
}

fn encode(x: &BigUint) -> [u8; 32] {
    // Ladder output is reduced modulo 2^255-19, hence fits.
    let v = x.to_bytes_le();
    let mut d = [0u8; 32];
    d[..v.len()].copy_from_slice(&v);
    d
}

/// X25519 function (from RFC 7748), general case.
///
/// `point` is the little-endian encoding of the u coordinate of the
/// source point, `scalar` the little-endian encoding of the scalar
/// (which is clamped).
pub fn x25519_vartime(point: &[u8; 32], scalar: &[u8; 32]) -> [u8; 32] {
    // Make clamped scalar.
    let mut s = *scalar;
    s[0] &= 248;
    s[31] &= 127;
    s[31] |= 64;

    // Decode the source point, ignoring the top bit.
    let mut u = *point;
    u[31] &= 127;
    let u = BigUint::from_bytes_le(&u);

    encode(&curve().ladder_vartime(&s, &u))
}

/// X25519 function applied to the conventional generator point (u = 9).
pub fn x25519_base_vartime(scalar: &[u8; 32]) -> [u8; 32] {
    let mut b = [0u8; 32];
    b[0] = BASE_U as u8;
    x25519_vartime(&b, scalar)
}

// ========================================================================
