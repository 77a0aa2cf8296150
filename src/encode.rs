//! Fixed-width little-endian encoding of big integers.
//!
//! Scalars and curve points are exchanged with the X25519 and X448
//! functions as little-endian byte strings of fixed length (32 and 56
//! bytes, respectively). Encoding pads with zeros on the high end.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Encodes `x` over exactly `width` bytes (little-endian). An error is
/// returned if the value does not fit.
pub fn encode_le(x: &BigUint, width: usize) -> Result<Vec<u8>> {
    // to_bytes_le() returns a single zero byte for zero.
    let mut buf = if x.is_zero() { Vec::new() } else { x.to_bytes_le() };
    if buf.len() > width {
        return Err(Error::EncodingOverflow { width });
    }
    buf.resize(width, 0);
    Ok(buf)
}

/// Encodes `x` into an array of `N` bytes (little-endian).
pub fn encode_le_array<const N: usize>(x: &BigUint) -> Result<[u8; N]> {
    let buf = encode_le(x, N)?;
    let mut d = [0u8; N];
    d.copy_from_slice(&buf);
    Ok(d)
}

/// Decodes a little-endian byte string into an integer. All bytes are
/// used; there is no range check.
pub fn decode_le(buf: &[u8]) -> BigUint {
    BigUint::from_bytes_le(buf)
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::{encode_le, encode_le_array, decode_le};
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    #[test]
    fn padding() {
        let x = BigUint::from(0x0102u32);
        let v = encode_le(&x, 4).unwrap();
        assert!(v == [0x02u8, 0x01, 0x00, 0x00]);

        let v: [u8; 32] = encode_le_array(&BigUint::zero()).unwrap();
        assert!(v == [0u8; 32]);
        assert!(encode_le(&BigUint::zero(), 0).unwrap().is_empty());
    }

    #[test]
    fn reversed_big_endian() {
        let be = hex::decode("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed").unwrap();
        let x = BigUint::from_bytes_be(&be);
        let v: [u8; 32] = encode_le_array(&x).unwrap();
        let mut r = be.clone();
        r.reverse();
        assert!(v[..] == r[..]);
        assert!(decode_le(&v) == x);
    }

    #[test]
    fn overflow() {
        let x = BigUint::one() << 256u32;
        assert!(encode_le(&x, 32).is_err());
        assert!(encode_le(&x, 33).is_ok());
        let x = BigUint::one() << 447u32;
        assert!(encode_le_array::<56>(&x).is_ok());
        assert!(encode_le_array::<55>(&x).is_err());
    }
}
