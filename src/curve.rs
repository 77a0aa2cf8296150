//! Curve families.
//!
//! A `CurveFamily` binds together the clamped scalar group of a curve,
//! the fixed length of its scalar and point encodings, and the
//! corresponding X25519 or X448 function:
//!
//!  - `Curve25519`: `p = 2^252 + 27742317777372353535851937790883648493`,
//!    clamped bit 254, cofactor 8, 32-byte encodings.
//!  - `Curve448`: `p = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885`,
//!    clamped bit 447, cofactor 4, 56-byte encodings.
//!
//! Each family also publishes its designed ranges of invalid scalars:
//! ranges of values `x` such that neither `x` nor `n - x` is clamped.
//! These are used for boundary checks and as target ranges for
//! `GroupParameters::bad_delta()`.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
#[cfg(any(feature = "x25519", feature = "x448"))]
use num_traits::One;

use crate::error::{Error, Result};
use crate::group::GroupParameters;

#[cfg(feature = "x25519")]
const X25519_OFFSET: &[u8] = b"14def9dea2f79cd65812631a5cf5d3ed";

#[cfg(feature = "x448")]
const X448_OFFSET: &[u8] = b"8335dc163bb124b65129c96fde933d8d723a70aadc873d6d54a7bb0d";

/// Inclusive range `[lower, upper]` of invalid scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRange {
    pub lower: BigUint,
    pub upper: BigUint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    #[cfg(feature = "x25519")]
    Curve25519,
    #[cfg(feature = "x448")]
    Curve448,
}

impl CurveFamily {

    /// All enabled curve families.
    pub const ALL: &'static [CurveFamily] = &[
        #[cfg(feature = "x25519")]
        CurveFamily::Curve25519,
        #[cfg(feature = "x448")]
        CurveFamily::Curve448,
    ];

    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => "x25519",
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => "x448",
        }
    }

    /// Offset `x` in the prime subgroup order (`2^252 + x` for
    /// Curve25519, `2^446 - x` for Curve448).
    fn offset(self) -> BigUint {
        let hx = match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => X25519_OFFSET,
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => X448_OFFSET,
        };
        // Constant strings are valid hexadecimal.
        BigUint::parse_bytes(hx, 16).unwrap_or_default()
    }

    /// Returns the group parameters for this family.
    pub fn group(self) -> GroupParameters {
        let (p, b, h) = match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 =>
                ((BigUint::one() << 252u32) + self.offset(), 254, 8),
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 =>
                ((BigUint::one() << 446u32) - self.offset(), 447, 4),
        };
        GroupParameters::from_constants(p, b, h)
    }

    /// Length (in bytes) of encoded scalars and points.
    pub fn encoded_len(self) -> usize {
        match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => 32,
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => 56,
        }
    }

    fn check_len(self, buf: &[u8]) -> Result<()> {
        let expected = self.encoded_len();
        if buf.len() != expected {
            return Err(Error::InvalidLength { expected, got: buf.len() });
        }
        Ok(())
    }

    /// Multiplies the conventional generator by `scalar` (encoded,
    /// clamped by the curve function).
    pub fn base_mul(self, scalar: &[u8]) -> Result<Vec<u8>> {
        self.check_len(scalar)?;
        match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => {
                let mut s = [0u8; 32];
                s.copy_from_slice(scalar);
                Ok(crate::x25519::x25519_base_vartime(&s).to_vec())
            }
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => {
                let mut s = [0u8; 56];
                s.copy_from_slice(scalar);
                Ok(crate::x448::x448_base_vartime(&s).to_vec())
            }
        }
    }

    /// Multiplies `point` by `scalar` (both encoded).
    pub fn mul(self, scalar: &[u8], point: &[u8]) -> Result<Vec<u8>> {
        self.check_len(scalar)?;
        self.check_len(point)?;
        match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => {
                let mut s = [0u8; 32];
                s.copy_from_slice(scalar);
                let mut u = [0u8; 32];
                u.copy_from_slice(point);
                Ok(crate::x25519::x25519_vartime(&u, &s).to_vec())
            }
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => {
                let mut s = [0u8; 56];
                s.copy_from_slice(scalar);
                let mut u = [0u8; 56];
                u.copy_from_slice(point);
                Ok(crate::x448::x448_vartime(&u, &s).to_vec())
            }
        }
    }

    /// Encodes a scalar with this family's encoding length.
    pub fn encode_scalar(self, x: &BigUint) -> Result<Vec<u8>> {
        crate::encode::encode_le(x, self.encoded_len())
    }

    /// Designed ranges of invalid scalars (inclusive bounds).
    ///
    /// For Curve25519 (`n = 2^255 + 8*x`): `[0, 8*x]` (negations are at
    /// least `2^255`) and `[2^255, n]`. For Curve448
    /// (`n = 2^448 - 4*x`): `[2^447 - 4*x + 4, 2^447 - 4]`, whose
    /// negations all lie in the same range.
    pub fn invalid_ranges(self) -> Vec<InvalidRange> {
        let g = self.group();
        let x = self.offset();
        match self {
            #[cfg(feature = "x25519")]
            CurveFamily::Curve25519 => vec![
                InvalidRange {
                    lower: BigUint::from(0u32),
                    upper: x * 8u32,
                },
                InvalidRange {
                    lower: BigUint::one() << 255u32,
                    upper: g.order().clone(),
                },
            ],
            #[cfg(feature = "x448")]
            CurveFamily::Curve448 => {
                let top = BigUint::one() << 447u32;
                vec![
                    InvalidRange {
                        lower: (&top - x * 4u32) + g.cofactor(),
                        upper: top - g.cofactor(),
                    },
                ]
            }
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            #[cfg(feature = "x25519")]
            "x25519" | "curve25519" | "25519" => Ok(CurveFamily::Curve25519),
            #[cfg(feature = "x448")]
            "x448" | "curve448" | "448" => Ok(CurveFamily::Curve448),
            _ => Err(Error::UnknownCurve(s.to_string())),
        }
    }
}

// ========================================================================
