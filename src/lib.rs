//! Clampdelta is a Rust library for research on "delta multiplication"
//! of clamped Montgomery-curve private keys.
//!
//! With the X25519 and X448 key-exchange functions ([RFC 7748]),
//! private keys are "clamped": a fixed high bit is set, bits above it
//! are cleared, and the value is a multiple of the curve cofactor. If a
//! private key `sk` is multiplied by a delta `d` (both clamped) modulo
//! the full group order `n`, then the public key of the product is the
//! public key of `sk` multiplied by `d`. Since the Montgomery ladder
//! only yields u coordinates, the product and its negation modulo `n`
//! are equivalent; a canonical representative is selected (the one with
//! the clamped bit set). The product is not always a clamped value,
//! and a key-validation routine should reject the result when neither
//! representative is clamped.
//!
//! This library implements:
//!
//!  - `group`: the clamped scalar group parameters, with clamping and
//!    the validity test;
//!  - `delta`: delta multiplication (with a trace of all intermediate
//!    values), and the construction of "bad" deltas, i.e. clamped deltas
//!    that make the result invalid;
//!  - `sample`: uniform sampling of big integers from a caller-provided
//!    random source;
//!  - `encode`: fixed-width little-endian encoding of big integers;
//!  - `x25519` and `x448`: the RFC 7748 functions, over a generic
//!    big-integer Montgomery ladder (internal);
//!  - `curve`: the supported curve families (Curve25519 and Curve448);
//!  - `vectors`: generation of test vectors (positive, negative, and
//!    failure cases), homomorphism and boundary checks.
//!
//! # Conventions
//!
//! Contrary to usual cryptographic libraries, NOTHING here is
//! constant-time: all integers are `BigUint` values, and functions
//! branch on secret data. Function names of curve operations include
//! "vartime" as a reminder. The code is meant for offline generation
//! and verification of test vectors.
//!
//! Fallible operations return `Result` with the crate `Error` type;
//! invariant violations in the bad-delta construction (unexpected GCD,
//! no clamped candidate) are reported as errors so that callers may
//! retry with other inputs. Randomness is always provided by the
//! caller, as a `RngCore` implementation; using a seeded deterministic
//! generator yields reproducible vectors. Diagnostic output goes
//! through the `log` facade (`trace` and `debug` levels); no logger is
//! installed by the library.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod error;
pub mod group;
pub mod delta;
pub mod sample;
pub mod encode;
mod montgomery;
pub mod curve;
pub mod vectors;

#[cfg(feature = "x25519")]
pub mod x25519;

#[cfg(feature = "x448")]
pub mod x448;

pub use error::{Error, Result};
pub use group::GroupParameters;
pub use delta::MultiplicationTrace;
pub use curve::CurveFamily;
