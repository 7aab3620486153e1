//!
//! An implementation of the SHAKE256 extendable output function (XOF),
//! as specified in section 6.2 of [FIPS 202].
//!
//! SHAKE256 is a sponge over the Keccak-f\[1600\] permutation with a capacity of 512 bits:
//! it absorbs a message of any length, and then squeezes out an output stream of any length.
//!
//! # Overview
//!
//! The message can be absorbed at once, or streamed in chunks of any size;
//! for the same logical message the output stream is the same.
//! The output can likewise be read in requests of any size:
//!
//! ```text
//! read(a); read(b) = read(a + b);
//! ```
//!
//! The quickest way in is the one-shot [`shake256`] function:
//!
//! ```
//! let output = shake256::shake256::<32>(b"");
//! assert_eq!(output[..4], [0x46u8, 0xb9, 0xdd, 0x2b]);
//! ```
//!
//! # Absorb, finalize, read
//!
//! [`Shake256`] is a state machine going through a single absorb-then-squeeze lifecycle.
//! Out-of-order operations (absorbing after [`Shake256::finalize`], reading before it)
//! are silently ignored; their `try_*` counterparts return an [`XofError`] instead.
//!
//! ```
//! use shake256::Shake256;
//!
//! let mut xof = Shake256::new();
//! // reading before finalization produces nothing
//! let mut output = [0u8; 16];
//! xof.read(&mut output);
//! assert_eq!(output, [0u8; 16]);
//!
//! xof.absorb(b"the quick brown fox ");
//! xof.absorb(b"jumps over the lazy dog");
//! xof.finalize();
//! xof.read(&mut output);
//! assert_ne!(output, [0u8; 16]);
//! ```
//!
//! [`Shake256Absorber`] and [`Shake256Reader`] split the two phases into two types,
//! so that misuse is caught at compile time.
//! They also implement the RustCrypto [`digest`] traits, and the reader implements [`rand::RngCore`].
//!
//! ```
//! use shake256::{Shake256Absorber, Squeeze};
//!
//! let mut reader = Shake256Absorber::hash(b"seed");
//! let challenge = reader.read_array::<16>();
//! let more = reader.read_vec(1000);
//! ```
//!
//! # Portability
//!
//! The state is kept as 64-bit lanes, and bytes are moved in and out of lanes
//! explicitly in little-endian order (see [`lane`]), so that the output is the same on
//! little-endian and big-endian targets.
//!
//! [FIPS 202]: https://dx.doi.org/10.6028/NIST.FIPS.202

/// Error reported by the checked operations.
mod errors;
/// The sponge construction and the SHAKE256 parameters.
pub mod hash;
/// Byte/lane conversions.
pub mod lane;
/// Typed absorbing and squeezing phases.
mod staged;
/// Traits for reading output.
pub mod traits;
/// The SHAKE256 state machine.
mod xof;

pub use errors::{XofError, XofResult};
pub use staged::{Shake256Absorber, Shake256Reader};
pub use traits::{Absorb, Squeeze};
pub use xof::Shake256;

/// Computes the first `N` bytes of SHAKE256(`message`).
#[inline]
pub fn shake256<const N: usize>(message: &[u8]) -> [u8; N] {
    Shake256Absorber::hash(message).read_array::<N>()
}

/// Fills `output` with the first `output.len()` bytes of SHAKE256(`message`).
#[inline]
pub fn shake256_into(message: &[u8], output: &mut [u8]) {
    Shake256Absorber::hash(message).read(output);
}
