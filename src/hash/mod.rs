//! The sponge construction over Keccak-f\[1600\], instantiated with the SHAKE256 parameters.
//!
//! ```text
//! SHAKE256(M, d) = Keccak[512](M || 1111, d)
//! ```
//!
//! See section 6.2 of [FIPS 202](https://dx.doi.org/10.6028/NIST.FIPS.202).

/// Keccak-f\[1600\] state.
pub mod keccak;
/// The pad10*1 rule.
pub mod padding;
pub mod sponge;

pub use keccak::SpongeState;
pub use padding::{pad10x1, Padding};
pub use sponge::{absorb, Absorber, Squeezer};

/// Width of the permutation, in bits.
pub const WIDTH: usize = 1600;
/// Capacity of the sponge, in bits.
pub const CAPACITY: usize = 512;
/// Rate of the sponge, in bits.
pub const RATE: usize = WIDTH - CAPACITY;
/// Rate of the sponge, in bytes.
pub const RATE_BYTES: usize = RATE / 8;
/// Rate of the sponge, in lanes.
pub const RATE_LANES: usize = RATE_BYTES / crate::lane::LANE_BYTES;

/// Domain separation suffix appended to the message, least significant bit first.
pub const SUFFIX: u8 = 0b0000_1111;
/// Bit width of [`SUFFIX`].
pub const SUFFIX_BITS: usize = 4;
