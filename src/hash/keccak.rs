//! A wrapper around the Keccak-f\[1600\] permutation.
//!
//! The permutation itself is provided by [`keccak::f1600`];
//! this module only owns the 25 lanes it acts upon.
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::lane::{bytes_to_lanes, extract_bytes, LANE_BYTES};

/// Number of lanes in the state.
pub const STATE_LANES: usize = 25;
/// Number of bytes in the state.
pub const STATE_BYTES: usize = STATE_LANES * LANE_BYTES;

/// The 1600-bit state of the sponge, as 25 lanes.
///
/// Only the rate-sized prefix is ever touched by absorption or squeezing;
/// the capacity is left to the permutation.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SpongeState {
    lanes: [u64; STATE_LANES],
}

impl SpongeState {
    /// Applies Keccak-f\[1600\] to the state in place.
    #[inline]
    pub fn permute(&mut self) {
        keccak::f1600(&mut self.lanes);
    }

    /// XORs `lanes` into the leading lanes of the state.
    #[inline]
    pub fn xor_lanes(&mut self, lanes: &[u64]) {
        debug_assert!(lanes.len() <= STATE_LANES);
        for (s, l) in self.lanes.iter_mut().zip(lanes) {
            *s ^= l;
        }
    }

    /// XORs a block of bytes into the leading bytes of the state.
    ///
    /// The block length must be a multiple of the lane size.
    pub fn xor_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() % LANE_BYTES == 0 && block.len() <= STATE_BYTES);
        let mut words = [0u64; STATE_LANES];
        let len = block.len() / LANE_BYTES;
        bytes_to_lanes(block, &mut words[..len]);
        self.xor_lanes(&words[..len]);
        words.zeroize();
    }

    /// Copies bytes of the state, starting at byte `offset`, into `out`.
    #[inline]
    pub fn extract_bytes(&self, offset: usize, out: &mut [u8]) {
        extract_bytes(&self.lanes, offset, out);
    }

    /// The lanes of the state.
    pub fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.lanes
    }
}

impl core::fmt::Debug for SpongeState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        f.debug_struct("SpongeState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_block_is_little_endian() {
        let mut state = SpongeState::default();
        let mut block = [0u8; 16];
        block[0] = 0x01;
        block[9] = 0xab;
        state.xor_block(&block);
        assert_eq!(state.lanes()[0], 0x01);
        assert_eq!(state.lanes()[1], 0xab00);
        assert!(state.lanes()[2..].iter().all(|&l| l == 0));

        // XOR is an involution
        state.xor_block(&block);
        assert_eq!(state.lanes(), &[0u64; STATE_LANES]);
    }

    #[test]
    fn test_permute_zero_state() {
        // first lane of Keccak-f[1600] applied to the all-zero state
        let mut state = SpongeState::default();
        state.permute();
        assert_eq!(state.lanes()[0], 0xf1258f7940e1dde7);
    }
}
