//! Absorption and squeezing over a [`SpongeState`].
//!
//! Two absorption modes produce the exact same state for the same logical message:
//! the one-shot [`absorb`] primitive, which has the whole message at hand,
//! and the streaming [`Absorber`], which buffers partial blocks across calls.
//! Both hand over to a [`Squeezer`], which streams output satisfying
//!
//! ```text
//! squeeze(1); squeeze(1); squeeze(1) = squeeze(3);
//! ```
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keccak::SpongeState;
use super::padding::pad10x1;
use super::{RATE, RATE_BYTES, RATE_LANES, SUFFIX, SUFFIX_BITS};
use crate::lane::bytes_to_lanes;

/// Absorbs the whole of `message` into `state`, followed by the domain `suffix` and pad10*1.
///
/// Every full block of `BLOCK_BYTES` bytes is XORed into the state and permuted;
/// the final (possibly empty) partial block is padded and permuted once more.
pub fn absorb<const BLOCK_BYTES: usize>(
    state: &mut SpongeState,
    suffix: u8,
    suffix_bits: usize,
    message: &[u8],
) {
    let mut blocks = message.chunks_exact(BLOCK_BYTES);
    for block in &mut blocks {
        state.xor_block(block);
        state.permute();
    }

    let rest = blocks.remainder();
    let padding = pad10x1(
        suffix,
        suffix_bits,
        message.len() as u128 * 8 + suffix_bits as u128,
        BLOCK_BYTES * 8,
    );
    let mut last = [0u8; BLOCK_BYTES];
    last[..rest.len()].copy_from_slice(rest);
    for (l, p) in last[rest.len()..].iter_mut().zip(padding.as_bytes()) {
        *l ^= p;
    }
    state.xor_block(&last);
    state.permute();
    last.zeroize();
}

/// Streaming absorption of a message arriving in arbitrarily sized chunks.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Absorber {
    state: SpongeState,
    /// Bytes of the current block received so far.
    block: [u8; RATE_BYTES],
    /// Number of bytes of `block` in use, always less than the rate.
    offset: usize,
    /// Total message length absorbed so far, in bits.
    absorbed_bits: u128,
}

impl Absorber {
    pub fn new() -> Self {
        Self {
            state: SpongeState::default(),
            block: [0u8; RATE_BYTES],
            offset: 0,
            absorbed_bits: 0,
        }
    }

    /// Appends `input` to the message absorbed so far.
    pub fn absorb(&mut self, mut input: &[u8]) {
        self.absorbed_bits += input.len() as u128 * 8;

        while !input.is_empty() {
            let chunk_len = usize::min(input.len(), RATE_BYTES - self.offset);
            let (chunk, rest) = input.split_at(chunk_len);
            self.block[self.offset..self.offset + chunk_len].copy_from_slice(chunk);
            self.offset += chunk_len;
            input = rest;

            if self.offset == RATE_BYTES {
                self.absorb_block();
                self.offset = 0;
            }
        }

        debug_assert!(self.offset < RATE_BYTES);
        debug_assert_eq!(
            self.offset as u128,
            (self.absorbed_bits / 8) % RATE_BYTES as u128
        );
    }

    /// Pads the message, runs the final permutation, and moves the state into a [`Squeezer`].
    ///
    /// The absorber is left zeroed.
    pub fn finalize(&mut self) -> Squeezer {
        let padding = pad10x1(
            SUFFIX,
            SUFFIX_BITS,
            self.absorbed_bits + SUFFIX_BITS as u128,
            RATE,
        );
        debug_assert_eq!(padding.as_bytes().len(), RATE_BYTES - self.offset);
        // stale bytes from the previous block are overwritten by the padding
        self.block[self.offset..].copy_from_slice(padding.as_bytes());
        self.absorb_block();

        let state = core::mem::take(&mut self.state);
        self.zeroize();
        Squeezer::new(state)
    }

    /// Total message length absorbed so far, in bits.
    pub fn absorbed_bits(&self) -> u128 {
        self.absorbed_bits
    }

    fn absorb_block(&mut self) {
        let mut lanes = [0u64; RATE_LANES];
        bytes_to_lanes(&self.block, &mut lanes);
        self.state.xor_lanes(&lanes);
        self.state.permute();
        lanes.zeroize();
    }
}

impl Default for Absorber {
    fn default() -> Self {
        Self::new()
    }
}

/// Squeezes output out of a finalized sponge.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Squeezer {
    state: SpongeState,
    /// Bytes of the rate not yet emitted since the last permutation.
    readable: usize,
}

impl Squeezer {
    /// Wraps a state that has absorbed a padded message and has just been permuted.
    pub fn new(state: SpongeState) -> Self {
        Self {
            state,
            readable: RATE_BYTES,
        }
    }

    /// Fills `output` with the next bytes of the output stream.
    ///
    /// The state is permuted only when more bytes are requested
    /// and the current rate window has been fully emitted.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut written = 0;
        while written < output.len() {
            if self.readable == 0 {
                self.state.permute();
                self.readable = RATE_BYTES;
            }

            let chunk_len = usize::min(self.readable, output.len() - written);
            let offset = RATE_BYTES - self.readable;
            self.state
                .extract_bytes(offset, &mut output[written..written + chunk_len]);
            self.readable -= chunk_len;
            written += chunk_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_shot(message: &[u8]) -> Squeezer {
        let mut state = SpongeState::default();
        absorb::<RATE_BYTES>(&mut state, SUFFIX, SUFFIX_BITS, message);
        Squeezer::new(state)
    }

    #[test]
    fn test_streaming_matches_one_shot_state() {
        let message = (0..3 * RATE_BYTES + 5)
            .map(|i| (i * 7) as u8)
            .collect::<Vec<_>>();
        for split in [0, 1, 8, RATE_BYTES - 1, RATE_BYTES, RATE_BYTES + 1, message.len()] {
            let mut absorber = Absorber::new();
            absorber.absorb(&message[..split]);
            absorber.absorb(&[]);
            absorber.absorb(&message[split..]);
            assert_eq!(absorber.absorbed_bits(), message.len() as u128 * 8);
            let squeezer = absorber.finalize();
            assert_eq!(squeezer.state.lanes(), one_shot(&message).state.lanes());
        }
    }

    #[test]
    fn test_offset_invariant() {
        let mut absorber = Absorber::new();
        let mut total = 0;
        for len in [0, 1, 135, 136, 137, 272, 3, 500] {
            absorber.absorb(&vec![0xa3; len]);
            total += len;
            assert!(absorber.offset < RATE_BYTES);
            assert_eq!(absorber.offset, total % RATE_BYTES);
        }
    }

    #[test]
    fn test_finalize_zeroizes_absorber() {
        let mut absorber = Absorber::new();
        absorber.absorb(b"secret");
        let _squeezer = absorber.finalize();
        assert_eq!(absorber.offset, 0);
        assert_eq!(absorber.absorbed_bits, 0);
        assert!(absorber.block.iter().all(|&b| b == 0));
        assert!(absorber.state.lanes().iter().all(|&l| l == 0));
    }

    #[test]
    fn test_lazy_permutation() {
        let mut squeezer = one_shot(b"");
        let before = squeezer.state.lanes().to_owned();

        squeezer.squeeze(&mut [0u8; RATE_BYTES]);
        assert_eq!(squeezer.readable, 0);
        assert_eq!(squeezer.state.lanes(), &before, "no spurious permutation");

        squeezer.squeeze(&mut []);
        assert_eq!(squeezer.readable, 0);

        squeezer.squeeze(&mut [0u8; 1]);
        assert_eq!(squeezer.readable, RATE_BYTES - 1);
        assert_ne!(squeezer.state.lanes(), &before);
    }

    #[test]
    fn test_rate_plus_one_permutes_once() {
        let mut squeezer = one_shot(b"abc");
        let mut expected = one_shot(b"abc").state.clone();
        expected.permute();

        let mut output = [0u8; RATE_BYTES + 1];
        squeezer.squeeze(&mut output);
        assert_eq!(squeezer.state.lanes(), expected.lanes());
        assert_eq!(squeezer.readable, RATE_BYTES - 1);
    }
}
