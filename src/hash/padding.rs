//! The multi-rate padding rule pad10*1, preceded by a domain separation suffix.
//!
//! Bits are numbered least significant first within each byte,
//! following the Keccak bit-ordering convention.
//! The suffix `1111` followed by the shortest padding `10..01` thus reads
//! `0x1F, 0x00, .., 0x00, 0x80` as bytes, or `0x9F` when a single byte is left in the block.

use super::keccak::STATE_BYTES;

/// The bytes to be XORed into the final block of the sponge.
///
/// The sequence starts at the byte boundary where the domain suffix begins,
/// and ends at the end of the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    bytes: [u8; STATE_BYTES],
    bits: usize,
}

impl Padding {
    /// The padding bytes, domain suffix included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bits / 8]
    }

    /// The length of the padding in bits, domain suffix included.
    pub fn bit_len(&self) -> usize {
        self.bits
    }
}

/// Computes `suffix || pad10*1` for a message of `message_bits` bits (suffix included),
/// for a sponge of rate `rate_bits`.
///
/// The message (without suffix) is expected to be a whole number of bytes,
/// the suffix to be at most 6 bits long, and the rate to be a whole number of bytes.
/// Under these conditions the padding always fits in the block where the suffix starts.
pub fn pad10x1(suffix: u8, suffix_bits: usize, message_bits: u128, rate_bits: usize) -> Padding {
    debug_assert!(suffix_bits <= 6);
    debug_assert!(rate_bits % 8 == 0 && rate_bits <= STATE_BYTES * 8);
    debug_assert!(message_bits >= suffix_bits as u128);
    debug_assert!((message_bits - suffix_bits as u128) % 8 == 0);

    // bit offset, within the final block, at which the suffix starts
    let start = ((message_bits - suffix_bits as u128) % rate_bits as u128) as usize;
    let bits = rate_bits - start;

    let mut bytes = [0u8; STATE_BYTES];
    bytes[0] = suffix & ((1u16 << suffix_bits) - 1) as u8;
    // first and last bit of pad10*1; they coincide only for one-bit padding
    bytes[suffix_bits / 8] |= 1 << (suffix_bits % 8);
    bytes[(bits - 1) / 8] |= 1 << ((bits - 1) % 8);

    Padding { bytes, bits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{RATE, RATE_BYTES, SUFFIX, SUFFIX_BITS};

    #[test]
    fn test_full_block_padding() {
        let padding = pad10x1(SUFFIX, SUFFIX_BITS, SUFFIX_BITS as u128, RATE);
        let bytes = padding.as_bytes();
        assert_eq!(padding.bit_len(), RATE);
        assert_eq!(bytes.len(), RATE_BYTES);
        assert_eq!(bytes[0], 0x1f);
        assert!(bytes[1..RATE_BYTES - 1].iter().all(|&b| b == 0));
        assert_eq!(bytes[RATE_BYTES - 1], 0x80);
    }

    #[test]
    fn test_single_byte_padding() {
        let message_bits = (RATE_BYTES as u128 - 1) * 8 + SUFFIX_BITS as u128;
        let padding = pad10x1(SUFFIX, SUFFIX_BITS, message_bits, RATE);
        assert_eq!(padding.bit_len(), 8);
        assert_eq!(padding.as_bytes(), &[0x9f]);
    }

    #[test]
    fn test_padding_depends_on_block_position_only() {
        for len in [0u128, 1, 17, 135, 136, 137, 1000] {
            let bits = len * 8 + SUFFIX_BITS as u128;
            let far = bits + 7 * RATE as u128;
            assert_eq!(
                pad10x1(SUFFIX, SUFFIX_BITS, bits, RATE),
                pad10x1(SUFFIX, SUFFIX_BITS, far, RATE)
            );
            let padding = pad10x1(SUFFIX, SUFFIX_BITS, bits, RATE);
            assert_eq!(
                padding.as_bytes().len(),
                RATE_BYTES - (len % RATE_BYTES as u128) as usize
            );
        }
    }

    #[test]
    fn test_sha3_suffix() {
        // SHA3 uses the suffix `01`, i.e. `0x06` once padded.
        let padding = pad10x1(0b10, 2, 2, RATE);
        assert_eq!(padding.as_bytes()[0], 0x06);
        assert_eq!(padding.as_bytes()[RATE_BYTES - 1], 0x80);
    }
}
