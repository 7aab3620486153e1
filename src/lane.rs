//! Byte and word views of the sponge state.
//!
//! A lane is the basic unit the Keccak-f\[1600\] permutation works on: a 64-bit word.
//! Input and output are byte streams, mapped to lanes in little-endian order
//! (byte `i` of the stream is bits `8 * (i % 8)..8 * (i % 8) + 8` of lane `i / 8`).
//! The conversions below never reinterpret memory, hence they are correct
//! regardless of the host byte order.

/// Number of bytes in a lane.
pub const LANE_BYTES: usize = 8;

/// Reads `bytes` as a sequence of little-endian lanes, writing them into `lanes`.
///
/// `bytes` must hold exactly `lanes.len() * 8` bytes.
#[inline]
pub fn bytes_to_lanes(bytes: &[u8], lanes: &mut [u64]) {
    debug_assert_eq!(bytes.len(), lanes.len() * LANE_BYTES);
    for (b, lane) in bytes.chunks_exact(LANE_BYTES).zip(lanes.iter_mut()) {
        *lane = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }
}

/// Writes `lanes` as a little-endian byte stream into `bytes`.
///
/// `bytes` must hold exactly `lanes.len() * 8` bytes.
#[inline]
pub fn lanes_to_bytes(lanes: &[u64], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), lanes.len() * LANE_BYTES);
    for (b, lane) in bytes.chunks_exact_mut(LANE_BYTES).zip(lanes) {
        b.copy_from_slice(&lane.to_le_bytes());
    }
}

/// Byte `index` of the little-endian byte stream of `lanes`.
#[inline(always)]
pub fn lane_byte(lanes: &[u64], index: usize) -> u8 {
    (lanes[index / LANE_BYTES] >> ((index % LANE_BYTES) * 8)) as u8
}

/// Copies `out.len()` bytes of the byte stream of `lanes`, starting at `offset`.
///
/// Bytes are shifted out of their lane one at a time;
/// this is what makes squeezing independent of the host endianness.
#[inline]
pub fn extract_bytes(lanes: &[u64], offset: usize, out: &mut [u8]) {
    debug_assert!(offset + out.len() <= lanes.len() * LANE_BYTES);
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = lane_byte(lanes, offset + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_order() {
        let lanes = [0x0706050403020100u64, 0x0f0e0d0c0b0a0908];
        let mut bytes = [0u8; 16];
        lanes_to_bytes(&lanes, &mut bytes);
        assert_eq!(bytes, core::array::from_fn::<u8, 16, _>(|i| i as u8));

        let mut back = [0u64; 2];
        bytes_to_lanes(&bytes, &mut back);
        assert_eq!(back, lanes);
    }

    #[test]
    fn test_extract_across_lanes() {
        let lanes = [0x0706050403020100u64, 0x0f0e0d0c0b0a0908, u64::MAX];
        let mut out = [0u8; 5];
        extract_bytes(&lanes, 6, &mut out);
        assert_eq!(out, [6, 7, 8, 9, 10]);
        assert_eq!(lane_byte(&lanes, 16), 0xff);

        let mut empty = [0u8; 0];
        extract_bytes(&lanes, 24, &mut empty);
    }
}
