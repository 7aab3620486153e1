/// Types into which a message can be absorbed, one chunk at a time.
///
/// The chunks are concatenated: `absorb(a); absorb(b)` absorbs the same message as `absorb(a || b)`.
pub trait Absorb {
    /// Appends `chunk` to the message absorbed so far.
    fn absorb(&mut self, chunk: &[u8]);
}

/// Types from which the SHAKE256 output stream can be read.
///
/// Consecutive reads are concatenated: the output of `read(a); read(b)`
/// equals the output of a single `read(a + b)`.
pub trait Squeeze {
    /// Fills `output` with the next bytes of the output stream.
    fn read(&mut self, output: &mut [u8]);

    #[inline(always)]
    fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut output = [0u8; N];
        Squeeze::read(self, &mut output);
        output
    }

    /// Reads the next `len` bytes of the output stream into a new vector.
    fn read_vec(&mut self, len: usize) -> Vec<u8> {
        let mut output = vec![0u8; len];
        Squeeze::read(self, &mut output);
        output
    }
}
