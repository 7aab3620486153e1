//! SHAKE256 with the absorbing and squeezing phases as distinct types.
//!
//! [`Shake256Absorber::finalize`] consumes the absorber and returns a [`Shake256Reader`],
//! so that absorbing after finalization, or reading before it, does not compile.
//!
//! Both types plug into the RustCrypto [`digest`] traits,
//! and the reader can be used as a deterministic [`rand::RngCore`].
use rand::{CryptoRng, RngCore};

use crate::hash::{absorb, Absorber, SpongeState, Squeezer, RATE_BYTES, SUFFIX, SUFFIX_BITS};
use crate::traits::{Absorb, Squeeze};

/// The absorbing phase of SHAKE256.
///
/// ```
/// use shake256::Shake256Absorber;
///
/// let mut absorber = Shake256Absorber::new();
/// absorber.absorb(b"streamed ").absorb(b"message");
/// let mut reader = absorber.finalize();
///
/// let mut output = [0u8; 32];
/// reader.read(&mut output);
/// assert_eq!(output, shake256::shake256::<32>(b"streamed message"));
/// ```
#[derive(Clone, Default)]
pub struct Shake256Absorber {
    absorber: Absorber,
}

/// The squeezing phase of SHAKE256: an unbounded reader over the output stream.
#[derive(Clone)]
pub struct Shake256Reader {
    squeezer: Squeezer,
}

impl Shake256Absorber {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot SHAKE256: absorbs the whole `message` and returns the output reader.
    pub fn hash(message: &[u8]) -> Shake256Reader {
        let mut state = SpongeState::default();
        absorb::<RATE_BYTES>(&mut state, SUFFIX, SUFFIX_BITS, message);
        Shake256Reader {
            squeezer: Squeezer::new(state),
        }
    }

    /// Absorbs `chunk`, appending it to the message absorbed so far.
    pub fn absorb(&mut self, chunk: &[u8]) -> &mut Self {
        self.absorber.absorb(chunk);
        self
    }

    /// Ends absorption and returns the output reader.
    pub fn finalize(mut self) -> Shake256Reader {
        Shake256Reader {
            squeezer: self.absorber.finalize(),
        }
    }
}

impl Shake256Reader {
    /// Fills `output` with the next bytes of the output stream.
    pub fn read(&mut self, output: &mut [u8]) {
        self.squeezer.squeeze(output);
    }
}

impl Absorb for Shake256Absorber {
    fn absorb(&mut self, chunk: &[u8]) {
        self.absorber.absorb(chunk);
    }
}

impl Squeeze for Shake256Reader {
    fn read(&mut self, output: &mut [u8]) {
        self.squeezer.squeeze(output);
    }
}

impl digest::HashMarker for Shake256Absorber {}

impl digest::Update for Shake256Absorber {
    fn update(&mut self, data: &[u8]) {
        self.absorber.absorb(data);
    }
}

impl digest::ExtendableOutput for Shake256Absorber {
    type Reader = Shake256Reader;

    fn finalize_xof(self) -> Self::Reader {
        self.finalize()
    }
}

impl digest::XofReader for Shake256Reader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeezer.squeeze(buffer);
    }
}

impl RngCore for Shake256Reader {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.squeezer.squeeze(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.squeezer.squeeze(dest);
        Ok(())
    }
}

/// The output of SHAKE256 is indistinguishable from random as long as the absorbed message is secret.
impl CryptoRng for Shake256Reader {}

impl core::fmt::Debug for Shake256Absorber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shake256Absorber").finish_non_exhaustive()
    }
}

impl core::fmt::Debug for Shake256Reader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shake256Reader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::{ExtendableOutput, Update, XofReader};
    use rand::Rng;

    #[test]
    fn test_digest_bridge() {
        let mut absorber = Shake256Absorber::default();
        Update::update(&mut absorber, b"digest ");
        Update::update(&mut absorber, b"bridge");
        let mut bridged = [0u8; 200];
        XofReader::read(&mut absorber.finalize_xof(), &mut bridged);

        let mut expected = [0u8; 200];
        Shake256Absorber::hash(b"digest bridge").read(&mut expected);
        assert_eq!(bridged, expected);

        let mut provided = [0u8; 200];
        Shake256Absorber::digest_xof(b"digest bridge", &mut provided);
        assert_eq!(provided, expected);
    }

    #[test]
    fn test_rng_follows_output_stream() {
        let mut rng = Shake256Absorber::hash(b"seed");
        let mut stream = Shake256Absorber::hash(b"seed");

        let word: u64 = rng.gen();
        assert_eq!(word, u64::from_le_bytes(stream.read_array::<8>()));
        assert_eq!(rng.next_u32(), u32::from_le_bytes(stream.read_array::<4>()));

        let mut bytes = [0u8; 300];
        rng.fill_bytes(&mut bytes);
        assert_eq!(bytes.to_vec(), stream.read_vec(300));
    }
}
