use crate::errors::{XofError, XofResult};
use crate::hash::{absorb, Absorber, SpongeState, Squeezer, RATE_BYTES, SUFFIX, SUFFIX_BITS};
use crate::traits::{Absorb, Squeeze};

/// The SHAKE256 extendable output function.
///
/// An instance goes through a single lifecycle:
/// it absorbs one message, either at once with [`Shake256::hash`] or in chunks with
/// [`Shake256::absorb`] followed by [`Shake256::finalize`],
/// and can then be [`Shake256::read`] from indefinitely.
///
/// Out-of-order calls are silently ignored:
/// absorbing or finalizing after finalization, or reading before it,
/// leaves the instance untouched (and `read` writes nothing).
/// The `try_*` variants report the same situations as [`XofError`].
/// See [`crate::Shake256Absorber`] for an interface where they cannot happen.
///
/// ```
/// use shake256::Shake256;
///
/// let mut xof = Shake256::new();
/// xof.absorb(b"hello ");
/// xof.absorb(b"world");
/// xof.finalize();
///
/// let mut streamed = [0u8; 64];
/// xof.read(&mut streamed[..10]);
/// xof.read(&mut streamed[10..]);
///
/// let mut oneshot = Shake256::new();
/// oneshot.hash(b"hello world");
/// let mut expected = [0u8; 64];
/// oneshot.read(&mut expected);
/// assert_eq!(streamed, expected);
/// ```
#[derive(Clone, Default)]
pub struct Shake256 {
    phase: Phase,
}

#[derive(Clone)]
enum Phase {
    Absorbing(Absorber),
    Finalized(Squeezer),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Absorbing(Absorber::new())
    }
}

impl Shake256 {
    /// Creates a new instance, ready to absorb.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs the whole `message` and finalizes.
    ///
    /// Calling it after finalization does nothing.
    pub fn hash(&mut self, message: &[u8]) {
        if let Err(e) = self.try_hash(message) {
            log::warn!("Ignoring hash: {}", e);
        }
    }

    /// Absorbs `chunk`, appending it to the message absorbed so far.
    ///
    /// Calling it after finalization does nothing.
    pub fn absorb(&mut self, chunk: &[u8]) {
        if let Err(e) = self.try_absorb(chunk) {
            log::warn!("Ignoring absorb: {}", e);
        }
    }

    /// Pads the absorbed message and makes the output stream available.
    ///
    /// Calling it after finalization does nothing.
    pub fn finalize(&mut self) {
        if let Err(e) = self.try_finalize() {
            log::warn!("Ignoring finalize: {}", e);
        }
    }

    /// Fills `output` with the next bytes of the output stream.
    ///
    /// Calling it before finalization does nothing, and `output` is left untouched.
    pub fn read(&mut self, output: &mut [u8]) {
        if let Err(e) = self.try_read(output) {
            log::warn!("Ignoring read of {} bytes: {}", output.len(), e);
        }
    }

    /// Whether absorption is over and the output stream is available.
    pub fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized(_))
    }

    /// Like [`Shake256::hash`], failing with [`XofError::AlreadyFinalized`] after finalization.
    ///
    /// If chunks were absorbed beforehand, `message` is appended to them.
    pub fn try_hash(&mut self, message: &[u8]) -> XofResult<()> {
        let squeezer = match &mut self.phase {
            Phase::Absorbing(absorber) if absorber.absorbed_bits() == 0 => {
                let mut state = SpongeState::default();
                absorb::<RATE_BYTES>(&mut state, SUFFIX, SUFFIX_BITS, message);
                Squeezer::new(state)
            }
            Phase::Absorbing(absorber) => {
                absorber.absorb(message);
                absorber.finalize()
            }
            Phase::Finalized(_) => return Err(XofError::AlreadyFinalized),
        };
        self.phase = Phase::Finalized(squeezer);
        Ok(())
    }

    /// Like [`Shake256::absorb`], failing with [`XofError::AlreadyFinalized`] after finalization.
    pub fn try_absorb(&mut self, chunk: &[u8]) -> XofResult<()> {
        match &mut self.phase {
            Phase::Absorbing(absorber) => {
                absorber.absorb(chunk);
                Ok(())
            }
            Phase::Finalized(_) => Err(XofError::AlreadyFinalized),
        }
    }

    /// Like [`Shake256::finalize`], failing with [`XofError::AlreadyFinalized`] after finalization.
    pub fn try_finalize(&mut self) -> XofResult<()> {
        let squeezer = match &mut self.phase {
            Phase::Absorbing(absorber) => absorber.finalize(),
            Phase::Finalized(_) => return Err(XofError::AlreadyFinalized),
        };
        self.phase = Phase::Finalized(squeezer);
        Ok(())
    }

    /// Like [`Shake256::read`], failing with [`XofError::NotFinalized`] before finalization.
    pub fn try_read(&mut self, output: &mut [u8]) -> XofResult<()> {
        match &mut self.phase {
            Phase::Finalized(squeezer) => {
                squeezer.squeeze(output);
                Ok(())
            }
            Phase::Absorbing(_) => Err(XofError::NotFinalized),
        }
    }
}

impl Absorb for Shake256 {
    fn absorb(&mut self, chunk: &[u8]) {
        Shake256::absorb(self, chunk)
    }
}

impl Squeeze for Shake256 {
    fn read(&mut self, output: &mut [u8]) {
        Shake256::read(self, output)
    }

    /// Before finalization, no bytes are produced and the vector is empty.
    fn read_vec(&mut self, len: usize) -> Vec<u8> {
        if !self.is_finalized() {
            log::warn!("Ignoring read of {} bytes: {}", len, XofError::NotFinalized);
            return Vec::new();
        }
        let mut output = vec![0u8; len];
        Shake256::read(self, &mut output);
        output
    }
}

impl Drop for Shake256 {
    fn drop(&mut self) {
        if let Phase::Absorbing(absorber) = &self.phase {
            if absorber.absorbed_bits() > 0 {
                log::debug!("SHAKE256 instance dropped before finalization");
            }
        }
    }
}

impl core::fmt::Debug for Shake256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged,
        // but provide the phase for debugging.
        let phase = match self.phase {
            Phase::Absorbing(_) => "absorbing",
            Phase::Finalized(_) => "finalized",
        };
        write!(f, "Shake256({})", phase)
    }
}
