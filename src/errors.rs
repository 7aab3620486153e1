//! The [`shake256`](crate) package has a single error type, [`XofError`],
//! raised by the checked (`try_*`) operations of [`crate::Shake256`]
//! whenever an operation is invoked outside of the phase in which it is valid.
//!
//! The unchecked operations ([`crate::Shake256::absorb`], [`crate::Shake256::read`], ...)
//! never fail: out-of-phase calls are silently ignored.
//! The typed front-end ([`crate::Shake256Absorber`], [`crate::Shake256Reader`])
//! makes these errors unrepresentable.
//!
//! A [`core::result::Result`] wrapper called [`XofResult`] (having error fixed to [`XofError`]) is also provided.
use std::{error::Error, fmt::Display};

/// An operation was invoked in the wrong phase of the sponge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XofError {
    /// Absorption (or finalization) was requested after the sponge was finalized.
    AlreadyFinalized,
    /// Output was requested before the sponge was finalized.
    NotFinalized,
}

/// The result type of the checked XOF operations.
pub type XofResult<T> = Result<T, XofError>;

impl Display for XofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "Sponge already finalized"),
            Self::NotFinalized => write!(f, "Sponge not finalized"),
        }
    }
}

impl Error for XofError {}
