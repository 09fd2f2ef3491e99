//! Error types returned by generators.

use crate::ParseError;

/// All errors that this crate can produce.
///
/// Generators fail only with [`Error::Entropy`]; the variant is never retried or papered over
/// with weaker randomness, so callers decide whether a broken random source is fatal.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The random source could not supply the requested bytes.
    #[error("could not read from random source: {0}")]
    Entropy(#[source] rand::Error),

    /// A string did not hold the 8-4-4-4-12 hexadecimal representation.
    #[error(transparent)]
    InvalidFormat(#[from] ParseError),
}

impl Error {
    /// Returns `true` if the error originates from the random source.
    pub fn is_entropy(&self) -> bool {
        matches!(self, Self::Entropy(_))
    }
}
