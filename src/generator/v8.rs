//! UUIDv8 generator.

use super::{OsRandSource, RandSource};
use crate::{Error, Uuid};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Represents a UUIDv8 generator that fills all but the `ver` and `var` fields with random bits.
///
/// # Examples
///
/// ```rust
/// use uuidrev::V8Generator;
///
/// let uuid = V8Generator::new().generate()?;
/// println!("{}", uuid); // e.g., "320c3d4d-cc00-875b-8ec9-32d5f69181c0"
/// # Ok::<(), uuidrev::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V8Generator<R = OsRandSource> {
    rand: R,
}

impl V8Generator {
    /// Creates a generator instance that uses the operating system's random source.
    pub const fn new() -> Self {
        Self::with_rand_source(OsRandSource)
    }
}

impl<R> V8Generator<R> {
    /// Creates a generator instance with a specified random number generator.
    pub const fn with_rand_source(rand: R) -> Self {
        Self { rand }
    }
}

impl<R: RandSource> V8Generator<R> {
    /// Generates a new UUIDv8 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random source fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rand.fill_bytes(&mut bytes).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "random source failed");
            Error::Entropy(err)
        })?;
        Ok(Uuid::from_bytes_v8(bytes))
    }
}

impl<R: RandSource> Iterator for V8Generator<R> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for V8Generator<R> {}
