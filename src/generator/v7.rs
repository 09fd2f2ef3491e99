//! UUIDv7 generator.

use super::{OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{Error, Uuid};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Represents a UUIDv7 generator that stamps the Unix time in milliseconds and fills the rest of
/// the UUID with random bits.
///
/// The generator keeps no state: UUIDs are ordered by millisecond only, and those generated within
/// the same millisecond are ordered at random. It is `Sync` whenever its sources are.
///
/// # Examples
///
/// ```rust
/// use uuidrev::V7Generator;
///
/// let g = V7Generator::new();
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), 7);
/// # Ok::<(), uuidrev::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R = OsRandSource, T = StdSystemTime> {
    rand: R,
    time: T,
}

impl V7Generator {
    /// Creates a generator instance that uses the operating system's random source and the system
    /// clock.
    pub const fn new() -> Self {
        Self::with_rand_and_time_sources(OsRandSource, StdSystemTime)
    }
}

impl<R, T> V7Generator<R, T> {
    /// Creates a generator instance with specified random number generator and time source.
    pub const fn with_rand_and_time_sources(rand: R, time: T) -> Self {
        Self { rand, time }
    }
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random source fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<Uuid, Error> {
        let unix_ts_ms = self.time.now().as_millis() as u64 & ((1 << 48) - 1);
        self.generate_core(unix_ts_ms)
    }
}

impl<R: RandSource, T> V7Generator<R, T> {
    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit integer.
    pub fn generate_core(&self, unix_ts_ms: u64) -> Result<Uuid, Error> {
        let mut rand = [0u8; 10];
        self.rand.fill_bytes(&mut rand).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "random source failed");
            Error::Entropy(err)
        })?;
        Ok(Uuid::from_fields_v7(unix_ts_ms, rand))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call of
/// `next()`.
impl<R: RandSource, T: TimeSource> Iterator for V7Generator<R, T> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V7Generator<R, T> {}
