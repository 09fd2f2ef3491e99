//! Integration with `rand` (v0.8) crate.

use super::{lock, Mutex, RandSource, StdSystemTime};
use super::{v6::V6Generator, v7::V7Generator, v8::V8Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// The wrapped generator sits behind a lock so that the adapter can be shared across threads.
#[derive(Debug, Default)]
pub struct Adapter<T>(Mutex<T>);

impl<T> Adapter<T> {
    /// Wraps `rng`.
    pub const fn new(rng: T) -> Self {
        Self(Mutex::new(rng))
    }

    /// Consumes the adapter, returning the wrapped [`RngCore`] type.
    #[cfg(not(feature = "parking-lot"))]
    pub fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Consumes the adapter, returning the wrapped [`RngCore`] type.
    #[cfg(feature = "parking-lot")]
    pub fn into_inner(self) -> T {
        self.0.into_inner()
    }
}

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        lock(&self.0).try_fill_bytes(dest)
    }
}

impl<T: RngCore> V6Generator<Adapter<T>, StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use uuidrev::V6Generator;
    ///
    /// let g = V6Generator::with_rand08(StdRng::from_entropy());
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuidrev::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_and_time_sources(Adapter::new(rng), StdSystemTime)
    }
}

impl<T: RngCore> V7Generator<Adapter<T>, StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_and_time_sources(Adapter::new(rng), StdSystemTime)
    }
}

impl<T: RngCore> V8Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_source(Adapter::new(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::{generator::RandSource, V8Generator};
    use rand::{rngs::mock::StepRng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Reproduces the same sequence from the same seed
    #[test]
    fn reproduces_the_same_sequence_from_the_same_seed() {
        let a = V8Generator::with_rand08(ChaCha8Rng::seed_from_u64(7));
        let b = V8Generator::with_rand08(ChaCha8Rng::seed_from_u64(7));
        for (x, y) in a.zip(b).take(100) {
            assert_eq!(x.unwrap(), y.unwrap());
        }
    }

    /// Forwards bytes from the wrapped generator
    #[test]
    fn forwards_bytes_from_the_wrapped_generator() {
        let adapter = Adapter::new(StepRng::new(0x0706_0504_0302_0100, 0));
        let mut buf = [0u8; 8];
        adapter.fill_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
        let _ = adapter.into_inner();
    }
}
