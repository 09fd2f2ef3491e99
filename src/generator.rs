//! Generators and the random number and clock interfaces they consume.

use std::time;

pub mod v6;
pub mod v7;
pub mod v8;
pub mod with_rand08;


/// A trait that defines the random number generator interface for generators.
///
/// Implementations must return cryptographically strong bytes and must report failure instead of
/// falling back to a weaker source. The receiver is `&self` so that one generator can be shared
/// by many threads; implementations synchronize internally where needed.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// A trait that defines the system clock interface for generators.
pub trait TimeSource {
    /// Returns the current time as the duration elapsed since the Unix epoch, with sub-millisecond
    /// precision where the underlying clock offers it.
    fn now(&self) -> time::Duration;
}

/// The default random number generator that reads directly from the operating system's
/// cryptographically secure source ([`rand::rngs::OsRng`]).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct OsRandSource;

impl RandSource for OsRandSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        rand::RngCore::try_fill_bytes(&mut rand::rngs::OsRng, dest)
    }
}

/// The default time source that reads [`std::time::SystemTime`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&self) -> time::Duration {
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
    }
}

impl<T: RandSource + ?Sized> RandSource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        (**self).fill_bytes(dest)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> time::Duration {
        (**self).now()
    }
}

#[cfg(feature = "parking-lot")]
use parking_lot::{Mutex, MutexGuard};
#[cfg(not(feature = "parking-lot"))]
use std::sync::{Mutex, MutexGuard};

/// Acquires `mutex`, recovering the guard if a previous holder panicked; generator state is only
/// ever written as a whole, so a poisoned value is still consistent.
#[cfg(not(feature = "parking-lot"))]
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(feature = "parking-lot")]
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock()
}
