//! UUIDv6 generator.

use super::{lock, Mutex, OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{Error, Uuid};
use std::time;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Seconds between the Gregorian reform (1582-10-15T00:00:00Z) and the Unix epoch.
pub const GREGORIAN_OFFSET_SECS: u64 = 12_219_292_800;

/// Largest value of the 14-bit `clock_seq` field.
pub const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Largest value of the 60-bit timestamp field.
const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Converts a duration since the Unix epoch into 100-nanosecond ticks since the Gregorian epoch.
///
/// The result is truncated to the 60-bit timestamp field, so durations beyond the year 5236 wrap
/// around instead of overflowing.
pub const fn gregorian_ticks(unix: time::Duration) -> u64 {
    unix.as_secs()
        .wrapping_add(GREGORIAN_OFFSET_SECS)
        .wrapping_mul(10_000_000)
        .wrapping_add(unix.subsec_nanos() as u64 / 100)
        & MAX_TIMESTAMP
}

/// Represents a UUIDv6 generator that encapsulates a node ID and a clock sequence and guarantees
/// the monotonic order of UUIDs it generates, even when the clock is coarser than the
/// 100-nanosecond timestamp field.
///
/// The generator state is held behind a lock, so a single instance can be shared across threads
/// (e.g., through [`std::sync::Arc`] or a `static`) and still never hand out the same
/// `timestamp`/`clock_seq` pair twice.
///
/// # Clock sequence
///
/// - On the first call, the 14-bit `clock_seq` is randomly initialized and the 48-bit node ID is
///   read from the random source. The node ID stays fixed afterwards.
/// - When the clock advances, `clock_seq` resets to zero.
/// - When the clock stands still or moves back, the generator goes on with the previous
///   timestamp and increments `clock_seq`. When `clock_seq` wraps around, the timestamp is
///   incremented by one tick; therefore, the timestamp may run ahead of the real clock until the
///   clock catches up, however far it was rolled back.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuidrev::V6Generator;
///
/// let g = sync::Arc::new(V6Generator::new());
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate().unwrap(), i);
///             }
///         });
///     }
/// });
/// ```
#[derive(Debug, Default)]
pub struct V6Generator<R = OsRandSource, T = StdSystemTime> {
    state: Mutex<State>,
    rand: R,
    time: T,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
struct State {
    node: Option<[u8; 6]>,

    /// The `timestamp` and `clock_seq` of the last UUID generated.
    last: Option<(u64, u16)>,
}

impl V6Generator {
    /// Creates a generator instance that uses the operating system's random source and the system
    /// clock.
    pub const fn new() -> Self {
        Self::with_rand_and_time_sources(OsRandSource, StdSystemTime)
    }
}

impl<R, T> V6Generator<R, T> {
    /// Creates a generator instance with specified random number generator and time source.
    pub const fn with_rand_and_time_sources(rand: R, time: T) -> Self {
        Self {
            state: Mutex::new(State {
                node: None,
                last: None,
            }),
            rand,
            time,
        }
    }

    /// Forgets the node ID and the clock sequence so that the next call starts afresh.
    pub fn reset(&self) {
        *lock(&self.state) = State::default();
    }

    /// Returns the node ID, or `None` if no UUID has been generated yet.
    pub fn node(&self) -> Option<[u8; 6]> {
        lock(&self.state).node
    }
}

impl<R: RandSource, T: TimeSource> V6Generator<R, T> {
    /// Generates a new UUIDv6 object from the current timestamp.
    ///
    /// The clock is read while the generator lock is held, so concurrent callers are ordered by
    /// the time they acquired the lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random source fails while initializing the node ID or the
    /// clock sequence. The generator state is left untouched in that case.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<Uuid, Error> {
        let mut state = lock(&self.state);
        let timestamp = gregorian_ticks(self.time.now());
        self.generate_locked(&mut state, timestamp)
    }
}

impl<R: RandSource, T> V6Generator<R, T> {
    /// Generates a new UUIDv6 object from the `timestamp` passed, a count of 100-nanosecond
    /// intervals since 1582-10-15T00:00:00Z.
    ///
    /// See the [`V6Generator`] type documentation for how the clock sequence evolves.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_core(&self, timestamp: u64) -> Result<Uuid, Error> {
        assert!(
            timestamp <= MAX_TIMESTAMP,
            "`timestamp` must be a 60-bit integer"
        );
        let mut state = lock(&self.state);
        self.generate_locked(&mut state, timestamp)
    }

    fn generate_locked(&self, state: &mut State, timestamp: u64) -> Result<Uuid, Error> {
        let timestamp = timestamp & MAX_TIMESTAMP;

        let node = match state.node {
            Some(node) => node,
            None => {
                let mut node = [0u8; 6];
                self.fill_bytes(&mut node)?;
                node
            }
        };

        let (timestamp, clock_seq) = match state.last {
            Some((last_ts, _)) if timestamp > last_ts => (timestamp, 0),
            Some((last_ts, last_seq)) => {
                // go on with previous timestamp if new one is not greater
                let clock_seq = (last_seq + 1) & MAX_CLOCK_SEQ;
                if clock_seq == 0 {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(last_ts, "clock sequence wrapped around");
                    ((last_ts + 1) & MAX_TIMESTAMP, clock_seq)
                } else {
                    (last_ts, clock_seq)
                }
            }
            None => {
                let mut seed = [0u8; 2];
                self.fill_bytes(&mut seed)?;
                (timestamp, u16::from_be_bytes(seed) & MAX_CLOCK_SEQ)
            }
        };

        state.node = Some(node);
        state.last = Some((timestamp, clock_seq));
        Ok(Uuid::from_fields_v6(timestamp, clock_seq, node))
    }

    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), Error> {
        self.rand.fill_bytes(dest).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "random source failed");
            Error::Entropy(err)
        })
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv6 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidrev::V6Generator;
///
/// V6Generator::new()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e.unwrap()));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V6Generator<R, T> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V6Generator<R, T> {}
