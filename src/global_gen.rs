//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::{Error, Uuid, V6Generator, V7Generator, V8Generator};

/// The process-wide default generators, one per version.
static V6: V6Generator = V6Generator::new();
static V7: V7Generator = V7Generator::new();
static V8: V8Generator = V8Generator::new();

/// Generates a UUIDv6 object.
///
/// This function employs a process-wide generator and guarantees the process-wide monotonic order
/// of the UUIDs it returns. On Unix, this function resets the generator when the process ID
/// changes (i.e., upon process forks) so that the child does not reuse the parent's node ID and
/// clock sequence.
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the operating system's random source fails.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidrev::uuid6()?;
/// println!("{}", uuid); // e.g., "1ec9414c-232a-6b00-b3c8-9e6bdeced846"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidrev::uuid6()?.to_string();
/// # Ok::<(), uuidrev::Error>(())
/// ```
pub fn uuid6() -> Result<Uuid, Error> {
    if unix_fork_safety::pid_changed() {
        V6.reset();
    }
    V6.generate()
}

/// Generates a UUIDv7 object.
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the operating system's random source fails.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidrev::uuid7()?;
/// println!("{}", uuid); // e.g., "017f22e2-79b0-7cc3-98c4-dc0c0c07398f"
/// # Ok::<(), uuidrev::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    V7.generate()
}

/// Generates a UUIDv8 object filled with random bits.
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the operating system's random source fails.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidrev::uuid8()?;
/// println!("{}", uuid); // e.g., "320c3d4d-cc00-875b-8ec9-32d5f69181c0"
/// # Ok::<(), uuidrev::Error>(())
/// ```
pub fn uuid8() -> Result<Uuid, Error> {
    V8.generate()
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{
        process,
        sync::atomic::{AtomicU32, Ordering},
    };

    static PID: AtomicU32 = AtomicU32::new(0);

    /// Returns true if the process ID differs from the one seen by the previous call (i.e., upon
    /// process forks).
    pub fn pid_changed() -> bool {
        let pid = process::id();
        let last = PID.swap(pid, Ordering::Relaxed);
        last != 0 && last != pid
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub fn pid_changed() -> bool {
        false
    }
}
