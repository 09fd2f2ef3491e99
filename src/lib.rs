//! An implementation of UUID versions 6, 7 and 8 as proposed by the RFC 4122 revision drafts
//!
//! ```rust
//! use uuidrev::{uuid6, uuid7, uuid8};
//!
//! let uuid = uuid6()?;
//! println!("{}", uuid); // e.g., "1ec9414c-232a-6b00-b3c8-9e6bdeced846"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! println!("{}", uuid7()?); // e.g., "017f22e2-79b0-7cc3-98c4-dc0c0c07398f"
//! println!("{}", uuid8()?); // e.g., "320c3d4d-cc00-875b-8ec9-32d5f69181c0"
//! # Ok::<(), uuidrev::Error>(())
//! ```
//!
//! See [draft-ietf-uuidrev-rfc4122bis-00](https://www.ietf.org/archive/id/draft-ietf-uuidrev-rfc4122bis-00.html).
//!
//! # Field and bit layout
//!
//! UUIDv6 reorders the Gregorian timestamp of UUIDv1 so that byte-wise comparison follows
//! creation time:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15T00:00:00Z.
//! - The 14-bit `clock_seq` keeps UUIDs from one [`V6Generator`] increasing when the clock does
//!   not advance between calls.
//! - The 48-bit `node` is read from the random source once per generator instance.
//!
//! UUIDv7 stores the 48-bit Unix timestamp in milliseconds followed by random bits, and UUIDv8
//! is random except for the 4-bit `ver` and 2-bit `var` fields. In all three versions `var` is set
//! at `10`.
//!
//! # Crate features
//!
//! - `global_gen` (default): the [`uuid6`], [`uuid7`] and [`uuid8`] entry point functions.
//! - `serde`: serialization as the canonical string or as 16 bytes.
//! - `uuid`: conversions from and into [`uuid::Uuid`](https://docs.rs/uuid).
//! - `tracing`: trace-level spans on generator calls and events on clock sequence wraparound.
//! - `parking-lot`: `parking_lot` locks instead of the standard library's.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid};

mod error;
pub use error::Error;

pub mod generator;
#[doc(inline)]
pub use generator::{v6::V6Generator, v7::V7Generator, v8::V8Generator};
#[doc(inline)]
pub use generator::{OsRandSource, RandSource, StdSystemTime, TimeSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid6, uuid7, uuid8};
