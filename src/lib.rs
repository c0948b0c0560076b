//! An RFC 4122 UUID value type with field-level encoding and decoding
//!
//! ```rust
//! use uuid4122::Uuid;
//!
//! let uuid: Uuid = "123e4567-e89b-12d3-a456-426655440000".parse()?;
//! println!("{}", uuid); // "123e4567-e89b-12d3-a456-426655440000"
//! println!("{:?}", uuid.as_words()); // as four big-endian 32-bit words
//! # Ok::<(), uuid4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A UUID is stored as four big-endian 32-bit words `a`, `b`, `c`, `d`
//! covering RFC 4122's five fields:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         time_low (a)                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid (b hi)         |  time_hi_and_version (b lo)   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       clock_seq (c hi)        |        node hi (c lo)         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          node lo (d)                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `time_low`, the 16-bit `time_mid`, and the low 12 bits of
//!   `time_hi_and_version` together hold the 60-bit version 1 timestamp,
//!   counted in 100-nanosecond intervals since 1582-10-15 (Gregorian).
//! - The high 4 bits of `time_hi_and_version` hold the version number.
//! - The top bits of `clock_seq` discriminate the variant; the remaining
//!   bits hold the clock sequence.
//! - The 48-bit `node` field spans the low half of `c` and all of `d`.
//!
//! Construction is by explicit field values ([`Uuid::from_fields`]), by raw
//! words ([`Uuid::from_words`]), or by parsing the canonical 8-4-4-4-12
//! hexadecimal string representation (`str::parse`). The embedded metadata
//! is decoded on demand:
//!
//! ```rust
//! use uuid4122::{Uuid, Variant, Version};
//!
//! let uuid: Uuid = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse()?;
//! assert_eq!(uuid.version(), Some(Version::TimeBased));
//! assert_eq!(uuid.variant(), Some(Variant::Rfc4122));
//! assert_eq!(uuid.node(), 0x9f6b_dece_d846);
//! println!("{:?}", uuid.timestamp()); // Some(2022-02-22T19:22:22Z)
//! # Ok::<(), uuid4122::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `serde`: serialization and deserialization of [`Uuid`] through serde.
//! - `uuid`: conversions to and from the [`uuid`] crate's type.

mod error;
pub use error::{ParseError, ParseErrorKind, RangeError, WordCountError};

mod id;
pub use id::Uuid;

mod fields;
pub use fields::{Variant, Version};
