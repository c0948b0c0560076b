use std::{fmt, ops, str};

use crate::{ParseError, ParseErrorKind, RangeError, WordCountError};

/// Represents a Universally Unique IDentifier.
///
/// The value is stored as four big-endian 32-bit words and is immutable
/// once constructed; equality and hashing are structural over the words.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u32; 4]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x0000_0000; 4]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xffff_ffff; 4]);

    /// Returns a reference to the underlying word array.
    pub const fn as_words(&self) -> &[u32; 4] {
        &self.0
    }

    /// Packs the five RFC 4122 fields without any validation.
    ///
    /// Shared by [`from_fields`](Self::from_fields) and the string parser,
    /// both of which establish the field bounds before calling.
    const fn pack(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq: u16,
        node: u64,
    ) -> Self {
        Self([
            time_low,
            (time_mid as u32) << 16 | time_hi_and_version as u32,
            (clock_seq as u32) << 16 | (node >> 32) as u32,
            node as u32,
        ])
    }

    /// Creates a UUID from the five RFC 4122 field values.
    ///
    /// The first four fields are bounded by their parameter types; `node`
    /// must fit in 48 bits or a [`RangeError`] is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = Uuid::from_fields(0x123e4567, 0xe89b, 0x12d3, 0xa456, 0x426655440000)?;
    /// assert_eq!(x.to_string(), "123e4567-e89b-12d3-a456-426655440000");
    /// # Ok::<(), uuid4122::RangeError>(())
    /// ```
    pub const fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq: u16,
        node: u64,
    ) -> Result<Self, RangeError> {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        if node > MAX_UINT48 {
            return Err(RangeError {
                field: "node",
                max: MAX_UINT48,
                value: node,
            });
        }

        Ok(Self::pack(
            time_low,
            time_mid,
            time_hi_and_version,
            clock_seq,
            node,
        ))
    }

    /// Creates a UUID directly from four big-endian 32-bit words.
    ///
    /// This is the unchecked fast path for trusted input: the words are
    /// adopted verbatim and any bit pattern is accepted. Use
    /// `Uuid::try_from(&[u32])` for word sequences of unverified length.
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self(words)
    }

    /// Returns whether `text` is a plausible 8-4-4-4-12 representation.
    ///
    /// Never panics: any malformed input, including wrong length, misplaced
    /// hyphens, or non-hexadecimal characters, yields `false`. Whenever
    /// this returns `true`, `text.parse::<Uuid>()` succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// assert!(Uuid::is_valid("123e4567-e89b-12d3-a456-426655440000"));
    /// assert!(!Uuid::is_valid("123e4567e89b12d3a456426655440000"));
    /// ```
    pub fn is_valid(text: &str) -> bool {
        let bytes = text.as_bytes();
        bytes.len() == 36
            && bytes.iter().enumerate().all(|(i, &e)| match i {
                8 | 13 | 18 | 23 => e == b'-',
                _ => e.is_ascii_hexdigit(),
            })
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "123e4567-e89b-12d3-a456-426655440000".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "123e4567-e89b-12d3-a456-426655440000");
    /// assert_eq!(format!("{}", y), "123e4567-e89b-12d3-a456-426655440000");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = (self.0[i / 4] >> (24 - i % 4 * 8)) as usize & 0xff;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Hyphen positions within the canonical representation.
const SEPARATORS: [usize; 4] = [8, 13, 18, 23];

/// Parses hex digits at `start..start + len` of `src` into an integer,
/// reporting the position of the first non-hexadecimal character.
fn hex_group(src: &str, start: usize, len: usize) -> Result<u64, ParseError> {
    let mut acc = 0u64;
    for (i, &e) in src.as_bytes()[start..start + len].iter().enumerate() {
        match (e as char).to_digit(16) {
            Some(digit) => acc = acc << 4 | digit as u64,
            None => {
                return Err(ParseError::new(
                    src,
                    ParseErrorKind::Digit {
                        found: e as char,
                        position: start + i,
                    },
                ))
            }
        }
    }
    Ok(acc)
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hex digits may be upper or lower case. The input must be exactly 36
    /// characters with hyphens at positions 8, 13, 18, and 23; the returned
    /// [`ParseError`] pinpoints the first violation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.len() != 36 {
            return Err(ParseError::new(
                src,
                ParseErrorKind::Length { actual: src.len() },
            ));
        }
        for position in SEPARATORS {
            let found = src.as_bytes()[position];
            if found != b'-' {
                return Err(ParseError::new(
                    src,
                    ParseErrorKind::Separator {
                        expected: '-',
                        found: found as char,
                        position,
                    },
                ));
            }
        }

        // The group widths bound each value, so packing needs no further
        // range checks.
        let time_low = hex_group(src, 0, 8)?;
        let time_mid = hex_group(src, 9, 4)?;
        let time_hi_and_version = hex_group(src, 14, 4)?;
        let clock_seq = hex_group(src, 19, 4)?;
        let node = hex_group(src, 24, 12)?;
        Ok(Self::pack(
            time_low as u32,
            time_mid as u16,
            time_hi_and_version as u16,
            clock_seq as u16,
            node,
        ))
    }
}

impl From<Uuid> for [u32; 4] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u32; 4]> for Uuid {
    fn from(src: [u32; 4]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u32]> for Uuid {
    type Error = WordCountError;

    /// Adopts a word slice as a UUID, requiring exactly four words.
    fn try_from(src: &[u32]) -> Result<Self, Self::Error> {
        match <[u32; 4]>::try_from(src) {
            Ok(words) => Ok(Self(words)),
            Err(_) => Err(WordCountError { actual: src.len() }),
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        let mut bytes = [0u8; 16];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(src.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(src.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        Self(words)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.into())
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.into())
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&<[u8; 16]>::from(*self))
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}
