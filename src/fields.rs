//! Decoding of the metadata embedded in the UUID bit layout

use crate::Uuid;
use chrono::{DateTime, Utc};

/// The version of a UUID, denoting the generating algorithm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Version {
    /// Version 1: Gregorian timestamp and node identifier
    TimeBased = 1,

    /// Version 2: DCE Security
    Dce = 2,

    /// Version 3: MD5 hash of a namespaced name
    Md5 = 3,

    /// Version 4: random
    Random = 4,

    /// Version 5: SHA-1 hash of a namespaced name
    Sha1 = 5,
}

impl Version {
    /// Returns the version number (1 through 5).
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// The reserved variants of UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for future definition
    ReservedFuture,

    /// Reserved by Microsoft for backward compatibility
    ReservedMicrosoft,

    /// The variant specified by RFC 4122
    Rfc4122,

    /// Reserved by the NCS for backward compatibility
    ReservedNcs,
}

impl Variant {
    /// Returns the discriminator bit pattern occupying the top of the
    /// `clock_seq` field.
    const fn mask(self) -> u32 {
        match self {
            Self::ReservedFuture => 0b1110,
            Self::ReservedMicrosoft => 0b1100,
            Self::Rfc4122 => 0b1000,
            Self::ReservedNcs => 0b0000,
        }
    }
}

/// Variant discriminators in decoding priority order.
///
/// The masks overlap, so the order is load-bearing: each digit is matched
/// against the most specific pattern first, and the trailing `0b0000` mask
/// matches any digit, making the table exhaustive.
const VARIANTS: [Variant; 4] = [
    Variant::ReservedFuture,
    Variant::ReservedMicrosoft,
    Variant::Rfc4122,
    Variant::ReservedNcs,
];

/// Seconds between the Gregorian epoch 1582-10-15T00:00:00Z and the Unix
/// epoch 1970-01-01T00:00:00Z.
const GREGORIAN_UNIX_OFFSET_SECS: i64 = 12_219_292_800;

impl Uuid {
    /// Returns the version encoded in bits 12-15 of the second word, or
    /// `None` if the 4-bit code falls outside the defined range 1 through 5.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Version};
    ///
    /// let x = "123e4567-e89b-12d3-a456-426655440000".parse::<Uuid>()?;
    /// assert_eq!(x.version(), Some(Version::TimeBased));
    /// assert_eq!(Uuid::NIL.version(), None);
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub const fn version(&self) -> Option<Version> {
        match (self.as_words()[1] & 0xf000) >> 12 {
            1 => Some(Version::TimeBased),
            2 => Some(Version::Dce),
            3 => Some(Version::Md5),
            4 => Some(Version::Random),
            5 => Some(Version::Sha1),
            _ => None,
        }
    }

    /// Returns the variant encoded in the top bits of the `clock_seq`
    /// field, or `None` for the unassigned digit `0xf`.
    pub fn variant(&self) -> Option<Variant> {
        let digit = self.as_words()[2] >> 28;
        if digit == 0xf {
            return None;
        }
        for variant in VARIANTS {
            if digit & variant.mask() == variant.mask() {
                return Some(variant);
            }
        }
        unreachable!("variant masks cover every 4-bit digit");
    }

    /// Returns the clock sequence with the variant discriminator bits
    /// subtracted out.
    ///
    /// The extraction is uniform across versions even though the value only
    /// acts as an anti-collision counter for version 1 identifiers; for
    /// versions 3 through 5 it simply carries name-derived or random bits.
    pub fn clock_seq(&self) -> u16 {
        let mask = self.variant().map_or(0, Variant::mask);
        ((self.as_words()[2] >> 16) - (mask << 12)) as u16
    }

    /// Returns the 48-bit node identifier spanning the low half of the
    /// third word and all of the fourth.
    pub const fn node(&self) -> u64 {
        ((self.as_words()[2] & 0xffff) as u64) << 32 | self.as_words()[3] as u64
    }

    /// Returns the timestamp of a version 1 UUID as a whole-second UTC
    /// instant, or `None` for any other version.
    ///
    /// The 60-bit counter of 100-nanosecond intervals since the Gregorian
    /// epoch (1582-10-15) is reassembled from its three non-adjacent
    /// segments and rebased onto the Unix epoch; sub-second precision is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// let t = x.timestamp().unwrap();
    /// assert_eq!(t.to_rfc3339(), "2022-02-22T19:22:22+00:00");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if !matches!(self.version(), Some(Version::TimeBased)) {
            return None;
        }

        let [a, b, ..] = *self.as_words();
        let ticks = ((b & 0x0fff) as u64) << 48 | ((b >> 16) as u64) << 32 | a as u64;
        let secs = (ticks / 10_000_000) as i64 - GREGORIAN_UNIX_OFFSET_SECS;
        DateTime::from_timestamp(secs, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Variant, Version};
    use crate::Uuid;
    use chrono::{DateTime, Utc};

    /// Decodes version codes at both boundaries
    #[test]
    fn decodes_version_codes_at_both_boundaries() {
        let with_code = |code: u32| Uuid::from_words([0, code << 12, 0, 0]);
        assert_eq!(with_code(0).version(), None);
        assert_eq!(with_code(1).version(), Some(Version::TimeBased));
        assert_eq!(with_code(2).version(), Some(Version::Dce));
        assert_eq!(with_code(3).version(), Some(Version::Md5));
        assert_eq!(with_code(4).version(), Some(Version::Random));
        assert_eq!(with_code(5).version(), Some(Version::Sha1));
        for code in 6..16 {
            assert_eq!(with_code(code).version(), None);
        }

        // surrounding bits do not leak into the version nibble
        assert_eq!(
            Uuid::from_words([0, 0x1234_5678, 0, 0]).version(),
            Some(Version::Sha1)
        );
        assert_eq!(Version::Sha1.number(), 5);
    }

    /// Decodes all sixteen variant digits
    #[test]
    fn decodes_all_sixteen_variant_digits() {
        let with_digit = |digit: u32| Uuid::from_words([0, 0, digit << 28, 0]);
        for digit in 0x0..=0x7 {
            assert_eq!(with_digit(digit).variant(), Some(Variant::ReservedNcs));
        }
        for digit in 0x8..=0xb {
            assert_eq!(with_digit(digit).variant(), Some(Variant::Rfc4122));
        }
        for digit in 0xc..=0xd {
            assert_eq!(with_digit(digit).variant(), Some(Variant::ReservedMicrosoft));
        }
        assert_eq!(with_digit(0xe).variant(), Some(Variant::ReservedFuture));
        assert_eq!(with_digit(0xf).variant(), None);
    }

    /// Subtracts the variant discriminator from the clock sequence
    #[test]
    fn subtracts_the_variant_discriminator_from_the_clock_sequence() {
        let x = "123e4567-e89b-12d3-a456-426655440000"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.variant(), Some(Variant::Rfc4122));
        assert_eq!(x.clock_seq(), 0x2456);

        let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.clock_seq(), 0x33c8);

        // unknown variant leaves the 16-bit field untouched
        let x = Uuid::from_words([0, 0, 0xfafa_0000, 0]);
        assert_eq!(x.variant(), None);
        assert_eq!(x.clock_seq(), 0xfafa);

        // NCS variant has an all-zero discriminator
        let x = Uuid::from_words([0, 0, 0x1234_0000, 0]);
        assert_eq!(x.variant(), Some(Variant::ReservedNcs));
        assert_eq!(x.clock_seq(), 0x1234);
    }

    /// Reassembles the 48-bit node field exactly
    #[test]
    fn reassembles_the_48_bit_node_field_exactly() {
        let x = "123e4567-e89b-12d3-a456-426655440000"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.node(), 0x4266_5544_0000);

        let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.node(), 0x9f6b_dece_d846);

        assert_eq!(Uuid::NIL.node(), 0);
        assert_eq!(Uuid::MAX.node(), (1 << 48) - 1);
    }

    /// Decodes the version 1 timestamp to a UTC instant
    #[test]
    fn decodes_the_version_1_timestamp_to_a_utc_instant() {
        // RFC 9562 appendix A test vector for UUIDv1
        let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.timestamp(), DateTime::from_timestamp(1_645_557_742, 0));
        assert_eq!(
            x.timestamp().unwrap().to_rfc3339(),
            "2022-02-22T19:22:22+00:00"
        );

        // fixed regression value computed from the documented formula
        let x = "123e4567-e89b-12d3-a456-426655440000"
            .parse::<Uuid>()
            .unwrap();
        assert_eq!(x.version(), Some(Version::TimeBased));
        assert_eq!(x.timestamp(), DateTime::from_timestamp(8_156_923_288, 0));
        assert_eq!(x.timestamp().unwrap().timestamp_millis(), 8_156_923_288_000);
    }

    /// Withholds the timestamp from non-version-1 values
    #[test]
    fn withholds_the_timestamp_from_non_version_1_values() {
        let cases = [
            "00000000-0000-0000-0000-000000000000",
            "123e4567-e89b-42d3-a456-426655440000",
            "123e4567-e89b-52d3-a456-426655440000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ];
        for e in cases {
            assert_eq!(e.parse::<Uuid>().unwrap().timestamp(), None);
        }
    }

    /// Recomputes identical derived fields on every access
    #[test]
    fn recomputes_identical_derived_fields_on_every_access() {
        let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846"
            .parse::<Uuid>()
            .unwrap();
        for _ in 0..3 {
            assert_eq!(x.version(), Some(Version::TimeBased));
            assert_eq!(x.variant(), Some(Variant::Rfc4122));
            assert_eq!(x.clock_seq(), 0x33c8);
            assert_eq!(x.node(), 0x9f6b_dece_d846);
            assert_eq!(x.timestamp(), DateTime::<Utc>::from_timestamp(1_645_557_742, 0));
        }
    }

    /// Decodes fields of the nil UUID per the bit layout
    #[test]
    fn decodes_fields_of_the_nil_uuid_per_the_bit_layout() {
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::NIL.variant(), Some(Variant::ReservedNcs));
        assert_eq!(Uuid::NIL.clock_seq(), 0);
        assert_eq!(Uuid::NIL.node(), 0);
        assert_eq!(Uuid::NIL.timestamp(), None);
    }
}
