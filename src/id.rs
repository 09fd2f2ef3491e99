use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// Comparison operators and [`Ord`] compare the 16 bytes lexicographically, which is the sortable
/// order of UUIDv6 and UUIDv7.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array as is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 4-bit `ver` field (the high nibble of byte 6).
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the 2-bit `var` field (the top two bits of byte 8).
    ///
    /// Every UUID produced by this crate returns `0b10`.
    pub const fn variant(&self) -> u8 {
        self.0[8] >> 6
    }

    /// Returns `true` if every byte is `0x00`.
    pub const fn is_nil(&self) -> bool {
        let mut i = 0;
        while i < 16 {
            if self.0[i] != 0x00 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns `true` if every byte is `0xff`.
    pub const fn is_max(&self) -> bool {
        let mut i = 0;
        while i < 16 {
            if self.0[i] != 0xff {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// `timestamp` is the 60-bit count of 100-nanosecond intervals since 1582-10-15T00:00:00Z,
    /// `clock_seq` the 14-bit clock sequence, and `node` the 48-bit node ID.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` exceeds its field width.
    pub const fn from_fields_v6(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            0x60 | ((timestamp >> 8) & 0x0f) as u8,
            timestamp as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUID byte array from a UUIDv7 timestamp and 80 bits of randomness.
    ///
    /// The `ver` and `var` fields overwrite the high bits of `rand[0]` and `rand[2]`.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit integer.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand: [u8; 10]) -> Self {
        if unix_ts_ms >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand[0] & 0x0f),
            rand[1],
            0x80 | (rand[2] & 0x3f),
            rand[3],
            rand[4],
            rand[5],
            rand[6],
            rand[7],
            rand[8],
            rand[9],
        ])
    }

    /// Creates a UUIDv8 from 16 bytes, overwriting the `ver` and `var` fields.
    pub const fn from_bytes_v8(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x80 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lowercase and uppercase hexadecimal digits are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidrev::Uuid;
    ///
    /// let x = Uuid::parse_str("1EC9414C-232A-6B00-B3C8-9E6BDECED846")?;
    /// assert_eq!(x.version(), 6);
    /// assert_eq!(x.to_string(), "1ec9414c-232a-6b00-b3c8-9e6bdeced846");
    /// # Ok::<(), uuidrev::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        src.parse()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidrev::Uuid;
    ///
    /// let x = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "017f22e2-79b0-7cc3-98c4-dc0c0c07398f");
    /// assert_eq!(format!("{}", y), "017f22e2-79b0-7cc3-98c4-dc0c0c07398f");
    /// # Ok::<(), uuidrev::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
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

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
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

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
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

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
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
                serializer.serialize_bytes(self.as_bytes())
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

#[cfg(test)]
mod tests {
    use super::Uuid;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(Uuid, &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;

        const CASES: &[(Uuid, &str)] = &[
            (
                Uuid::from_fields_v6(0, 0, [0; 6]),
                "00000000-0000-6000-8000-000000000000",
            ),
            (
                Uuid::from_fields_v6(MAX_UINT60, 0, [0; 6]),
                "ffffffff-ffff-6fff-8000-000000000000",
            ),
            (
                Uuid::from_fields_v6(0, MAX_UINT14, [0xff; 6]),
                "00000000-0000-6000-bfff-ffffffffffff",
            ),
            (
                Uuid::from_fields_v6(
                    0x1ec_9414_c232_ab00,
                    0x33c8,
                    [0x9e, 0x6b, 0xde, 0xce, 0xd8, 0x46],
                ),
                "1ec9414c-232a-6b00-b3c8-9e6bdeced846",
            ),
            (
                Uuid::from_fields_v7(0, [0; 10]),
                "00000000-0000-7000-8000-000000000000",
            ),
            (
                Uuid::from_fields_v7(MAX_UINT48, [0xff; 10]),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                Uuid::from_fields_v7(
                    0x17f_22e2_79b0,
                    [0x0c, 0xc3, 0x18, 0xc4, 0xdc, 0x0c, 0x0c, 0x07, 0x39, 0x8f],
                ),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
            (
                Uuid::from_bytes_v8([0; 16]),
                "00000000-0000-8000-8000-000000000000",
            ),
            (
                Uuid::from_bytes_v8([
                    0x32, 0x0c, 0x3d, 0x4d, 0xcc, 0x00, 0x07, 0x5b, 0x0e, 0xc9, 0x32, 0xd5, 0xf6,
                    0x91, 0x81, 0xc0,
                ]),
                "320c3d4d-cc00-875b-8ec9-32d5f69181c0",
            ),
        ];
        CASES
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (e, text) in prepare_cases() {
            assert_eq!(Ok(*e), text.parse());
            assert_eq!(Ok(*e), text.to_uppercase().parse());
            assert_eq!(Ok(*e), Uuid::parse_str(text));
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(&e.encode().to_string(), text);
        }
    }

    /// Reports version and variant of prepared cases
    #[test]
    fn reports_version_and_variant_of_prepared_cases() {
        for (e, text) in prepare_cases() {
            let expected = text[14..15].parse::<u8>().unwrap();
            assert_eq!(e.version(), expected);
            assert_eq!(e.variant(), 0b10);
        }
        assert_eq!(Uuid::NIL.version(), 0);
        assert_eq!(Uuid::NIL.variant(), 0);
        assert_eq!(Uuid::MAX.version(), 15);
        assert_eq!(Uuid::MAX.variant(), 3);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 1ec9414c-232a-6b00-b3c8-9e6bdeced846",
            "1ec9414c-232a-6b00-b3c8-9e6bdeced846 ",
            " 1ec9414c-232a-6b00-b3c8-9e6bdeced846 ",
            "+1ec9414c-232a-6b00-b3c8-9e6bdeced846",
            "-1ec9414c-232a-6b00-b3c8-9e6bdeced846",
            "+ec9414c-232a-6b00-b3c8-9e6bdeced846",
            "-ec9414c-232a-6b00-b3c8-9e6bdeced846",
            "1ec9414c232a6b00b3c89e6bdeced846",
            "1ec9414c-232a6b00-b3c8-9e6bdeced846",
            "1ec9414c-232a-6b00b3c8-9e6bdeced846-",
            "1ec9414c-232a-6b00-b3c89e6bdeced8461",
            "1ec9414c0232a06b000b3c809e6bdeced846",
            "{1ec9414c-232a-6b00-b3c8-9e6bdeced846}",
            "1ec9414c-232a-6b 0-b3c8-9e6bdeced846",
            "1ec9414g-232a-6b00-b3c8-9e6bdeced846",
            "1ec9414c-232a-6b00-b3c8_9e6bdeced846",
            "1ec9414c-232a-6b00-b3c8-9e6bdeced84",
            "1ec9414c-232a-6b00-b3c8-9e6bdeced8466",
            "1ec9414c-232a-6b00-b3c8-9e6bdeced84é",
            "１ec9414c-232a-6b00-b3c8-9e6bdeced846",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{e:?}");
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::NIL.is_max());
        assert!(Uuid::MAX.is_max());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Recognizes Nil and Max only when every byte matches
    #[test]
    fn recognizes_nil_and_max_only_when_every_byte_matches() {
        for i in 0..16 {
            let mut bytes = [0x00u8; 16];
            bytes[i] = 0x01;
            let e = Uuid::from(bytes);
            assert!(!e.is_nil());
            assert!(!e.is_max());

            let mut bytes = [0xffu8; 16];
            bytes[i] = 0xfe;
            let e = Uuid::from(bytes);
            assert!(!e.is_max());
            assert!(!e.is_nil());
        }
        for (e, _) in prepare_cases() {
            assert!(!e.is_nil());
            assert!(!e.is_max());
        }
    }

    /// Compares byte-wise
    #[test]
    fn compares_byte_wise() {
        let cases = prepare_cases();
        for (i, (a, _)) in cases.iter().enumerate() {
            for (j, (b, _)) in cases.iter().enumerate() {
                assert_eq!(a == b, i == j);
                assert_eq!(a.cmp(b), a.as_bytes().cmp(b.as_bytes()));
            }
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (e, _) in prepare_cases() {
            let e = *e;
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            assert_eq!(e.as_ref(), e.as_bytes());
        }
    }

    /// Panics on out-of-range v6 field
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn panics_on_out_of_range_v6_field() {
        let _ = Uuid::from_fields_v6(0, 1 << 14, [0; 6]);
    }
}
