use core::fmt;
use core::str::FromStr;

use zerocopy::byteorder::{BE, LE, U16, U32, U64};

use crate::ParseByteOrderError;

/// The order of bytes within a multi-byte value on the wire.
///
/// `ByteOrder` also holds the whole wire format: each `*_to_bytes` / `*_from_bytes` pair maps a
/// value to its exact byte sequence and back. Floats are encoded as the unsigned integer of the
/// same width that holds their IEEE-754 bit pattern. The conversion uses `to_bits` and
/// `from_bits`, so NaN payloads, the quiet/signaling bit, and the sign of zero all survive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Network byte order, which is big-endian.
    pub const NETWORK: Self = Self::Big;

    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Encodes a `u16`.
    #[inline(always)]
    pub fn u16_to_bytes(self, value: u16) -> [u8; 2] {
        match self {
            Self::Big => U16::<BE>::new(value).to_bytes(),
            Self::Little => U16::<LE>::new(value).to_bytes(),
        }
    }

    /// Decodes a `u16`.
    #[inline(always)]
    pub fn u16_from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Big => U16::<BE>::from_bytes(bytes).get(),
            Self::Little => U16::<LE>::from_bytes(bytes).get(),
        }
    }

    /// Encodes a `u32`.
    #[inline(always)]
    pub fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::Big => U32::<BE>::new(value).to_bytes(),
            Self::Little => U32::<LE>::new(value).to_bytes(),
        }
    }

    /// Decodes a `u32`.
    #[inline(always)]
    pub fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Big => U32::<BE>::from_bytes(bytes).get(),
            Self::Little => U32::<LE>::from_bytes(bytes).get(),
        }
    }

    /// Encodes a `u64`.
    #[inline(always)]
    pub fn u64_to_bytes(self, value: u64) -> [u8; 8] {
        match self {
            Self::Big => U64::<BE>::new(value).to_bytes(),
            Self::Little => U64::<LE>::new(value).to_bytes(),
        }
    }

    /// Decodes a `u64`.
    #[inline(always)]
    pub fn u64_from_bytes(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::Big => U64::<BE>::from_bytes(bytes).get(),
            Self::Little => U64::<LE>::from_bytes(bytes).get(),
        }
    }

    /// Encodes the IEEE-754 binary32 bit pattern of `value`.
    #[inline(always)]
    pub fn f32_to_bytes(self, value: f32) -> [u8; 4] {
        self.u32_to_bytes(value.to_bits())
    }

    /// Decodes an IEEE-754 binary32 bit pattern.
    #[inline(always)]
    pub fn f32_from_bytes(self, bytes: [u8; 4]) -> f32 {
        f32::from_bits(self.u32_from_bytes(bytes))
    }

    /// Encodes the IEEE-754 binary64 bit pattern of `value`.
    #[inline(always)]
    pub fn f64_to_bytes(self, value: f64) -> [u8; 8] {
        self.u64_to_bytes(value.to_bits())
    }

    /// Decodes an IEEE-754 binary64 bit pattern.
    #[inline(always)]
    pub fn f64_from_bytes(self, bytes: [u8; 8]) -> f64 {
        f64::from_bits(self.u64_from_bytes(bytes))
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => f.write_str("big-endian"),
            Self::Little => f.write_str("little-endian"),
        }
    }
}

/// Parses a byte order name, for applications that take the byte order from configuration.
///
/// Accepts `big`, `be`, `network`, `little`, `le`, and `native`, ignoring ASCII case. The
/// `Display` forms (`big-endian`, `little-endian`) are accepted too.
impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let is = |candidate: &str| name.eq_ignore_ascii_case(candidate);

        if is("big") || is("be") || is("big-endian") || is("network") {
            Ok(Self::Big)
        } else if is("little") || is("le") || is("little-endian") {
            Ok(Self::Little)
        } else if is("native") {
            Ok(Self::NATIVE)
        } else {
            Err(ParseByteOrderError {
                name: s.to_string(),
            })
        }
    }
}
