use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 256-bit seed that fully determines a shuffle walk.
///
/// Seeds print and parse as 64 lowercase hexadecimal digits, so a scramble can
/// be reported and replayed.
///
/// # Examples
///
/// ```
/// use slidetile_shuffler::ShuffleSeed;
///
/// let seed = ShuffleSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<ShuffleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`ShuffleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input does not have exactly 64 characters.
    #[display("seed must have 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("seed contains a non-hex character at {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(ParseSeedError::InvalidDigit { position: i * 2 })?;
            let lo =
                hex_value(pair[1]).ok_or(ParseSeedError::InvalidDigit { position: i * 2 + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
