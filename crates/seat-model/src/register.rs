use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Zero-pad width used when ranges are expanded into individual students.
pub const EXPANDED_REGISTER_WIDTH: usize = 3;

/// A validated register number: an optional uppercase letter followed by
/// digits (`15`, `A015`).
///
/// The numeric value drives ordering and range arithmetic. The digit width of
/// the original text is remembered so rewritten boundaries keep their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisterNumber {
    prefix: Option<char>,
    value: u64,
    width: usize,
}

impl RegisterNumber {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidRegister(raw.to_string());
        let mut chars = raw.chars();
        let first = chars.next().ok_or_else(invalid)?;
        let (prefix, digits) = if first.is_ascii_uppercase() {
            (Some(first), chars.as_str())
        } else {
            (None, raw)
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = digits.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self {
            prefix,
            value,
            width: digits.len(),
        })
    }

    pub fn prefix(&self) -> Option<char> {
        self.prefix
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of digits in the original text.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Same prefix and digit width, different numeric value.
    pub fn with_value(&self, value: u64) -> Self {
        Self {
            prefix: self.prefix,
            value,
            width: self.width,
        }
    }

    /// Renders `value` with this register's prefix, zero-padded to
    /// [`EXPANDED_REGISTER_WIDTH`] digits.
    pub fn expanded(&self, value: u64) -> String {
        render(self.prefix, value, EXPANDED_REGISTER_WIDTH)
    }
}

fn render(prefix: Option<char>, value: u64, width: usize) -> String {
    match prefix {
        Some(letter) => format!("{letter}{value:0width$}"),
        None => format!("{value:0width$}"),
    }
}

impl fmt::Display for RegisterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.prefix, self.value, self.width))
    }
}

impl FromStr for RegisterNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for RegisterNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for RegisterNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
