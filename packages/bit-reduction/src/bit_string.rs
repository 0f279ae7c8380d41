use std::{fmt, str::FromStr};

use crate::{error::InvalidInputError, steps::ReductionSteps};

/// A validated binary number, most significant bit first.
///
/// Only constructed by parsing, so every value is non-empty, holds nothing but
/// `'0'`/`'1'` and has at least one set bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: String,
    leading_one: usize,
}

impl BitString {
    pub fn parse(bits: &str) -> Result<Self, InvalidInputError> {
        if bits.is_empty() {
            return Err(InvalidInputError::Empty);
        }

        let mut leading_one = None;
        for (index, character) in bits.chars().enumerate() {
            match character {
                '0' => {}
                '1' => {
                    leading_one.get_or_insert(index);
                }
                character => return Err(InvalidInputError::InvalidCharacter { index, character }),
            }
        }

        let leading_one = leading_one.ok_or(InvalidInputError::NoSetBit)?;
        Ok(Self {
            bits: bits.to_string(),
            leading_one,
        })
    }

    /// Index of the most significant set bit.
    pub fn leading_one(&self) -> usize {
        self.leading_one
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`, a `BitString` holds at least one bit.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Bits from the leading one (inclusive) down to the least significant bit.
    pub fn significant_bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.as_bytes()[self.leading_one..]
            .iter()
            .map(|b| *b == b'1')
    }

    /// Explicit sequence of operations reducing this number to zero.
    pub fn steps(&self) -> ReductionSteps {
        ReductionSteps::new(self)
    }
}

impl FromStr for BitString {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BitString {
    type Error = InvalidInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}
