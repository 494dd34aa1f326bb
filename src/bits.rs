//! Single bits, the unit of tree shapes and encoded messages.

use crate::error::{HuffmanError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = HuffmanError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(HuffmanError::MalformedStream(format!("{} is not a bit", value))),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Converts `[1, 0, 1]` style digit slices into bits.
pub fn from_digits(digits: &[u8]) -> Result<Vec<Bit>> {
    digits.iter().map(|&d| Bit::try_from(d)).collect()
}

/// Parses a string of `'0'`/`'1'` characters. Anything else is rejected.
pub fn parse(s: &str) -> Result<Vec<Bit>> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(HuffmanError::MalformedStream(format!("{:?} is not a bit", other))),
        })
        .collect()
}

pub fn to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| if *b == Bit::One { '1' } else { '0' }).collect()
}
