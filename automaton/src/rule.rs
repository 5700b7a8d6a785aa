//! Elementary transition rules.

use std::fmt;

use crate::error::{Error, Result};

/// A three-cell neighborhood packed into a 3-bit code.
///
/// Bit 2 is the left neighbor, bit 1 the cell itself and bit 0 the right
/// neighbor. This is the usual Wolfram numbering, so rule 110 here is the
/// rule 110 found in the literature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood(u8);

impl Neighborhood {
    /// Packs the three cells.
    #[inline]
    pub fn new(left: bool, center: bool, right: bool) -> Self {
        Self((left as u8) << 2 | (center as u8) << 1 | right as u8)
    }

    /// Builds a neighborhood from its code, or `None` if the code has more
    /// than three bits.
    pub fn from_code(code: u8) -> Option<Self> {
        (code < 8).then_some(Self(code))
    }

    /// Returns the 3-bit code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Iterates over all eight neighborhoods in code order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

/// An 8-bit lookup table: bit `n` of the value is the next state of a cell
/// whose neighborhood code is `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule(u8);

impl Rule {
    /// Wraps a rule number.
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the rule number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the next state for the given neighborhood.
    #[inline]
    pub fn apply(self, neighborhood: Neighborhood) -> bool {
        self.0 >> neighborhood.code() & 1 == 1
    }
}

impl TryFrom<u32> for Rule {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Rule::try_from(u64::from(value))
    }
}

impl TryFrom<u64> for Rule {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| Error::Config(format!("rule must be in 0..=255, got {value}")))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.0)
    }
}
