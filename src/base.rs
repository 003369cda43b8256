//! Supported numeric bases
//!
//! This module defines the closed set of bases the game converts between.
//! Bases are serialized as their radix number (2, 8, 10, or 16) so the
//! wire format matches what the browser UI exchanges, and they implement
//! [`enum_map::Enum`] so per-base statistics can live in an
//! [`enum_map::EnumMap`].

use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A numeric base supported by the game
///
/// The set is closed: questions are only ever posed and answered in
/// binary, octal, decimal, or hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Base {
    /// Base 2, digits `0-1`
    Binary,
    /// Base 8, digits `0-7`
    Octal,
    /// Base 10, digits `0-9`
    Decimal,
    /// Base 16, digits `0-9` and `A-F`
    Hexadecimal,
}

/// Error returned when a number is not one of the supported radixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported base {0}, expected one of 2, 8, 10, 16")]
pub struct UnsupportedBase(
    /// The rejected radix value
    pub u32,
);

impl Base {
    /// All supported bases in ascending radix order
    ///
    /// This array is the single source of truth for iterating over the
    /// supported bases and for random base selection.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    /// Returns the radix of this base
    pub fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Returns the lowercase English name of this base
    ///
    /// Used in prompts such as "convert to hexadecimal".
    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        }
    }
}

impl Display for Base {
    /// Formats the base as its English name
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Base> for u32 {
    /// Converts the base to its radix number
    fn from(base: Base) -> u32 {
        base.radix()
    }
}

impl TryFrom<u32> for Base {
    type Error = UnsupportedBase;

    /// Converts a radix number to a base
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedBase`] if the number is not 2, 8, 10, or 16.
    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            other => Err(UnsupportedBase(other)),
        }
    }
}
