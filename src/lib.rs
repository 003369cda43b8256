//! # Radix Rush Game Library
//!
//! This library provides the core game logic for the Radix Rush base
//! conversion drill. It handles digit-string conversion between the
//! supported numeric bases, randomized question generation, the timed
//! game round, and end-of-round statistics.
//!
//! The embedding UI layer owns rendering and the wall clock: it displays
//! [`game::Game::prompt`], forwards typed answers to
//! [`game::Game::submit_answer`], and calls [`game::Game::tick`] once per
//! second until the round ends.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

use serde::{Deserialize, Serialize};

pub mod base;
pub mod constants;
pub mod convert;
pub mod game;
pub mod question;
pub mod tally;

/// Outcome of grading a submitted answer
///
/// A submission is first validated as a digit string for the target base;
/// strings that fail validation are malformed and never reach the numeric
/// comparison. Well-formed strings are converted and compared against the
/// question's value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Verdict {
    /// The submission converts to the question's value
    #[display("correct")]
    Correct,
    /// The submission is a well-formed digit string but a different value
    #[display("incorrect")]
    Incorrect,
    /// The submission is not a valid digit string for the target base
    #[display("malformed")]
    Malformed,
}

impl Verdict {
    /// Returns whether this verdict awards a point
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_is_correct() {
        assert!(Verdict::Correct.is_correct());
        assert!(!Verdict::Incorrect.is_correct());
        assert!(!Verdict::Malformed.is_correct());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Correct.to_string(), "correct");
        assert_eq!(Verdict::Incorrect.to_string(), "incorrect");
        assert_eq!(Verdict::Malformed.to_string(), "malformed");
    }

    #[test]
    fn test_verdict_serialization() {
        let serialized = serde_json::to_string(&Verdict::Malformed).unwrap();
        assert_eq!(serialized, "\"Malformed\"");

        let deserialized: Verdict = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Verdict::Malformed);
    }
}
