//! Question generation and grading
//!
//! This module builds the randomized questions a round is made of: a
//! magnitude drawn from the difficulty's range, a source base the number
//! is displayed in, and a distinct target base the player must convert
//! into. Generation draws from an owned random generator so tests can
//! seed it and replay exact sequences.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::{
    Verdict,
    base::Base,
    constants::difficulty::{EASY_MAX, HARD_MAX, MEDIUM_MAX},
    convert,
};

/// Difficulty levels and their magnitude ranges
///
/// Each difficulty maps to an inclusive range of magnitudes a question's
/// number is drawn from. The mapping is fixed; harder levels only widen
/// the range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, derive_more::Display,
)]
pub enum Difficulty {
    /// Magnitudes 0 through 25
    #[display("Easy")]
    Easy,
    /// Magnitudes 0 through 100
    #[display("Medium")]
    Medium,
    /// Magnitudes 0 through 1000
    #[display("Hard")]
    Hard,
}

impl Difficulty {
    /// Returns the inclusive range of magnitudes for this difficulty
    pub fn magnitude_range(self) -> std::ops::RangeInclusive<u32> {
        match self {
            Self::Easy => 0..=EASY_MAX,
            Self::Medium => 0..=MEDIUM_MAX,
            Self::Hard => 0..=HARD_MAX,
        }
    }
}

/// A single conversion challenge
///
/// The player is shown `number` rendered in `from_base` and must type its
/// value in `to_base`. The two bases are always distinct; generated
/// questions uphold this, and direct construction asserts it in debug
/// builds. A question is immutable once created and is superseded, not
/// mutated, by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The decimal value being asked about
    pub number: u32,
    /// The base the number is displayed in
    pub from_base: Base,
    /// The base the answer must be typed in
    pub to_base: Base,
}

impl Question {
    /// Creates a question from its parts
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `from_base` and `to_base` are equal.
    pub fn new(number: u32, from_base: Base, to_base: Base) -> Self {
        debug_assert_ne!(from_base, to_base);
        Self {
            number,
            from_base,
            to_base,
        }
    }

    /// Renders the number in the source base, as shown to the player
    pub fn prompt(&self) -> String {
        convert::to_digits(self.number, self.from_base)
    }

    /// Grades a submitted answer against this question
    ///
    /// The submission is parsed as a digit string in the target base;
    /// strings the parser rejects grade as [`Verdict::Malformed`], and
    /// well-formed strings grade by comparing their value to the
    /// question's number.
    pub fn grade(&self, answer: &str) -> Verdict {
        match convert::from_digits(answer, self.to_base) {
            Ok(value) if value == self.number => Verdict::Correct,
            Ok(_) => Verdict::Incorrect,
            Err(_) => Verdict::Malformed,
        }
    }
}

/// Randomized question construction
///
/// Owns its random generator rather than drawing from the global one, so
/// a seeded instance replays the same question sequence.
///
/// # Examples
///
/// ```rust
/// use radix_rush::question::{Difficulty, QuestionGenerator};
///
/// let mut generator = QuestionGenerator::with_seed(7);
/// let question = generator.generate(Difficulty::Easy);
///
/// assert!(question.number <= 25);
/// assert_ne!(question.from_base, question.to_base);
/// ```
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    /// Source of randomness for magnitude and base picks
    rng: fastrand::Rng,
}

impl QuestionGenerator {
    /// Creates a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a generator with a fixed seed
    ///
    /// Two generators built from the same seed produce identical
    /// sequences of picks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Picks a magnitude uniformly from the difficulty's inclusive range
    ///
    /// Both endpoints of the range are reachable.
    pub fn pick_magnitude(&mut self, difficulty: Difficulty) -> u32 {
        self.rng.u32(difficulty.magnitude_range())
    }

    /// Picks one of the supported bases uniformly
    pub fn pick_base(&mut self) -> Base {
        Base::ALL[self.rng.usize(..Base::ALL.len())]
    }

    /// Picks a base uniformly from the supported bases other than `exclude`
    pub fn pick_base_excluding(&mut self, exclude: Base) -> Base {
        let candidates: Vec<Base> = Base::ALL
            .into_iter()
            .filter(|base| *base != exclude)
            .collect();
        candidates[self.rng.usize(..candidates.len())]
    }

    /// Generates a fresh question for the given difficulty
    ///
    /// The source and target base are guaranteed to differ.
    pub fn generate(&mut self, difficulty: Difficulty) -> Question {
        let number = self.pick_magnitude(difficulty);
        let from_base = self.pick_base();
        let to_base = self.pick_base_excluding(from_base);
        Question::new(number, from_base, to_base)
    }
}

impl Default for QuestionGenerator {
    /// Creates a generator seeded from system entropy (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}
