//! Core game logic and state management
//!
//! This module contains the state machine for one timed round of the
//! drill: the countdown, the score, the current question, and the
//! handling of submitted answers. The crate never touches the wall clock
//! itself; the embedding UI runs a one-second timer and feeds each pulse
//! into [`Game::tick`], and the round ends on the tick that reaches zero.

use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    Verdict,
    base::Base,
    constants::game::{DEFAULT_TIME_LIMIT, MAX_TIME_LIMIT, MIN_TIME_LIMIT},
    convert,
    question::{Difficulty, Question, QuestionGenerator},
    tally::Tally,
};

/// Validation result type for duration validation
type ValidationResult = garde::Result;

/// Validates that a duration falls within specified bounds.
///
/// Custom validation function for use with the `garde` crate: checks that
/// the duration in seconds is within the inclusive range defined by
/// `MIN_SECONDS` and `MAX_SECONDS`.
///
/// # Errors
///
/// Returns a `garde::Error` if the duration is outside the specified bounds.
fn validate_duration<const MIN_SECONDS: u64, const MAX_SECONDS: u64>(
    val: &Duration,
    _ctx: &(),
) -> ValidationResult {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "outside of bounds [{MIN_SECONDS},{MAX_SECONDS}]",
        )))
    }
}

/// Configuration for one round
#[serde_with::serde_as]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct GameOptions {
    /// Difficulty the round's questions are generated at
    #[garde(skip)]
    pub difficulty: Difficulty,
    /// Length of the round
    #[garde(custom(validate_duration::<MIN_TIME_LIMIT, MAX_TIME_LIMIT>))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub time_limit: Duration,
}

impl GameOptions {
    /// Creates options for the given difficulty with the default round length
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT),
        }
    }
}

impl Default for GameOptions {
    /// Easy difficulty with the default round length
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}

/// State snapshot sent to the UI layer
///
/// Contains everything the UI needs to render the round: the prompt in
/// its source base, where to convert it, the clock, and the score.
#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct SyncMessage {
    /// The current number rendered in its source base
    pub prompt: String,
    /// The base the prompt is displayed in
    pub from_base: Base,
    /// The base the answer must be typed in
    pub to_base: Base,
    /// Difficulty of the round
    pub difficulty: Difficulty,
    /// Remaining time on the countdown
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub time_left: Duration,
    /// Questions answered correctly so far
    pub score: u64,
    /// Whether the round is still running
    pub active: bool,
}

impl SyncMessage {
    /// Converts the snapshot to a JSON string for the UI layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// One timed round of the drill
///
/// A round starts with a fresh question and a full clock. Correct answers
/// bump the score and swap in a new question; incorrect or malformed
/// answers leave the question in place so the player can retry. The round
/// ends when the countdown reaches zero, after which submissions are
/// ignored.
#[serde_with::serde_as]
#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    /// Round configuration
    options: GameOptions,
    /// The question currently on screen
    current: Question,
    /// Remaining time on the countdown
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    time_left: Duration,
    /// Questions answered correctly so far
    score: u64,
    /// Whether the round is still running
    active: bool,
    /// Log of graded submissions for end-of-round statistics
    tally: Tally,
}

impl Game {
    /// Starts a round with a fresh question and a full clock
    pub fn new(options: GameOptions, generator: &mut QuestionGenerator) -> Self {
        Self {
            current: generator.generate(options.difficulty),
            time_left: options.time_limit,
            score: 0,
            active: true,
            tally: Tally::default(),
            options,
        }
    }

    /// Returns the question currently on screen
    pub fn current_question(&self) -> Question {
        self.current
    }

    /// Returns the current number rendered in its source base
    pub fn prompt(&self) -> String {
        self.current.prompt()
    }

    /// Returns the number of questions answered correctly so far
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the remaining time on the countdown
    pub fn time_left(&self) -> Duration {
        self.time_left
    }

    /// Checks whether the round is still running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the submission log for this round
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Grades a submitted answer and advances the round on success
    ///
    /// The submission is recorded in the tally. A correct answer
    /// increments the score and replaces the current question with a
    /// fresh one from `generator`; any other verdict leaves the question
    /// in place.
    ///
    /// Returns `None` once the round is over.
    pub fn submit_answer(
        &mut self,
        text: &str,
        generator: &mut QuestionGenerator,
    ) -> Option<Verdict> {
        if !self.active {
            return None;
        }

        let verdict = self.current.grade(text);
        self.tally.record(self.current, verdict);

        if verdict.is_correct() {
            self.score += 1;
            self.current = generator.generate(self.options.difficulty);
        }

        Some(verdict)
    }

    /// Consumes one one-second pulse from the external clock
    ///
    /// Decrements the countdown, saturating at zero. Returns `true`
    /// exactly on the tick that ends the round; further ticks are no-ops.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.time_left = self.time_left.saturating_sub(Duration::from_secs(1));
        if self.time_left.is_zero() {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Builds a state snapshot for the UI layer
    pub fn state_message(&self) -> SyncMessage {
        SyncMessage {
            prompt: convert::to_digits(self.current.number, self.current.from_base),
            from_base: self.current.from_base,
            to_base: self.current.to_base,
            difficulty: self.options.difficulty,
            time_left: self.time_left,
            score: self.score,
            active: self.active,
        }
    }
}
