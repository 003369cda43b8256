//! Submission history and end-of-round statistics
//!
//! This module keeps the append-only log of graded submissions made
//! during a round and derives summary statistics from it: how many
//! submissions were correct, incorrect, or malformed, and which target
//! bases the player managed to solve. The full summary is computed once
//! the round is over and cached for subsequent reads.

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Verdict, base::Base, question::Question};

/// Aggregated statistics for a finished round
#[derive(Debug, Clone)]
pub struct FinalSummary {
    /// Total number of submissions, malformed ones included
    pub attempts: usize,
    /// Submissions that converted to the question's value
    pub correct: usize,
    /// Well-formed submissions with the wrong value
    pub incorrect: usize,
    /// Submissions rejected before conversion
    pub malformed: usize,
    /// How many questions were solved per target base
    pub correct_by_target: EnumMap<Base, usize>,
}

/// Log of every submission graded during a round
///
/// Entries are recorded in submission order and never rewritten. The
/// cached [`FinalSummary`] is intended to be read once the round is over;
/// [`Tally::accuracy`] is computed live and can be shown mid-round.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Graded submissions in the order they were made
    submissions: Vec<(Question, Verdict)>,

    /// Final round summary (computed once when needed)
    #[serde(skip)]
    final_summary: once_cell_serde::sync::OnceCell<FinalSummary>,
}

impl Tally {
    /// Records one graded submission
    pub fn record(&mut self, question: Question, verdict: Verdict) {
        self.submissions.push((question, verdict));
    }

    /// Returns the recorded submissions in order
    pub fn submissions(&self) -> &[(Question, Verdict)] {
        &self.submissions
    }

    /// Returns the number of recorded submissions
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    /// Checks whether anything has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Fraction of graded submissions that were correct
    ///
    /// Malformed submissions never reached grading and are excluded from
    /// both sides of the ratio. Returns 0.0 when nothing has been graded.
    pub fn accuracy(&self) -> f64 {
        let correct = self
            .submissions
            .iter()
            .filter(|(_, verdict)| verdict.is_correct())
            .count();
        let graded = self
            .submissions
            .iter()
            .filter(|(_, verdict)| !matches!(verdict, Verdict::Malformed))
            .count();

        if graded == 0 {
            0.0
        } else {
            correct as f64 / graded as f64
        }
    }

    /// Gets or computes the final round summary with caching
    ///
    /// The summary reflects the submissions recorded up to the first call;
    /// it is meant to be read once the round has concluded.
    pub fn summary(&self) -> &FinalSummary {
        self.final_summary.get_or_init(|| self.compute_summary())
    }

    /// Computes the summary statistics from the submission log
    fn compute_summary(&self) -> FinalSummary {
        let counts = self
            .submissions
            .iter()
            .map(|(_, verdict)| *verdict)
            .counts();

        let mut correct_by_target: EnumMap<Base, usize> = EnumMap::default();
        for (question, verdict) in &self.submissions {
            if verdict.is_correct() {
                correct_by_target[question.to_base] += 1;
            }
        }

        FinalSummary {
            attempts: self.submissions.len(),
            correct: counts.get(&Verdict::Correct).copied().unwrap_or_default(),
            incorrect: counts.get(&Verdict::Incorrect).copied().unwrap_or_default(),
            malformed: counts.get(&Verdict::Malformed).copied().unwrap_or_default(),
            correct_by_target,
        }
    }
}
