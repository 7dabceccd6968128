//! The process-wide high score.
//!
//! A single `u64` behind an atomic. Submissions go through
//! [`AtomicU64::fetch_max`], so the read-compare-write is one indivisible
//! step and concurrent submissions can never lose a record.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::error::ScoreError;
use crate::metrics;

/// Outcome of a valid score submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// High score before the submission was applied.
    pub previous: u64,
    /// High score after the submission, `max(previous, candidate)`.
    pub high_score: u64,
}

impl Submission {
    /// Whether the submission set a new record.
    pub fn is_new_record(&self) -> bool {
        self.high_score > self.previous
    }
}

/// Holds the best score reported so far. Starts at zero.
#[derive(Debug, Default)]
pub struct ScoreStore {
    value: AtomicU64,
}

impl ScoreStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current high score.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Submit a candidate score.
    ///
    /// The stored value only moves when `candidate` is strictly greater;
    /// an equal or lower score is a no-op. Negative scores are rejected
    /// and leave the store untouched.
    pub fn submit(&self, candidate: i64) -> Result<Submission, ScoreError> {
        metrics::inc_submissions();

        let Ok(candidate) = u64::try_from(candidate) else {
            metrics::inc_submissions_rejected();
            warn!(score = candidate, "Rejected negative score");
            return Err(ScoreError::Negative { score: candidate });
        };

        let previous = self.value.fetch_max(candidate, Ordering::AcqRel);
        let submission = Submission {
            previous,
            high_score: previous.max(candidate),
        };

        if submission.is_new_record() {
            metrics::record_high_score(self.get());
            info!(previous, high_score = submission.high_score, "New high score");
        } else {
            debug!(score = candidate, high_score = previous, "Score did not beat record");
        }

        Ok(submission)
    }
}
