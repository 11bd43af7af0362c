//! Verdict and feedback aggregation
//!
//! Classifiers produce an ordered list of corrections; this module turns
//! that list into the per-call report. Verdict is `Correct` exactly when
//! the correction list is empty, in which case a single affirmative
//! message is synthesized in its place.

use serde::{Deserialize, Serialize};

use crate::analysis::ExerciseType;

/// Fixed message for the no-subject short-circuit
pub const NO_SUBJECT_MESSAGE: &str =
    "Please upload a clear image with your full body visible.";

/// Separator used when joining messages into one narrative string
const NARRATIVE_SEPARATOR: &str = " ";

/// Outcome of one analysis call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    NoSubjectDetected,
}

/// The per-call result: verdict plus ordered feedback messages
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub verdict: Verdict,
    pub messages: Vec<String>,
    pub exercise: ExerciseType,
}

impl FeedbackReport {
    /// Build a report from a classifier's ordered correction list
    ///
    /// An empty list means every check passed; the exercise's affirmative
    /// message is synthesized only after that determination.
    pub(crate) fn from_corrections(
        exercise: ExerciseType,
        corrections: Vec<String>,
        praise: &str,
    ) -> Self {
        if corrections.is_empty() {
            Self {
                verdict: Verdict::Correct,
                messages: vec![praise.to_string()],
                exercise,
            }
        } else {
            Self {
                verdict: Verdict::Incorrect,
                messages: corrections,
                exercise,
            }
        }
    }

    /// Report for the "no subject detected" short-circuit
    pub(crate) fn no_subject(exercise: ExerciseType) -> Self {
        Self {
            verdict: Verdict::NoSubjectDetected,
            messages: vec![NO_SUBJECT_MESSAGE.to_string()],
            exercise,
        }
    }

    /// Join the ordered messages into one presentation string
    pub fn narrative(&self) -> String {
        self.messages.join(NARRATIVE_SEPARATOR)
    }
}
