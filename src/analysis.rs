//! Analysis dispatch
//!
//! Selects the classifier for the requested exercise and wraps the
//! no-subject short-circuit. This is the single entry point transport
//! code calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{general, lunge, plank, pushup, squat};
use crate::error::AnalysisResult;
use crate::feedback::FeedbackReport;
use crate::pose::LandmarkSnapshot;

/// Wire tokens accepted for exercise selection
pub const EXERCISE_TOKENS: [&str; 5] = ["squat", "pushup", "plank", "lunge", "general"];

/// Exercise variant selecting which check table to apply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Squat,
    Pushup,
    Plank,
    Lunge,
    General,
}

impl ExerciseType {
    /// Parse a wire token, falling back to `General` for anything unknown
    pub fn from_token(token: &str) -> Self {
        match token {
            "squat" => ExerciseType::Squat,
            "pushup" => ExerciseType::Pushup,
            "plank" => ExerciseType::Plank,
            "lunge" => ExerciseType::Lunge,
            "general" => ExerciseType::General,
            other => {
                debug!(token = other, "unknown exercise token, using general");
                ExerciseType::General
            }
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ExerciseType::Squat => "squat",
            ExerciseType::Pushup => "pushup",
            ExerciseType::Plank => "plank",
            ExerciseType::Lunge => "lunge",
            ExerciseType::General => "general",
        }
    }
}

/// Analyze one pose snapshot against an exercise's check table
///
/// `None` means the upstream pose estimator found no subject; the call
/// returns the fixed no-subject report without running any classifier.
pub fn analyze(
    snapshot: Option<&LandmarkSnapshot>,
    exercise: ExerciseType,
) -> AnalysisResult<FeedbackReport> {
    let Some(snapshot) = snapshot else {
        debug!(exercise = exercise.token(), "no subject detected");
        return Ok(FeedbackReport::no_subject(exercise));
    };

    debug!(exercise = exercise.token(), "running form checks");
    let (corrections, praise) = match exercise {
        ExerciseType::Squat => (squat::corrections(snapshot)?, squat::PRAISE),
        ExerciseType::Pushup => (pushup::corrections(snapshot)?, pushup::PRAISE),
        ExerciseType::Plank => (plank::corrections(snapshot)?, plank::PRAISE),
        ExerciseType::Lunge => (lunge::corrections(snapshot)?, lunge::PRAISE),
        ExerciseType::General => (general::corrections(snapshot)?, general::PRAISE),
    };

    Ok(FeedbackReport::from_corrections(exercise, corrections, praise))
}
