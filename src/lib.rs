//! Formcheck - exercise form analysis from body-pose landmarks
//!
//! Takes one snapshot of MediaPipe-style body landmarks plus an exercise
//! selector and returns a verdict with ordered corrective feedback.
//! Pose estimation runs upstream; this crate only consumes its landmarks.
//!
//! Every call is a pure computation over immutable inputs: no shared state,
//! no I/O, safe to invoke from any number of threads.

mod analysis;
mod classifier;
mod error;
mod feedback;
mod geometry;
mod pose;

pub use analysis::{analyze, ExerciseType, EXERCISE_TOKENS};
pub use error::{AnalysisError, AnalysisResult};
pub use feedback::{FeedbackReport, Verdict, NO_SUBJECT_MESSAGE};
pub use geometry::{joint_angle, midpoint, vector_angle, Point3};
pub use pose::{Landmark, LandmarkSnapshot, Side, LANDMARK_COUNT};
