//! Pose input - the closed landmark set and the per-call snapshot
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod snapshot;

pub use landmark::{Landmark, Side, LANDMARK_COUNT};
pub use snapshot::LandmarkSnapshot;
