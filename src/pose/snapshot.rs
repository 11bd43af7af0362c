//! Immutable per-call landmark snapshot
//!
//! Storage holds a coordinate for every landmark in the closed set, so a
//! constructed snapshot always satisfies the classifiers' presence
//! requirement. Absence of a subject is represented upstream by passing
//! no snapshot at all.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::geometry::Point3;
use crate::pose::{Landmark, LANDMARK_COUNT};

/// MediaPipe Pose reports 33 landmarks of (x, y, z) each
const MEDIAPIPE_VALUES: usize = 33 * 3;

/// One frame's worth of body landmarks (normalized coordinates)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSnapshot {
    points: [Point3; LANDMARK_COUNT],
}

impl LandmarkSnapshot {
    /// Build a snapshot from points in `Landmark::ALL` order
    pub fn new(points: [Point3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a snapshot from a MediaPipe flat buffer of 99 values
    /// (33 landmarks × x, y, z)
    ///
    /// Only the twelve landmarks the classifiers read are retained.
    pub fn from_mediapipe(data: &[f32]) -> AnalysisResult<Self> {
        if data.len() != MEDIAPIPE_VALUES {
            return Err(AnalysisError::InvalidLandmarkBuffer {
                expected: MEDIAPIPE_VALUES,
                actual: data.len(),
            });
        }

        let mut points = [Point3::default(); LANDMARK_COUNT];
        for landmark in Landmark::ALL {
            let base = landmark.mediapipe_index() * 3;
            points[landmark.storage_index()] =
                Point3::new(data[base], data[base + 1], data[base + 2]);
        }
        Ok(Self { points })
    }

    /// Coordinate of a named landmark
    pub fn point(&self, landmark: Landmark) -> Point3 {
        self.points[landmark.storage_index()]
    }
}
