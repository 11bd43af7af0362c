//! Shared torso measurements
//!
//! Quantities used by more than one classifier: the shoulder-hip-ankle
//! body line and the torso lean against image-vertical.

use crate::error::AnalysisResult;
use crate::geometry::{joint_angle, midpoint, vector_angle, Point3};
use crate::pose::{Landmark, LandmarkSnapshot};

/// Image-plane "up": y grows downward in normalized coordinates
const IMAGE_UP: Point3 = Point3::new(0.0, -1.0, 0.0);

/// Angle at the hip center between the shoulder center and the ankle center
///
/// 180° means the body forms a straight line, as in a pushup or plank hold.
pub(crate) fn body_line_angle(snapshot: &LandmarkSnapshot) -> AnalysisResult<f32> {
    let shoulder_center = midpoint(
        snapshot.point(Landmark::LeftShoulder),
        snapshot.point(Landmark::RightShoulder),
    );
    let hip_center = midpoint(
        snapshot.point(Landmark::LeftHip),
        snapshot.point(Landmark::RightHip),
    );
    let ankle_center = midpoint(
        snapshot.point(Landmark::LeftAnkle),
        snapshot.point(Landmark::RightAnkle),
    );
    joint_angle(shoulder_center, hip_center, ankle_center)
}

/// Torso lean in degrees: 0° is fully upright, 90° is horizontal
///
/// Measured on the left side only, between the hip-to-shoulder vector and
/// image-vertical.
pub(crate) fn back_lean_angle(snapshot: &LandmarkSnapshot) -> AnalysisResult<f32> {
    let torso = snapshot.point(Landmark::LeftShoulder) - snapshot.point(Landmark::LeftHip);
    vector_angle(torso, IMAGE_UP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use crate::pose::{LandmarkSnapshot, LANDMARK_COUNT};

    fn snapshot_with(pairs: &[(Landmark, Point3)]) -> LandmarkSnapshot {
        let mut points = [Point3::default(); LANDMARK_COUNT];
        for (landmark, point) in pairs {
            points[landmark.storage_index()] = *point;
        }
        LandmarkSnapshot::new(points)
    }

    #[test]
    fn test_body_line_straight() {
        let snapshot = snapshot_with(&[
            (Landmark::LeftShoulder, Point3::new(0.20, 0.49, 0.0)),
            (Landmark::RightShoulder, Point3::new(0.20, 0.51, 0.0)),
            (Landmark::LeftHip, Point3::new(0.50, 0.49, 0.0)),
            (Landmark::RightHip, Point3::new(0.50, 0.51, 0.0)),
            (Landmark::LeftAnkle, Point3::new(0.80, 0.49, 0.0)),
            (Landmark::RightAnkle, Point3::new(0.80, 0.51, 0.0)),
        ]);
        let angle = body_line_angle(&snapshot).unwrap();
        assert!((angle - 180.0).abs() < 0.5);
    }

    #[test]
    fn test_body_line_sagging() {
        let snapshot = snapshot_with(&[
            (Landmark::LeftShoulder, Point3::new(0.20, 0.50, 0.0)),
            (Landmark::RightShoulder, Point3::new(0.20, 0.50, 0.0)),
            (Landmark::LeftHip, Point3::new(0.50, 0.60, 0.0)),
            (Landmark::RightHip, Point3::new(0.50, 0.60, 0.0)),
            (Landmark::LeftAnkle, Point3::new(0.80, 0.50, 0.0)),
            (Landmark::RightAnkle, Point3::new(0.80, 0.50, 0.0)),
        ]);
        let angle = body_line_angle(&snapshot).unwrap();
        assert!(angle < 170.0, "sagging hips should break the line: {angle}");
    }

    #[test]
    fn test_back_lean_upright() {
        let snapshot = snapshot_with(&[
            (Landmark::LeftShoulder, Point3::new(0.45, 0.30, 0.0)),
            (Landmark::LeftHip, Point3::new(0.45, 0.55, 0.0)),
        ]);
        let lean = back_lean_angle(&snapshot).unwrap();
        assert!(lean < 0.5, "upright torso should have near-zero lean: {lean}");
    }

    #[test]
    fn test_back_lean_forward_fold() {
        // Shoulder well in front of the hip, torso near horizontal
        let snapshot = snapshot_with(&[
            (Landmark::LeftShoulder, Point3::new(0.70, 0.52, 0.0)),
            (Landmark::LeftHip, Point3::new(0.45, 0.55, 0.0)),
        ]);
        let lean = back_lean_angle(&snapshot).unwrap();
        assert!(lean > 45.0, "folded torso should exceed 45 degrees: {lean}");
    }
}
