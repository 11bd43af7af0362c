//! Squat form checks
//!
//! Three checks, always all evaluated: depth (bilateral knee angle),
//! lateral knee alignment, and torso lean.

use crate::classifier::back_lean_angle;
use crate::error::AnalysisResult;
use crate::geometry::joint_angle;
use crate::pose::{Landmark, LandmarkSnapshot, Side};

/// Average knee angle above this means the squat is too shallow
const DEPTH_SHALLOW_DEG: f32 = 120.0;
/// Average knee angle below this means the squat is too deep
const DEPTH_DEEP_DEG: f32 = 70.0;
/// Maximum lateral distance between the knees (normalized x)
const KNEE_SPREAD_MAX: f32 = 0.2;
/// Maximum torso lean from vertical
const BACK_LEAN_MAX_DEG: f32 = 45.0;

pub(crate) const PRAISE: &str = "Great squat form! Keep it up.";

/// Hip-knee-ankle angle for one leg
fn knee_angle(snapshot: &LandmarkSnapshot, side: Side) -> AnalysisResult<f32> {
    joint_angle(
        snapshot.point(side.hip()),
        snapshot.point(side.knee()),
        snapshot.point(side.ankle()),
    )
}

pub(crate) fn corrections(snapshot: &LandmarkSnapshot) -> AnalysisResult<Vec<String>> {
    let mut findings = Vec::new();

    let depth =
        (knee_angle(snapshot, Side::Left)? + knee_angle(snapshot, Side::Right)?) / 2.0;
    if depth > DEPTH_SHALLOW_DEG {
        findings.push(
            "Try to squat deeper. Aim to bring your thighs parallel to the ground."
                .to_string(),
        );
    } else if depth < DEPTH_DEEP_DEG {
        findings.push(
            "You are squatting too deep. Rise up slightly to stay in a safe range."
                .to_string(),
        );
    }

    let knee_spread = (snapshot.point(Landmark::LeftKnee).x
        - snapshot.point(Landmark::RightKnee).x)
        .abs();
    if knee_spread > KNEE_SPREAD_MAX {
        findings.push(
            "Keep your knees tracking over your toes instead of caving inward.".to_string(),
        );
    }

    if back_lean_angle(snapshot)? > BACK_LEAN_MAX_DEG {
        findings.push(
            "Keep your chest up and your back straighter at the bottom of the squat."
                .to_string(),
        );
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use crate::pose::LANDMARK_COUNT;

    /// Upright squat pose with both knees bent to `knee_deg`
    fn squat_pose(knee_deg: f32) -> LandmarkSnapshot {
        let mut points = [Point3::default(); LANDMARK_COUNT];
        for (side, x) in [(Side::Left, 0.475f32), (Side::Right, 0.525f32)] {
            let hip = Point3::new(x, 0.50, 0.0);
            let knee = Point3::new(x, 0.70, 0.0);
            // Shin rotated knee_deg away from the thigh direction
            let rad = knee_deg.to_radians();
            let ankle = Point3::new(x + 0.25 * rad.sin(), 0.70 - 0.25 * rad.cos(), 0.0);
            let shoulder = Point3::new(x, 0.25, 0.0);
            points[side.hip().storage_index()] = hip;
            points[side.knee().storage_index()] = knee;
            points[side.ankle().storage_index()] = ankle;
            points[side.shoulder().storage_index()] = shoulder;
            points[side.elbow().storage_index()] = Point3::new(x, 0.35, 0.0);
            points[side.wrist().storage_index()] = Point3::new(x, 0.45, 0.0);
        }
        LandmarkSnapshot::new(points)
    }

    #[test]
    fn test_good_squat_has_no_findings() {
        let findings = corrections(&squat_pose(95.0)).unwrap();
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn test_shallow_squat_flags_depth() {
        let findings = corrections(&squat_pose(130.0)).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("squat deeper"));
    }

    #[test]
    fn test_too_deep_squat_flags_depth() {
        let findings = corrections(&squat_pose(55.0)).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("too deep"));
    }

    #[test]
    fn test_wide_knee_spread_flags_alignment() {
        let mut pose = squat_pose(95.0);
        let mut points = [Point3::default(); LANDMARK_COUNT];
        for landmark in Landmark::ALL {
            points[landmark.storage_index()] = pose.point(landmark);
        }
        // Push the knees far apart laterally
        points[Landmark::LeftKnee.storage_index()].x = 0.30;
        points[Landmark::RightKnee.storage_index()].x = 0.70;
        // Keep the ankles under the knees so the depth check still passes
        points[Landmark::LeftAnkle.storage_index()].x -= 0.175;
        points[Landmark::RightAnkle.storage_index()].x += 0.175;
        pose = LandmarkSnapshot::new(points);

        let findings = corrections(&pose).unwrap();
        assert!(findings.iter().any(|m| m.contains("caving inward")));
    }

    #[test]
    fn test_forward_lean_flags_back() {
        let mut points = [Point3::default(); LANDMARK_COUNT];
        let base = squat_pose(95.0);
        for landmark in Landmark::ALL {
            points[landmark.storage_index()] = base.point(landmark);
        }
        // Shoulder pushed far forward of the hip
        points[Landmark::LeftShoulder.storage_index()] = Point3::new(0.75, 0.45, 0.0);
        let pose = LandmarkSnapshot::new(points);

        let findings = corrections(&pose).unwrap();
        assert!(findings.iter().any(|m| m.contains("chest up")));
    }

    #[test]
    fn test_all_checks_reported_together() {
        // Shallow depth and a forward lean at the same time
        let mut points = [Point3::default(); LANDMARK_COUNT];
        let base = squat_pose(130.0);
        for landmark in Landmark::ALL {
            points[landmark.storage_index()] = base.point(landmark);
        }
        points[Landmark::LeftShoulder.storage_index()] = Point3::new(0.75, 0.45, 0.0);
        let pose = LandmarkSnapshot::new(points);

        let findings = corrections(&pose).unwrap();
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("squat deeper"));
        assert!(findings[1].contains("chest up"));
    }
}
