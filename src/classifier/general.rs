//! General posture checks
//!
//! The fallback table for unrecognized or unspecified exercises: back
//! straightness (left side only) and shoulder level. The back window here
//! is deliberately wider than the pushup/plank body-line window.

use crate::error::AnalysisResult;
use crate::geometry::joint_angle;
use crate::pose::{Landmark, LandmarkSnapshot};

/// Acceptable shoulder-hip-knee window, exclusive on both ends
const BACK_MIN_DEG: f32 = 160.0;
const BACK_MAX_DEG: f32 = 200.0;
/// Maximum vertical offset between the shoulders (normalized y)
const SHOULDER_TILT_MAX: f32 = 0.05;

pub(crate) const PRAISE: &str = "Great posture! Your back is straight.";

pub(crate) fn corrections(snapshot: &LandmarkSnapshot) -> AnalysisResult<Vec<String>> {
    let mut findings = Vec::new();

    let back = joint_angle(
        snapshot.point(Landmark::LeftShoulder),
        snapshot.point(Landmark::LeftHip),
        snapshot.point(Landmark::LeftKnee),
    )?;
    if !(back > BACK_MIN_DEG && back < BACK_MAX_DEG) {
        findings.push(
            "Try to keep your back straighter during the exercise.".to_string(),
        );
    }

    let shoulder_tilt = (snapshot.point(Landmark::LeftShoulder).y
        - snapshot.point(Landmark::RightShoulder).y)
        .abs();
    if shoulder_tilt > SHOULDER_TILT_MAX {
        findings.push("Keep your shoulders level and squared.".to_string());
    }

    Ok(findings)
}
