//! Pushup form checks
//!
//! Two checks, always both evaluated: elbow depth (bilateral elbow angle)
//! and the shoulder-hip-ankle body line.

use crate::classifier::body_line_angle;
use crate::error::AnalysisResult;
use crate::geometry::joint_angle;
use crate::pose::{LandmarkSnapshot, Side};

/// Average elbow angle above this means the body is not lowered enough
const ELBOW_DEPTH_MAX_DEG: f32 = 120.0;
/// Acceptable body-line window, exclusive on both ends
const BODY_LINE_MIN_DEG: f32 = 170.0;
const BODY_LINE_MAX_DEG: f32 = 190.0;

pub(crate) const PRAISE: &str = "Great pushup form! Keep it up.";

/// Shoulder-elbow-wrist angle for one arm
fn elbow_angle(snapshot: &LandmarkSnapshot, side: Side) -> AnalysisResult<f32> {
    joint_angle(
        snapshot.point(side.shoulder()),
        snapshot.point(side.elbow()),
        snapshot.point(side.wrist()),
    )
}

pub(crate) fn corrections(snapshot: &LandmarkSnapshot) -> AnalysisResult<Vec<String>> {
    let mut findings = Vec::new();

    let elbow =
        (elbow_angle(snapshot, Side::Left)? + elbow_angle(snapshot, Side::Right)?) / 2.0;
    if elbow > ELBOW_DEPTH_MAX_DEG {
        findings.push(
            "Lower your body further. Bend your elbows closer to 90 degrees at the bottom."
                .to_string(),
        );
    }

    let line = body_line_angle(snapshot)?;
    if !(line > BODY_LINE_MIN_DEG && line < BODY_LINE_MAX_DEG) {
        findings.push(
            "Keep your back straight so your body forms one line from shoulders to ankles."
                .to_string(),
        );
    }

    Ok(findings)
}
