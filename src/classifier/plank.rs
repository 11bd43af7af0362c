//! Plank form checks
//!
//! Two checks, always both evaluated: the shoulder-hip-ankle body line and
//! hip height relative to the shoulders. Image y grows downward, so a
//! positive hip-minus-shoulder difference means the hips sit lower in the
//! frame; the sign conventions below are fixed.

use crate::classifier::body_line_angle;
use crate::error::AnalysisResult;
use crate::geometry::midpoint;
use crate::pose::{Landmark, LandmarkSnapshot};

/// Acceptable body-line window, exclusive on both ends
const BODY_LINE_MIN_DEG: f32 = 170.0;
const BODY_LINE_MAX_DEG: f32 = 190.0;
/// Hip-center minus shoulder-center y beyond +/- this trips the hip check
const HIP_OFFSET_MAX: f32 = 0.05;

pub(crate) const PRAISE: &str = "Great plank form! Keep holding.";

pub(crate) fn corrections(snapshot: &LandmarkSnapshot) -> AnalysisResult<Vec<String>> {
    let mut findings = Vec::new();

    let line = body_line_angle(snapshot)?;
    if !(line > BODY_LINE_MIN_DEG && line < BODY_LINE_MAX_DEG) {
        findings.push(
            "Keep your body in a straight line from your shoulders to your ankles."
                .to_string(),
        );
    }

    let shoulder_center = midpoint(
        snapshot.point(Landmark::LeftShoulder),
        snapshot.point(Landmark::RightShoulder),
    );
    let hip_center = midpoint(
        snapshot.point(Landmark::LeftHip),
        snapshot.point(Landmark::RightHip),
    );
    let hip_offset = hip_center.y - shoulder_center.y;
    if hip_offset > HIP_OFFSET_MAX {
        findings.push(
            "Your hips are too high. Lower them until your body forms a straight line."
                .to_string(),
        );
    } else if hip_offset < -HIP_OFFSET_MAX {
        findings.push(
            "Your hips are sagging. Lift them until your body forms a straight line."
                .to_string(),
        );
    }

    Ok(findings)
}
