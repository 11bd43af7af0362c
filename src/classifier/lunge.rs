//! Lunge form checks
//!
//! Both knees should hold roughly 90 degrees. The forward leg is picked by
//! relative depth, which assumes the provider's convention that smaller z
//! is closer to the camera; `forward_leg` isolates that assumption.

use crate::error::AnalysisResult;
use crate::geometry::joint_angle;
use crate::pose::{LandmarkSnapshot, Side};

/// Acceptable knee window for either leg, inclusive on both ends
const KNEE_MIN_DEG: f32 = 80.0;
const KNEE_MAX_DEG: f32 = 100.0;

pub(crate) const PRAISE: &str = "Great lunge form! Keep it up.";

/// The leg closer to the camera, judged by knee depth
///
/// Relies on the smaller-z-is-nearer convention and has no self-correcting
/// fallback; if the provider flips its depth sign the legs swap labels.
pub(crate) fn forward_leg(snapshot: &LandmarkSnapshot) -> Side {
    let left_z = snapshot.point(Side::Left.knee()).z;
    let right_z = snapshot.point(Side::Right.knee()).z;
    if left_z <= right_z {
        Side::Left
    } else {
        Side::Right
    }
}

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

    let front = forward_leg(snapshot);
    let back = front.opposite();

    let front_angle = knee_angle(snapshot, front)?;
    if !(KNEE_MIN_DEG..=KNEE_MAX_DEG).contains(&front_angle) {
        findings.push("Bend your front knee to about a 90 degree angle.".to_string());
    }

    let back_angle = knee_angle(snapshot, back)?;
    if !(KNEE_MIN_DEG..=KNEE_MAX_DEG).contains(&back_angle) {
        findings.push("Bend your back knee to about a 90 degree angle.".to_string());
    }

    Ok(findings)
}
