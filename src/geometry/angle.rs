//! Joint angle calculation using the dot product
//!
//! cos(θ) = (ba · bc) / (|ba| × |bc|), reported in degrees.
//! The cosine ratio is clamped to [-1, 1] before acos: floating-point
//! rounding can push near-collinear points slightly outside the valid
//! domain, which would otherwise make the inverse cosine NaN.

use crate::error::{AnalysisError, AnalysisResult};
use crate::geometry::Point3;

/// Below this magnitude a ray is treated as zero-length
const DEGENERACY_EPSILON: f32 = 1e-6;

/// Angle in degrees at vertex `b` between rays `b→a` and `b→c`
///
/// Returns a value in [0, 180]:
/// - 180° = the three points are collinear with b in the middle
/// - 0° = both rays point the same way
///
/// Fails with `DegenerateGeometry` when `a` or `c` coincides with `b`.
pub fn joint_angle(a: Point3, b: Point3, c: Point3) -> AnalysisResult<f32> {
    vector_angle(a - b, c - b)
}

/// Angle in degrees between two vectors
///
/// Fails with `DegenerateGeometry` when either vector has zero magnitude.
pub fn vector_angle(u: Point3, v: Point3) -> AnalysisResult<f32> {
    let mag_u = u.length();
    let mag_v = v.length();

    if mag_u < DEGENERACY_EPSILON || mag_v < DEGENERACY_EPSILON {
        return Err(AnalysisError::DegenerateGeometry);
    }

    let cos_angle = (u.dot(v) / (mag_u * mag_v)).clamp(-1.0, 1.0);
    Ok(cos_angle.acos().to_degrees())
}
