//! 3D point in normalized image coordinates
//!
//! x and y live in the image plane (roughly 0-1, y grows downward);
//! z is a relative depth in the same scale, meaningful only by ordering.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A single 3D point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Componentwise average of two points
///
/// Used to build bilateral "center" landmarks, e.g. shoulder-center
/// from the left and right shoulders.
pub fn midpoint(p: Point3, q: Point3) -> Point3 {
    Point3::new(
        (p.x + q.x) / 2.0,
        (p.y + q.y) / 2.0,
        (p.z + q.z) / 2.0,
    )
}
