//! Geometry kernel - vector arithmetic and the three-point angle primitive
//!
//! Re-exports only. All logic in submodules.

mod angle;
mod point;

pub use angle::{joint_angle, vector_angle};
pub use point::{midpoint, Point3};
