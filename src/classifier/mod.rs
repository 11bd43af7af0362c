//! Exercise classifiers - one fixed check table per exercise variant
//!
//! Each classifier walks its full check list with no early exit, so the
//! report carries every applicable correction. Re-exports only, logic in
//! submodules.

pub(crate) mod general;
pub(crate) mod lunge;
pub(crate) mod plank;
pub(crate) mod pushup;
pub(crate) mod squat;

mod torso;

pub(crate) use torso::{back_lean_angle, body_line_angle};
