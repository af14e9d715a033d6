//! Per-frame physics and input systems operating on the body registry

pub mod body;
pub mod collision;
pub mod input;
pub mod integrator;
pub mod merge;
