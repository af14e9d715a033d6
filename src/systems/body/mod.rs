//! Body - a circular point mass
//!
//! Bodies live in one ordered registry. A body's index in that registry is
//! its identity for collision pairing, so bodies are never removed: a merged
//! body stays in place flagged `absorbed` until a split revives it.

mod body;

pub use body::Body;
