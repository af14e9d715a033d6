//! Domain data: colors, scene files and physics constants

pub mod color;
pub mod scene;

pub use color::Rgb;
pub use scene::{BodySpec, PairKeyMode, PhysicsSettings, SceneConfig};
