//! Bounce Merge Engine - circles that fall, bounce, collide and fuse, in WASM
//!
//! Architecture:
//! - core/        - Logging macro
//! - domain/      - Colors, scene files, physics constants
//! - systems/     - Body, integrator, collisions, merge/split, pointer input
//! - simulation/  - World orchestration and the wasm-bindgen facade

// Utils with the logging macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the systems
pub use systems::body;
pub use systems::collision;
pub use systems::input;
pub use systems::integrator;
pub use systems::merge;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Bounce Merge engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use body::Body;
pub use domain::{PairKeyMode, PhysicsSettings, Rgb, SceneConfig};
pub use simulation::{PerfStats, World, WorldCore};
