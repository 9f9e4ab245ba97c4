//! Fingering Autoplace WASM API
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion at the JS boundary
//! - `types`: result types shared with JavaScript
//! - `engine`: `run_layout` and the `AutoplaceEngine` wrapper

pub mod engine;
pub mod helpers;
pub mod types;

pub use engine::{run_layout, AutoplaceEngine};
pub use types::LayoutOutput;
