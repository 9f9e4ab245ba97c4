//! Fingering Autoplace WASM Module
//!
//! Automatic placement of fingerings and string numbers around notes:
//! picks a side of the staff, keeps clear of already-placed content via
//! per-staff skylines, and preserves user adjustments across relayouts.

pub mod api;
pub mod layout;
pub mod models;
pub mod skyline;
pub mod style;
pub mod text;

// Re-export commonly used types
pub use api::{run_layout, AutoplaceEngine, LayoutOutput};
pub use layout::{FingeringLayout, RenderFingering, SystemLayout};
pub use models::*;
pub use style::{StyleConfig, StyleError};
pub use text::{ApproximateMetrics, TextMetrics};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // a second init only fails because a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Fingering autoplace WASM module initialized");
}
