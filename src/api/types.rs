//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::layout::RenderFingering;
use crate::models::Fingering;

/// Result of laying out one system
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LayoutOutput {
    /// Input annotations with `ipos`, `bbox` and rebased offsets filled in
    pub fingerings: Vec<Fingering>,

    /// Drawable annotations in system coordinates
    pub display: Vec<RenderFingering>,
}
