//! Display List for annotation rendering
//!
//! This module defines the output handed to the renderer after a layout pass.
//! Everything is in system coordinates, so the host draws without any layout
//! calculations of its own.

use serde::{Deserialize, Serialize};

use crate::models::{Placement, TextStyleKind};

/// A positioned fingering ready to draw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderFingering {
    /// Index of the annotation in the layout input
    pub index: usize,

    /// Text to display
    pub text: String,

    pub kind: TextStyleKind,

    /// Text origin (x, y) in system coordinates
    pub x: f32,
    pub y: f32,

    /// Left edge of the text box
    pub left: f32,

    /// Top edge of the text box
    pub top: f32,

    pub width: f32,
    pub height: f32,

    /// Side of the staff the annotation ended up on
    pub placement: Placement,

    /// Screen reader description
    #[serde(default)]
    pub accessible: String,
}
