//! Models module for annotation layout
//!
//! This module contains the geometry primitives, the read-only score slice
//! that layout consumes, and the fingering annotation itself.

pub mod elements;
pub mod fingering;
pub mod geometry;
pub mod score;

// Re-export commonly used types
pub use elements::{LayoutTarget, OffsetChange, Placement, StaffGroup, StaffType, TextStyleKind};
pub use fingering::{Fingering, PropertyId, PropertyValue};
pub use geometry::{PointF, RectF};
pub use score::{Chord, ChordId, Note, NoteId, Part, PartId, Score, Staff, StaffId, Stem};
