//! Element types and enumerations for annotation layout
//!
//! This module defines the small enums shared by the layout engine,
//! the style configuration and the JavaScript boundary.

use serde::{Deserialize, Serialize};

/// Vertical side of the staff an annotation is placed on
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Placement {
    /// Above the staff / chord (smaller y)
    #[default]
    Above = 0,

    /// Below the staff / chord (larger y)
    Below = 1,
}

impl Placement {
    pub fn is_above(&self) -> bool {
        matches!(self, Placement::Above)
    }
}

/// Text style flavour of a fingering-like annotation
///
/// The four flavours share the skyline and rebase machinery and only differ
/// in a few policy branches.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum TextStyleKind {
    /// Generic (keyboard) fingering
    #[default]
    Fingering = 0,

    /// Guitar right-hand fingering (p, i, m, a)
    RhGuitarFingering = 1,

    /// Guitar left-hand fingering, set to the left of the note
    LhGuitarFingering = 2,

    /// String number, drawn in a circle
    StringNumber = 3,
}

impl TextStyleKind {
    /// Which element the annotation is laid out against
    pub fn layout_target(&self) -> LayoutTarget {
        match self {
            TextStyleKind::Fingering
            | TextStyleKind::RhGuitarFingering
            | TextStyleKind::StringNumber => LayoutTarget::Chord,
            TextStyleKind::LhGuitarFingering => LayoutTarget::Note,
        }
    }

    /// String numbers never use the tight multi-voice heuristic
    pub fn allows_tight(&self) -> bool {
        !matches!(self, TextStyleKind::StringNumber)
    }
}

/// Layout context an annotation kind is positioned in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTarget {
    /// Above/below the whole chord, with collision avoidance
    Chord,

    /// Next to the individual note, no vertical avoidance
    Note,
}

/// How the user last repositioned an element, if at all
#[repr(i8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum OffsetChange {
    /// Relative adjustment (keyboard nudge)
    Relative = -1,

    /// Not moved since the last layout
    #[default]
    None = 0,

    /// Absolute placement (mouse drag)
    Absolute = 1,
}

impl OffsetChange {
    pub fn is_pending(&self) -> bool {
        !matches!(self, OffsetChange::None)
    }
}

/// Staff type family
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StaffGroup {
    #[default]
    Standard,
    Percussion,
    Tablature,
}

/// Staff type flags relevant to annotation layout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaffType {
    #[serde(default)]
    pub group: StaffGroup,

    /// Tablature staves hide fingering unless this is set
    #[serde(default)]
    pub show_tab_fingering: bool,
}

impl StaffType {
    pub fn tablature(show_tab_fingering: bool) -> Self {
        Self {
            group: StaffGroup::Tablature,
            show_tab_fingering,
        }
    }

    pub fn is_tab(&self) -> bool {
        self.group == StaffGroup::Tablature
    }

    /// Whether fingering-like annotations are hidden on this staff
    pub fn suppresses_fingering(&self) -> bool {
        self.is_tab() && !self.show_tab_fingering
    }
}
